//! Public API surface for the analysis backend.
//!
//! This file consolidates the DTO types exchanged with callers.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::event::WateringEvent;
pub use crate::models::suggestion::AnalyzerPolicy;
pub use crate::models::suggestion::ScheduleAnalysisResult;
pub use crate::models::suggestion::SuggestionDraft;

use serde::{Deserialize, Serialize};

/// Plant identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlantId(pub i64);

impl PlantId {
    pub fn new(value: i64) -> Self {
        PlantId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PlantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PlantId> for i64 {
    fn from(id: PlantId) -> Self {
        id.0
    }
}
