//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The analysis types are re-exported from the core library since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{PlantId, ScheduleAnalysisResult, SuggestionDraft, WateringEvent};

/// Request body for analyzing a plant's watering schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeScheduleRequest {
    /// Plant the events belong to, used only for log correlation
    #[serde(default)]
    pub plant_id: Option<PlantId>,
    /// Watering events for one plant; any order is accepted
    pub events: Vec<WateringEvent>,
    /// The currently configured watering interval in days
    pub current_schedule_days: u32,
    /// Override for the minimum events required (default: server policy)
    #[serde(default)]
    pub min_events_required: Option<usize>,
    /// Override for the significant-difference threshold (default: server policy)
    #[serde(default)]
    pub significant_difference_days: Option<u32>,
}

/// Response for a schedule analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeScheduleResponse {
    /// The full analysis result with diagnostics
    pub analysis: ScheduleAnalysisResult,
    /// Formatted suggestion message, present only when suggesting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}
