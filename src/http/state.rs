//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::suggestion::AnalyzerPolicy;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Baseline analyzer policy; requests may override individual knobs
    pub policy: Arc<AnalyzerPolicy>,
}

impl AppState {
    /// Create a new application state with the given analyzer policy.
    pub fn new(policy: AnalyzerPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}
