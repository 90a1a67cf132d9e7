//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the analysis logic.

use axum::{extract::State, Json};

use super::dto::{AnalyzeScheduleRequest, AnalyzeScheduleResponse, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::suggestion::AnalyzerPolicy;
use crate::services::watering;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running. The analyzer is
/// stateless, so there is no downstream dependency to probe.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

/// POST /v1/analysis/watering-schedule
///
/// Analyze a plant's watering history against its configured schedule.
/// Request-level overrides are applied on top of the server's baseline
/// policy; invalid parameters map to 400.
pub async fn analyze_watering_schedule(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeScheduleRequest>,
) -> HandlerResult<AnalyzeScheduleResponse> {
    let policy = effective_policy(&state, &request);

    let analysis =
        watering::analyze_watering_schedule(&request.events, request.current_schedule_days, &policy)?;

    let message = analysis.suggested_days.filter(|_| analysis.should_suggest).map(|days| {
        watering::format_schedule_suggestion(
            request.current_schedule_days,
            days,
            analysis.confidence,
            &policy,
        )
    });

    tracing::debug!(
        plant_id = ?request.plant_id,
        should_suggest = analysis.should_suggest,
        data_points_used = analysis.data_points_used,
        "watering schedule analyzed"
    );

    Ok(Json(AnalyzeScheduleResponse { analysis, message }))
}

/// Baseline policy with per-request overrides applied.
fn effective_policy(state: &AppState, request: &AnalyzeScheduleRequest) -> AnalyzerPolicy {
    let mut policy = (*state.policy).clone();
    if let Some(min_events) = request.min_events_required {
        policy.min_events_required = min_events;
    }
    if let Some(difference) = request.significant_difference_days {
        policy.significant_difference_days = difference;
    }
    policy
}
