// HTTP request handlers
use crate::domain::device::{DeviceEntry, GlobalParameters};
use crate::presentation::app_state::AppState;
use crate::presentation::report_view::ReportView;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// One calculation request: a snapshot of the inventory table plus the
/// global parameters. Recomputation is triggered explicitly per request;
/// nothing is retained server-side between calls.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[serde(default)]
    pub entries: Vec<DeviceEntry>,
    #[serde(default)]
    pub parameters: GlobalParameters,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the device-type presets used to prefill new inventory rows
pub async fn list_presets(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.preset_catalog.all().to_vec())
}

/// Look up a single preset by its device-type tag
pub async fn get_preset(
    Path(tag): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.preset_catalog.preset_for(&tag) {
        Ok(preset) => Json(preset.clone()).into_response(),
        Err(e) => {
            tracing::warn!("preset lookup failed: {}", e);
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
    }
}

/// Compute a full footprint report for the submitted inventory snapshot.
/// Never fails on bad numeric input: unparsable fields were already coerced
/// to zero during deserialization.
pub async fn calculate_report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CalculationRequest>,
) -> impl IntoResponse {
    let report = state
        .footprint_service
        .aggregate(&request.entries, &request.parameters);
    Json(ReportView::from(&report))
}
