use axum::{Json, extract::State};
use std::sync::Arc;

use crate::models::HealthStatus;
use crate::state::AppState;

// health handler
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: state.zone.localize(state.clock.now()).to_rfc3339(),
    })
}
