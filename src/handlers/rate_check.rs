use axum::{Json, extract::State};
use std::sync::Arc;

use crate::identity::ResolvedClient;
use crate::models::RateLimitStatus;
use crate::state::AppState;

// Pre-flight check for the page script. Never records the request
pub async fn check_rate_limit_handler(
    State(state): State<Arc<AppState>>,
    ResolvedClient(client): ResolvedClient,
) -> Json<RateLimitStatus> {
    let now = state.clock.now();

    let rate_limited = if client.is_search_engine() {
        false
    } else {
        !state.limiter.is_allowed_at(client.as_str(), false, now)
    };

    Json(RateLimitStatus {
        rate_limited,
        ip: client.to_string(),
        limit_info: state.limiter.limit_info(),
        timestamp: state.zone.localize(now).to_rfc3339(),
    })
}
