use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, warn};

use super::render_failed;
use crate::identity::ResolvedClient;
use crate::metrics::{CRAWLER_REQUESTS_TOTAL, RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::state::AppState;

// Main page. Crawlers skip the limiter and are not counted
pub async fn index_handler(
    State(state): State<Arc<AppState>>,
    ResolvedClient(client): ResolvedClient,
) -> Response {
    REQUEST_TOTAL.inc();
    let _timer = REQUEST_LATENCY.start_timer();

    let now = state.clock.now();
    let today = state.zone.today(now);

    let count = if client.is_search_engine() {
        CRAWLER_REQUESTS_TOTAL.inc();
        debug!("Search engine request, bypassing rate limit");
        state.counter.roll_over(today)
    } else {
        if !state.limiter.is_allowed_at(client.as_str(), true, now) {
            RATE_LIMITED_TOTAL.inc();
            warn!(client = %client, "Rate limit exceeded");
            return match state.templates.render_rate_limited(client.as_str()) {
                Ok(body) => (StatusCode::TOO_MANY_REQUESTS, Html(body)).into_response(),
                Err(e) => render_failed(e),
            };
        }
        state.counter.record(today)
    };

    let server_time = state.zone.localize(now).format("%Y-%m-%d %H:%M:%S").to_string();
    match state.templates.render_page(&server_time, count) {
        Ok(body) => Html(body).into_response(),
        Err(e) => render_failed(e),
    }
}
