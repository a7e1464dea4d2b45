use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::render_failed;
use crate::state::AppState;

pub async fn robots_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.templates.robots_txt(&state.domain) {
        Ok(body) => ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response(),
        Err(e) => render_failed(e),
    }
}

pub async fn sitemap_handler(State(state): State<Arc<AppState>>) -> Response {
    let today = state.zone.today(state.clock.now());
    match state.templates.sitemap_xml(&state.domain, today) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/xml")], body).into_response(),
        Err(e) => render_failed(e),
    }
}
