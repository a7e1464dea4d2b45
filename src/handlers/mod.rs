mod health;
mod metrics;
mod page;
mod rate_check;
mod seo;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use page::index_handler;
pub use rate_check::check_rate_limit_handler;
pub use seo::{robots_handler, sitemap_handler};

// A template that fails to render is a bug in the bundled assets
fn render_failed(e: tera::Error) -> Response {
    error!(error = %e, "Failed to render template");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
