use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::time::Duration;
use tracing::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::Args;
use crate::error::Result;
use crate::handlers::{
    check_rate_limit_handler, health_handler, index_handler, metrics_handler, robots_handler,
    sitemap_handler,
};
use crate::state::AppState;
use crate::sweeper::identity_sweeper;

// creating the router with routes
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/check-rate-limit", get(check_rate_limit_handler))
        .route("/robots.txt", get(robots_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

pub async fn run(args: Args) -> Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = Arc::new(AppState::new(&args, clock)?);

    // spawn the background sweeper
    if args.sweep_interval > 0 {
        tokio::spawn(identity_sweeper(
            Arc::clone(&state),
            Duration::from_secs(args.sweep_interval),
        ));
    }

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(port = args.port, domain = %args.domain, "Promo gate running on http://localhost:{}", args.port);
    info!(
        max_requests = args.max_requests,
        per_seconds = args.per_seconds,
        zone = ?args.zone,
        "Rate limit: {} requests per {} seconds",
        args.max_requests,
        args.per_seconds
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
