pub mod clock;
pub mod config;
pub mod counter;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod server;
pub mod state;
pub mod sweeper;
pub mod telemetry;
pub mod templates;

pub use error::{GateError, Result};
pub use server::router;
pub use state::AppState;
