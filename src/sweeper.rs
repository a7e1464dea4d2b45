use std::sync::Arc;
use tokio::time::{Duration, interval};
use tracing::{debug, info};

use crate::metrics::TRACKED_IDENTITIES;
use crate::state::AppState;

// Identity sweeper - forgets clients whose window has emptied.
// Without it the limiter keeps one key per address it has ever seen.
pub async fn identity_sweeper(state: Arc<AppState>, every: Duration) {
    let mut interval = interval(every);

    info!(interval = ?every, "Identity sweeper started");

    loop {
        interval.tick().await;

        let removed = state.limiter.sweep();
        let remaining = state.limiter.tracked_identities();
        TRACKED_IDENTITIES.set(remaining as f64);

        if removed > 0 {
            debug!(
                removed_identities = removed,
                remaining_identities = remaining,
                "Rate limiter sweep completed"
            );
        }
    }
}
