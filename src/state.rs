use std::sync::Arc;

use crate::clock::{Clock, Zone};
use crate::config::Args;
use crate::counter::DailyCounter;
use crate::error::Result;
use crate::rate_limit::SlidingWindowLimiter;
use crate::templates::Templates;

// app's shared state

pub struct AppState {
    pub limiter: SlidingWindowLimiter,
    pub counter: DailyCounter,
    pub templates: Templates,
    pub clock: Arc<dyn Clock>,
    pub zone: Zone,     // day boundaries and displayed times
    pub domain: String, // used in robots.txt and sitemap links
}

impl AppState {
    pub fn new(args: &Args, clock: Arc<dyn Clock>) -> Result<Self> {
        let today = args.zone.today(clock.now());
        Ok(Self {
            limiter: SlidingWindowLimiter::new(args.max_requests, args.per_seconds, clock.clone()),
            counter: DailyCounter::new(today),
            templates: Templates::new()?,
            clock,
            zone: args.zone,
            domain: args.domain.clone(),
        })
    }
}
