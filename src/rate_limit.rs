use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::clock::Clock;

// Rate limit entry - request timestamps (epoch millis) for one identity
#[derive(Debug, Default)]
struct RateLimitEntry {
    hits: VecDeque<i64>,
}

impl RateLimitEntry {
    // Drop every hit that is window_ms or more in the past
    fn prune(&mut self, now_ms: i64, window_ms: i64) {
        self.hits.retain(|&t| now_ms.saturating_sub(t) < window_ms);
    }

    fn len(&self) -> usize {
        self.hits.len()
    }

    fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

// Sliding-window limiter: at most max_requests recorded hits per identity
// in any trailing per_seconds interval. Windows are pruned lazily on access.
// The dashmap entry guard holds the shard lock across prune, compare and append.
pub struct SlidingWindowLimiter {
    windows: DashMap<String, RateLimitEntry>,
    max_requests: u32,
    per_seconds: u64,
    clock: Arc<dyn Clock>,
}

impl SlidingWindowLimiter {
    pub fn new(max_requests: u32, per_seconds: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            per_seconds,
            clock,
        }
    }

    fn window_millis(&self) -> i64 {
        i64::try_from(self.per_seconds.saturating_mul(1000)).unwrap_or(i64::MAX)
    }

    // With record the admitted request counts against the window,
    // without it the check prunes but never consumes quota
    pub fn is_allowed(&self, identity: &str, record: bool) -> bool {
        self.is_allowed_at(identity, record, self.clock.now())
    }

    pub fn is_allowed_at(&self, identity: &str, record: bool, now: DateTime<Utc>) -> bool {
        let now_ms = now.timestamp_millis();
        let window_ms = self.window_millis();

        let mut entry = self.windows.entry(identity.to_string()).or_default();
        entry.prune(now_ms, window_ms);

        if entry.len() >= self.max_requests as usize {
            return false;
        }

        if record {
            entry.hits.push_back(now_ms);
        }
        true
    }

    // Prune every identity and forget the ones left empty, returns how many went
    pub fn sweep(&self) -> usize {
        self.sweep_at(self.clock.now())
    }

    pub fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let now_ms = now.timestamp_millis();
        let window_ms = self.window_millis();
        let mut removed = 0;

        self.windows.retain(|_, entry| {
            entry.prune(now_ms, window_ms);
            let keep = !entry.is_empty();
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    pub fn tracked_identities(&self) -> usize {
        self.windows.len()
    }

    // Hits currently stored for an identity, without pruning
    pub fn recorded(&self, identity: &str) -> usize {
        self.windows.get(identity).map(|e| e.len()).unwrap_or(0)
    }

    // e.g. "50 istek/1 saat"
    pub fn limit_info(&self) -> String {
        format!("{} istek/{} saat", self.max_requests, self.per_seconds / 3600)
    }
}
