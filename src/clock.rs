use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::error::GateError;

// Source of "now" for the limiter and the page handlers
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// Wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// Clock that only moves when told to. Millisecond resolution
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            millis: AtomicI64::new(now.timestamp_millis()),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.millis.store(now.timestamp_millis(), Ordering::Relaxed);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.millis
            .fetch_add(secs.saturating_mul(1000), Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis.load(Ordering::Relaxed)).unwrap_or_default()
    }
}

// Calendar zone for day boundaries and every time shown to clients.
// Local follows the host zone, Fixed pins the daily reset to one offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn offset_at(&self, now: DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Local => now.with_timezone(&Local).offset().fix(),
            Zone::Fixed(offset) => *offset,
        }
    }

    pub fn localize(&self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        now.with_timezone(&self.offset_at(now))
    }

    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.localize(now).date_naive()
    }
}

impl FromStr for Zone {
    type Err = GateError;

    // Accepts "local", "utc"/"z", or an offset like "+03:00" or "-0530"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        match raw.to_ascii_lowercase().as_str() {
            "local" => Ok(Zone::Local),
            "utc" | "z" => Ok(Zone::Fixed(Offset::fix(&Utc))),
            _ => raw
                .parse::<FixedOffset>()
                .map(Zone::Fixed)
                .map_err(|e| GateError::Config(format!("invalid UTC offset '{raw}': {e}"))),
        }
    }
}
