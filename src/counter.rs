use chrono::NaiveDate;
use parking_lot::Mutex;

struct DailyState {
    count: u64,
    last_reset: NaiveDate,
}

impl DailyState {
    fn roll_over(&mut self, today: NaiveDate) {
        if self.last_reset != today {
            self.count = 0;
            self.last_reset = today;
        }
    }
}

// Page views served today, display only.
// Date check, reset and increment run under one lock
pub struct DailyCounter {
    inner: Mutex<DailyState>,
}

impl DailyCounter {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            inner: Mutex::new(DailyState {
                count: 0,
                last_reset: today,
            }),
        }
    }

    // Count one qualifying page view, returns the new total
    pub fn record(&self, today: NaiveDate) -> u64 {
        let mut state = self.inner.lock();
        state.roll_over(today);
        state.count += 1;
        state.count
    }

    // Observe the date without counting (crawler page views)
    pub fn roll_over(&self, today: NaiveDate) -> u64 {
        let mut state = self.inner.lock();
        state.roll_over(today);
        state.count
    }

    pub fn peek(&self, today: NaiveDate) -> u64 {
        let state = self.inner.lock();
        if state.last_reset == today { state.count } else { 0 }
    }

    pub fn last_reset(&self) -> NaiveDate {
        self.inner.lock().last_reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    #[test]
    fn accumulates_within_a_day() {
        let c = DailyCounter::new(day(1));
        assert_eq!(c.record(day(1)), 1);
        assert_eq!(c.record(day(1)), 2);
        assert_eq!(c.record(day(1)), 3);
        assert_eq!(c.peek(day(1)), 3);
    }

    #[test]
    fn new_day_starts_at_one() {
        let c = DailyCounter::new(day(1));
        c.record(day(1));
        c.record(day(1));
        assert_eq!(c.record(day(2)), 1);
        assert_eq!(c.last_reset(), day(2));
    }

    #[test]
    fn crawler_views_reset_but_never_count() {
        let c = DailyCounter::new(day(1));
        c.record(day(1));
        assert_eq!(c.roll_over(day(1)), 1);
        assert_eq!(c.roll_over(day(2)), 0);
        assert_eq!(c.last_reset(), day(2));
        assert_eq!(c.record(day(2)), 1);
    }

    #[test]
    fn peek_does_not_mutate() {
        let c = DailyCounter::new(day(1));
        c.record(day(1));
        assert_eq!(c.peek(day(2)), 0);
        assert_eq!(c.last_reset(), day(1));
        assert_eq!(c.peek(day(1)), 1);
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let c = std::sync::Arc::new(DailyCounter::new(day(1)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let c = c.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        c.record(day(1));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(c.peek(day(1)), 8000);
    }
}
