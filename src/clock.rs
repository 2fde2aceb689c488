//! Time sources. Scheduling code never reads the wall clock itself; callers
//! pick a `Clock` and pass `now` down.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually controlled clock for tests and replays.
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// 1-based study day of `now` counted from `start`. Times before `start` count as day 1.
pub fn day_index(start: DateTime<Utc>, now: DateTime<Utc>) -> usize {
    let days = (now - start).num_days();
    if days <= 0 {
        1
    } else {
        days as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 6, 0, 0).unwrap()
    }

    #[test]
    fn test_day_index() {
        assert_eq!(day_index(start(), start()), 1);
        assert_eq!(day_index(start(), start() + Duration::hours(23)), 1);
        assert_eq!(day_index(start(), start() + Duration::hours(24)), 2);
        assert_eq!(day_index(start(), start() + Duration::days(9)), 10);
        assert_eq!(day_index(start(), start() - Duration::days(3)), 1);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(start());
        assert_eq!(clock.now(), start());

        clock.advance(Duration::hours(4));
        assert_eq!(clock.now(), start() + Duration::hours(4));

        clock.set(start());
        assert_eq!(clock.now(), start());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }
}
