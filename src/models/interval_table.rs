//! Fixed lookup from mastery level to the wait before the next review.

use crate::error::{Result, SrsError};
use chrono::Duration;

/// Default waits in hours, indexed by mastery level 0..=8.
pub const DEFAULT_INTERVAL_HOURS: [u32; 9] = [1, 4, 8, 23, 47, 167, 334, 667, 1334];

const MAX_TABLE_LEN: usize = u8::MAX as usize + 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalTable {
    intervals: Vec<Duration>,
}

impl IntervalTable {
    /// Builds a table from hour counts. The sequence must be non-empty,
    /// non-decreasing and have at most one entry per `u8` level.
    pub fn from_hours(hours: &[u32]) -> Result<Self> {
        if hours.is_empty() {
            return Err(SrsError::InvalidConfig(
                "interval table must have at least one entry".to_string(),
            ));
        }
        if hours.len() > MAX_TABLE_LEN {
            return Err(SrsError::InvalidConfig(format!(
                "interval table has {} entries, at most {} levels are supported",
                hours.len(),
                MAX_TABLE_LEN
            )));
        }
        if let Some(pos) = hours.windows(2).position(|w| w[1] < w[0]) {
            return Err(SrsError::InvalidConfig(format!(
                "interval table must be non-decreasing: level {} ({}h) < level {} ({}h)",
                pos + 1,
                hours[pos + 1],
                pos,
                hours[pos]
            )));
        }

        Ok(Self {
            intervals: hours
                .iter()
                .map(|&h| Duration::hours(i64::from(h)))
                .collect(),
        })
    }

    /// Highest mastery level the table knows about.
    pub fn max_level(&self) -> u8 {
        (self.intervals.len() - 1) as u8
    }

    /// Wait for `level`, clamped into the table. Levels past the end get the
    /// longest interval.
    pub fn duration_for(&self, level: u8) -> Duration {
        let idx = usize::from(level).min(self.intervals.len() - 1);
        self.intervals[idx]
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl Default for IntervalTable {
    fn default() -> Self {
        Self {
            intervals: DEFAULT_INTERVAL_HOURS
                .iter()
                .map(|&h| Duration::hours(i64::from(h)))
                .collect(),
        }
    }
}
