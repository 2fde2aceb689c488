//! Level-based spaced repetition scheduling.
//!
//! Every item sits on a mastery level between 0 and the top of the interval table:
//! - A correct answer moves it one level up, an incorrect one one level down
//! - The level never leaves the table; answers at the floor or ceiling still count
//!   and still reschedule the item
//! - The next review is due after the wait the interval table assigns to the new level

use super::{IntervalTable, ReviewItem};
use chrono::{DateTime, Utc};
use log::{debug, warn};

/// Returns the item's state after answering it at `now`.
/// Pure: the input item is not touched and the result depends only on the arguments.
pub fn apply_outcome(
    item: &ReviewItem,
    correct: bool,
    now: DateTime<Utc>,
    table: &IntervalTable,
) -> ReviewItem {
    let max_level = table.max_level();

    let current = if item.mastery_level > max_level {
        warn!(
            "item {} has mastery level {} above ceiling {}, clamping",
            item.id, item.mastery_level, max_level
        );
        max_level
    } else {
        item.mastery_level
    };

    let mut next = item.clone();
    if correct {
        next.mastery_level = current.saturating_add(1).min(max_level);
        next.correct_count = next.correct_count.saturating_add(1);
    } else {
        next.mastery_level = current.saturating_sub(1);
        next.incorrect_count = next.incorrect_count.saturating_add(1);
    }

    let due = now + table.duration_for(next.mastery_level);
    next.last_reviewed_at = Some(now);
    next.next_review_at = Some(due);

    debug!(
        "item {} answered {}: level {} -> {}, next review at {}",
        item.id,
        if correct { "correctly" } else { "incorrectly" },
        item.mastery_level,
        next.mastery_level,
        due
    );

    next
}
