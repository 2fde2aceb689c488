//! Picks the items for a study session: the day's batch of curriculum items and
//! the previously studied items whose review time has come.

use super::ReviewItem;
use chrono::{DateTime, Utc};
use log::debug;
use std::collections::HashSet;

/// Which slices of a [`SessionQueue`] make up the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudyMode {
    NewOnly,
    DueOnly,
    #[default]
    NewThenDue,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionQueue {
    pub new_items: Vec<ReviewItem>,
    pub due_items: Vec<ReviewItem>,
}

impl SessionQueue {
    /// Flattens the selected slices into the order the session presents them.
    /// In `NewThenDue` a due item that is also part of the day's batch appears once.
    pub fn into_queue(self, mode: StudyMode) -> Vec<ReviewItem> {
        match mode {
            StudyMode::NewOnly => self.new_items,
            StudyMode::DueOnly => self.due_items,
            StudyMode::NewThenDue => {
                let seen: HashSet<String> =
                    self.new_items.iter().map(|item| item.id.clone()).collect();
                let mut queue = self.new_items;
                queue.extend(
                    self.due_items
                        .into_iter()
                        .filter(|item| !seen.contains(&item.id)),
                );
                queue
            }
        }
    }

    pub fn len(&self) -> usize {
        self.new_items.len() + self.due_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.new_items.is_empty() && self.due_items.is_empty()
    }
}

/// Selects the day's batch and the due items.
///
/// `items` must be in stable curriculum order. Day `day_index` (1-based) gets the
/// items at positions `(day_index - 1) * new_per_day .. day_index * new_per_day`;
/// a short final batch is returned as is and days past the end get nothing.
/// Due items keep their input order.
pub fn select_for_session(
    items: &[ReviewItem],
    now: DateTime<Utc>,
    new_per_day: usize,
    day_index: usize,
) -> SessionQueue {
    let new_items = daily_batch(items, new_per_day, day_index).to_vec();

    let due_items: Vec<ReviewItem> = items
        .iter()
        .filter(|item| item.is_due(now))
        .cloned()
        .collect();

    debug!(
        "day {}: {} items in batch, {} due for review",
        day_index,
        new_items.len(),
        due_items.len()
    );

    SessionQueue {
        new_items,
        due_items,
    }
}

fn daily_batch(items: &[ReviewItem], new_per_day: usize, day_index: usize) -> &[ReviewItem] {
    if day_index == 0 || new_per_day == 0 {
        return &[];
    }

    let start = (day_index - 1).saturating_mul(new_per_day);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(new_per_day).min(items.len());
    &items[start..end]
}

/// Removes items at or above the mastery threshold. Not applied by
/// [`select_for_session`]; callers opt in.
pub fn exclude_mastered(items: Vec<ReviewItem>, threshold: u8) -> Vec<ReviewItem> {
    items
        .into_iter()
        .filter(|item| !item.is_mastered(threshold))
        .collect()
}
