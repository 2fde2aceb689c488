//! Study session management for spaced repetition practice.
//! Presents a queue of review items one at a time and records each answer
//! through the scheduler.

use super::{IntervalTable, ReviewItem, scheduler};
use crate::error::SessionError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub correct: u32,
    pub incorrect: u32,
}

impl SessionStats {
    pub fn answered(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Share of correct answers in percent, 0 before the first answer.
    pub fn accuracy(&self) -> u32 {
        match self.answered() {
            0 => 0,
            n => (f64::from(self.correct) / f64::from(n) * 100.0).round() as u32,
        }
    }
}

/// Owns the session's queue; answered items are replaced in place by their
/// rescheduled versions so the caller can persist them afterwards.
pub struct StudySession {
    table: IntervalTable,
    queue: Vec<ReviewItem>,
    cursor: usize,
    state: SessionState,
    stats: SessionStats,
}

impl StudySession {
    pub fn new(table: IntervalTable) -> Self {
        Self {
            table,
            queue: Vec::new(),
            cursor: 0,
            state: SessionState::NotStarted,
            stats: SessionStats::default(),
        }
    }

    /// Starts over with `queue`. An empty queue completes the session at once.
    /// Refused while a session is running, since its answered items may not be
    /// saved yet.
    pub fn start(&mut self, queue: Vec<ReviewItem>) -> Result<(), SessionError> {
        if self.state == SessionState::InProgress {
            return Err(SessionError::AlreadyInProgress);
        }

        self.queue = queue;
        self.cursor = 0;
        self.stats = SessionStats::default();

        if self.queue.is_empty() {
            self.state = SessionState::Completed;
            info!("Nothing to review, session completed");
        } else {
            self.state = SessionState::InProgress;
            info!("Study session started with {} items", self.queue.len());
        }
        Ok(())
    }

    pub fn current_item(&self) -> Result<&ReviewItem, SessionError> {
        self.ensure_in_progress()?;
        Ok(&self.queue[self.cursor])
    }

    /// Records the answer for the current item and moves to the next one.
    /// Returns the rescheduled item.
    pub fn answer(
        &mut self,
        correct: bool,
        now: DateTime<Utc>,
    ) -> Result<&ReviewItem, SessionError> {
        self.ensure_in_progress()?;

        let idx = self.cursor;
        let updated = scheduler::apply_outcome(&self.queue[idx], correct, now, &self.table);
        self.queue[idx] = updated;

        if correct {
            self.stats.correct += 1;
        } else {
            self.stats.incorrect += 1;
        }
        self.cursor += 1;
        debug!("answered {}/{}", self.cursor, self.queue.len());

        if self.cursor == self.queue.len() {
            self.state = SessionState::Completed;
            info!(
                "Study session completed: {} correct, {} incorrect",
                self.stats.correct, self.stats.incorrect
            );
        }

        Ok(&self.queue[idx])
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.state == SessionState::InProgress {
            Ok(())
        } else {
            Err(SessionError::NotInProgress(self.state))
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn total_count(&self) -> usize {
        self.queue.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.queue.len() - self.cursor
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    pub fn items(&self) -> &[ReviewItem] {
        &self.queue
    }

    pub fn into_items(self) -> Vec<ReviewItem> {
        self.queue
    }

    pub fn progress_message(&self) -> String {
        match self.state {
            SessionState::NotStarted => "Not started".to_string(),
            SessionState::InProgress => format!(
                "Item {} of {} ({} remaining)",
                self.cursor + 1,
                self.total_count(),
                self.remaining_count()
            ),
            SessionState::Completed if self.queue.is_empty() => {
                "You're all caught up!".to_string()
            }
            SessionState::Completed => format!(
                "Done: {} correct, {} incorrect ({}%)",
                self.stats.correct,
                self.stats.incorrect,
                self.stats.accuracy()
            ),
        }
    }
}
