//! A learnable item together with its spaced repetition state.
use super::Flashcard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: String,
    pub category: String,
    pub content: Flashcard,
    pub mastery_level: u8,
    pub correct_count: u32,
    pub incorrect_count: u32,
    /// `None` until the first answer is recorded.
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub next_review_at: Option<DateTime<Utc>>,
}

impl ReviewItem {
    pub fn new(id: &str, category: &str, content: Flashcard) -> Self {
        Self {
            id: id.to_string(),
            category: category.to_string(),
            content,
            mastery_level: 0,
            correct_count: 0,
            incorrect_count: 0,
            last_reviewed_at: None,
            next_review_at: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.last_reviewed_at.is_none()
    }

    /// Studied at least once and the scheduled review time has been reached.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match (self.last_reviewed_at, self.next_review_at) {
            (Some(_), Some(next)) => next <= now,
            _ => false,
        }
    }

    pub fn is_mastered(&self, threshold: u8) -> bool {
        self.mastery_level >= threshold
    }

    /// Drops all learning progress. Content, id and category are kept.
    pub fn reset(&mut self) {
        self.mastery_level = 0;
        self.correct_count = 0;
        self.incorrect_count = 0;
        self.last_reviewed_at = None;
        self.next_review_at = None;
    }
}
