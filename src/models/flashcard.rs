//! Flashcard is the study payload of a review item: a vocabulary word or a kanji
//! with its reading and meaning. The scheduler never looks inside it.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    pub definition: String,
}

impl Flashcard {
    pub fn new(term: &str, definition: &str) -> Self {
        Self {
            term: term.to_string(),
            reading: None,
            definition: definition.to_string(),
        }
    }

    pub fn with_reading(mut self, reading: &str) -> Self {
        self.reading = Some(reading.to_string());
        self
    }
}
