//! Curriculum is an ordered list of study content, e.g. a vocabulary or kanji list.
//! Its order is the order in which items are introduced day by day.
use super::{Flashcard, ReviewItem};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumEntry {
    pub id: String,
    pub category: String,
    #[serde(flatten)]
    pub flashcard: Flashcard,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    pub name: String,
    pub items: Vec<CurriculumEntry>,
}

impl Curriculum {
    /// Fresh, never studied review items in curriculum order.
    pub fn into_review_items(self) -> Vec<ReviewItem> {
        self.items
            .into_iter()
            .map(|entry| ReviewItem::new(&entry.id, &entry.category, entry.flashcard))
            .collect()
    }
}

impl Default for Curriculum {
    fn default() -> Self {
        Self {
            name: "My Curriculum".to_string(),
            items: Vec::new(),
        }
    }
}
