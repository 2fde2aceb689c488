//! Mastery statistics over a collection of review items, for dashboards.
use super::ReviewItem;
use serde::{Deserialize, Serialize};

/// Level at which the default eight-level scale counts an item as mastered.
pub const DEFAULT_MASTERY_THRESHOLD: u8 = 4;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category: String,
    pub total_items: usize,
    pub mastered_count: usize,
    pub mastered_percentage: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total_items: usize,
    pub mastered_count: usize,
    pub mastered_percentage: u32,
    /// One entry per category, in order of first appearance.
    pub per_category: Vec<CategoryProgress>,
}

impl ProgressSummary {
    pub fn category(&self, name: &str) -> Option<&CategoryProgress> {
        self.per_category.iter().find(|c| c.category == name)
    }
}

/// Rounded share of `part` in `total`, 0 for an empty collection.
fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

pub fn summarize(items: &[ReviewItem], mastery_threshold: u8) -> ProgressSummary {
    let mut per_category: Vec<CategoryProgress> = Vec::new();
    let mut mastered_count = 0;

    for item in items {
        let mastered = item.is_mastered(mastery_threshold);
        if mastered {
            mastered_count += 1;
        }

        let idx = match per_category.iter().position(|c| c.category == item.category) {
            Some(idx) => idx,
            None => {
                per_category.push(CategoryProgress {
                    category: item.category.clone(),
                    ..Default::default()
                });
                per_category.len() - 1
            }
        };
        let entry = &mut per_category[idx];
        entry.total_items += 1;
        if mastered {
            entry.mastered_count += 1;
        }
    }

    for entry in &mut per_category {
        entry.mastered_percentage = percentage(entry.mastered_count, entry.total_items);
    }

    ProgressSummary {
        total_items: items.len(),
        mastered_count,
        mastered_percentage: percentage(mastered_count, items.len()),
        per_category,
    }
}
