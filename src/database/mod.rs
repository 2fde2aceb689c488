//! Persistence of review item state between sessions.
pub mod db;

use crate::error::Result;
use crate::models::ReviewItem;

pub use db::SqliteStore;

/// Key-value store of review items keyed by id.
///
/// `save` overwrites the stored scheduling state; when two writers save the same
/// item the last write wins.
pub trait ReviewStore {
    /// Items for `ids`, in the order asked for. Unknown ids are an error.
    fn load(&self, ids: &[String]) -> Result<Vec<ReviewItem>>;

    /// Every stored item in curriculum order.
    fn load_all(&self) -> Result<Vec<ReviewItem>>;

    fn save(&self, items: &[ReviewItem]) -> Result<()>;
}
