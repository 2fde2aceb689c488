pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock, day_index};
pub use config::{SrsConfig, load_config};
pub use database::{ReviewStore, SqliteStore};
pub use error::{Result, SessionError, SrsError};
pub use models::{
    Curriculum, Flashcard, IntervalTable, ProgressSummary, ReviewItem, SessionQueue, StudyMode,
    StudySession, apply_outcome, select_for_session, summarize,
};
