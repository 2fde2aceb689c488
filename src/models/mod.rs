pub mod curriculum;
pub mod flashcard;
pub mod interval_table;
pub mod progress;
pub mod review_item;
pub mod review_queue;
pub mod scheduler;
pub mod study_session;

pub use curriculum::{Curriculum, CurriculumEntry};
pub use flashcard::Flashcard;
pub use interval_table::IntervalTable;
pub use progress::{CategoryProgress, ProgressSummary, summarize};
pub use review_item::ReviewItem;
pub use review_queue::{SessionQueue, StudyMode, exclude_mastered, select_for_session};
pub use scheduler::apply_outcome;
pub use study_session::{SessionState, SessionStats, StudySession};
