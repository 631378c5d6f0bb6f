//! Model layer - document data, selection outcome, pick history

pub mod document;
pub mod history;
pub mod outcome;

// Re-export commonly used types
pub use document::{Document, Element, Level, LEVEL_CATEGORY};
pub use history::{last_pick_for, PickHistory, PickHistoryEntry};
pub use outcome::SelectionOutcome;
