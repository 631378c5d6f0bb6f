//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod layout;
pub mod notice;
pub mod picker;

pub use layout::centered_popup;
pub use notice::{NoticeDialog, NoticeKind};
pub use picker::LevelPickerDialog;
