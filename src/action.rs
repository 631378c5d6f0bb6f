//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while no event is pending
    Tick,
    /// Terminal was resized
    Resize(u16, u16),

    // ─────────────────────────────────────────────────────────────────────────
    // Picker Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move cursor to the next level
    NextLevel,
    /// Move cursor to the previous level
    PrevLevel,
    /// Jump to the first level
    FirstLevel,
    /// Jump to the last level
    LastLevel,

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────
    /// Confirm the highlighted level
    ConfirmSelection,
    /// Dismiss the picker without choosing
    CancelSelection,
    /// Acknowledge the current notice and quit
    DismissNotice,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::NextLevel => write!(f, "NextLevel"),
            Action::PrevLevel => write!(f, "PrevLevel"),
            Action::FirstLevel => write!(f, "FirstLevel"),
            Action::LastLevel => write!(f, "LastLevel"),
            Action::ConfirmSelection => write!(f, "ConfirmSelection"),
            Action::CancelSelection => write!(f, "CancelSelection"),
            Action::DismissNotice => write!(f, "DismissNotice"),
        }
    }
}
