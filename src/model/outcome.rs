//! Selection outcome - the tri-state result of one picker invocation

use super::document::Level;

/// Result of a single picker invocation
///
/// Exactly one variant is produced per invocation. The chosen level is
/// carried in the variant itself; there is no shared slot to read back.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// User confirmed a level from the offered sequence
    Succeeded(Level),
    /// User dismissed the picker without confirming
    Cancelled,
    /// The document offered nothing to pick from
    Failed(String),
}

impl SelectionOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            SelectionOutcome::Succeeded(_) => 0,
            SelectionOutcome::Cancelled => 1,
            SelectionOutcome::Failed(_) => 2,
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, SelectionOutcome::Succeeded(_))
    }
}
