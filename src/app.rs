//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to the picker
//! and notice dialogs. One App instance is one picker invocation: the
//! outcome lives on the instance, never in shared state, so sequential
//! invocations cannot observe each other's choices.

use crate::action::Action;
use crate::component::Component;
use crate::components::{LevelPickerDialog, NoticeDialog};
use crate::model::history::HISTORY_LIMIT;
use crate::model::{last_pick_for, Document, Level, PickHistory, PickHistoryEntry, SelectionOutcome};
use crate::services;
use anyhow::Result;
use chrono::Local;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::Path;

const NO_LEVELS_MESSAGE: &str = "The document does not contain any levels.";
const CANCELLED_MESSAGE: &str = "Operation cancelled by user.";

/// Which dialog currently has the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Picker dialog is open
    Picking,
    /// A blocking notice is shown; next key quits
    Notice,
}

/// Main application state - coordinates between components
pub struct App {
    pub phase: Phase,
    pub picker: LevelPickerDialog,
    pub notice: NoticeDialog,
    /// Outcome of this invocation, set exactly once
    pub outcome: Option<SelectionOutcome>,
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Document path, recorded alongside picks
    document_path: String,
    /// Pick history, newest first
    history: Vec<PickHistoryEntry>,
}

impl App {
    /// Create a new App for one picker invocation
    ///
    /// Collects the document's levels up front. An empty collection
    /// short-circuits to `Failed` with an error notice; the picker is
    /// never populated in that case.
    pub fn new(document: &Document, document_path: &Path, preselect_last: bool) -> App {
        Self::with_history(document, document_path, preselect_last, PickHistory::load())
    }

    fn with_history(
        document: &Document,
        document_path: &Path,
        preselect_last: bool,
        history: Vec<PickHistoryEntry>,
    ) -> App {
        let levels = services::collect_levels(document);
        let document_path_str = document_path.display().to_string();

        let document_label = document
            .project
            .clone()
            .or_else(|| {
                document_path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
            })
            .unwrap_or_else(|| "untitled".to_string());

        let mut app = App {
            phase: Phase::Picking,
            picker: LevelPickerDialog::new(),
            notice: NoticeDialog::new(),
            outcome: None,
            should_quit: false,
            document_path: document_path_str,
            history,
        };
        app.picker.document_label = document_label;

        if levels.is_empty() {
            app.outcome = Some(SelectionOutcome::Failed(NO_LEVELS_MESSAGE.to_string()));
            app.notice.set_error(NO_LEVELS_MESSAGE);
            app.phase = Phase::Notice;
        } else {
            let previous_pick = if preselect_last {
                last_pick_for(&app.history, &app.document_path).map(|id| id.to_string())
            } else {
                None
            };
            app.picker.set_levels(levels, previous_pick.as_deref());
        }

        app
    }

    /// Consume the app, yielding this invocation's outcome
    pub fn into_outcome(self) -> SelectionOutcome {
        self.outcome.unwrap_or(SelectionOutcome::Cancelled)
    }

    fn confirm_selection(&mut self) {
        let level = match self.picker.selected_level() {
            Some(l) => l.clone(),
            None => return,
        };

        self.record_pick(&level);
        self.outcome = Some(SelectionOutcome::Succeeded(level));
        // No notice on success
        self.should_quit = true;
    }

    fn cancel_selection(&mut self) {
        self.outcome = Some(SelectionOutcome::Cancelled);
        self.notice.set_info(CANCELLED_MESSAGE);
        self.phase = Phase::Notice;
    }

    fn record_pick(&mut self, level: &Level) {
        let entry = PickHistoryEntry {
            timestamp: Local::now(),
            document: self.document_path.clone(),
            level_id: level.id.clone(),
            level_name: level.name.clone(),
        };

        self.history.insert(0, entry);
        if self.history.len() > HISTORY_LIMIT {
            self.history.truncate(HISTORY_LIMIT);
        }
        // History is a convenience; failing to persist it must not block the pick
        let _ = PickHistory::save(&self.history);
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.phase {
            Phase::Picking => self.picker.handle_key_event(key),
            Phase::Notice => self.notice.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Resize(_, _) => {}

            // Navigation (delegate to the picker)
            Action::NextLevel => self.picker.select_next(),
            Action::PrevLevel => self.picker.select_prev(),
            Action::FirstLevel => self.picker.select_first(),
            Action::LastLevel => self.picker.select_last(),

            // Terminal transitions
            Action::ConfirmSelection => self.confirm_selection(),
            Action::CancelSelection => self.cancel_selection(),
            Action::DismissNotice => self.should_quit = true,
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.phase {
            Phase::Picking => self.picker.draw(frame, area),
            Phase::Notice => self.notice.draw(frame, area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::NoticeKind;
    use crate::model::{Element, LEVEL_CATEGORY};
    use crossterm::event::KeyCode;
    use std::path::PathBuf;

    /// Point HOME at a scratch directory so tests never touch real state
    fn isolate_home() {
        let dir = std::env::temp_dir().join("level-picker-test-home");
        let _ = std::fs::create_dir_all(&dir);
        std::env::set_var("HOME", &dir);
    }

    fn level_element(id: &str, name: &str, elevation: f64) -> Element {
        Element {
            id: id.to_string(),
            name: name.to_string(),
            category: LEVEL_CATEGORY.to_string(),
            elevation: Some(elevation),
        }
    }

    fn document(elements: Vec<Element>) -> Document {
        Document {
            project: Some("Test Project".to_string()),
            elements,
        }
    }

    fn two_level_document() -> Document {
        document(vec![
            level_element("L1", "Level 1", 0.0),
            level_element("L2", "Level 2", 3.5),
            Element {
                id: "X".to_string(),
                name: "NonLevelX".to_string(),
                category: LEVEL_CATEGORY.to_string(),
                elevation: None,
            },
        ])
    }

    fn new_app(document: &Document) -> App {
        App::new(document, &PathBuf::from("/tmp/model.json"), false)
    }

    #[test]
    fn test_empty_document_fails_without_opening_picker() {
        isolate_home();
        let doc = document(vec![Element {
            id: "w".to_string(),
            name: "Wall".to_string(),
            category: "Walls".to_string(),
            elevation: None,
        }]);

        let app = new_app(&doc);
        assert_eq!(app.phase, Phase::Notice);
        assert_eq!(app.notice.kind, NoticeKind::Error);
        assert!(app.picker.levels.is_empty());
        assert!(matches!(app.outcome, Some(SelectionOutcome::Failed(_))));
    }

    #[test]
    fn test_picker_offers_filtered_sequence_in_order() {
        isolate_home();
        let app = new_app(&two_level_document());

        assert_eq!(app.phase, Phase::Picking);
        let ids: Vec<&str> = app.picker.levels.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["L1", "L2"]);
    }

    #[test]
    fn test_confirm_returns_member_of_offered_sequence() {
        isolate_home();
        let mut app = new_app(&two_level_document());
        let offered = app.picker.levels.clone();

        app.update(Action::NextLevel).unwrap();
        app.update(Action::ConfirmSelection).unwrap();

        assert!(app.should_quit);
        match app.into_outcome() {
            SelectionOutcome::Succeeded(level) => {
                assert_eq!(level.id, "L2");
                assert!(offered.contains(&level));
            }
            other => panic!("expected Succeeded, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_shows_info_notice_and_returns_cancelled() {
        isolate_home();
        let mut app = new_app(&two_level_document());

        let action = app
            .handle_key_event(KeyEvent::from(KeyCode::Esc))
            .unwrap()
            .expect("esc maps to an action");
        app.update(action).unwrap();

        assert_eq!(app.phase, Phase::Notice);
        assert_eq!(app.notice.kind, NoticeKind::Info);
        assert!(!app.should_quit);

        // Any key acknowledges the notice and quits
        let action = app
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap()
            .expect("notice dismissal");
        app.update(action).unwrap();
        assert!(app.should_quit);
        assert_eq!(app.into_outcome(), SelectionOutcome::Cancelled);
    }

    #[test]
    fn test_sequential_invocations_do_not_leak_selection() {
        isolate_home();
        let doc = two_level_document();

        // First invocation confirms L1
        let mut first = new_app(&doc);
        first.update(Action::ConfirmSelection).unwrap();
        assert!(matches!(
            first.into_outcome(),
            SelectionOutcome::Succeeded(level) if level.id == "L1"
        ));

        // Second invocation cancels; the prior choice must not resurface
        let mut second = new_app(&doc);
        second.update(Action::CancelSelection).unwrap();
        second.update(Action::DismissNotice).unwrap();
        assert_eq!(second.into_outcome(), SelectionOutcome::Cancelled);
    }

    #[test]
    fn test_preselect_starts_on_previously_picked_level() {
        isolate_home();
        let doc = two_level_document();
        let path = PathBuf::from("/tmp/preselect-model.json");
        let history = vec![PickHistoryEntry {
            timestamp: Local::now(),
            document: path.display().to_string(),
            level_id: "L2".to_string(),
            level_name: "Level 2".to_string(),
        }];

        // The cursor starts on the recorded level, but nothing is confirmed
        let app = App::with_history(&doc, &path, true, history.clone());
        assert_eq!(app.picker.selected_index, 1);
        assert!(app.outcome.is_none());

        // Preselection disabled: cursor stays on the first level
        let app = App::with_history(&doc, &path, false, history);
        assert_eq!(app.picker.selected_index, 0);
    }
}
