//! Level picker dialog component
//!
//! Two-panel layout:
//! - Left panel: list of level names in document order
//! - Right panel: details for the highlighted level

use crate::action::Action;
use crate::component::Component;
use crate::model::Level;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Level picker dialog
pub struct LevelPickerDialog {
    pub selected_index: usize,
    pub levels: Vec<Level>,
    /// Document label shown in the header (project name or file name)
    pub document_label: String,
    /// Level id picked last time for this document, if any
    pub previous_pick: Option<String>,
    pub list_state: ListState,
}

impl Default for LevelPickerDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelPickerDialog {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            levels: Vec::new(),
            document_label: String::new(),
            previous_pick: None,
            list_state: ListState::default(),
        }
    }

    /// Populate the dialog with the collected levels
    ///
    /// The sequence is offered exactly as collected; the cursor starts on
    /// the previously picked level when one is known, else on the first.
    pub fn set_levels(&mut self, levels: Vec<Level>, previous_pick: Option<&str>) {
        self.previous_pick = previous_pick.map(|id| id.to_string());
        self.selected_index = previous_pick
            .and_then(|id| levels.iter().position(|l| l.id == id))
            .unwrap_or(0);
        self.levels = levels;

        if self.levels.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Get the currently highlighted level
    pub fn selected_level(&self) -> Option<&Level> {
        self.levels.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if self.levels.is_empty() {
            return;
        }
        if self.selected_index < self.levels.len().saturating_sub(1) {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn select_prev(&mut self) {
        if self.levels.is_empty() {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn select_first(&mut self) {
        if self.levels.is_empty() {
            return;
        }
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn select_last(&mut self) {
        if self.levels.is_empty() {
            return;
        }
        self.selected_index = self.levels.len() - 1;
        self.list_state.select(Some(self.selected_index));
    }
}

/// Truncate a string to a display-cell budget, appending an ellipsis
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0usize;
    for (i, c) in s.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width.saturating_sub(1) {
            let mut truncated = s[..i].to_string();
            truncated.push('…');
            return truncated;
        }
        width += char_width;
    }
    s.to_string()
}

impl Component for LevelPickerDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::CancelSelection));
        }

        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CancelSelection),
            KeyCode::Enter if !self.levels.is_empty() => Some(Action::ConfirmSelection),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::PrevLevel),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NextLevel),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstLevel),
            KeyCode::End | KeyCode::Char('G') => Some(Action::LastLevel),
            KeyCode::Char(c @ '1'..='9') => {
                // Digit shortcut: move the cursor and confirm in one press
                let index = (c as usize) - ('1' as usize);
                if index < self.levels.len() {
                    self.selected_index = index;
                    self.list_state.select(Some(index));
                    Some(Action::ConfirmSelection)
                } else {
                    None
                }
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let popup_width = 70u16.min(area.width.saturating_sub(4));
        let popup_height = 18u16.min(area.height.saturating_sub(2));
        let popup_area = super::centered_popup(area, popup_width, popup_height);

        // Main layout: header, content, help
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Content (two panels)
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        // Header
        let header_text = format!(
            "{} — {} level{}",
            self.document_label,
            self.levels.len(),
            if self.levels.len() == 1 { "" } else { "s" }
        );
        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select Level ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        // Two-panel layout: left (levels) | right (details)
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28), // Left panel - level list
                Constraint::Min(20),    // Right panel - details
            ])
            .split(main_chunks[1]);

        // Left panel: level list
        let name_budget = content_chunks[0].width.saturating_sub(10) as usize;
        let items: Vec<ListItem> = self
            .levels
            .iter()
            .enumerate()
            .map(|(i, level)| {
                let was_previous = self
                    .previous_pick
                    .as_deref()
                    .is_some_and(|id| id == level.id);
                let prefix = if was_previous { "● " } else { "  " };
                let shortcut = if i < 9 {
                    format!("[{}] ", i + 1)
                } else {
                    "    ".to_string()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(shortcut, Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        prefix,
                        Style::default().fg(if was_previous {
                            Color::Green
                        } else {
                            Color::DarkGray
                        }),
                    ),
                    Span::raw(truncate_to_width(&level.name, name_budget)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Levels ")
                    .title_style(Style::default().fg(Color::Cyan))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, content_chunks[0], &mut self.list_state);

        // Right panel: details for the highlighted level
        let detail_lines: Vec<Line> = if let Some(level) = self.selected_level() {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Name:      ", Style::default().fg(Color::Cyan)),
                    Span::raw(level.name.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Id:        ", Style::default().fg(Color::Cyan)),
                    Span::styled(level.id.clone(), Style::default().fg(Color::Yellow)),
                ]),
                Line::from(vec![
                    Span::styled("Elevation: ", Style::default().fg(Color::Cyan)),
                    Span::raw(level.formatted_elevation()),
                ]),
                Line::from(vec![
                    Span::styled("Position:  ", Style::default().fg(Color::Cyan)),
                    Span::raw(format!("{} of {}", self.selected_index + 1, self.levels.len())),
                ]),
            ];
            if self
                .previous_pick
                .as_deref()
                .is_some_and(|id| id == level.id)
            {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Picked last time",
                    Style::default().fg(Color::Green),
                )));
            }
            lines
        } else {
            vec![Line::from(Span::styled(
                "No level highlighted",
                Style::default().fg(Color::DarkGray),
            ))]
        };

        let details = Paragraph::new(detail_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .title_style(Style::default().fg(Color::Cyan))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(details, content_chunks[1]);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(id: &str, name: &str, elevation: f64) -> Level {
        Level {
            id: id.to_string(),
            name: name.to_string(),
            elevation,
        }
    }

    fn picker_with(levels: Vec<Level>, previous: Option<&str>) -> LevelPickerDialog {
        let mut picker = LevelPickerDialog::new();
        picker.set_levels(levels, previous);
        picker
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_enter_confirms_and_esc_cancels() {
        let mut picker = picker_with(vec![level("L1", "Level 1", 0.0)], None);

        let action = picker.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::ConfirmSelection));

        let action = picker.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::CancelSelection));
    }

    #[test]
    fn test_enter_is_ignored_when_empty() {
        let mut picker = picker_with(Vec::new(), None);
        let action = picker.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, None);
    }

    #[test]
    fn test_navigation_clamps_at_ends() {
        let mut picker = picker_with(
            vec![level("L1", "Level 1", 0.0), level("L2", "Level 2", 3.0)],
            None,
        );

        picker.select_prev();
        assert_eq!(picker.selected_index, 0);

        picker.select_next();
        picker.select_next();
        assert_eq!(picker.selected_index, 1);

        picker.select_first();
        assert_eq!(picker.selected_index, 0);
        picker.select_last();
        assert_eq!(picker.selected_index, 1);
    }

    #[test]
    fn test_digit_shortcut_moves_cursor_and_confirms() {
        let mut picker = picker_with(
            vec![level("L1", "Level 1", 0.0), level("L2", "Level 2", 3.0)],
            None,
        );

        let action = picker.handle_key_event(key(KeyCode::Char('2'))).unwrap();
        assert_eq!(action, Some(Action::ConfirmSelection));
        assert_eq!(picker.selected_level().map(|l| l.id.as_str()), Some("L2"));

        // Out of range digit does nothing
        let action = picker.handle_key_event(key(KeyCode::Char('9'))).unwrap();
        assert_eq!(action, None);
    }

    #[test]
    fn test_previous_pick_is_preselected() {
        let picker = picker_with(
            vec![
                level("L1", "Level 1", 0.0),
                level("L2", "Level 2", 3.0),
                level("L3", "Level 3", 6.0),
            ],
            Some("L2"),
        );
        assert_eq!(picker.selected_index, 1);

        // Unknown previous pick falls back to the first level
        let picker = picker_with(vec![level("L1", "Level 1", 0.0)], Some("gone"));
        assert_eq!(picker.selected_index, 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 20), "short");
        assert_eq!(truncate_to_width("a long level name", 8), "a long …");
    }
}
