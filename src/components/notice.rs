//! Blocking notice dialog component
//!
//! Shown instead of (error) or after (cancellation) the picker. Any key
//! acknowledges the notice.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

/// Blocking notice dialog
#[derive(Debug, Default)]
pub struct NoticeDialog {
    pub kind: NoticeKind,
    pub message: String,
}

impl NoticeDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_info(&mut self, message: &str) {
        self.kind = NoticeKind::Info;
        self.message = message.to_string();
    }

    pub fn set_error(&mut self, message: &str) {
        self.kind = NoticeKind::Error;
        self.message = message.to_string();
    }
}

impl Component for NoticeDialog {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(Some(Action::DismissNotice))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let width = 50u16.min(area.width.saturating_sub(4));
        let popup_area = centered_popup(area, width, 7);
        frame.render_widget(Clear, popup_area);

        let (title, accent) = match self.kind {
            NoticeKind::Info => (" Notice ", Color::Cyan),
            NoticeKind::Error => (" Error ", Color::Red),
        };

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .title(title)
                    .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
