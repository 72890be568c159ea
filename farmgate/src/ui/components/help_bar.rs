//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a standard help bar with the given text.
///
/// Gray text in a bordered block, centered. All screens use this for their
/// key hints.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_AUTH_GATE: &str = "Ctrl+C: quit";

pub const HELP_TEXT_LOGIN: &str = "Tab: switch field | Enter: login | Ctrl+C: quit";

pub const HELP_TEXT_LOGIN_SUBMITTING: &str = "Esc: cancel | Ctrl+C: quit";

pub const HELP_TEXT_HOME: &str = "j/k: move | Enter/1-4: open | l: logout | q: quit";

pub const HELP_TEXT_STUB: &str = "Enter/h: go to home | Esc: back | q: quit";
