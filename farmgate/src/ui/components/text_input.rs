//! Single-line bordered text input.

use ratatui::prelude::Rect;
use ratatui::{
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a labelled input field.
///
/// `masked` replaces every character with a bullet. A trailing cursor is
/// drawn while the field has focus.
pub fn render_text_input(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    masked: bool,
    focused: bool,
) {
    let mut shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    if focused {
        shown.push('_');
    }

    let border_style = if focused {
        theme::input_focused_style()
    } else {
        Style::default()
    };

    let input = Paragraph::new(shown).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(label.to_string()),
    );

    f.render_widget(input, area);
}
