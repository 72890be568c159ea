use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::{reducer::LOGIN_SUCCESS_TITLE, Alert};
use crate::ui::{layouts, theme};

/// Render a modal alert over whatever screen is showing
pub fn render_alert(f: &mut Frame, alert: &Alert) {
    let border_style = if alert.title == LOGIN_SUCCESS_TITLE {
        theme::info_border_style()
    } else {
        theme::danger_border_style()
    };

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        &format!(" {} ", alert.title),
        border_style,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(2),    // Message
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let message = Paragraph::new(alert.message.as_str())
        .style(theme::title_style().remove_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled("[Enter]", theme::title_style()),
        Span::raw(" OK"),
    ]);
    f.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[1],
    );
}
