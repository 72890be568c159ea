use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::{layouts, theme};

/// Render the logout confirmation popup
///
/// While `logging_out` is set the choice has been made and only a status
/// line is shown.
pub fn render_logout_confirmation(f: &mut Frame, logging_out: bool) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        " Logout ",
        theme::danger_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Question
            Constraint::Length(1), // Empty line
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let question = Paragraph::new("Are you sure you want to log out?")
        .style(theme::loading_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(question, chunks[0]);

    let instructions = if logging_out {
        Line::from(Span::styled("Logging out...", theme::loading_style()))
    } else {
        Line::from(vec![
            Span::styled(
                "[Y]es ",
                Style::default()
                    .fg(theme::COLOR_POSITIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("/ "),
            Span::styled(
                "[N]o ",
                Style::default()
                    .fg(theme::COLOR_NEGATIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("/ "),
            Span::styled("[Esc]", Style::default().fg(theme::COLOR_HELP_TEXT)),
            Span::raw(" Cancel"),
        ])
    };
    f.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[2],
    );
}
