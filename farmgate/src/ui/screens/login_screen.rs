use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{LoginField, LoginState};
use crate::ui::{
    components::{help_bar, loading_indicator, text_input},
    layouts, theme,
};

pub fn render(f: &mut Frame, content_area: Rect, help_area: Rect, state: &LoginState) {
    render_form(f, content_area, state);

    let help_text = if state.is_submitting() {
        help_bar::HELP_TEXT_LOGIN_SUBMITTING
    } else {
        help_bar::HELP_TEXT_LOGIN
    };
    help_bar::render_help_bar(f, help_area, help_text);
}

fn render_form(f: &mut Frame, area: Rect, state: &LoginState) {
    let form_height = 2 + theme::INPUT_HEIGHT * 2 + 3 + 1;
    let form_area = layouts::centered_box(theme::LOGIN_FORM_WIDTH, form_height, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                   // Title
            Constraint::Length(theme::INPUT_HEIGHT), // Username
            Constraint::Length(theme::INPUT_HEIGHT), // Password
            Constraint::Length(3),                   // Button
            Constraint::Length(1),                   // Progress
        ])
        .split(form_area);

    let title = Paragraph::new("Login")
        .style(theme::title_style())
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let editable = !state.is_submitting();
    text_input::render_text_input(
        f,
        chunks[1],
        "Username",
        &state.username,
        false,
        editable && state.focused_field == LoginField::Username,
    );
    text_input::render_text_input(
        f,
        chunks[2],
        "Password",
        &state.password,
        true,
        editable && state.focused_field == LoginField::Password,
    );

    let (label, style) = if state.is_submitting() {
        ("Logging in...", theme::disabled_style())
    } else {
        ("Login", theme::title_style())
    };
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[3]);

    if state.is_submitting() {
        loading_indicator::render_loading_indicator(
            f,
            chunks[4],
            "Contacting server...",
            &state.throbber,
        );
    }
}
