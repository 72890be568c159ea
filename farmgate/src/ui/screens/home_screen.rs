use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::navigation::{HomeMenuItem, HOME_MENU};
use crate::state::HomeState;
use crate::ui::{components::help_bar, theme};

pub const WELCOME_TEXT: &str = "Welcome to the Farm Management App!";

pub fn render(f: &mut Frame, content_area: Rect, help_area: Rect, state: &HomeState) {
    render_content(f, content_area, state);
    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_HOME);
}

fn render_content(f: &mut Frame, area: Rect, state: &HomeState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let welcome = Paragraph::new(WELCOME_TEXT)
        .style(theme::title_style())
        .alignment(Alignment::Center);
    f.render_widget(welcome, chunks[0]);

    let items: Vec<ListItem> = HOME_MENU
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let base = match item {
                HomeMenuItem::Logout => theme::logout_style(),
                HomeMenuItem::Open(_) => Style::default(),
            };
            let style = if i == state.selected_index {
                base.patch(theme::selection_style())
            } else {
                base
            };

            let text = match item {
                HomeMenuItem::Open(_) => format!("{}. {}", i + 1, item.label()),
                HomeMenuItem::Logout => format!("   {}", item.label()),
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Menu"));
    f.render_widget(list, chunks[1]);
}
