use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::navigation::Route;
use crate::ui::{components::help_bar, layouts, theme};

/// Render one of the placeholder screens: its label and a way home
pub fn render(f: &mut Frame, content_area: Rect, help_area: Rect, route: Route) {
    let body = vec![
        Line::from(route.stub_label().unwrap_or_default()),
        Line::from(""),
        Line::from(Span::styled("[Enter] Go to Home", theme::title_style())),
    ];
    let content = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, layouts::centered_box(40, 5, content_area));

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_STUB);
}
