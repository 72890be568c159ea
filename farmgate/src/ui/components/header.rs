//! Header bar shown above screens whose route enables it.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::navigation::Route;
use crate::ui::theme;

pub fn render_header(f: &mut Frame, area: Rect, route: Route) {
    let header = Paragraph::new(route.options().title)
        .style(theme::title_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}
