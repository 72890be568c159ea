//! Modal frame shared by the alert and logout dialogs.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Borders, Clear, Padding},
    Frame,
};

use crate::ui::layouts;

/// Clear a centered region, draw a titled border and return the inner area.
///
/// `size` is (width_percent, height_percent) of `parent_area`; see
/// [`layouts::popup_sizes`].
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: (u16, u16),
    title: &str,
    border_style: Style,
) -> Rect {
    let area = layouts::centered_popup(size.0, size.1, parent_area);

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}
