use ratatui::{layout::Rect, style::Style, Frame};
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_EIGHT};

use crate::ui::theme;

/// Render a spinner followed by a label
///
/// The state is cloned so rendering stays read-only; the event loop advances
/// the real throbber on every tick.
pub fn render_loading_indicator(f: &mut Frame, area: Rect, label: &str, state: &ThrobberState) {
    let throbber = Throbber::default()
        .label(label.to_string())
        .style(theme::loading_style())
        .throbber_style(Style::default().fg(theme::COLOR_LOADING))
        .throbber_set(BRAILLE_EIGHT);

    f.render_stateful_widget(throbber, area, &mut state.clone());
}
