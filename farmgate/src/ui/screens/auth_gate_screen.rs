use ratatui::{layout::Rect, Frame};

use crate::state::AuthGateState;
use crate::ui::{
    components::{help_bar, loading_indicator},
    layouts,
};

pub fn render(f: &mut Frame, content_area: Rect, help_area: Rect, state: &AuthGateState) {
    let spinner_area = layouts::centered_box(24, 1, content_area);
    loading_indicator::render_loading_indicator(
        f,
        spinner_area,
        "Checking session...",
        &state.throbber,
    );

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_AUTH_GATE);
}
