//! Centralized theme constants and style functions for consistent UI styling.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Confirm actions and success dialogs
pub const COLOR_POSITIVE: Color = Color::Green;

/// Cancel/destructive actions (logout)
pub const COLOR_NEGATIVE: Color = Color::Red;

/// Background color for the selected menu entry
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Border color for danger/warning popups (logout confirmation, failures)
pub const COLOR_BORDER_DANGER: Color = Color::Red;

/// Border color for informational popups
pub const COLOR_BORDER_INFO: Color = Color::Blue;

/// Border color for the focused input field
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the header bar
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of a single-line bordered input
pub const INPUT_HEIGHT: u16 = 3;

/// Width of the login form
pub const LOGIN_FORM_WIDTH: u16 = 48;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for the selected menu entry
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

/// Border style for the input that has focus
pub fn input_focused_style() -> Style {
    Style::default()
        .fg(COLOR_INPUT_FOCUSED)
        .add_modifier(Modifier::BOLD)
}

/// Style for the logout menu entry
pub fn logout_style() -> Style {
    Style::default().fg(COLOR_NEGATIVE)
}

/// Style for a disabled button
pub fn disabled_style() -> Style {
    Style::default()
        .fg(COLOR_HELP_TEXT)
        .add_modifier(Modifier::DIM)
}

/// Style for danger/warning borders
pub fn danger_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_DANGER)
        .add_modifier(Modifier::BOLD)
}

/// Style for info borders
pub fn info_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_INFO)
        .add_modifier(Modifier::BOLD)
}
