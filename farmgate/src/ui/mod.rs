pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::state::{AppState, InputMode};
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState) {
    let route = state.current_route();

    let (content_area, help_area) = if route.options().header_shown {
        let (header_area, content_area, help_area) = layouts::screen_layout(f.area());
        components::header::render_header(f, header_area, route);
        (content_area, help_area)
    } else {
        layouts::headerless_layout(f.area())
    };

    match state.current_screen() {
        Screen::AuthGate(gate_state) => {
            auth_gate_screen::render(f, content_area, help_area, gate_state);
        }
        Screen::Login(login_state) => {
            login_screen::render(f, content_area, help_area, login_state);
        }
        Screen::Home(home_state) => {
            home_screen::render(f, content_area, help_area, home_state);

            match home_state.input_mode {
                InputMode::LogoutConfirmation => {
                    components::logout_confirmation::render_logout_confirmation(f, false);
                }
                InputMode::LoggingOut => {
                    components::logout_confirmation::render_logout_confirmation(f, true);
                }
                InputMode::Normal => {}
            }
        }
        Screen::FarmerRegistration
        | Screen::SeedDistribution
        | Screen::HarvestEntry
        | Screen::Receipts => {
            stub_screen::render(f, content_area, help_area, route);
        }
    }

    // Alerts sit above everything else
    if let Some(alert) = &state.alert {
        components::alert_dialog::render_alert(f, alert);
    }
}
