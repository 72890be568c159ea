use super::{AppState, InputMode};
use crate::events::DataEvent;
use crate::navigation::Route;
use crate::ui::screens::Screen;

pub const LOGIN_SUCCESS_TITLE: &str = "Success";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully!";
pub const LOGIN_FAILED_TITLE: &str = "Login Failed";
pub const LOGOUT_FAILED_TITLE: &str = "Logout Failed";

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        // Launch-time session check; only the gate screen consumes it
        DataEvent::SessionResolved { state: session } => {
            if !matches!(state.current_screen(), Screen::AuthGate(_)) {
                tracing::warn!("Ignoring session result, gate already resolved");
                return;
            }
            let route = Route::from_session(session);
            tracing::info!("Session gate resolved to {}", route.name());
            state.replace_with(Screen::for_route(route));
        }

        DataEvent::LoginSucceeded { attempt } => {
            if !is_pending_attempt(state, attempt) {
                tracing::debug!("Discarding result of stale login attempt {}", attempt);
                return;
            }
            state.replace_with(Screen::for_route(Route::Home));
            state.show_alert(LOGIN_SUCCESS_TITLE, LOGIN_SUCCESS_MESSAGE);
        }

        DataEvent::LoginFailed { attempt, message } => {
            if !is_pending_attempt(state, attempt) {
                tracing::debug!("Discarding failure of stale login attempt {}", attempt);
                return;
            }
            if let Screen::Login(login) = state.current_screen_mut() {
                login.pending_attempt = None;
            }
            state.show_alert(LOGIN_FAILED_TITLE, message);
        }

        DataEvent::LoggedOut => {
            // Home must not stay reachable through the back stack
            state.navigate_home();
            state.replace_with(Screen::for_route(Route::Login));
        }

        DataEvent::LogoutFailed { message } => {
            if let Screen::Home(home) = state.current_screen_mut() {
                home.input_mode = InputMode::Normal;
            }
            state.show_alert(LOGOUT_FAILED_TITLE, message);
        }
    }
}

fn is_pending_attempt(state: &AppState, attempt: u64) -> bool {
    match state.current_screen() {
        Screen::Login(login) => login.pending_attempt == Some(attempt),
        _ => false,
    }
}
