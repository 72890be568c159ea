pub mod reducer;

use crate::navigation::{Route, HOME_MENU};
use crate::ui::screens::Screen;
use farmgate_auth::Credentials;
use throbber_widgets_tui::ThrobberState;

/// Field of the login form that receives typed characters
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn next(&self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }

    pub fn previous(&self) -> Self {
        // Two fields: cycling either way lands on the other one
        self.next()
    }
}

/// Represents input mode for the home screen
#[derive(Default, Debug, Clone, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    LogoutConfirmation,
    LoggingOut,
}

/// Modal message shown over the current screen
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Default, Debug, Clone)]
pub struct AuthGateState {
    pub throbber: ThrobberState,
}

#[derive(Default, Debug, Clone)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focused_field: LoginField,
    /// Attempt number of the login request in flight, if any
    pub pending_attempt: Option<u64>,
    pub throbber: ThrobberState,
}

impl LoginState {
    pub fn is_submitting(&self) -> bool {
        self.pending_attempt.is_some()
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused_field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// Credentials exactly as typed; no client-side validation
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}

#[derive(Default, Debug, Clone)]
pub struct HomeState {
    pub selected_index: usize,
    pub input_mode: InputMode,
}

impl HomeState {
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % HOME_MENU.len();
    }

    pub fn select_prev(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = HOME_MENU.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    pub alert: Option<Alert>,
    next_login_attempt: u64,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: vec![Screen::AuthGate(AuthGateState::default())],
            alert: None,
            next_login_attempt: 1,
            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    pub fn current_route(&self) -> Route {
        self.current_screen().route()
    }

    /// Routes on the stack, bottom first
    pub fn routes(&self) -> Vec<Route> {
        self.history.iter().map(Screen::route).collect()
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to {}, stack depth: {} -> {}",
            screen.route().name(),
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Replace the current screen, leaving no back-stack entry for it
    pub fn replace_with(&mut self, screen: Screen) {
        tracing::debug!(
            "Replacing {} with {}",
            self.current_route().name(),
            screen.route().name()
        );
        self.history.pop();
        self.history.push(screen);
    }

    /// Return to Home, reusing the entry already on the stack when there is one
    pub fn navigate_home(&mut self) {
        match self
            .history
            .iter()
            .rposition(|screen| matches!(screen, Screen::Home(_)))
        {
            Some(index) => {
                tracing::debug!(
                    "Returning to home, stack depth: {} -> {}",
                    self.history.len(),
                    index + 1
                );
                self.history.truncate(index + 1);
            }
            None => self.navigate_to(Screen::Home(HomeState::default())),
        }
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.can_navigate_back() {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    pub fn can_navigate_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Mark the login form as submitting and hand out a fresh attempt number
    ///
    /// Returns None when the login screen isn't showing or an attempt is
    /// already pending.
    pub fn begin_login_attempt(&mut self) -> Option<u64> {
        let attempt = self.next_login_attempt;
        match self.current_screen_mut() {
            Screen::Login(login) if !login.is_submitting() => {
                login.pending_attempt = Some(attempt);
                login.throbber = ThrobberState::default();
            }
            _ => return None,
        }
        self.next_login_attempt += 1;
        Some(attempt)
    }

    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.alert = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
    }

    /// Throbber of the current screen if it is waiting on background work
    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.current_screen_mut() {
            Screen::AuthGate(state) => Some(&mut state.throbber),
            Screen::Login(state) if state.is_submitting() => Some(&mut state.throbber),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
