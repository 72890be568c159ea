use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::navigation::Route;
use crate::state::{AppState, LoginState};
use crate::ui::screens::Screen;
use farmgate_auth::SessionState;

/// Mock data event handler for tests (no real async tasks)
///
/// Applies commands with execute_command_sync and records them so tests can
/// check which session work would have been started.
#[derive(Default)]
pub struct MockDataHandler {
    pub executed: Vec<AppCommand>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        self.executed.push(command.clone());
        executor::execute_command_sync(command, state);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Create a new test app sitting on the session gate
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    /// Create a test app whose session gate already resolved
    pub fn resolved(session: SessionState) -> Self {
        let mut app = Self::new();
        app.send_data_event(DataEvent::SessionResolved { state: session });
        app
    }

    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into whatever has focus
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate a background task result)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Attempt number of the pending login, if the login screen has one
    pub fn pending_login_attempt(&self) -> Option<u64> {
        self.login_state().and_then(|login| login.pending_attempt)
    }

    pub fn login_state(&self) -> Option<&LoginState> {
        match self.state().current_screen() {
            Screen::Login(login) => Some(login),
            _ => None,
        }
    }

    /// Whether a command reached the executor
    pub fn was_executed(&self, command: &AppCommand) -> bool {
        self.core.handler().executed.contains(command)
    }

    pub fn alert_message(&self) -> Option<&str> {
        self.state().alert.as_ref().map(|alert| alert.message.as_str())
    }

    pub fn assert_route(&self, expected: Route) {
        assert_eq!(
            self.state().current_route(),
            expected,
            "Expected different screen. Stack: {:?}",
            self.state().routes()
        );
    }

    /// Assert the full navigation stack, bottom first
    pub fn assert_stack(&self, expected: &[Route]) {
        assert_eq!(self.state().routes(), expected);
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
