use crate::background::{session_service::SessionService, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::*;
use crate::ui::screens::Screen;

const SESSION_TASK: &str = "resolve_session";
const LOGIN_TASK: &str = "login";
const LOGOUT_TASK: &str = "logout";

/// Execute a command, spawning background tasks for session work
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    session: &SessionService,
) {
    match command {
        AppCommand::ResolveSession => {
            tracing::debug!("Checking stored session");
            let session = session.clone();
            task_manager.spawn_load_task(SESSION_TASK.to_string(), async move {
                session.resolve_session().await;
            });
        }

        AppCommand::SubmitLogin => {
            let Some(attempt) = state.begin_login_attempt() else {
                tracing::debug!("Login submit ignored, attempt already in flight");
                return;
            };
            let Screen::Login(login_state) = state.current_screen() else {
                return;
            };

            let credentials = login_state.credentials();
            let session = session.clone();
            task_manager.spawn_load_task(LOGIN_TASK.to_string(), async move {
                session.login(attempt, credentials).await;
            });
        }

        AppCommand::CancelLogin => {
            // Abort first so a finished request can't race the state reset
            task_manager.cancel(LOGIN_TASK);
            execute_command_sync(AppCommand::CancelLogin, state);
        }

        AppCommand::ConfirmLogout => {
            execute_command_sync(AppCommand::ConfirmLogout, state);

            let session = session.clone();
            task_manager.spawn_load_task(LOGOUT_TASK.to_string(), async move {
                session.logout().await;
            });
        }

        other => execute_command_sync(other, state),
    }
}

/// Synchronous command execution (no background tasks)
///
/// Applies the state transition of every command. Commands that also need
/// I/O (ResolveSession, SubmitLogin, ConfirmLogout) only update UI state
/// here; tests inject the matching DataEvents instead.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    match command {
        AppCommand::Quit => state.should_quit = true,
        AppCommand::DismissAlert => state.alert = None,

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
        }
        AppCommand::OpenRoute(route) => {
            if !matches!(state.current_screen(), Screen::Home(_)) || !route.is_stub() {
                tracing::warn!("Refusing to open {} from {}", route.name(), state.current_route().name());
                return;
            }
            state.navigate_to(Screen::for_route(route));
        }
        AppCommand::GoHome => state.navigate_home(),

        AppCommand::SelectNext => {
            if let Screen::Home(home_state) = state.current_screen_mut() {
                home_state.select_next();
            }
        }
        AppCommand::SelectPrevious => {
            if let Screen::Home(home_state) = state.current_screen_mut() {
                home_state.select_prev();
            }
        }

        // Session check result arrives as a DataEvent
        AppCommand::ResolveSession => {}

        // Login form
        AppCommand::NavigateLoginField { forward } => {
            if let Screen::Login(login_state) = state.current_screen_mut() {
                login_state.focused_field = if forward {
                    login_state.focused_field.next()
                } else {
                    login_state.focused_field.previous()
                };
            }
        }
        AppCommand::AppendLoginChar { c } => {
            if let Screen::Login(login_state) = state.current_screen_mut() {
                if !login_state.is_submitting() {
                    login_state.focused_value_mut().push(c);
                }
            }
        }
        AppCommand::DeleteLoginChar => {
            if let Screen::Login(login_state) = state.current_screen_mut() {
                if !login_state.is_submitting() {
                    login_state.focused_value_mut().pop();
                }
            }
        }
        AppCommand::SubmitLogin => {
            if state.begin_login_attempt().is_none() {
                tracing::debug!("Login submit ignored, attempt already in flight");
            }
        }
        AppCommand::CancelLogin => {
            if let Screen::Login(login_state) = state.current_screen_mut() {
                if let Some(attempt) = login_state.pending_attempt.take() {
                    tracing::info!("Cancelled login attempt {}", attempt);
                }
            }
        }

        // Logout
        AppCommand::InitiateLogout => set_home_input_mode(state, InputMode::LogoutConfirmation),
        AppCommand::CancelLogout => set_home_input_mode(state, InputMode::Normal),
        AppCommand::ConfirmLogout => set_home_input_mode(state, InputMode::LoggingOut),
    }
}

fn set_home_input_mode(state: &mut AppState, input_mode: InputMode) {
    if let Screen::Home(home_state) = state.current_screen_mut() {
        home_state.input_mode = input_mode;
    }
}
