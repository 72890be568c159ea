use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::navigation::{HomeMenuItem, HOME_MENU};
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    // Priority 0: Ctrl+C quits from anywhere
    if event.is_interrupt() {
        return Some(AppCommand::Quit);
    }

    // Priority 1: alerts are modal
    if state.alert.is_some() {
        return match event.key {
            Key::Enter | Key::Esc => Some(AppCommand::DismissAlert),
            _ => None,
        };
    }

    match state.current_screen() {
        // Input is blocked until the session check resolves
        Screen::AuthGate(_) => None,
        Screen::Login(login_state) => handle_login_keys(event, login_state),
        Screen::Home(home_state) => handle_home_keys(event.key, home_state),
        Screen::FarmerRegistration
        | Screen::SeedDistribution
        | Screen::HarvestEntry
        | Screen::Receipts => handle_stub_keys(event.key),
    }
}

fn handle_login_keys(event: KeyEvent, login_state: &LoginState) -> Option<AppCommand> {
    if login_state.is_submitting() {
        return match event.key {
            Key::Esc => Some(AppCommand::CancelLogin),
            _ => None,
        };
    }

    if let Some(c) = event.text_char() {
        return Some(AppCommand::AppendLoginChar { c });
    }

    match event.key {
        Key::Enter => Some(AppCommand::SubmitLogin),
        Key::Tab | Key::Down => Some(AppCommand::NavigateLoginField { forward: true }),
        Key::BackTab | Key::Up => Some(AppCommand::NavigateLoginField { forward: false }),
        Key::Backspace => Some(AppCommand::DeleteLoginChar),
        _ => None,
    }
}

fn handle_home_keys(key: Key, home_state: &HomeState) -> Option<AppCommand> {
    match home_state.input_mode {
        InputMode::LogoutConfirmation => match key {
            Key::Char('y') | Key::Char('Y') | Key::Enter => Some(AppCommand::ConfirmLogout),
            Key::Char('n') | Key::Char('N') | Key::Esc => Some(AppCommand::CancelLogout),
            _ => None,
        },
        InputMode::LoggingOut => None,
        InputMode::Normal => match key {
            Key::Char('j') | Key::Down => Some(AppCommand::SelectNext),
            Key::Char('k') | Key::Up => Some(AppCommand::SelectPrevious),
            Key::Enter => HOME_MENU
                .get(home_state.selected_index)
                .map(|item| menu_command(*item)),
            Key::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                HOME_MENU.get(index).map(|item| menu_command(*item))
            }
            Key::Char('l') => Some(AppCommand::InitiateLogout),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        },
    }
}

fn menu_command(item: HomeMenuItem) -> AppCommand {
    match item {
        HomeMenuItem::Open(route) => AppCommand::OpenRoute(route),
        HomeMenuItem::Logout => AppCommand::InitiateLogout,
    }
}

fn handle_stub_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Char('h') | Key::Enter => Some(AppCommand::GoHome),
        Key::Esc | Key::Backspace => Some(AppCommand::NavigateBack),
        Key::Char('q') => Some(AppCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Route;

    fn state_on(screen: Screen) -> AppState {
        let mut state = AppState::new();
        state.history = vec![screen];
        state
    }

    fn login_state(pending_attempt: Option<u64>) -> AppState {
        state_on(Screen::Login(LoginState {
            pending_attempt,
            ..Default::default()
        }))
    }

    fn home_state(selected_index: usize, input_mode: InputMode) -> AppState {
        state_on(Screen::Home(HomeState {
            selected_index,
            input_mode,
        }))
    }

    fn press(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    // ============================================================================
    // Global Commands
    // ============================================================================

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for state in [
            AppState::new(),
            login_state(None),
            login_state(Some(1)),
            home_state(0, InputMode::LoggingOut),
            state_on(Screen::Receipts),
        ] {
            assert_eq!(
                handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state),
                Some(AppCommand::Quit)
            );
        }
    }

    #[test]
    fn test_alert_blocks_other_commands() {
        let mut state = home_state(0, InputMode::Normal);
        state.show_alert("Success", "Logged in successfully!");

        assert_eq!(press(&state, Key::Char('j')), None);
        assert_eq!(press(&state, Key::Char('q')), None);
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::DismissAlert));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::DismissAlert));
    }

    #[test]
    fn test_auth_gate_ignores_input() {
        let state = AppState::new();
        assert_eq!(press(&state, Key::Enter), None);
        assert_eq!(press(&state, Key::Char('q')), None);
        assert_eq!(press(&state, Key::Esc), None);
    }

    // ============================================================================
    // Login Screen
    // ============================================================================

    #[test]
    fn test_login_typing_and_submit() {
        let state = login_state(None);

        assert_eq!(
            press(&state, Key::Char('q')),
            Some(AppCommand::AppendLoginChar { c: 'q' })
        );
        assert_eq!(press(&state, Key::Backspace), Some(AppCommand::DeleteLoginChar));
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::SubmitLogin));
        assert_eq!(
            press(&state, Key::Tab),
            Some(AppCommand::NavigateLoginField { forward: true })
        );
        assert_eq!(
            press(&state, Key::BackTab),
            Some(AppCommand::NavigateLoginField { forward: false })
        );
    }

    #[test]
    fn test_login_submit_disabled_while_in_flight() {
        let state = login_state(Some(1));

        assert_eq!(press(&state, Key::Enter), None);
        assert_eq!(press(&state, Key::Char('a')), None);
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::CancelLogin));
    }

    #[test]
    fn test_login_has_no_back_action() {
        let state = login_state(None);
        assert_eq!(press(&state, Key::Esc), None);
    }

    // ============================================================================
    // Home Screen
    // ============================================================================

    #[test]
    fn test_home_menu_navigation() {
        let state = home_state(0, InputMode::Normal);
        assert_eq!(press(&state, Key::Char('j')), Some(AppCommand::SelectNext));
        assert_eq!(press(&state, Key::Up), Some(AppCommand::SelectPrevious));
        assert_eq!(press(&state, Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn test_home_enter_activates_selected_item() {
        assert_eq!(
            press(&home_state(0, InputMode::Normal), Key::Enter),
            Some(AppCommand::OpenRoute(Route::FarmerRegistration))
        );
        assert_eq!(
            press(&home_state(3, InputMode::Normal), Key::Enter),
            Some(AppCommand::OpenRoute(Route::Receipts))
        );
        assert_eq!(
            press(&home_state(4, InputMode::Normal), Key::Enter),
            Some(AppCommand::InitiateLogout)
        );
    }

    #[test]
    fn test_home_digit_shortcuts() {
        let state = home_state(0, InputMode::Normal);
        assert_eq!(
            press(&state, Key::Char('2')),
            Some(AppCommand::OpenRoute(Route::SeedDistribution))
        );
        assert_eq!(
            press(&state, Key::Char('3')),
            Some(AppCommand::OpenRoute(Route::HarvestEntry))
        );
        assert_eq!(press(&state, Key::Char('5')), None);
        assert_eq!(press(&state, Key::Char('l')), Some(AppCommand::InitiateLogout));
    }

    #[test]
    fn test_logout_confirmation_keys() {
        let state = home_state(4, InputMode::LogoutConfirmation);
        assert_eq!(press(&state, Key::Char('y')), Some(AppCommand::ConfirmLogout));
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::ConfirmLogout));
        assert_eq!(press(&state, Key::Char('n')), Some(AppCommand::CancelLogout));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::CancelLogout));
        assert_eq!(press(&state, Key::Char('j')), None);
    }

    #[test]
    fn test_logging_out_blocks_input() {
        let state = home_state(4, InputMode::LoggingOut);
        assert_eq!(press(&state, Key::Enter), None);
        assert_eq!(press(&state, Key::Char('1')), None);
    }

    // ============================================================================
    // Stub Screens
    // ============================================================================

    #[test]
    fn test_stub_screens_go_home() {
        for screen in [
            Screen::FarmerRegistration,
            Screen::SeedDistribution,
            Screen::HarvestEntry,
            Screen::Receipts,
        ] {
            let state = state_on(screen);
            assert_eq!(press(&state, Key::Char('h')), Some(AppCommand::GoHome));
            assert_eq!(press(&state, Key::Enter), Some(AppCommand::GoHome));
            assert_eq!(press(&state, Key::Esc), Some(AppCommand::NavigateBack));
        }
    }
}
