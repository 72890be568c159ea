use farmgate_auth::SessionState;

use crate::navigation::Route;

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,

    // Navigation
    NavigateBack,
    OpenRoute(Route),
    GoHome,

    // Session
    ResolveSession,

    // Login form
    NavigateLoginField {
        forward: bool,
    },
    AppendLoginChar {
        c: char,
    },
    DeleteLoginChar,
    SubmitLogin,
    CancelLogin,

    // Logout
    InitiateLogout,
    ConfirmLogout,
    CancelLogout,

    // Dialogs
    DismissAlert,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone, PartialEq)]
pub enum DataEvent {
    SessionResolved { state: SessionState },

    LoginSucceeded { attempt: u64 },
    LoginFailed { attempt: u64, message: String },

    LoggedOut,
    LogoutFailed { message: String },
}
