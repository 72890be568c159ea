use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::AuthError;

/// Message shown when the server gives no reason for a failure
pub const GENERIC_LOGIN_FAILURE: &str = "An unexpected error occurred. Please try again.";

/// Body of a successful `POST /token`
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of a failed request. `detail` is only meaningful when it is a string.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Login rejected: {0}")]
    Rejected(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Failed to store session: {0}")]
    Storage(#[source] AuthError),

    #[error("A login attempt is already in progress")]
    InFlight,
}

impl LoginError {
    /// Text for the login failure dialog
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(reason) => reason.clone(),
            _ => GENERIC_LOGIN_FAILURE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_uses_server_reason() {
        let err = LoginError::Rejected("Invalid credentials".to_string());
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        assert_eq!(
            LoginError::Unexpected("bad body".to_string()).user_message(),
            GENERIC_LOGIN_FAILURE
        );
        assert_eq!(LoginError::InFlight.user_message(), GENERIC_LOGIN_FAILURE);
        assert_eq!(
            LoginError::Storage(AuthError::TokenStorage("disk full".to_string())).user_message(),
            GENERIC_LOGIN_FAILURE
        );
    }
}
