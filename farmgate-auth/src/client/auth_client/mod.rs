mod models;

use crate::client::{Settings, TokenStore};
use crate::common::{Credentials, SessionToken};
use crate::error::AuthError;
pub use models::{LoginError, GENERIC_LOGIN_FAILURE};
use models::{ErrorResponse, TokenResponse};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Exchanges credentials for a session token and persists it
pub struct Authenticator {
    http_client: Client,
    server_url: String,
    store: Arc<dyn TokenStore>,
    in_flight: AtomicBool,
}

impl Authenticator {
    pub fn new(settings: &Settings, store: Arc<dyn TokenStore>) -> Result<Self, AuthError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            server_url: settings.server_url.trim_end_matches('/').to_string(),
            store,
            in_flight: AtomicBool::new(false),
        })
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit credentials to `POST /token`
    ///
    /// On success the token is written to the store before it is returned.
    /// On failure the store is left untouched. Only one login may be pending
    /// at a time; a concurrent call fails with [`LoginError::InFlight`].
    pub async fn login(&self, credentials: Credentials) -> Result<SessionToken, LoginError> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(LoginError::InFlight)?;

        let url = format!("{}/token", self.server_url);
        tracing::info!(username = %credentials.username, "Submitting login");

        let form = [
            ("username", credentials.username.as_str()),
            ("password", credentials.password.expose_secret()),
        ];

        let resp = self
            .http_client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(LoginError::Network)?;

        if !status.is_success() {
            let err = rejection_from_body(status, &body);
            tracing::warn!(%status, "Login failed: {}", err);
            return Err(err);
        }

        let token_resp: TokenResponse = serde_json::from_slice(&body)
            .map_err(|e| LoginError::Unexpected(format!("Malformed token response: {}", e)))?;

        if token_resp.access_token.is_empty() {
            return Err(LoginError::Unexpected(
                "Server returned an empty access token".to_string(),
            ));
        }

        if let Some(token_type) = &token_resp.token_type {
            tracing::debug!(token_type = %token_type, "Received access token");
        }

        let token = SessionToken::new(token_resp.access_token);
        self.persist(token.clone()).await?;

        tracing::info!("Login successful");
        Ok(token)
    }

    /// Write the token on the blocking pool; stores do file I/O
    async fn persist(&self, token: SessionToken) -> Result<(), LoginError> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.set(&token))
            .await
            .map_err(|e| {
                LoginError::Storage(AuthError::TokenStorage(format!(
                    "Token write task failed: {}",
                    e
                )))
            })?
            .map_err(LoginError::Storage)
    }

    /// Remove the stored session
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }
}

/// Holds the in-flight flag for the lifetime of one login call
///
/// Dropping the guard (including when the login future is cancelled)
/// releases the flag.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

fn classify_send_error(err: reqwest::Error) -> LoginError {
    if err.is_builder() {
        LoginError::Unexpected(format!("Invalid request: {}", err))
    } else {
        tracing::warn!("Login request did not complete: {}", err);
        LoginError::Network(err)
    }
}

fn rejection_from_body(status: StatusCode, body: &[u8]) -> LoginError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            detail: Some(Value::String(reason)),
        }) if !reason.is_empty() => LoginError::Rejected(reason),
        _ => LoginError::Unexpected(format!("Server responded with {}", status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_with_string_detail() {
        let err = rejection_from_body(
            StatusCode::UNAUTHORIZED,
            br#"{"detail":"Invalid credentials"}"#,
        );
        assert!(matches!(err, LoginError::Rejected(ref r) if r == "Invalid credentials"));
    }

    #[test]
    fn test_rejection_with_empty_detail_uses_generic_message() {
        let err = rejection_from_body(StatusCode::UNAUTHORIZED, br#"{"detail":""}"#);
        assert!(matches!(err, LoginError::Unexpected(_)));
        assert_eq!(err.user_message(), GENERIC_LOGIN_FAILURE);
    }

    #[test]
    fn test_rejection_with_structured_detail_is_unexpected() {
        let err = rejection_from_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail":[{"loc":["body","username"],"msg":"field required"}]}"#,
        );
        assert!(matches!(err, LoginError::Unexpected(_)));
    }

    #[test]
    fn test_rejection_without_body_is_unexpected() {
        let err = rejection_from_body(StatusCode::INTERNAL_SERVER_ERROR, b"");
        assert!(matches!(err, LoginError::Unexpected(_)));
        assert_eq!(err.user_message(), GENERIC_LOGIN_FAILURE);
    }

    #[test]
    fn test_in_flight_guard_releases_on_drop() {
        let flag = AtomicBool::new(false);

        let guard = InFlightGuard::acquire(&flag).unwrap();
        assert!(InFlightGuard::acquire(&flag).is_none());

        drop(guard);
        assert!(InFlightGuard::acquire(&flag).is_some());
    }
}
