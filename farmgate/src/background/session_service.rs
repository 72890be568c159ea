use crate::events::DataEvent;
use farmgate_auth::{check_session, Authenticator, Credentials, SessionState};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs session work off the UI loop and reports back through DataEvents
#[derive(Clone)]
pub struct SessionService {
    pub authenticator: Arc<Authenticator>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl SessionService {
    pub fn new(
        authenticator: Arc<Authenticator>,
        data_tx: mpsc::UnboundedSender<DataEvent>,
    ) -> Self {
        Self {
            authenticator,
            data_tx,
        }
    }

    /// Launch-time check of the token store
    pub async fn resolve_session(&self) {
        let store = self.authenticator.token_store().clone();

        // Token stores do blocking I/O
        let state = match tokio::task::spawn_blocking(move || check_session(store.as_ref())).await
        {
            Ok(state) => state,
            Err(e) => {
                tracing::error!("Session check task failed: {}", e);
                SessionState::Anonymous
            }
        };

        let _ = self.data_tx.send(DataEvent::SessionResolved { state });
    }

    pub async fn login(&self, attempt: u64, credentials: Credentials) {
        tracing::info!("Starting login attempt {}", attempt);

        let event = match self.authenticator.login(credentials).await {
            Ok(_) => DataEvent::LoginSucceeded { attempt },
            Err(e) => {
                tracing::error!("Login attempt {} failed: {}", attempt, e);
                DataEvent::LoginFailed {
                    attempt,
                    message: e.user_message(),
                }
            }
        };

        let _ = self.data_tx.send(event);
    }

    pub async fn logout(&self) {
        let authenticator = self.authenticator.clone();

        let event = match tokio::task::spawn_blocking(move || authenticator.logout()).await {
            Ok(Ok(())) => DataEvent::LoggedOut,
            Ok(Err(e)) => {
                tracing::error!("Failed to clear session: {}", e);
                DataEvent::LogoutFailed {
                    message: e.to_string(),
                }
            }
            Err(e) => {
                tracing::error!("Logout task failed: {}", e);
                DataEvent::LogoutFailed {
                    message: format!("Logout task failed: {}", e),
                }
            }
        };

        let _ = self.data_tx.send(event);
    }
}
