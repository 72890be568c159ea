pub mod auth_client;
mod config;
mod session_gate;
mod token_storage;

pub use auth_client::{Authenticator, LoginError, GENERIC_LOGIN_FAILURE};
pub use config::Settings;
pub use session_gate::{check_session, SessionState};
pub use token_storage::{FileTokenStore, MemoryTokenStore, TokenStore};

use std::sync::Arc;

use crate::error::AuthError;

/// Build the production session stack from settings
///
/// Validates the settings, opens the on-disk token store and wires it into
/// an authenticator. The returned authenticator shares the store handle.
pub fn init_session(settings: &Settings) -> Result<Authenticator, AuthError> {
    settings.validate().map_err(AuthError::Configuration)?;

    let data_dir = settings.data_dir()?;
    let store = FileTokenStore::new(&data_dir)?;
    tracing::info!(path = %store.path().display(), "Using token store");

    Authenticator::new(settings, Arc::new(store))
}
