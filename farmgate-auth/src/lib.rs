// Types shared between the auth client and its callers
pub mod common;

// Session client: token storage, session gate, authenticator
mod client;
mod error;

pub use client::{
    check_session, init_session, Authenticator, FileTokenStore, LoginError, MemoryTokenStore,
    SessionState, Settings, TokenStore, GENERIC_LOGIN_FAILURE,
};
pub use common::{Credentials, SessionToken};
pub use error::AuthError;
