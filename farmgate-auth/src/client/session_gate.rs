use crate::client::TokenStore;

/// Outcome of the launch-time session check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Anonymous,
}

/// Decide whether a stored session exists
///
/// Storage failures resolve to `Anonymous`; an unreadable store must never
/// open an authenticated session.
pub fn check_session(store: &dyn TokenStore) -> SessionState {
    match store.get() {
        Ok(Some(_)) => {
            tracing::info!("Stored session found");
            SessionState::Authenticated
        }
        Ok(None) => {
            tracing::info!("No stored session");
            SessionState::Anonymous
        }
        Err(e) => {
            tracing::warn!("Failed to read stored session, treating as signed out: {}", e);
            SessionState::Anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryTokenStore;
    use crate::common::SessionToken;

    #[test]
    fn test_token_present_is_authenticated() {
        let store = MemoryTokenStore::with_token(SessionToken::new("abc123"));
        assert_eq!(check_session(&store), SessionState::Authenticated);
    }

    #[test]
    fn test_token_absent_is_anonymous() {
        let store = MemoryTokenStore::new();
        assert_eq!(check_session(&store), SessionState::Anonymous);
    }

    #[test]
    fn test_storage_failure_is_anonymous() {
        let store = MemoryTokenStore::with_token(SessionToken::new("abc123"));
        store.set_unavailable(true);
        assert_eq!(check_session(&store), SessionState::Anonymous);
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let store = MemoryTokenStore::with_token(SessionToken::new(""));
        assert_eq!(check_session(&store), SessionState::Anonymous);
    }
}
