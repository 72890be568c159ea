use crate::common::SessionToken;
use crate::error::AuthError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// Key the session token is stored under
pub const TOKEN_KEY: &str = "accessToken";

const STORE_FILE: &str = "session.json";

/// Durable storage for the single session token
///
/// Implementations hold at most one token. `set` overwrites, `clear` is
/// idempotent. Errors mean the underlying storage is unavailable.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Result<Option<SessionToken>, AuthError>;

    fn set(&self, token: &SessionToken) -> Result<(), AuthError>;

    fn clear(&self) -> Result<(), AuthError>;
}

/// Key-value JSON file on disk
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, AuthError> {
        let dir = dir.into();

        // Create data directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                AuthError::TokenStorage(format!("Failed to create data directory: {}", e))
            })?;
        }

        Ok(Self {
            path: dir.join(STORE_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, AuthError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| AuthError::TokenStorage(format!("Failed to read token: {}", e)))?;

        match serde_json::from_str::<Value>(&json) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => Err(AuthError::TokenStorage(
                "Token file is not a key-value object".to_string(),
            )),
            Err(e) => Err(AuthError::TokenStorage(format!("Corrupt token file: {}", e))),
        }
    }

    fn write_entries(&self, entries: Map<String, Value>) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(&Value::Object(entries))?;

        fs::write(&self.path, json)
            .map_err(|e| AuthError::TokenStorage(format!("Failed to save token: {}", e)))?;

        // Owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.path)
                .map_err(|e| {
                    AuthError::TokenStorage(format!("Failed to get file permissions: {}", e))
                })?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(|e| {
                AuthError::TokenStorage(format!("Failed to set file permissions: {}", e))
            })?;
        }

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<SessionToken>, AuthError> {
        let entries = self.read_entries()?;

        Ok(entries
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(SessionToken::new))
    }

    fn set(&self, token: &SessionToken) -> Result<(), AuthError> {
        let mut entries = self.read_entries()?;
        entries.insert(
            TOKEN_KEY.to_string(),
            Value::String(token.as_str().to_string()),
        );
        self.write_entries(entries)?;
        tracing::debug!(path = %self.path.display(), "Session token saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut entries = self.read_entries()?;
        entries.remove(TOKEN_KEY);

        if entries.is_empty() {
            fs::remove_file(&self.path)
                .map_err(|e| AuthError::TokenStorage(format!("Failed to delete token: {}", e)))?;
        } else {
            self.write_entries(entries)?;
        }

        tracing::debug!(path = %self.path.display(), "Session token cleared");
        Ok(())
    }
}

/// In-process token store
///
/// Can be flipped into an unavailable state where every call fails, which is
/// how tests exercise storage outages.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<SessionToken>>,
    unavailable: AtomicBool,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), AuthError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::TokenStorage(
                "Storage is unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> AuthError {
    AuthError::TokenStorage("Token lock poisoned".to_string())
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<SessionToken>, AuthError> {
        self.check_available()?;
        let token = self.token.read().map_err(poisoned)?;
        Ok(token.clone().filter(|t| !t.is_empty()))
    }

    fn set(&self, token: &SessionToken) -> Result<(), AuthError> {
        self.check_available()?;
        *self.token.write().map_err(poisoned)? = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.check_available()?;
        *self.token.write().map_err(poisoned)? = None;
        Ok(())
    }
}
