//! The session store: single source of truth for authentication state,
//! bridging in-memory state and the durable storage it is mirrored into.

use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::{debug, warn};

use crate::models::SessionState;
use crate::storage::{Storage, StorageError};

/// Storage key holding the opaque credential string.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// Owns the in-memory [`SessionState`] and mirrors it into an injected
/// storage backend. Constructed once at boot and shared via `Arc`; every
/// mutation happens through the methods below.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Create a store with empty state over the given backend. Call
    /// [`initialize`](Self::initialize) afterwards to restore a persisted
    /// session.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        SessionStore {
            storage,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Re-read the persisted session and, if one is present and well-formed,
    /// adopt it.
    ///
    /// A missing or malformed persisted session leaves the current state
    /// untouched; it never clears it. Idempotent for unchanged storage.
    /// Only a failure of the storage medium itself is an error.
    pub fn initialize(&self) -> Result<(), StorageError> {
        let token = self.storage.get(TOKEN_KEY)?;
        let raw_user = self.storage.get(USER_KEY)?;

        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            debug!("No persisted session found.");
            return Ok(());
        };
        if token.is_empty() {
            warn!("Persisted token is empty, ignoring persisted session.");
            return Ok(());
        }
        let user: Value = match serde_json::from_str(&raw_user) {
            Ok(user) => user,
            Err(e) => {
                warn!("Persisted user profile is not valid JSON, ignoring persisted session: {}", e);
                return Ok(());
            }
        };

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.set(user, token);
        debug!("Restored persisted session.");
        Ok(())
    }

    /// Record a successful credential exchange: mirror the profile and token
    /// into storage, then adopt them in memory.
    ///
    /// The token is treated as an opaque black box; the caller is expected
    /// to pass a non-empty string it obtained from an actual authentication
    /// exchange. Nothing here validates it.
    pub fn login(&self, user: Value, token: String) -> Result<(), StorageError> {
        let raw_user = serde_json::to_string(&user)?;
        // Storage first: if the mirror fails, in-memory state stays as it was.
        self.storage.set(TOKEN_KEY, &token)?;
        self.storage.set(USER_KEY, &raw_user)?;

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.set(user, token);
        debug!("Session established.");
        Ok(())
    }

    /// Clear the session in memory and in storage. Idempotent.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.clear();
        debug!("Session cleared.");
        Ok(())
    }

    /// The current user profile, if any.
    pub fn current_user(&self) -> Option<Value> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.user.clone()
    }

    /// Whether a user is currently considered logged in.
    pub fn is_authenticated(&self) -> bool {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.authenticated
    }

    /// The current opaque credential, if any.
    pub fn token(&self) -> Option<String> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_login_sets_state_and_mirrors_storage() {
        let store = store();
        store
            .login(json!({"id": 1, "name": "Alice"}), "abc123".to_string())
            .unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.current_user(), Some(json!({"id": 1, "name": "Alice"})));
        assert_eq!(store.token().as_deref(), Some("abc123"));

        let storage = &store.storage;
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("abc123"));
        assert_eq!(
            storage.get(USER_KEY).unwrap().as_deref(),
            Some(r#"{"id":1,"name":"Alice"}"#)
        );
    }

    #[test]
    fn test_logout_clears_state_and_storage() {
        let store = store();
        store.login(json!({"id": 1}), "abc123".to_string()).unwrap();
        store.logout().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(store.current_user(), None);
        assert_eq!(store.token(), None);
        assert_eq!(store.storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.storage.get(USER_KEY).unwrap(), None);

        // A second logout is a no-op.
        store.logout().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_initialize_restores_persisted_session() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "abc123").unwrap();
        storage.set(USER_KEY, r#"{"id":1,"name":"Alice"}"#).unwrap();

        let store = SessionStore::new(storage);
        assert!(!store.is_authenticated());

        store.initialize().unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.current_user(), Some(json!({"id": 1, "name": "Alice"})));
        assert_eq!(store.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "abc123").unwrap();
        storage.set(USER_KEY, r#"{"id":1}"#).unwrap();

        let store = SessionStore::new(storage);
        store.initialize().unwrap();
        let user = store.current_user();
        let token = store.token();

        store.initialize().unwrap();
        assert_eq!(store.current_user(), user);
        assert_eq!(store.token(), token);
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_initialize_with_empty_storage_leaves_state_alone() {
        let store = store();
        store.initialize().unwrap();
        assert!(!store.is_authenticated());

        // An established in-memory session is not torn down by an
        // initialize that finds nothing persisted.
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store.login(json!({"id": 2}), "tok".to_string()).unwrap();
        storage.remove(TOKEN_KEY).unwrap();
        storage.remove(USER_KEY).unwrap();

        store.initialize().unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.current_user(), Some(json!({"id": 2})));
    }

    #[test]
    fn test_partial_persisted_session_is_ignored() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "abc123").unwrap();

        let store = SessionStore::new(storage);
        store.initialize().unwrap();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_corrupt_persisted_user_is_treated_as_absent() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "abc123").unwrap();
        storage.set(USER_KEY, "{not valid json").unwrap();

        let store = SessionStore::new(storage);
        store.initialize().unwrap();
        assert!(!store.is_authenticated());
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn test_empty_persisted_token_is_treated_as_absent() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "").unwrap();
        storage.set(USER_KEY, r#"{"id":1}"#).unwrap();

        let store = SessionStore::new(storage);
        store.initialize().unwrap();
        assert!(!store.is_authenticated());
    }
}
