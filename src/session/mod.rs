//! Session accessor: the only code that touches persisted client storage.
//!
//! The bearer token and user id live under the `token` and `user` keys. In the
//! browser that is `localStorage`; natively (SSR, tests) an in-memory map.
//! Everything else reads the session through [`Session`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Key/value persistence backing a session.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local storage used natively and in tests.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// `window.localStorage`. Storage being unavailable (private mode, no window)
/// reads as empty and drops writes.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("Failed to persist {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Snapshot of who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionInfo {
    pub token: Option<String>,
    pub user_id: Option<String>,
}

impl SessionInfo {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Shared handle to the persisted session.
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn Storage>,
}

impl Session {
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Session over in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// Session over the platform's persisted storage.
    pub fn persistent() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(Rc::new(BrowserStorage))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user_id(&self) -> Option<String> {
        self.storage.get(USER_KEY).filter(|u| !u.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn snapshot(&self) -> SessionInfo {
        SessionInfo {
            token: self.token(),
            user_id: self.user_id(),
        }
    }

    /// Store a fresh token. The user id always belongs to this login, so a
    /// login without one clears any id left from an earlier session.
    pub fn sign_in(&self, token: &str, user_id: Option<&str>) {
        self.storage.set(TOKEN_KEY, token);
        match user_id {
            Some(user_id) => self.storage.set(USER_KEY, user_id),
            None => self.storage.remove(USER_KEY),
        }
        tracing::debug!("Session started (user id known: {})", self.user_id().is_some());
    }

    pub fn sign_out(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        tracing::debug!("Session cleared");
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_is_logged_out() {
        let session = Session::in_memory();
        assert!(!session.is_logged_in());
        assert_eq!(session.snapshot(), SessionInfo::default());
    }

    #[test]
    fn sign_in_then_out() {
        let session = Session::in_memory();
        session.sign_in("abc", Some("u1"));
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.user_id().as_deref(), Some("u1"));
        assert!(session.snapshot().is_logged_in());

        session.sign_out();
        assert!(!session.is_logged_in());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn sign_in_without_user_drops_previous_user() {
        let session = Session::in_memory();
        session.sign_in("first", Some("u1"));
        session.sign_in("second", None);
        assert_eq!(session.token().as_deref(), Some("second"));
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn clones_share_storage() {
        let session = Session::in_memory();
        let other = session.clone();
        other.sign_in("abc", None);
        assert!(session.is_logged_in());
    }

    #[test]
    fn empty_token_reads_as_absent() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "");
        let session = Session::new(storage);
        assert!(!session.is_logged_in());
    }
}
