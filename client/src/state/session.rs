//! Session store for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the single source of truth for "who is logged in and as
//! what". It is injected through Leptos context into pages, the route guard,
//! and the API client instead of being read as an ambient global, so each of
//! those can be exercised against an in-memory backend.
//!
//! DESIGN
//! ======
//! Fields live under the `token`, `role`, and `email` keys of tab-scoped
//! `sessionStorage`. Writes clear stale fields first and store the token
//! last; reads require both token and a known role. A half-written session is
//! therefore indistinguishable from no session.
//!
//! `SessionState` is the reactive mirror used for rendering. It starts
//! unloaded so server-rendered markup matches the first client render, and is
//! filled from the store once the browser has hydrated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::types::{LoginResponse, Role};

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";
const EMAIL_KEY: &str = "email";

/// An authenticated session: bearer token plus role and email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub email: String,
}

impl Session {
    /// Uppercased first character of the email, for the avatar bubble.
    pub fn initial(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Key/value backend for the session store.
pub trait SessionStorage: Clone + Send + Sync + 'static {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Browser `sessionStorage`. Inert outside the hydrated client.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = browser_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = browser_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// Session lifecycle over a [`SessionStorage`] backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S = BrowserSessionStorage> {
    storage: S,
}

impl SessionStore<BrowserSessionStorage> {
    pub fn browser() -> Self {
        Self { storage: BrowserSessionStorage }
    }
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Write token, role, and email as one unit.
    pub fn set_session(&self, token: &str, role: Role, email: &str) {
        self.clear_session();
        self.storage.set_item(EMAIL_KEY, email);
        self.storage.set_item(ROLE_KEY, role.as_str());
        self.storage.set_item(TOKEN_KEY, token);
    }

    /// Current session, or `None` when the token or a valid role is missing.
    pub fn get_session(&self) -> Option<Session> {
        let token = self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let role = Role::parse(&self.storage.get_item(ROLE_KEY)?)?;
        let email = self.storage.get_item(EMAIL_KEY).unwrap_or_default();
        Some(Session { token, role, email })
    }

    /// Remove every session field.
    pub fn clear_session(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(ROLE_KEY);
        self.storage.remove_item(EMAIL_KEY);
    }

    /// Store the session granted by a successful login and return it.
    pub fn establish(&self, email: &str, login: LoginResponse) -> Session {
        self.set_session(&login.access_token, login.role, email);
        Session { token: login.access_token, role: login.role, email: email.to_owned() }
    }
}

/// Reactive mirror of the store for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// `true` once browser storage has been read after hydration.
    pub loaded: bool,
}

impl SessionState {
    pub fn loaded(session: Option<Session>) -> Self {
        Self { session, loaded: true }
    }

    /// Email of the signed-in user, or empty.
    pub fn email(&self) -> String {
        self.session.as_ref().map(|s| s.email.clone()).unwrap_or_default()
    }
}
