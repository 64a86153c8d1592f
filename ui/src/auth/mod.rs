// Session token management
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Where the session token lives between page loads.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);

    /// A present, non-empty token counts as a session.
    fn has_session(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }
}

/// Token kept in browser local storage under a fixed key.
#[derive(Debug, Clone)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

// No window exists during server rendering, so storage is simply absent there.
#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(&self.key).ok().flatten())
    }

    fn store(&self, token: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(&self.key, token).is_err() {
                tracing::warn!(key = %self.key, "failed to persist session token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(&self.key).is_err() {
                tracing::warn!(key = %self.key, "failed to clear session token");
            }
        }
    }
}

/// Token held in memory, for use off-browser.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.store(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub is_authenticated: bool,
}

/// Reactive mirror of the stored session plus the store itself.
#[derive(Clone)]
pub struct Auth {
    pub state: RwSignal<AuthContext>,
    pub tokens: Rc<dyn TokenStore>,
}

pub fn provide_auth_context(tokens: Rc<dyn TokenStore>) -> Auth {
    let auth = Auth {
        state: create_rw_signal(AuthContext::default()),
        tokens,
    };
    provide_context(auth.clone());
    auth
}

pub fn use_auth() -> Auth {
    expect_context::<Auth>()
}

/// Restores the reactive state from storage.
pub fn init_auth(auth: &Auth) {
    auth.state.set(AuthContext {
        is_authenticated: auth.tokens.has_session(),
    });
}

pub fn sign_out(auth: &Auth) {
    auth.tokens.clear();
    auth.state.set(AuthContext::default());
}
