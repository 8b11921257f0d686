use web_sys::window;

/// Ключ localStorage, под которым лежит bearer-токен
pub const TOKEN_KEY: &str = "authToken";

/// Persistent slot for the bearer token.
///
/// `None` from `load` means "logged out"; there is no other persisted state.
pub trait TokenStore: Send {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Browser `localStorage` backed token store
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        get_local_storage()?
            .get_item(TOKEN_KEY)
            .ok()?
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("Failed to persist auth token to localStorage");
                }
            }
            None => log::warn!("localStorage unavailable, auth token not persisted"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            if storage.remove_item(TOKEN_KEY).is_err() {
                log::warn!("Failed to remove auth token from localStorage");
            }
        }
    }
}

#[cfg(test)]
pub mod memory {
    use super::TokenStore;
    use std::sync::{Arc, Mutex};

    /// In-memory store; clones share the same slot so tests can inspect it
    #[derive(Debug, Clone, Default)]
    pub struct MemoryTokenStore {
        slot: Arc<Mutex<Option<String>>>,
    }

    impl MemoryTokenStore {
        pub fn with_token(token: &str) -> Self {
            let store = Self::default();
            store.save(token);
            store
        }

        pub fn current(&self) -> Option<String> {
            self.slot.lock().unwrap().clone()
        }
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.current()
        }

        fn save(&self, token: &str) {
            *self.slot.lock().unwrap() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.slot.lock().unwrap() = None;
        }
    }
}
