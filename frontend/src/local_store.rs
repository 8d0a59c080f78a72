//! Durable key/value storage seam
//!
//! The session domain persists the bearer token and the serialized user
//! record between visits. Storage is injected as a trait so tests can run
//! against an in-memory map while the browser build uses localStorage.

/// Synchronous string key/value storage.
///
/// The two session keys have no cross-key consistency requirement beyond
/// "token and user record travel together", so plain get/insert/remove
/// is all the session domain needs.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn insert(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser localStorage implementation.
///
/// Storage access can fail (private browsing, disabled storage); every
/// failure degrades to "key absent" rather than surfacing an error,
/// which leaves the session logged out.
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn insert(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                zoon::eprintln!("localStorage write failed for key {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for tests and native builds.
#[cfg(any(test, not(target_arch = "wasm32")))]
#[derive(Default, Clone)]
pub struct MemoryStore {
    entries: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>,
}

#[cfg(any(test, not(target_arch = "wasm32")))]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
