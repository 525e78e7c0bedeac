use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key-value storage handed to anything that needs to persist state.
/// Browser storage errors carry no useful recovery path here, so the
/// implementations swallow them and writes are best-effort.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// localStorage-backed store. Survives full reloads.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::raw() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::raw() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store. A fresh instance per page load is what makes the
/// session-unlock flag volatile; clones share the same map, so it doubles
/// as the storage fake in tests.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_and_shares_between_clones() {
        let store = MemoryStorage::default();
        let alias = store.clone();

        store.set("k", "v");
        assert_eq!(alias.get("k").as_deref(), Some("v"));

        alias.remove("k");
        assert_eq!(store.get("k"), None);
    }
}
