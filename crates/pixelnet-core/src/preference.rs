//! Persisted color-mode preference.

use crate::constants::MODE_STORAGE_KEY;
use crate::palette::ColorMode;
use fnv::FnvHashMap;

/// Minimal string key/value storage, e.g. `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used on the host and when browser storage is unavailable.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Read the stored mode. A missing or unrecognized value resets to dark mode
/// and persists that default.
pub fn load_mode<S: KeyValueStore + ?Sized>(store: &mut S) -> ColorMode {
    let stored = store.get(MODE_STORAGE_KEY);
    match stored.as_deref().and_then(ColorMode::from_class) {
        Some(mode) => mode,
        None => {
            if let Some(bad) = &stored {
                log::warn!("[mode] unrecognized stored mode {:?}; using dark", bad);
            }
            let mode = ColorMode::default();
            store.set(MODE_STORAGE_KEY, mode.as_class());
            mode
        }
    }
}

/// Flip `current`, persist the result and return it.
pub fn toggle_mode<S: KeyValueStore + ?Sized>(store: &mut S, current: ColorMode) -> ColorMode {
    let next = current.toggle();
    store.set(MODE_STORAGE_KEY, next.as_class());
    next
}
