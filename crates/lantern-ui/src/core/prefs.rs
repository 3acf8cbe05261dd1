//! Key/value preference capability injected into the controller.

use std::collections::HashMap;

/// Minimal string store for persisted preferences.
///
/// The browser build backs this with `localStorage`; tests use
/// [`MemoryPreferences`].
pub trait PreferenceStore {
    /// Read a value, `None` when unset.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value. Failures are the implementation's concern.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
