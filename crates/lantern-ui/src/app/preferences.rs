//! Browser-backed preference storage and environment probes.

use crate::core::prefs::PreferenceStore;
use gloo::console;
use gloo::utils::window;
use web_sys::Storage;

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `localStorage` holding raw string values.
///
/// When storage is unavailable (privacy mode, sandboxed frames) reads return
/// `None` and writes are dropped with a console error.
pub(crate) struct LocalPreferences {
    storage: Option<Storage>,
}

impl LocalPreferences {
    pub(crate) fn open() -> Self {
        let storage = window().local_storage().ok().flatten();
        if storage.is_none() {
            console::error!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log_storage_error("set", key, &format!("{err:?}"));
        }
    }
}

pub(crate) fn prefers_dark() -> bool {
    window()
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
