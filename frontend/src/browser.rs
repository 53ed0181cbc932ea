use shared::{Error, ErrorCode, KeyValueStore, Prompt};
use tracing::error;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

fn report(code: ErrorCode, message: String, cause: JsValue) {
    let error = Error::with_details(code, message, format!("{cause:?}"));
    error!("{}", error);
}

/// `window.localStorage`. Reads come back empty and writes are dropped
/// when the browser refuses storage access.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = match window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            Some(Err(cause)) => {
                report(ErrorCode::StorageFailure, "localStorage access denied".into(), cause);
                None
            }
            _ => {
                error!("{}", Error::new(ErrorCode::StorageFailure, "localStorage is not available"));
                None
            }
        };
        Self { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(cause) => {
                report(ErrorCode::StorageFailure, format!("Failed to read {key}"), cause);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(cause) = storage.set_item(key, value) {
                report(ErrorCode::StorageFailure, format!("Failed to write {key}"), cause);
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            if let Err(cause) = storage.remove_item(key) {
                report(ErrorCode::StorageFailure, format!("Failed to remove {key}"), cause);
            }
        }
    }
}

/// Blocking `window.confirm` / `window.alert` dialogs.
pub struct WindowPrompt;

impl Prompt for WindowPrompt {
    fn confirm(&self, message: &str) -> bool {
        let Some(w) = window() else {
            return false;
        };
        w.confirm_with_message(message).unwrap_or_else(|cause| {
            error!("window.confirm failed: {:?}", cause);
            false
        })
    }

    fn notify(&self, message: &str) {
        let Some(w) = window() else {
            return;
        };
        if let Err(cause) = w.alert_with_message(message) {
            error!(message, "window.alert failed: {:?}", cause);
        }
    }
}
