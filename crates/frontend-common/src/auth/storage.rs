//! `window.sessionStorage` backend for the session store

use todo_core::{Error, Result, SessionStorage, SessionStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Session storage of the current browser tab
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

impl BrowserSessionStorage {
    fn storage(&self) -> Result<Storage> {
        web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .ok_or_else(|| Error::storage("sessionStorage is not available"))
    }
}

fn js_error(operation: &str, err: JsValue) -> Error {
    Error::storage(format!("{operation} failed: {err:?}"))
}

impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| js_error("getItem", e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| js_error("setItem", e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| js_error("removeItem", e))
    }
}

/// Session store over the tab's session storage
pub fn browser_store() -> SessionStore<BrowserSessionStorage> {
    SessionStore::new(BrowserSessionStorage)
}
