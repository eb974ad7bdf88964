//! Browser LocalStorage backend

use web_sys::Storage;

use super::{ScoreStore, StoreError};

/// High score store on `window.localStorage`
///
/// Values are stored as decimal strings, so scores written by older builds
/// of the page still load.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - high score will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<u32> {
        let raw = self.storage.as_ref()?.get_item(key).ok()??;
        // Tolerate "12.0" style values
        raw.trim()
            .parse::<u32>()
            .ok()
            .or_else(|| raw.trim().parse::<f64>().ok().map(|v| v.max(0.0).floor() as u32))
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, &value.to_string())
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
