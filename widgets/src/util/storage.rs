//! `localStorage` helpers.
//!
//! Storage can be unavailable (privacy mode, sandboxed frame); reads fall
//! back to `None` and writes are dropped with a warning.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[must_use]
pub fn get(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn set(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("could not persist {key:?}");
            }
        }
        None => log::warn!("localStorage unavailable, {key:?} not persisted"),
    }
}
