//! Session-scoped key/value storage and the local rocket reader.
//!
//! Rockets created by the user live in session storage under
//! [`USER_ROCKETS_KEY`] as a JSON array. Something outside this crate writes
//! that key; here it is only read, and whatever is found is never allowed to
//! fail the caller.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::RocketDetail;

/// Key holding the user's locally created rockets.
pub const USER_ROCKETS_KEY: &str = "userRockets";

/// Read side of a per-session key/value store.
pub trait SessionStorage: Send + Sync {
    /// Return the raw string stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }
}

/// In-process session storage. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        self.items.write().insert(key.into(), value.into());
    }

    pub fn remove_item(&self, key: &str) -> Option<String> {
        self.items.write().remove(key)
    }

    pub fn clear(&self) {
        self.items.write().clear();
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }
}

/// Read the locally created rockets stored under `key`.
///
/// A missing key, an empty value, invalid JSON, or anything other than an
/// array all read as no rockets. Array entries without a string `id` are
/// skipped; any other field of the wrong type reads as its default.
pub fn read_local_rockets<S: SessionStorage + ?Sized>(storage: &S, key: &str) -> Vec<RocketDetail> {
    match storage.get_item(key) {
        Some(raw) => parse_local_rockets(&raw, key),
        None => Vec::new(),
    }
}

fn parse_local_rockets(raw: &str, key: &str) -> Vec<RocketDetail> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Ignoring malformed session storage value under {}: {}", key, e);
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(rocket) => Some(rocket),
            Err(e) => {
                tracing::warn!("Skipping local rocket #{} under {}: {}", index, key, e);
                None
            }
        })
        .collect()
}
