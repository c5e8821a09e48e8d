//! Tracking the carriers this module created.
//!
//! The list lives in a single configuration value as a JSON array of integers.
//! It is the only record of which carriers must follow host renumbering and
//! which must be removed at teardown, so reads never fail on bad data: a
//! missing or corrupted value is treated as an empty list.

use std::sync::Mutex;

use serde_json::Value as JsonValue;

use shiprate_core::CarrierId;

use crate::store::{ConfigStore, StoreError};

/// Rewrite every `old` entry to `new`, keeping order and length.
pub fn remap_ids(ids: &[CarrierId], old: CarrierId, new: CarrierId) -> Vec<CarrierId> {
    ids.iter()
        .map(|&id| if id == old { new } else { id })
        .collect()
}

/// Persisted list of carrier identifiers owned by this module.
///
/// Every read-modify-write runs under an internal lock, so concurrent
/// renumbering events on the same tracker cannot lose updates.
#[derive(Debug)]
pub struct CarrierIdTracker<S> {
    store: S,
    key: String,
    write_lock: Mutex<()>,
}

impl<S> CarrierIdTracker<S>
where
    S: ConfigStore,
{
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current list (empty when absent or unreadable).
    pub fn ids(&self) -> Result<Vec<CarrierId>, StoreError> {
        let raw = self.store.get(&self.key)?;
        Ok(decode(&self.key, raw.as_deref()))
    }

    pub fn contains(&self, id: CarrierId) -> Result<bool, StoreError> {
        Ok(self.ids()?.contains(&id))
    }

    /// Replace the persisted list wholesale.
    pub fn record(&self, ids: &[CarrierId]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;

        let previous = decode(&self.key, self.store.get(&self.key)?.as_deref());
        if !previous.is_empty() {
            tracing::warn!(
                key = %self.key,
                ?previous,
                "overwriting a non-empty carrier list"
            );
        }

        self.store.set(&self.key, encode(ids)?)?;
        tracing::info!(key = %self.key, ids = ?ids, "carrier ids recorded");
        Ok(())
    }

    /// Follow a host renumbering: entries equal to `old` become `new`.
    ///
    /// Returns the list as persisted. Applying the same remap twice is a no-op
    /// the second time.
    pub fn remap(&self, old: CarrierId, new: CarrierId) -> Result<Vec<CarrierId>, StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;

        let current = decode(&self.key, self.store.get(&self.key)?.as_deref());
        let updated = remap_ids(&current, old, new);
        self.store.set(&self.key, encode(&updated)?)?;

        if updated != current {
            tracing::info!(key = %self.key, %old, %new, "carrier id remapped");
        }
        Ok(updated)
    }

    /// Drop the persisted list, returning what it named so the caller can
    /// release those carriers.
    pub fn clear(&self) -> Result<Vec<CarrierId>, StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;

        let current = decode(&self.key, self.store.get(&self.key)?.as_deref());
        self.store.delete(&self.key)?;
        tracing::info!(key = %self.key, ids = ?current, "carrier ids cleared");
        Ok(current)
    }
}

fn encode(ids: &[CarrierId]) -> Result<String, StoreError> {
    serde_json::to_string(ids).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Decode a stored list.
///
/// Accepts integers and integer strings; other entries are skipped. An empty
/// object (`{}`) is the conventional "nothing stored yet" value. A value that
/// is not an array degrades to an empty list.
fn decode(key: &str, raw: Option<&str>) -> Vec<CarrierId> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let value: JsonValue = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(%key, error = %err, "unparseable carrier list, treating as empty");
            return Vec::new();
        }
    };

    match value {
        JsonValue::Array(items) => items
            .iter()
            .filter_map(|entry| {
                let id = entry_to_id(entry);
                if id.is_none() {
                    tracing::warn!(%key, %entry, "skipping non-integer carrier list entry");
                }
                id
            })
            .collect(),
        JsonValue::Object(map) if map.is_empty() => Vec::new(),
        JsonValue::Null => Vec::new(),
        other => {
            tracing::warn!(%key, value = %other, "carrier list is not an array, treating as empty");
            Vec::new()
        }
    }
}

fn entry_to_id(entry: &JsonValue) -> Option<CarrierId> {
    match entry {
        JsonValue::Number(n) => n.as_i64().map(CarrierId::new),
        JsonValue::String(s) => s.parse().ok(),
        _ => None,
    }
}
