//! UI preference persistence over a key-value backend.
//!
//! # Design
//! - Values are JSON-encoded so a stored string round-trips with its quotes.
//! - Reads never fail: missing or malformed entries load as `None`.
//! - The backend is a trait so the browser store and tests share one code path.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::BTreeMap;
use thiserror::Error;

/// Settings page tab selection.
pub const SETTINGS_TAB_KEY: &str = "settingsTabPref";
/// Add-movie page tab selection.
pub const ADD_MOVIE_TAB_KEY: &str = "addMovieTabPref";
/// Search source chosen on the add-movie page.
pub const SELECTED_SOURCE_KEY: &str = "selectedSource";

/// Failure while writing a preference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefError {
    /// The value could not be encoded.
    #[error("preference could not be encoded: {0}")]
    Encode(String),
    /// The backend rejected the write.
    #[error("preference storage failed: {0}")]
    Storage(String),
}

/// Raw string storage.
pub trait PreferenceStore {
    /// Read the raw value under `key`.
    fn read(&self, key: &str) -> Option<String>;
    /// Replace the raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefError::Storage`] when the backend refuses the write.
    fn write(&self, key: &str, raw: &str) -> Result<(), PrefError>;
}

/// Load and decode the value under `key`.
#[must_use]
pub fn load<T: DeserializeOwned>(store: &impl PreferenceStore, key: &str) -> Option<T> {
    let raw = store.read(key)?;
    serde_json::from_str(&raw).ok()
}

/// Encode and store `value` under `key`; the last write wins.
///
/// # Errors
///
/// Returns [`PrefError`] when encoding or the backend write fails.
pub fn persist<T: Serialize>(
    store: &impl PreferenceStore,
    key: &str,
    value: &T,
) -> Result<(), PrefError> {
    let raw = serde_json::to_string(value).map_err(|err| PrefError::Encode(err.to_string()))?;
    store.write(key, &raw)
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    entries: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryPrefs {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), PrefError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip_as_json() -> Result<(), PrefError> {
        let store = MemoryPrefs::default();
        persist(&store, SETTINGS_TAB_KEY, &"Search Sources")?;
        assert_eq!(
            store.read(SETTINGS_TAB_KEY).as_deref(),
            Some("\"Search Sources\"")
        );
        assert_eq!(
            load::<String>(&store, SETTINGS_TAB_KEY).as_deref(),
            Some("Search Sources")
        );
        Ok(())
    }

    #[test]
    fn last_write_wins() -> Result<(), PrefError> {
        let store = MemoryPrefs::default();
        persist(&store, SELECTED_SOURCE_KEY, &1_i64)?;
        persist(&store, SELECTED_SOURCE_KEY, &4_i64)?;
        assert_eq!(load::<i64>(&store, SELECTED_SOURCE_KEY), Some(4));
        Ok(())
    }

    #[test]
    fn malformed_or_missing_values_load_as_none() -> Result<(), PrefError> {
        let store = MemoryPrefs::default();
        assert_eq!(load::<String>(&store, ADD_MOVIE_TAB_KEY), None);
        store.write(ADD_MOVIE_TAB_KEY, "Search")?;
        assert_eq!(load::<String>(&store, ADD_MOVIE_TAB_KEY), None);
        Ok(())
    }
}
