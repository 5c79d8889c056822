// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! JSON helpers over a [`KeyValueStore`].
//!
//! Failures never propagate: saves report `false`, loads fall back to the
//! caller's default, and both log a diagnostic.

use anas2_core::storage::{KeyValueStore, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Stores `value` as JSON under `key`. Returns `false` if encoding or the write failed.
pub fn save_to_storage<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> bool {
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|json| store.set(key, &json));

    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to save '{}' to storage: {}", key, e);
            false
        }
    }
}

/// Loads and decodes the JSON value stored under `key`.
///
/// Returns `default` when the key is missing, the store fails, or the stored
/// value does not decode as `T`.
pub fn load_from_storage<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return default,
        Err(e) => {
            log::error!("Failed to read '{}' from storage: {}", key, e);
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::error!("Stored value for '{}' is malformed: {}", key, e);
            default
        }
    }
}

/// Removes `key` from the store, logging any failure.
pub fn remove_from_storage(store: &dyn KeyValueStore, key: &str) {
    if let Err(e) = store.remove(key) {
        log::error!("Failed to remove '{}' from storage: {}", key, e);
    }
}

/// Removes every entry from the store, logging any failure.
pub fn clear_storage(store: &dyn KeyValueStore) {
    if let Err(e) = store.clear() {
        log::error!("Failed to clear storage: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anas2_core::storage::StorageResult;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct MapStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> StorageResult<()> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }

        fn clear(&self) -> StorageResult<()> {
            self.entries.lock().unwrap().clear();
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Backend("unavailable".to_string()))
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            Err(StorageError::QuotaExceeded {
                requested: key.len() + value.len(),
                available: 0,
            })
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Backend("unavailable".to_string()))
        }

        fn clear(&self) -> StorageResult<()> {
            Err(StorageError::Backend("unavailable".to_string()))
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = MapStore::default();
        assert!(save_to_storage(&store, "k", &json!({ "a": 1 })));

        let loaded: serde_json::Value = load_from_storage(&store, "k", serde_json::Value::Null);
        assert_eq!(loaded, json!({ "a": 1 }));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let store = MapStore::default();
        assert_eq!(load_from_storage(&store, "missing", 42), 42);
    }

    #[test]
    fn test_load_malformed_returns_default() {
        let store = MapStore::default();
        store.set("broken", "{not json").unwrap();
        assert_eq!(load_from_storage(&store, "broken", 7u32), 7);

        // Valid JSON of the wrong shape falls back as well.
        store.set("wrong", "\"text\"").unwrap();
        assert_eq!(load_from_storage(&store, "wrong", 7u32), 7);
    }

    #[test]
    fn test_failures_are_reported_not_propagated() {
        let store = FailingStore;
        assert!(!save_to_storage(&store, "k", &json!([1, 2, 3])));
        assert_eq!(load_from_storage(&store, "k", "fallback".to_string()), "fallback");
        remove_from_storage(&store, "k");
        clear_storage(&store);
    }

    #[test]
    fn test_remove_and_clear() {
        let store = MapStore::default();
        save_to_storage(&store, "a", &1);
        save_to_storage(&store, "b", &2);

        remove_from_storage(&store, "a");
        assert_eq!(load_from_storage(&store, "a", 0), 0);
        assert_eq!(load_from_storage(&store, "b", 0), 2);

        clear_storage(&store);
        assert_eq!(load_from_storage(&store, "b", 0), 0);
    }
}
