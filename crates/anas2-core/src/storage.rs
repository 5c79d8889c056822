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

//! The key-value persistence contract.
//!
//! Values are opaque strings; callers that store structured data encode it as
//! JSON themselves (see `anas2_telemetry::storage`).

use std::fmt::Debug;

/// A specialized `Result` type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// An error that can occur while accessing a [`KeyValueStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Writing the value would exceed the store's capacity.
    #[error("storage quota exceeded: {requested} bytes requested, {available} bytes available")]
    QuotaExceeded {
        /// Bytes the store would hold after the write.
        requested: usize,
        /// The store's total capacity in bytes.
        available: usize,
    },
    /// A value could not be encoded to or decoded from JSON.
    #[error("failed to serialize stored value: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The backing file could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Any other backend failure, such as a poisoned lock.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A persistent string-to-string store.
pub trait KeyValueStore: Send + Sync + Debug {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes the value stored under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Removes every stored value.
    fn clear(&self) -> StorageResult<()>;
}
