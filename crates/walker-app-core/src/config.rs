// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Keyed JSON settings for scenewalker tools.
//!
//! Storage backends implement [`ConfigStore`] and only move bytes;
//! [`ConfigService`] owns the JSON encoding so every backend stores the same
//! format.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Byte-level storage for settings blobs, addressed by key (e.g. `"walker"`).
pub trait ConfigStore {
    /// Returns the blob stored under `key`, or [`ConfigError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replaces the blob stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failure while reading or writing settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing is stored under the key.
    #[error("no config stored under `{key}`")]
    NotFound {
        /// Requested key.
        key: String,
    },
    /// The backend could not read or write.
    #[error("config i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The blob is not valid JSON for the requested type.
    #[error("config is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
    /// Backend-specific failure.
    #[error("config backend error: {0}")]
    Other(String),
}

impl ConfigError {
    /// Builds a [`ConfigError::NotFound`] for `key`.
    pub fn not_found(key: &str) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }
}

/// Encodes settings as pretty-printed JSON on top of a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S: ConfigStore> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Decodes the value under `key`.
    ///
    /// A missing key or an empty blob is `Ok(None)`; malformed JSON is an
    /// error.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let bytes = match self.store.load_raw(key) {
            Ok(bytes) => bytes,
            Err(ConfigError::NotFound { .. }) => return Ok(None),
            Err(err) => return Err(err),
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Like [`ConfigService::load`], with `T::default()` standing in for a
    /// missing value.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, ConfigError> {
        Ok(self.load(key)?.unwrap_or_default())
    }

    /// Encodes `value` and stores it under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}
