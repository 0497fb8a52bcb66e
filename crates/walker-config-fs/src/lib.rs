// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed [`ConfigStore`]: one `{key}.json` file per key.
//!
//! The default root is the platform config directory for Scenewalker
//! (e.g. `~/.config/scenewalker` on Linux). Writes go through a sibling
//! temporary file and a rename, so a crash never leaves a half-written config.

use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walker_app_core::config::{ConfigError, ConfigStore};

/// JSON files under a single directory.
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Opens the platform config directory, creating it if needed.
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("org", "libretro", "Scenewalker")
            .ok_or_else(|| ConfigError::Other("no home directory to hold config".into()))?;
        Self::at(dirs.config_dir())
    }

    /// Opens `base` as the config root, creating it if needed.
    pub fn at(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Config root.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }

    fn checked_path(&self, key: &str) -> Result<PathBuf, ConfigError> {
        let plain = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if plain {
            Ok(self.path_for(key))
        } else {
            Err(ConfigError::Other(format!("unusable config key `{key}`")))
        }
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match fs::read(self.checked_path(key)?) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(ConfigError::not_found(key)),
            Err(err) => Err(err.into()),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.checked_path(key)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, data)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsConfigStore::at(dir.path()).expect("store");
        assert!(matches!(store.load_raw("walker"), Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn saved_blob_lands_in_key_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsConfigStore::at(dir.path().join("nested")).expect("store");
        store.save_raw("walker", b"{\"gravity\":0.02}").expect("save");
        assert!(store.path_for("walker").ends_with("walker.json"));
        assert!(store.path_for("walker").exists());
        assert_eq!(store.load_raw("walker").expect("load"), b"{\"gravity\":0.02}");
        assert!(!store.base().join("walker.json.tmp").exists());
    }

    #[test]
    fn keys_cannot_escape_the_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsConfigStore::at(dir.path()).expect("store");
        for key in ["", "../walker", "a/b", ".hidden"] {
            assert!(matches!(store.save_raw(key, b"{}"), Err(ConfigError::Other(_))), "{key}");
            assert!(matches!(store.load_raw(key), Err(ConfigError::Other(_))), "{key}");
        }
    }
}
