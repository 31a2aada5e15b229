//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists each key as its own file so the session survives an
//! app restart on desktop and mobile.
//!
//! ```text
//! <base_dir>/
//! ├── token
//! ├── user
//! └── restaurant
//! ```
//!
//! Use [`FileStore::in_data_dir`] for the platform data directory
//! (`~/.local/share/<app>/` on Linux, `~/Library/Application Support/<app>/`
//! on macOS, `%APPDATA%\<app>\` on Windows).

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at `<data_dir>/<app>`, falling back to `./<app>` when the
    /// platform has no data directory.
    pub fn in_data_dir(app: &str) -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app);
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys become file names; anything outside a conservative set is escaped.
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            warn!("Failed to create store directory {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            warn!("Failed to persist key {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove key {}: {}", key, e),
        }
    }
}
