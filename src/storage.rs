//! Durable key/value backends for user preferences.
//!
//! Both backends implement [`eframe::Storage`], so the theme store can be
//! handed either a file on disk or an in-memory map. Writes are best-effort:
//! a failed flush is logged and otherwise ignored.

use anyhow::Context;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

const PREFERENCES_FILE: &str = "preferences.json";

/// Preferences kept as a JSON object in a single file.
#[derive(Debug)]
pub struct FileStorage {
    /// Backing file, `None` when no config directory could be determined
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
    dirty: bool,
}

impl FileStorage {
    /// Opens the preference file at `path`.
    ///
    /// A missing or unreadable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_values(&path) {
            Ok(values) => values,
            Err(err) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), "ignoring unreadable preferences: {err:#}");
                }
                BTreeMap::new()
            }
        };

        Self {
            path: Some(path),
            values,
            dirty: false,
        }
    }

    /// Opens `preferences.json` in eframe's storage directory for `app_id`,
    /// next to the window state eframe persists itself.
    pub fn in_storage_dir(app_id: &str) -> Self {
        match eframe::storage_dir(app_id) {
            Some(dir) => Self::open(dir.join(PREFERENCES_FILE)),
            None => {
                tracing::warn!("no storage directory available, preferences will not persist");
                Self {
                    path: None,
                    values: BTreeMap::new(),
                    dirty: false,
                }
            }
        }
    }

    /// Location of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn write(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

fn read_values(path: &Path) -> anyhow::Result<BTreeMap<String, String>> {
    let text = fs::read_to_string(path)?;
    let values = serde_json::from_str(&text)?;
    Ok(values)
}

impl eframe::Storage for FileStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        if self.values.get(key) != Some(&value) {
            self.values.insert(key.to_string(), value);
            self.dirty = true;
        }
    }

    fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        let Some(path) = self.path.clone() else {
            return;
        };
        match self.write(&path) {
            Ok(()) => self.dirty = false,
            Err(err) => tracing::warn!("failed to save preferences: {err:#}"),
        }
    }
}

/// In-memory preferences.
///
/// Clones share the same map, which lets a test hand one clone to a store,
/// drop the store and open a second one over the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.values.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;

    #[test]
    fn test_preferences_live_in_eframe_storage_dir() {
        let storage = FileStorage::in_storage_dir("themeapp-storage-test");
        let expected = eframe::storage_dir("themeapp-storage-test").map(|dir| dir.join(PREFERENCES_FILE));
        assert_eq!(storage.path(), expected.as_deref());
    }

    #[test]
    fn test_file_storage_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut storage = FileStorage::open(&path);
        assert_eq!(storage.get_string("selectedTheme"), None);
        storage.set_string("selectedTheme", "theme3".to_string());
        storage.flush();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get_string("selectedTheme").as_deref(), Some("theme3"));
        assert_eq!(reopened.path(), Some(path.as_path()));
    }

    #[test]
    fn test_file_storage_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get_string("selectedTheme"), None);
    }

    #[test]
    fn test_file_storage_flush_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("prefs.json");
        fs::create_dir(&path).unwrap();

        let mut storage = FileStorage::open(&path);
        storage.set_string("selectedTheme", "theme2".to_string());
        storage.flush();
        assert_eq!(storage.get_string("selectedTheme").as_deref(), Some("theme2"));
    }

    #[test]
    fn test_memory_storage_clones_share_values() {
        let storage = MemoryStorage::new();
        let mut handle = storage.clone();
        handle.set_string("k", "v".to_string());
        assert_eq!(storage.get("k").as_deref(), Some("v"));

        let seeded = MemoryStorage::with_entry("selectedTheme", "theme2");
        assert_eq!(seeded.get_string("selectedTheme").as_deref(), Some("theme2"));
    }
}
