use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage key for the last-entered name, kept from the original page so the
/// persisted file stays recognizable.
pub const LAST_NAME_KEY: &str = "crosseven_last_name";

const STORE_FILE: &str = "last_name.json";

/// Best-effort persistence for the last-entered name.
///
/// Every operation swallows its errors after a debug trace: a missing or
/// broken store only costs the pre-filled prompt, it never fails a run.
#[derive(Debug, Clone)]
pub struct NameStore {
    path: PathBuf,
}

impl NameStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(STORE_FILE),
        }
    }

    /// Saves the raw name exactly as entered, no normalization.
    pub fn save(&self, name: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                debug!("could not create store directory: {}", e);
                return;
            }
        }

        let payload = json!({ LAST_NAME_KEY: name });
        if let Err(e) = fs::write(&self.path, payload.to_string()) {
            debug!("could not save last name: {}", e);
        }
    }

    /// Loads the previously saved name, if any.
    pub fn load(&self) -> Option<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("could not read last name: {}", e);
                return None;
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                debug!("store file is not valid JSON: {}", e);
                return None;
            }
        };

        value.get(LAST_NAME_KEY)?.as_str().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_round_trips_exactly() {
        let dir = tempdir().unwrap();
        let store = NameStore::new(dir.path());

        store.save("  John Doe  ");
        assert_eq!(store.load().as_deref(), Some("  John Doe  "));
    }

    #[test]
    fn load_without_a_saved_name_returns_none() {
        let dir = tempdir().unwrap();
        let store = NameStore::new(dir.path());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn a_corrupt_store_file_is_treated_as_empty() {
        let dir = tempdir().unwrap();
        let store = NameStore::new(dir.path());

        fs::write(dir.path().join(STORE_FILE), "not json at all").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_creates_the_directory_when_missing() {
        let dir = tempdir().unwrap();
        let store = NameStore::new(&dir.path().join("nested"));

        store.save("Jane");
        assert_eq!(store.load().as_deref(), Some("Jane"));
    }

    #[test]
    fn the_namespaced_key_appears_in_the_file() {
        let dir = tempdir().unwrap();
        let store = NameStore::new(dir.path());

        store.save("Jane");
        let raw = fs::read_to_string(dir.path().join(STORE_FILE)).unwrap();
        assert!(raw.contains(LAST_NAME_KEY));
    }
}
