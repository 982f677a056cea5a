//! File-backed location.
//!
//! The fragment is stored as the whole contents of a single file, so a
//! query survives between invocations of the shell. Another process (or a
//! user with an editor) rewriting the file counts as an external navigation.

use crate::navigation::Location;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Location persisted in a file.
#[derive(Debug)]
pub struct FileLocation {
    path: PathBuf,
    /// Contents as of our last read or write.
    last_seen: String,
}

impl FileLocation {
    /// Bind to `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let last_seen = read_fragment(&path);
        Self { path, last_seen }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// File contents with surrounding whitespace removed; empty if missing.
fn read_fragment(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents.trim().to_string(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            warn!(path = ?path, error = %e, "Failed to read location file");
            String::new()
        }
    }
}

impl Location for FileLocation {
    fn read(&self) -> String {
        read_fragment(&self.path)
    }

    fn write(&mut self, text: &str) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!(path = ?parent, error = %e, "Failed to create location directory");
                }
            }
        }

        // `last_seen` tracks the file's contents, not what we tried to write
        match std::fs::write(&self.path, text) {
            Ok(()) => {
                debug!(path = ?self.path, bytes = text.len(), "Location written");
                self.last_seen = text.to_string();
            }
            Err(e) => warn!(path = ?self.path, error = %e, "Failed to write location file"),
        }
    }

    fn take_change(&mut self) -> Option<String> {
        let current = read_fragment(&self.path);
        if current == self.last_seen {
            return None;
        }
        self.last_seen = current.clone();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("photon_test_location").join(name);
        let _ = fs::remove_dir_all(&dir);
        dir.join("fragment")
    }

    #[test]
    fn missing_file_reads_empty() {
        let location = FileLocation::new(temp_path("missing"));
        assert_eq!(location.read(), "");
    }

    #[test]
    fn write_creates_directory_and_file() {
        let path = temp_path("write");
        let mut location = FileLocation::new(&path);
        location.write("abc");
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc");
        assert_eq!(location.read(), "abc");
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn own_writes_are_not_changes() {
        let path = temp_path("own");
        let mut location = FileLocation::new(&path);
        location.write("abc");
        assert_eq!(location.take_change(), None);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn failed_write_is_not_a_change() {
        let path = temp_path("unwritable");
        fs::create_dir_all(&path).unwrap();
        let mut location = FileLocation::new(&path);

        location.write("abc");
        assert_eq!(location.take_change(), None);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn store_keeps_edits_when_location_cannot_be_written() {
        use crate::state::{Action, Store};

        let path = temp_path("unwritable_store");
        fs::create_dir_all(&path).unwrap();
        let mut store = Store::new(FileLocation::new(&path));

        for field in ["a", "b"] {
            assert!(!store.sync_navigation());
            store.dispatch(Action::AddField {
                field: field.to_string(),
                pos: None,
            });
        }

        assert_eq!(store.state().fields, vec!["a".to_string(), "b".to_string()]);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn external_edit_is_reported_once() {
        let path = temp_path("external");
        let mut location = FileLocation::new(&path);
        location.write("abc");

        fs::write(&path, "xyz\n").unwrap();
        assert_eq!(location.take_change(), Some("xyz".to_string()));
        assert_eq!(location.take_change(), None);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
