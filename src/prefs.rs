//! Stored locale preference.
//!
//! The viewer persists exactly one piece of state between page loads: the
//! last resolved language, under the single key `language`. The default
//! store is a small file; tests substitute an in-memory store through the
//! [`LocalePreferences`] trait.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read/write access to the single persisted `language` key.
pub trait LocalePreferences {
    /// The previously stored language code, if any.
    ///
    /// Returns `None` when nothing was stored yet or the stored value is
    /// empty. No validation happens here; the resolver coerces bad values.
    fn load(&self) -> Option<String>;

    /// Persist a language code, replacing any previous value.
    fn store(&self, code: &str) -> io::Result<()>;
}

/// File-backed preference store.
///
/// The file holds the bare language code and nothing else, mirroring a
/// single key-value entry.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocalePreferences for FilePreferences {
    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let code = raw.trim();
        if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        }
    }

    fn store(&self, code: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, code)
    }
}

/// In-memory preference store for tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    value: std::sync::Mutex<Option<String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the stored value, as if a previous page load had run.
    pub fn with_value(code: &str) -> Self {
        Self {
            value: std::sync::Mutex::new(Some(code.to_string())),
        }
    }
}

impl LocalePreferences for MemoryPreferences {
    fn load(&self) -> Option<String> {
        self.value
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
            .filter(|code| !code.is_empty())
    }

    fn store(&self, code: &str) -> io::Result<()> {
        if let Ok(mut guard) = self.value.lock() {
            *guard = Some(code.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== FilePreferences Tests ====================

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().expect("temp dir");
        let prefs = FilePreferences::new(dir.path().join("language"));
        assert_eq!(prefs.load(), None);
    }

    #[test]
    fn test_store_then_load_roundtrip() {
        let dir = TempDir::new().expect("temp dir");
        let prefs = FilePreferences::new(dir.path().join("language"));

        prefs.store("fr").expect("store");
        assert_eq!(prefs.load(), Some("fr".to_string()));
    }

    #[test]
    fn test_store_replaces_previous_value() {
        let dir = TempDir::new().expect("temp dir");
        let prefs = FilePreferences::new(dir.path().join("language"));

        prefs.store("fr").expect("store");
        prefs.store("en").expect("store");
        assert_eq!(prefs.load(), Some("en".to_string()));
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let dir = TempDir::new().expect("temp dir");
        let prefs = FilePreferences::new(dir.path().join("nested/dir/language"));

        prefs.store("en").expect("store");
        assert_eq!(prefs.load(), Some("en".to_string()));
    }

    #[test]
    fn test_load_trims_whitespace() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("language");
        std::fs::write(&path, "fr\n").expect("write");

        let prefs = FilePreferences::new(path);
        assert_eq!(prefs.load(), Some("fr".to_string()));
    }

    #[test]
    fn test_load_empty_file_is_none() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("language");
        std::fs::write(&path, "  \n").expect("write");

        let prefs = FilePreferences::new(path);
        assert_eq!(prefs.load(), None);
    }

    // ==================== MemoryPreferences Tests ====================

    #[test]
    fn test_memory_store_roundtrip() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.load(), None);

        prefs.store("fr").expect("store");
        assert_eq!(prefs.load(), Some("fr".to_string()));
    }

    #[test]
    fn test_memory_with_value() {
        let prefs = MemoryPreferences::with_value("en");
        assert_eq!(prefs.load(), Some("en".to_string()));
    }
}
