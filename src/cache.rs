//! Single-slot persistence for compressed study material
//!
//! The cache holds at most one artifact: the most recent successful
//! compression output. Each successful compression overwrites it. There is
//! no expiry, versioning, or per-document keying, and no locking — the
//! deployment assumption is one writer process per cache path.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{Error, Result};

/// Store for the single cached study-material slot
///
/// Injectable so the acquisition pipeline can be tested against an
/// in-memory store instead of the filesystem.
pub trait MaterialStore: Send + Sync {
    /// Read the cached material, or `None` if the slot is absent or empty
    fn read(&self) -> Option<String>;

    /// Overwrite the slot with `material`
    ///
    /// Must only be called with non-empty successful compression output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cache`] if the slot cannot be written.
    fn write(&self, material: &str) -> Result<()>;
}

impl<T: MaterialStore + ?Sized> MaterialStore for &T {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self, material: &str) -> Result<()> {
        (**self).write(material)
    }
}

/// File-backed store: one UTF-8 text file, whole-file overwrite semantics
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MaterialStore for FileStore {
    /// Read the cached material
    ///
    /// A missing file, whitespace-only content, or a read error all report
    /// the slot as absent; read errors are logged, not surfaced.
    fn read(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let content = content.trim();
                if content.is_empty() {
                    None
                } else {
                    Some(content.to_string())
                }
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cache read failed");
                None
            }
        }
    }

    fn write(&self, material: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| Error::Cache(e.to_string()))?;
            }
        }
        std::fs::write(&self.path, material).map_err(|e| Error::Cache(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), bytes = material.len(), "cache written");
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MaterialStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.slot
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
            .filter(|content| !content.trim().is_empty())
    }

    fn write(&self, material: &str) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| Error::Cache("store lock poisoned".to_string()))?;
        *slot = Some(material.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("study_material_cache.txt"));
        (dir, store)
    }

    #[test]
    fn round_trip_preserves_content() {
        let (_dir, store) = temp_store();
        let material = "Key Concept 1: ARPANET founded in 1969.\nKey Concept 2: TCP/IP standardized in 1983.";
        store.write(material).unwrap();
        assert_eq!(store.read().as_deref(), Some(material));
    }

    #[test]
    fn never_written_slot_is_absent() {
        let (_dir, store) = temp_store();
        assert!(store.read().is_none());
    }

    #[test]
    fn whitespace_only_slot_is_absent() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "  \n\t\n").unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn write_overwrites_previous_slot() {
        let (_dir, store) = temp_store();
        store.write("first").unwrap();
        store.write("second").unwrap();
        assert_eq!(store.read().as_deref(), Some("second"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/deeper/cache.txt"));
        store.write("material").unwrap();
        assert_eq!(store.read().as_deref(), Some("material"));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.read().is_none());
        store.write("cached").unwrap();
        assert_eq!(store.read().as_deref(), Some("cached"));
    }
}
