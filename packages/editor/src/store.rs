//! Persistent store abstraction.
//!
//! The page collection persists as one JSON document under one fixed
//! key — a file path for [`FileStore`], an in-memory cell for
//! [`MemoryStore`]. The session treats any unreadable or unparseable
//! payload as "no stored data" rather than an error.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Key-value style store for the serialized page collection.
pub trait PageStore {
    /// Stored payload, if any.
    fn load(&self) -> Option<String>;

    /// Replace the stored payload.
    fn save(&mut self, payload: &str) -> io::Result<()>;
}

/// In-memory store for tests and temporary sessions.
///
/// Clones share the same cell, so a test can keep a handle and inspect
/// what the session persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cell: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(payload: &str) -> Self {
        Self {
            cell: Rc::new(RefCell::new(Some(payload.to_string()))),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl PageStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.cell.borrow().clone()
    }

    fn save(&mut self, payload: &str) -> io::Result<()> {
        *self.cell.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// Single-file store for real sessions.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageStore for FileStore {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn save(&mut self, payload: &str) -> io::Result<()> {
        std::fs::write(&self.path, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_shares_cell_across_clones() {
        let handle = MemoryStore::new();
        let mut store = handle.clone();

        assert!(store.load().is_none());
        store.save("[]").unwrap();
        assert_eq!(handle.contents().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("pages.json"));

        assert!(store.load().is_none());
        store.save("[{\"x\":1}]").unwrap();
        assert_eq!(store.load().as_deref(), Some("[{\"x\":1}]"));
    }
}
