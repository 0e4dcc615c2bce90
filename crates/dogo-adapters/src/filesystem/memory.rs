//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard},
};

use dogo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::DogoResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the service and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    writes: usize,
    read_only: bool,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filesystem on which every mutation fails.
    pub fn read_only() -> Self {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            inner.read_only = true;
        }
        fs
    }

    fn state(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.state().files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.state().files.keys().cloned().collect()
    }

    /// All directories (including implied ancestors), sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.state().directories.iter().cloned().collect()
    }

    /// Total number of successful `write_file` calls.
    pub fn write_count(&self) -> usize {
        self.state().writes
    }

    /// `true` if `path` was created as a file or directory.
    pub fn exists(&self, path: &Path) -> bool {
        let state = self.state();
        state.files.contains_key(path) || state.directories.contains(path)
    }

    /// `true` if nothing has been created.
    pub fn is_empty(&self) -> bool {
        let state = self.state();
        state.files.is_empty() && state.directories.is_empty()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> DogoResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLockError)?;

        if inner.read_only {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to create directory: read-only filesystem".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> DogoResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLockError)?;

        if inner.read_only {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to write file: read-only filesystem".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_records_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b/c")).unwrap();
        assert!(fs.exists(Path::new("a")));
        assert!(fs.exists(Path::new("a/b")));
        assert!(fs.exists(Path::new("a/b/c")));
        assert_eq!(fs.list_directories().len(), 3);
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("x/y.txt"), "hi").is_err());
        fs.create_dir_all(Path::new("x")).unwrap();
        fs.write_file(Path::new("x/y.txt"), "hi").unwrap();
        assert_eq!(fs.read_file(Path::new("x/y.txt")).as_deref(), Some("hi"));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("shared")).unwrap();
        assert!(other.exists(Path::new("shared")));
    }

    #[test]
    fn read_only_rejects_everything() {
        let fs = MemoryFilesystem::read_only();
        assert!(fs.create_dir_all(Path::new("a")).is_err());
        assert!(fs.is_empty());
    }
}
