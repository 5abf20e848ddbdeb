//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;

use featgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::FeatgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle while the service
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    /// Paths whose writes fail, for fault injection.
    failing: HashSet<PathBuf>,
    /// Directory paths whose creation fails.
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a pre-existing file, creating its parent directories.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Make every write to `path` fail.
    pub fn failing_write(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(path.into());
        }
        self
    }

    /// Make creating `path` (or anything beneath it) fail.
    pub fn read_only_dir(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().ok()?.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    pub fn has_directory(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryFilesystemInner>, ApplicationError> {
        self.inner.read().map_err(|_| ApplicationError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryFilesystemInner>, ApplicationError> {
        self.inner.write().map_err(|_| ApplicationError::LockPoisoned)
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

#[async_trait]
impl Filesystem for MemoryFilesystem {
    async fn create_dir_all(&self, path: &Path) -> FeatgenResult<()> {
        let mut inner = self.write()?;

        if inner.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Read-only directory".into(),
            }
            .into());
        }

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &str) -> FeatgenResult<()> {
        let mut inner = self.write()?;

        if inner.failing.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Injected write failure".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !inner.directories.contains(parent)
        {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.dart"), "x").await.is_err());

        fs.create_dir_all(Path::new("/a")).await.unwrap();
        fs.write_file(Path::new("/a/b.dart"), "x").await.unwrap();
        assert_eq!(fs.read_file(Path::new("/a/b.dart")).as_deref(), Some("x"));
        assert!(fs.exists(Path::new("/a")).await);
    }

    #[tokio::test]
    async fn seeded_files_exist_and_clones_share_state() {
        let fs = MemoryFilesystem::new().with_file("/app/x/counter_state.dart", "old");
        let handle = fs.clone();
        assert!(handle.exists(Path::new("/app/x/counter_state.dart")).await);
        assert!(handle.has_directory(Path::new("/app/x")));
    }

    #[tokio::test]
    async fn injected_failures() {
        let fs = MemoryFilesystem::new()
            .failing_write("/a/b.dart")
            .read_only_dir("/ro");
        fs.create_dir_all(Path::new("/a")).await.unwrap();
        assert!(fs.write_file(Path::new("/a/b.dart"), "x").await.is_err());
        assert!(fs.create_dir_all(Path::new("/ro/features")).await.is_err());
    }
}
