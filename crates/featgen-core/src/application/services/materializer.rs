//! File materializer - the only component that asks the filesystem to write.
//!
//! Writes never overwrite: the existence check runs first and a hit fails
//! that one file with `PathAlreadyExists` without touching it. The check and
//! the write are not atomic together; a concurrent external writer can still
//! race in between.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::{FeatgenError, FeatgenResult},
};

#[derive(Clone)]
pub struct FileMaterializer {
    filesystem: Arc<dyn Filesystem>,
}

impl FileMaterializer {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create a directory (and parents). Idempotent.
    ///
    /// Any failure is reported as `DirectoryCreationFailed` for `path`.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn ensure_dir(&self, path: &Path) -> FeatgenResult<()> {
        self.filesystem.create_dir_all(path).await.map_err(|e| {
            FeatgenError::from(ApplicationError::DirectoryCreationFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
    }

    /// Write a new file, failing fast if it already exists.
    #[instrument(skip(self, content), fields(path = %path.display(), bytes = content.len()))]
    pub async fn write(&self, path: &Path, content: &str) -> FeatgenResult<()> {
        if self.filesystem.exists(path).await {
            debug!("Refusing to overwrite existing file");
            return Err(ApplicationError::PathAlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        self.filesystem.write_file(path, content).await?;
        debug!("File written");
        Ok(())
    }
}
