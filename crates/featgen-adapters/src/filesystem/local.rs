//! Local filesystem adapter using tokio::fs.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, trace};
use uuid::Uuid;

use featgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{FeatgenError, FeatgenResult},
};

/// Production filesystem implementation using `tokio::fs`.
///
/// Files are written to a hidden temporary sibling first and renamed into
/// place, so a failed write never leaves a truncated file at the final path.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn create_dir_all(&self, path: &Path) -> FeatgenResult<()> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    async fn write_file(&self, path: &Path, content: &str) -> FeatgenResult<()> {
        let tmp = temp_sibling(path);
        trace!(tmp = %tmp.display(), "Writing temporary file");

        if let Err(e) = tokio::fs::write(&tmp, content).await {
            discard(&tmp).await;
            return Err(map_io_error(path, e, "write file"));
        }

        if let Err(e) = tokio::fs::rename(&tmp, path).await {
            discard(&tmp).await;
            return Err(map_io_error(path, e, "move file into place"));
        }

        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        // Unreadable metadata counts as absent; the write will surface the error.
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

/// `dir/.name.<uuid>.tmp`, on the same filesystem as the target so the
/// rename stays atomic.
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4().simple()))
}

async fn discard(tmp: &Path) {
    if let Err(e) = tokio::fs::remove_file(tmp).await
        && e.kind() != io::ErrorKind::NotFound
    {
        debug!(tmp = %tmp.display(), error = %e, "Failed to remove temporary file");
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> FeatgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
