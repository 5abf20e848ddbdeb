//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `featgen-adapters` crate provides implementations.

use async_trait::async_trait;
use std::path::Path;

use crate::error::FeatgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `featgen_adapters::filesystem::LocalFilesystem` (production)
/// - `featgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are absolute; the planner has already resolved them
/// - `write_file` must not leave a partially written file behind
/// - Existence checks are not transactional with writes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    async fn create_dir_all(&self, path: &Path) -> FeatgenResult<()>;

    /// Write content to a file atomically.
    async fn write_file(&self, path: &Path, content: &str) -> FeatgenResult<()>;

    /// Check if path exists.
    async fn exists(&self, path: &Path) -> bool;
}
