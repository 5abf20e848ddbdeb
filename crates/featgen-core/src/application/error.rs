//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A file the blueprint plans already exists. Nothing was written to it.
    #[error("{} already exists", path.display())]
    PathAlreadyExists { path: PathBuf },

    /// A planned directory could not be created. Fatal for the run.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreationFailed { path: PathBuf, reason: String },

    /// No usable target directory.
    #[error("Cannot resolve target directory {path}: {reason}")]
    TargetResolution { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory filesystem lock poisoned.
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathAlreadyExists { path } => vec![
                format!("Remove or rename {} and run again", path.display()),
                "Choose a different feature or entity name".into(),
            ],
            Self::DirectoryCreationFailed { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::TargetResolution { .. } => vec![
                "Pass an existing directory with --target".into(),
                "Or run featgen from inside your project's lib directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the disk is not full".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathAlreadyExists { .. } => ErrorCategory::Conflict,
            Self::TargetResolution { .. } => ErrorCategory::NotFound,
            Self::DirectoryCreationFailed { .. } | Self::FilesystemError { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
