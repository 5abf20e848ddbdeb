//! Unified error handling for featgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for featgen core operations.
///
/// Cloneable so settled generation reports can hold one per failed file.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeatgenError {
    /// Errors from the domain layer (invalid specs, planner invariants).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl FeatgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for the "file already exists" failure.
    pub fn is_conflict(&self) -> bool {
        self.category() == ErrorCategory::Conflict
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type FeatgenResult<T> = Result<T, FeatgenError>;
