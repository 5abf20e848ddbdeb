// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (settled generation reports keep them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid feature spec: {field} {reason}")]
    InvalidSpec { field: &'static str, reason: String },

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Blueprint Invariants
    // ========================================================================
    #[error("Duplicate path in blueprint: {path}")]
    DuplicatePath { path: String },

    #[error("Blueprint for feature '{feature}' is empty")]
    EmptyBlueprint { feature: String },

    #[error("File '{path}' is planned before its directory")]
    OrphanFile { path: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSpec { field, .. } => vec![
                "The name must not be empty".into(),
                format!("Provide a non-blank {field}, e.g. 'counter'"),
            ],
            Self::UnknownVariant { kind, value } => vec![
                format!("'{value}' is not a valid {kind}"),
                match *kind {
                    "data source" => "Valid values: both, local, remote".into(),
                    "code style" => "Valid values: default, equatable, freezed".into(),
                    "state management" => "Valid values: bloc, cubit".into(),
                    _ => "See --help for accepted values".into(),
                },
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Set '{field}' before building the feature spec")]
            }
            Self::DuplicatePath { .. } | Self::EmptyBlueprint { .. } | Self::OrphanFile { .. } => {
                vec!["This is a planner bug, please report it".into()]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSpec { .. }
            | Self::UnknownVariant { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::EmptyBlueprint { .. } | Self::OrphanFile { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
