// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for featgen.
//!
//! This module contains pure business logic with no I/O. Writing files is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability belongs to the application and CLI layers
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod planner;
pub mod templates;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    blueprint::{Blueprint, BlueprintEntry, DirectoryEntry, FileEntry, GeneratedFile},
    common::RelativePath,
    feature_spec::{FeatureSpec, FeatureSpecBuilder},
};

pub use error::{DomainError, ErrorCategory};
pub use naming::DerivedNames;
pub use planner::{ArchitecturePlanner, FEATURES_DIR, features_dir};
pub use templates::{FILE_EXTENSION, RenderContext, TemplateKind};
pub use value_objects::{CodeStyle, DataSourceVariant, Layer, StateManagement};
