pub mod blueprint;
pub mod common;
pub mod feature_spec;

pub use crate::domain::DomainError;
pub use blueprint::{Blueprint, BlueprintEntry, DirectoryEntry, FileEntry, GeneratedFile};
pub use feature_spec::{FeatureSpec, FeatureSpecBuilder};
