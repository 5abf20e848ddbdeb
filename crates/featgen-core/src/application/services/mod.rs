//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a feature".

pub mod feature_service;
pub mod materializer;

pub use feature_service::{FeatureService, GenerationFailure, GenerationReport};
pub use materializer::FileMaterializer;
