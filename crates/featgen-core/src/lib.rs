//! featgen core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for featgen, a
//! generator of clean-architecture feature skeletons for Flutter projects.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           featgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (FeatureService, FileMaterializer)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    featgen-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (FeatureSpec, DerivedNames, Blueprint,  │
//! │  TemplateKind, ArchitecturePlanner)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use featgen_core::prelude::*;
//!
//! let spec = FeatureSpec::builder()
//!     .feature_name("todos")
//!     .entity_name("todo")
//!     .list(true)
//!     .build()?;
//!
//! let service = FeatureService::new(Arc::new(filesystem));
//! let created = service.generate(&spec, "lib".as_ref()).await?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FeatureService, FileMaterializer, GenerationFailure, GenerationReport, ports::Filesystem,
    };
    pub use crate::domain::{
        ArchitecturePlanner, Blueprint, CodeStyle, DataSourceVariant, DerivedNames, FeatureSpec,
        GeneratedFile, Layer, StateManagement, TemplateKind, features_dir,
    };
    pub use crate::error::{ErrorCategory, FeatgenError, FeatgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
