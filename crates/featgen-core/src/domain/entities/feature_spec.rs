//! The `FeatureSpec` aggregate root and its typestate builder.
//!
//! A `FeatureSpec` is the fully-validated description of the feature the
//! user wants to generate. Names are trimmed and their derived forms are
//! computed once at build time; every template reads the same cached
//! [`DerivedNames`], which keeps cross-file references consistent.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoFeature` / `HasFeature`) to
//! enforce at *compile time* that a feature name is set before anything else.
//! Blank names are still rejected at `build()` with
//! [`DomainError::InvalidSpec`].
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::marker::PhantomData;

use crate::domain::{
    error::DomainError,
    naming::DerivedNames,
    value_objects::{CodeStyle, DataSourceVariant, StateManagement},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-validated feature generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSpec {
    feature_name: String,
    entity_name: String,
    feature: DerivedNames,
    entity: DerivedNames,
    is_list: bool,
    use_cubit: bool,
    use_equatable: bool,
    use_freezed: bool,
    data_source: DataSourceVariant,
}

impl FeatureSpec {
    /// Start building a new `FeatureSpec`.
    pub fn builder() -> FeatureSpecBuilder<NoFeature> {
        FeatureSpecBuilder::new()
    }

    /// Trimmed feature name as entered; used for the feature directory.
    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    /// Trimmed entity name as entered.
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Derived names of the feature (presentation layer files).
    pub fn feature(&self) -> &DerivedNames {
        &self.feature
    }

    /// Derived names of the entity (domain and data layer files).
    pub fn entity(&self) -> &DerivedNames {
        &self.entity
    }

    pub const fn is_list(&self) -> bool {
        self.is_list
    }
    pub const fn data_source(&self) -> DataSourceVariant {
        self.data_source
    }

    /// The state-management variant after applying switch precedence.
    pub const fn state_management(&self) -> StateManagement {
        StateManagement::from_flags(self.use_cubit, self.use_equatable, self.use_freezed)
    }

    /// The resolved style of the state-management files.
    pub const fn code_style(&self) -> CodeStyle {
        self.state_management().style()
    }

    /// Validate this spec's internal consistency.
    ///
    /// Called automatically by the builder. Available for re-validation after
    /// external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name("feature name", &self.feature_name, &self.feature)?;
        validate_name("entity name", &self.entity_name, &self.entity)
    }
}

impl fmt::Display for FeatureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [entity {}{}] {} + {} data source",
            self.feature_name,
            self.entity_name,
            if self.is_list { ", list" } else { "" },
            self.state_management(),
            self.data_source,
        )
    }
}

fn validate_name(field: &'static str, raw: &str, derived: &DerivedNames) -> Result<(), DomainError> {
    if raw.trim().is_empty() {
        return Err(DomainError::InvalidSpec {
            field,
            reason: "must not be empty".into(),
        });
    }
    if raw.contains('/') || raw.contains('\\') {
        return Err(DomainError::InvalidSpec {
            field,
            reason: "must not contain path separators".into(),
        });
    }
    if derived.is_empty() {
        return Err(DomainError::InvalidSpec {
            field,
            reason: "must contain at least one letter or digit".into(),
        });
    }
    Ok(())
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: feature name has not yet been set.
pub struct NoFeature;
/// Marker: feature name has been set; other fields may now be configured.
pub struct HasFeature;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`FeatureSpec`].
///
/// Defaults: entity name = feature name, single entity, bloc variant with
/// no style switches, both data sources.
pub struct FeatureSpecBuilder<F> {
    feature_name: Option<String>,
    entity_name: Option<String>,
    is_list: bool,
    use_cubit: bool,
    use_equatable: bool,
    use_freezed: bool,
    data_source: DataSourceVariant,
    _marker: PhantomData<F>,
}

impl FeatureSpecBuilder<NoFeature> {
    pub fn new() -> Self {
        Self {
            feature_name: None,
            entity_name: None,
            is_list: false,
            use_cubit: false,
            use_equatable: false,
            use_freezed: false,
            data_source: DataSourceVariant::default(),
            _marker: PhantomData,
        }
    }

    /// Set the feature name. This transitions the builder to `HasFeature`.
    pub fn feature_name(self, name: impl Into<String>) -> FeatureSpecBuilder<HasFeature> {
        FeatureSpecBuilder {
            feature_name: Some(name.into()),
            entity_name: self.entity_name,
            is_list: self.is_list,
            use_cubit: self.use_cubit,
            use_equatable: self.use_equatable,
            use_freezed: self.use_freezed,
            data_source: self.data_source,
            _marker: PhantomData,
        }
    }
}

impl Default for FeatureSpecBuilder<NoFeature> {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureSpecBuilder<HasFeature> {
    /// Set the entity name. Omit it to reuse the feature name.
    pub fn entity_name(mut self, name: impl Into<String>) -> Self {
        self.entity_name = Some(name.into());
        self
    }

    pub fn list(mut self, is_list: bool) -> Self {
        self.is_list = is_list;
        self
    }

    pub fn cubit(mut self, use_cubit: bool) -> Self {
        self.use_cubit = use_cubit;
        self
    }

    pub fn equatable(mut self, use_equatable: bool) -> Self {
        self.use_equatable = use_equatable;
        self
    }

    pub fn freezed(mut self, use_freezed: bool) -> Self {
        self.use_freezed = use_freezed;
        self
    }

    pub fn data_source(mut self, variant: DataSourceVariant) -> Self {
        self.data_source = variant;
        self
    }

    /// Finalise the builder, trimming names and validating the result.
    pub fn build(self) -> Result<FeatureSpec, DomainError> {
        let feature_name = self
            .feature_name
            .ok_or(DomainError::MissingRequiredField { field: "feature_name" })?
            .trim()
            .to_string();
        let entity_name = match self.entity_name {
            Some(name) => name.trim().to_string(),
            None => feature_name.clone(),
        };

        let spec = FeatureSpec {
            feature: DerivedNames::derive(&feature_name),
            entity: DerivedNames::derive(&entity_name),
            feature_name,
            entity_name,
            is_list: self.is_list,
            use_cubit: self.use_cubit,
            use_equatable: self.use_equatable,
            use_freezed: self.use_freezed,
            data_source: self.data_source,
        };

        spec.validate()?;
        Ok(spec)
    }
}
