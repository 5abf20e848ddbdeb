//! Domain value objects: CodeStyle, StateManagement, DataSourceVariant, Layer.
//!
//! # Design
//!
//! These are pure `Copy` value types with equality by value.
//! The boolean switches a user supplies (`use_cubit`, `use_equatable`,
//! `use_freezed`) are collapsed into these closed enums exactly once, in
//! [`CodeStyle::resolve`] and [`StateManagement::from_flags`], so every
//! template selector downstream matches exhaustively.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── CodeStyle ────────────────────────────────────────────────────────────────

/// Equality/union-type boilerplate emitted into state-management files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStyle {
    #[default]
    Default,
    Equatable,
    Freezed,
}

impl CodeStyle {
    /// Resolve the style switches with the fixed precedence
    /// `freezed > equatable > default`.
    pub const fn resolve(use_equatable: bool, use_freezed: bool) -> Self {
        if use_freezed {
            Self::Freezed
        } else if use_equatable {
            Self::Equatable
        } else {
            Self::Default
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Equatable => "equatable",
            Self::Freezed => "freezed",
        }
    }
}

impl fmt::Display for CodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StateManagement ──────────────────────────────────────────────────────────

/// Which state-management file set the presentation layer receives.
///
/// `Cubit` only ever carries `Default` or `Equatable`; the freezed switch is
/// ignored for the simplified variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateManagement {
    /// Two files: state + cubit.
    Cubit(CodeStyle),
    /// Three files: event + state + bloc.
    Bloc(CodeStyle),
}

impl StateManagement {
    pub const fn from_flags(use_cubit: bool, use_equatable: bool, use_freezed: bool) -> Self {
        if use_cubit {
            Self::Cubit(CodeStyle::resolve(use_equatable, false))
        } else {
            Self::Bloc(CodeStyle::resolve(use_equatable, use_freezed))
        }
    }

    pub const fn style(&self) -> CodeStyle {
        match self {
            Self::Cubit(style) | Self::Bloc(style) => *style,
        }
    }

    /// Presentation sub-directory and controller file suffix.
    pub const fn dir_name(&self) -> &'static str {
        match self {
            Self::Cubit(_) => "cubit",
            Self::Bloc(_) => "bloc",
        }
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.dir_name(), self.style())
    }
}

// ── DataSourceVariant ────────────────────────────────────────────────────────

/// Which data sources the data-layer repository implementation composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceVariant {
    /// Remote first, local fallback on an unsuccessful response.
    #[default]
    Both,
    #[serde(rename = "local", alias = "local-only", alias = "local_only")]
    LocalOnly,
    #[serde(rename = "remote", alias = "remote-only", alias = "remote_only")]
    RemoteOnly,
}

impl DataSourceVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::LocalOnly => "local",
            Self::RemoteOnly => "remote",
        }
    }
}

impl fmt::Display for DataSourceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSourceVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "both" | "all" => Ok(Self::Both),
            "local" | "local-only" | "local_only" => Ok(Self::LocalOnly),
            "remote" | "remote-only" | "remote_only" => Ok(Self::RemoteOnly),
            other => Err(DomainError::UnknownVariant {
                kind: "data source",
                value: other.to_string(),
            }),
        }
    }
}

// ── Layer ────────────────────────────────────────────────────────────────────

/// The three clean-architecture layers, in planning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Domain,
    Data,
    Presentation,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Self::Domain, Self::Data, Self::Presentation];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Data => "data",
            Self::Presentation => "presentation",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezed_wins_over_equatable() {
        assert_eq!(CodeStyle::resolve(true, true), CodeStyle::Freezed);
        assert_eq!(CodeStyle::resolve(false, true), CodeStyle::Freezed);
        assert_eq!(CodeStyle::resolve(true, false), CodeStyle::Equatable);
        assert_eq!(CodeStyle::resolve(false, false), CodeStyle::Default);
    }

    #[test]
    fn cubit_ignores_freezed() {
        assert_eq!(
            StateManagement::from_flags(true, false, true),
            StateManagement::Cubit(CodeStyle::Default)
        );
        assert_eq!(
            StateManagement::from_flags(true, true, true),
            StateManagement::Cubit(CodeStyle::Equatable)
        );
    }

    #[test]
    fn bloc_honours_precedence() {
        assert_eq!(
            StateManagement::from_flags(false, true, true),
            StateManagement::Bloc(CodeStyle::Freezed)
        );
        assert_eq!(StateManagement::from_flags(false, true, false).dir_name(), "bloc");
    }

    #[test]
    fn data_source_parses_aliases() {
        assert_eq!("both".parse::<DataSourceVariant>().unwrap(), DataSourceVariant::Both);
        assert_eq!(
            "Local-Only".parse::<DataSourceVariant>().unwrap(),
            DataSourceVariant::LocalOnly
        );
        assert_eq!(
            "remote".parse::<DataSourceVariant>().unwrap(),
            DataSourceVariant::RemoteOnly
        );
        assert!("cache".parse::<DataSourceVariant>().is_err());
    }
}
