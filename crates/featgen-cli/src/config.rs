//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `FEATGEN_` prefix and `__` between sections,
//!    e.g. `FEATGEN_DEFAULTS__USE_FREEZED=false`
//! 3. `--config FILE`, or else `.featgen.toml` in the current directory
//!    layered over the platform config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use featgen_core::prelude::DataSourceVariant;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// File name used for project-local configuration.
pub const LOCAL_CONFIG_FILE: &str = ".featgen.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for generated features.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Values used when the matching flag is not given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub use_equatable: bool,
    /// Ignored by `featgen cubit`.
    pub use_freezed: bool,
    pub data_source: DataSourceVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                use_equatable: true,
                use_freezed: true,
                data_source: DataSourceVariant::Both,
            },
            output: OutputConfig {
                no_color: false,
                format: OutputFormat::Auto,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the platform file and `.featgen.toml` are read when
    /// present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(toml_file(path).required(true)),
            None => builder
                .add_source(toml_file(&Self::config_path()).required(false))
                .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        builder
            .add_source(
                Environment::with_prefix("FEATGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.featgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "featgen", "featgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_favour_freezed_and_both_sources() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.use_equatable);
        assert!(cfg.defaults.use_freezed);
        assert_eq!(cfg.defaults.data_source, DataSourceVariant::Both);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn partial_file_is_layered_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("featgen.toml");
        fs::write(
            &path,
            "[defaults]\nuse_freezed = false\ndata_source = \"remote\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(!cfg.defaults.use_freezed);
        assert!(cfg.defaults.use_equatable);
        assert_eq!(cfg.defaults.data_source, DataSourceVariant::RemoteOnly);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("featgen.toml");
        fs::write(&path, "[defaults]\ndata_source = \"cloud\"\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("use_freezed = true"));
        assert!(text.contains("data_source = \"both\""));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
