//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use featgen_core::prelude::DataSourceVariant;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "featgen",
    bin_name = "featgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Clean-architecture feature scaffolding for Flutter",
    long_about = "featgen generates the domain, data and presentation layers \
                  of a Flutter feature, wired for bloc or cubit.",
    after_help = "EXAMPLES:\n\
        \x20 featgen bloc todos --entity todo --list\n\
        \x20 featgen cubit counter --no-equatable --target lib\n\
        \x20 featgen completions bash > /usr/share/bash-completion/completions/featgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a feature with the event-driven bloc state management.
    #[command(
        visible_alias = "b",
        about = "Generate a bloc feature",
        after_help = "EXAMPLES:\n\
            \x20 featgen bloc todos --entity todo --list\n\
            \x20 featgen bloc profile --no-freezed --data-source remote\n\
            \x20 featgen bloc cart --target app/lib --dry-run"
    )]
    Bloc(BlocArgs),

    /// Generate a feature with the simplified cubit state management.
    #[command(
        visible_alias = "c",
        about = "Generate a cubit feature",
        after_help = "EXAMPLES:\n\
            \x20 featgen cubit counter\n\
            \x20 featgen cubit settings --no-equatable --data-source local"
    )]
    Cubit(CubitArgs),

    /// Initialise a featgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 featgen init           # platform config location\n\
            \x20 featgen init --local   # .featgen.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 featgen completions bash > ~/.local/share/bash-completion/completions/featgen\n\
            \x20 featgen completions zsh  > ~/.zfunc/_featgen\n\
            \x20 featgen completions fish > ~/.config/fish/completions/featgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the featgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 featgen config get defaults.use_freezed\n\
            \x20 featgen config list\n\
            \x20 featgen config path"
    )]
    Config(ConfigCommands),
}

// ── bloc / cubit ──────────────────────────────────────────────────────────────

/// Arguments shared by both generation commands.
#[derive(Debug, Args)]
pub struct FeatureArgs {
    /// Feature name; also the feature directory under `features/`.
    #[arg(value_name = "FEATURE", help = "Feature name, e.g. todos or \"user profile\"")]
    pub feature: String,

    /// The use case returns a list of entities.
    #[arg(long = "list", help = "Generate list-returning use case and models")]
    pub list: bool,

    #[arg(
        long = "equatable",
        overrides_with = "no_equatable",
        help = "Use equatable for states and events"
    )]
    pub equatable: bool,

    #[arg(
        long = "no-equatable",
        overrides_with = "equatable",
        help = "Plain classes without equatable"
    )]
    pub no_equatable: bool,

    /// Data sources composed by the repository implementation.
    #[arg(
        short = 'd',
        long = "data-source",
        value_name = "SOURCE",
        value_enum,
        help = "Data sources used by the repository [default: from config]"
    )]
    pub data_source: Option<DataSourceArg>,

    /// Directory that receives `features/<FEATURE>`.
    #[arg(
        short = 't',
        long = "target",
        value_name = "DIR",
        help = "Target directory (default: current directory)"
    )]
    pub target: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Arguments for `featgen bloc`.
#[derive(Debug, Args)]
pub struct BlocArgs {
    #[command(flatten)]
    pub feature: FeatureArgs,

    /// Entity name; defaults to the feature name.
    #[arg(
        short = 'e',
        long = "entity",
        value_name = "NAME",
        help = "Entity name (default: the feature name)"
    )]
    pub entity: Option<String>,

    #[arg(
        long = "freezed",
        overrides_with = "no_freezed",
        help = "Use freezed unions for states and events"
    )]
    pub freezed: bool,

    #[arg(
        long = "no-freezed",
        overrides_with = "freezed",
        help = "Do not use freezed"
    )]
    pub no_freezed: bool,
}

/// Arguments for `featgen cubit`.
#[derive(Debug, Args)]
pub struct CubitArgs {
    #[command(flatten)]
    pub feature: FeatureArgs,
}

/// Resolve a `--flag` / `--no-flag` pair against a configured default.
pub fn switch(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

/// Data source selection as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DataSourceArg {
    Both,
    #[value(alias = "local-only")]
    Local,
    #[value(alias = "remote-only")]
    Remote,
}

impl From<DataSourceArg> for DataSourceVariant {
    fn from(arg: DataSourceArg) -> Self {
        match arg {
            DataSourceArg::Both => Self::Both,
            DataSourceArg::Local => Self::LocalOnly,
            DataSourceArg::Remote => Self::RemoteOnly,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `featgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.featgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `featgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `featgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.use_freezed`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn parse_bloc_command() {
        let cli = parse(&[
            "featgen", "bloc", "todos", "--entity", "todo", "--list", "--target", "lib",
        ]);
        let Commands::Bloc(args) = cli.command else {
            panic!("expected Bloc command");
        };
        assert_eq!(args.feature.feature, "todos");
        assert_eq!(args.entity.as_deref(), Some("todo"));
        assert!(args.feature.list);
        assert_eq!(args.feature.target, Some(PathBuf::from("lib")));
        assert!(!args.feature.dry_run);
    }

    #[test]
    fn cubit_has_no_entity_or_freezed() {
        assert!(Cli::try_parse_from(["featgen", "cubit", "counter", "--entity", "x"]).is_err());
        assert!(Cli::try_parse_from(["featgen", "cubit", "counter", "--freezed"]).is_err());
        assert!(matches!(
            parse(&["featgen", "c", "counter"]).command,
            Commands::Cubit(_)
        ));
    }

    #[test]
    fn last_switch_wins() {
        let cli = parse(&["featgen", "bloc", "x", "--freezed", "--no-freezed"]);
        let Commands::Bloc(args) = cli.command else {
            panic!("expected Bloc command");
        };
        assert!(!args.freezed);
        assert!(args.no_freezed);
        assert!(!switch(args.freezed, args.no_freezed, true));
    }

    #[test]
    fn switch_falls_back_to_default() {
        assert!(switch(false, false, true));
        assert!(!switch(false, false, false));
        assert!(switch(true, false, false));
        assert!(!switch(false, true, true));
    }

    #[test]
    fn data_source_aliases() {
        let cli = parse(&["featgen", "bloc", "x", "--data-source", "remote-only"]);
        let Commands::Bloc(args) = cli.command else {
            panic!("expected Bloc command");
        };
        assert_eq!(args.feature.data_source, Some(DataSourceArg::Remote));
        assert_eq!(
            DataSourceVariant::from(DataSourceArg::Remote),
            DataSourceVariant::RemoteOnly
        );
    }

    #[test]
    fn feature_name_is_required() {
        assert!(Cli::try_parse_from(["featgen", "bloc"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["featgen", "--quiet", "--verbose", "config", "path"]);
        assert!(result.is_err());
    }
}
