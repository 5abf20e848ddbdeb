//! Implementation of the `featgen bloc` and `featgen cubit` commands.
//!
//! Responsibility: translate CLI arguments into a `FeatureSpec`, resolve the
//! target directory, call the core feature service, and display results.
//! No generation logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use featgen_adapters::LocalFilesystem;
use featgen_core::{
    application::ApplicationError,
    prelude::{DataSourceVariant, FeatgenError, FeatureService, FeatureSpec, GenerationReport},
};

use crate::{
    cli::{BlocArgs, CubitArgs, FeatureArgs, switch},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    pubspec,
};

/// Execute `featgen bloc`.
pub async fn bloc(args: BlocArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let f = &args.feature;
    let builder = FeatureSpec::builder()
        .feature_name(f.feature.as_str())
        .list(f.list)
        .equatable(switch(f.equatable, f.no_equatable, config.defaults.use_equatable))
        .freezed(switch(args.freezed, args.no_freezed, config.defaults.use_freezed))
        .data_source(data_source(f, config));
    let builder = match args.entity.as_deref() {
        Some(entity) => builder.entity_name(entity),
        None => builder,
    };
    let spec = builder.build().map_err(FeatgenError::from)?;

    run(spec, f, output).await
}

/// Execute `featgen cubit`. The entity shares the feature's name.
pub async fn cubit(args: CubitArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let f = &args.feature;
    let spec = FeatureSpec::builder()
        .feature_name(f.feature.as_str())
        .cubit(true)
        .list(f.list)
        .equatable(switch(f.equatable, f.no_equatable, config.defaults.use_equatable))
        .data_source(data_source(f, config))
        .build()
        .map_err(FeatgenError::from)?;

    run(spec, f, output).await
}

fn data_source(args: &FeatureArgs, config: &AppConfig) -> DataSourceVariant {
    args.data_source
        .map(DataSourceVariant::from)
        .unwrap_or(config.defaults.data_source)
}

/// Dispatch sequence:
/// 1. Resolve the target directory
/// 2. Start the pubspec check in the background
/// 3. Preview (`--dry-run`) or generate
/// 4. Report every created file, then surface the first failure
/// 5. Give the pubspec check a bounded moment to flush its warnings
#[instrument(skip_all, fields(feature = %spec.feature_name()))]
async fn run(spec: FeatureSpec, args: &FeatureArgs, output: &OutputManager) -> CliResult<()> {
    let target = resolve_target(args.target.as_deref()).await?;
    debug!(target = %target.display(), spec = %spec, "Target resolved");

    let check = pubspec::spawn_check(target.clone(), pubspec::required_packages(&spec));

    let result = if args.dry_run {
        preview(&spec, &target, output)
    } else {
        generate(&spec, &target, output).await
    };

    pubspec::settle(check).await;
    result
}

fn preview(spec: &FeatureSpec, target: &Path, output: &OutputManager) -> CliResult<()> {
    let service = FeatureService::new(Arc::new(LocalFilesystem::new()));
    let files = service.preview(spec, target)?;
    let root = featgen_core::domain::features_dir(target).join(spec.feature_name());
    let paths: Vec<PathBuf> = files.into_iter().map(|f| f.path).collect();

    if output.is_json() {
        output.json(&Summary::new(spec, &root, true, paths, Vec::new()))?;
    } else {
        output.header(&format!(
            "Dry run: would generate {} Feature at {}",
            spec.feature().title_case(),
            root.display()
        ))?;
        for path in &paths {
            output.item(&relative(path, target))?;
        }
    }
    Ok(())
}

async fn generate(spec: &FeatureSpec, target: &Path, output: &OutputManager) -> CliResult<()> {
    let service = FeatureService::new(Arc::new(LocalFilesystem::new()));

    info!(target = %target.display(), "Generation started");
    let report = service.generate_settled(spec, target).await?;
    render_report(spec, target, &report, output)?;

    report.into_result()?;
    info!("Generation completed");
    Ok(())
}

/// `--target`, or the current directory, must be an existing directory.
async fn resolve_target(target: Option<&Path>) -> CliResult<PathBuf> {
    let path = match target {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|e| invalid_target(PathBuf::from("."), e))?,
    };

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_dir() => Ok(path),
        Ok(_) => Err(invalid_target(path, "not a directory").into()),
        Err(e) => Err(invalid_target(path, e).into()),
    }
}

fn invalid_target(path: PathBuf, cause: impl std::fmt::Display) -> FeatgenError {
    debug!(path = %path.display(), %cause, "Target rejected");
    ApplicationError::TargetResolution {
        path,
        reason: "Please select a valid directory".into(),
    }
    .into()
}

fn render_report(
    spec: &FeatureSpec,
    target: &Path,
    report: &GenerationReport,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        let failed = report
            .failures
            .iter()
            .map(|f| FailedFile {
                path: f.path.clone(),
                error: f.error.to_string(),
            })
            .collect();
        output.json(&Summary::new(
            spec,
            &report.root,
            false,
            report.created.clone(),
            failed,
        ))?;
        return Ok(());
    }

    if report.is_success() {
        output.success(&format!(
            "Successfully Generated {} Feature",
            spec.feature().title_case()
        ))?;
    } else {
        output.warning(&format!(
            "Generated {} Feature with {} failed file(s)",
            spec.feature().title_case(),
            report.failures.len()
        ))?;
    }
    for path in &report.created {
        output.item(&relative(path, target))?;
    }
    for failure in &report.failures {
        output.warning(&failure.error.to_string())?;
    }
    Ok(())
}

fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

/// JSON document printed for `--output-format json`.
#[derive(Debug, Serialize)]
struct Summary {
    feature: String,
    root: PathBuf,
    dry_run: bool,
    created: Vec<PathBuf>,
    failed: Vec<FailedFile>,
    generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct FailedFile {
    path: PathBuf,
    error: String,
}

impl Summary {
    fn new(
        spec: &FeatureSpec,
        root: &Path,
        dry_run: bool,
        created: Vec<PathBuf>,
        failed: Vec<FailedFile>,
    ) -> Self {
        Self {
            feature: spec.feature_name().to_string(),
            root: root.to_path_buf(),
            dry_run,
            created,
            failed,
            generated_at: Utc::now(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
