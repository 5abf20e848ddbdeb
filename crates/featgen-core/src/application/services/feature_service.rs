//! Feature Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the feature spec and plan the blueprint
//! 2. Create every planned directory (fatal on failure)
//! 3. Write domain and data layer files concurrently
//! 4. Write the state-management file set concurrently
//!
//! Every write is awaited to completion; one failing file never cancels its
//! siblings. Callers get either the settled [`GenerationReport`] or, through
//! [`FeatureService::generate`], the first failure in blueprint order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::{join, join_all};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ports::Filesystem, services::materializer::FileMaterializer},
    domain::{ArchitecturePlanner, Blueprint, FeatureSpec, GeneratedFile, Layer},
    error::{FeatgenError, FeatgenResult},
};

/// One file that could not be written.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationFailure {
    pub path: PathBuf,
    pub error: FeatgenError,
}

/// Settled outcome of a generation run.
///
/// `created` and `failures` are both in blueprint order.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub created: Vec<PathBuf>,
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn first_failure(&self) -> Option<&GenerationFailure> {
        self.failures.first()
    }

    /// Collapse into the created paths, or the first failure.
    pub fn into_result(self) -> FeatgenResult<Vec<PathBuf>> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.created),
        }
    }
}

/// Main feature generation service.
pub struct FeatureService {
    planner: ArchitecturePlanner,
    materializer: FileMaterializer,
}

impl FeatureService {
    /// Create a new feature service writing through the given filesystem.
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            planner: ArchitecturePlanner::new(),
            materializer: FileMaterializer::new(filesystem),
        }
    }

    /// Plan the feature without touching the filesystem. The planner
    /// validates both the spec and the resulting blueprint.
    pub fn plan(&self, spec: &FeatureSpec, target: &Path) -> FeatgenResult<Blueprint> {
        Ok(self.planner.plan(spec, target)?)
    }

    /// Render every planned file without writing anything (dry run).
    pub fn preview(&self, spec: &FeatureSpec, target: &Path) -> FeatgenResult<Vec<GeneratedFile>> {
        let blueprint = self.plan(spec, target)?;
        Ok(blueprint
            .files()
            .map(|f| GeneratedFile::new(blueprint.resolve(&f.path), f.template.render(spec)))
            .collect())
    }

    /// Generate the feature, returning every created path or the first
    /// failure in blueprint order.
    pub async fn generate(&self, spec: &FeatureSpec, target: &Path) -> FeatgenResult<Vec<PathBuf>> {
        self.generate_settled(spec, target).await?.into_result()
    }

    /// Generate the feature and report every file's outcome.
    ///
    /// Returns `Err` only for failures that stop the run before any file is
    /// written: an invalid spec or a directory that cannot be created.
    #[instrument(
        skip_all,
        fields(
            feature = %spec.feature_name(),
            entity = %spec.entity_name(),
            target = %target.display()
        )
    )]
    pub async fn generate_settled(
        &self,
        spec: &FeatureSpec,
        target: &Path,
    ) -> FeatgenResult<GenerationReport> {
        info!(variant = %spec.state_management(), data_source = %spec.data_source(), "Generating feature");

        // 1. Plan
        let blueprint = self.plan(spec, target)?;
        info!(
            root = %blueprint.root().display(),
            files = blueprint.files().count(),
            "Blueprint planned"
        );

        // 2. Directories, before any file is scheduled
        self.create_directories(&blueprint).await?;

        // 3. Domain and data layers together, then presentation
        let (domain, data) = join(
            self.write_layer(spec, &blueprint, Layer::Domain),
            self.write_layer(spec, &blueprint, Layer::Data),
        )
        .await;
        let presentation = self.write_layer(spec, &blueprint, Layer::Presentation).await;

        let mut report = GenerationReport {
            root: blueprint.root().to_path_buf(),
            created: Vec::new(),
            failures: Vec::new(),
        };
        for (path, outcome) in domain.into_iter().chain(data).chain(presentation) {
            match outcome {
                Ok(()) => report.created.push(path),
                Err(error) => report.failures.push(GenerationFailure { path, error }),
            }
        }

        if report.is_success() {
            info!(created = report.created.len(), "Feature generated");
        } else {
            warn!(
                created = report.created.len(),
                failed = report.failures.len(),
                "Feature generated with failures"
            );
        }
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    async fn create_directories(&self, blueprint: &Blueprint) -> FeatgenResult<()> {
        // Root first; it also creates the features container.
        self.materializer.ensure_dir(blueprint.root()).await?;

        for dir in blueprint.directories() {
            let path = blueprint.resolve(&dir.path);
            self.materializer.ensure_dir(&path).await?;
        }
        debug!(count = blueprint.directories().count(), "Directories ready");
        Ok(())
    }

    /// Write every file of one layer concurrently and collect each outcome.
    async fn write_layer(
        &self,
        spec: &FeatureSpec,
        blueprint: &Blueprint,
        layer: Layer,
    ) -> Vec<(PathBuf, FeatgenResult<()>)> {
        let writes = blueprint.files_in(layer).map(|file| {
            let path = blueprint.resolve(&file.path);
            let content = file.template.render(spec);
            async move {
                let outcome = self.materializer.write(&path, &content).await;
                if let Err(e) = &outcome {
                    warn!(path = %path.display(), error = %e, "File not written");
                }
                (path, outcome)
            }
        });

        let outcomes = join_all(writes).await;
        debug!(%layer, files = outcomes.len(), "Layer settled");
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};

    fn counter() -> FeatureSpec {
        FeatureSpec::builder()
            .feature_name("counter")
            .cubit(true)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn directory_failure_stops_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only filesystem".into(),
            }
            .into())
        });
        fs.expect_exists().never();
        fs.expect_write_file().never();

        let service = FeatureService::new(Arc::new(fs));
        let err = service
            .generate_settled(&counter(), Path::new("/app/lib"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FeatgenError::Application(ApplicationError::DirectoryCreationFailed { ref path, .. })
                if path == Path::new("/app/lib/features/counter")
        ));
    }

    #[tokio::test]
    async fn one_existing_file_does_not_stop_the_others() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .returning(|path| path.ends_with("counter_state.dart"));
        fs.expect_write_file().times(11).returning(|_, _| Ok(()));

        let service = FeatureService::new(Arc::new(fs));
        let report = service
            .generate_settled(&counter(), Path::new("/app/lib"))
            .await
            .unwrap();

        assert_eq!(report.created.len(), 11);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("presentation/cubit/counter_state.dart"));
        assert!(report.failures[0].error.is_conflict());
    }

    #[test]
    fn preview_renders_without_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = FeatureService::new(Arc::new(fs));
        let files = service.preview(&counter(), Path::new("/app/lib")).unwrap();

        assert_eq!(files.len(), 12);
        assert_eq!(
            files[0].path,
            PathBuf::from("/app/lib/features/counter/domain/entities/counter_type.dart")
        );
        assert!(files.iter().all(|f| !f.is_empty()));
    }

    #[test]
    fn plan_is_the_validated_planner_blueprint() {
        let service = FeatureService::new(Arc::new(MockFilesystem::new()));
        let target = Path::new("/app/lib");

        let blueprint = service.plan(&counter(), target).unwrap();

        assert_eq!(blueprint, ArchitecturePlanner::new().plan(&counter(), target).unwrap());
        assert!(blueprint.validate().is_ok());
    }

    #[test]
    fn report_collapses_to_first_failure() {
        let first = ApplicationError::PathAlreadyExists { path: "/a".into() };
        let report = GenerationReport {
            root: "/root".into(),
            created: vec!["/b".into()],
            failures: vec![
                GenerationFailure {
                    path: "/a".into(),
                    error: first.clone().into(),
                },
                GenerationFailure {
                    path: "/c".into(),
                    error: ApplicationError::PathAlreadyExists { path: "/c".into() }.into(),
                },
            ],
        };
        assert_eq!(report.into_result().unwrap_err(), FeatgenError::from(first));
    }
}
