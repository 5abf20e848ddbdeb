//! Architecture planner: turns a [`FeatureSpec`] into a [`Blueprint`].
//!
//! Pure. The planner decides where every directory and file goes; it never
//! renders content and never touches the filesystem.

use std::path::{Component, Path, PathBuf};

use crate::domain::{
    entities::{blueprint::Blueprint, common::RelativePath, feature_spec::FeatureSpec},
    error::DomainError,
    templates::TemplateKind,
    value_objects::Layer,
};

/// Container directory that holds every feature.
pub const FEATURES_DIR: &str = "features";

/// Presentation directories created empty for the user to fill.
pub const RESERVED_DIRS: [&str; 2] = ["pages", "widgets"];

/// Normalize a target directory to its `features` container.
///
/// Nests directly when the last segment already is `features`; otherwise
/// appends it. Trailing separators are ignored, and applying the function to
/// its own output is a no-op.
pub fn features_dir(target: &Path) -> PathBuf {
    // Rebuilding from components drops trailing separators and `.` segments.
    let normalized: PathBuf = target
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    match normalized.file_name() {
        Some(last) if last == FEATURES_DIR => normalized,
        _ => normalized.join(FEATURES_DIR),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ArchitecturePlanner;

impl ArchitecturePlanner {
    pub fn new() -> Self {
        Self
    }

    /// Plan the feature tree under `<target>/features/<featureName>/`.
    ///
    /// Layers come in fixed order: domain, data, presentation. Within each
    /// layer its directories precede its files.
    pub fn plan(&self, spec: &FeatureSpec, target: &Path) -> Result<Blueprint, DomainError> {
        spec.validate()?;

        let root = features_dir(target).join(spec.feature_name());
        let mut blueprint = Blueprint::new(root);

        for layer in Layer::ALL {
            let kinds = layer_files(spec, layer);

            for dir in layer_directories(&kinds, layer) {
                blueprint.add_directory(RelativePath::try_new(dir)?, layer);
            }
            for kind in kinds {
                let path = RelativePath::try_new(kind.directory())?.join(kind.file_name(spec))?;
                blueprint.add_file(path, kind);
            }
        }

        blueprint.validate()?;
        Ok(blueprint)
    }
}

fn layer_files(spec: &FeatureSpec, layer: Layer) -> Vec<TemplateKind> {
    match layer {
        Layer::Domain => TemplateKind::DOMAIN.to_vec(),
        Layer::Data => {
            let mut kinds = TemplateKind::DATA.to_vec();
            kinds.push(TemplateKind::RepositoryImpl(spec.data_source()));
            kinds
        }
        Layer::Presentation => TemplateKind::state_management_set(spec.state_management()),
    }
}

/// Directories of a layer in first-use order, followed by reserved ones.
fn layer_directories(kinds: &[TemplateKind], layer: Layer) -> Vec<String> {
    let mut dirs: Vec<String> = Vec::new();
    for kind in kinds {
        let dir = kind.directory();
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    if layer == Layer::Presentation {
        dirs.extend(RESERVED_DIRS.iter().map(|d| format!("{layer}/{d}")));
    }
    dirs
}
