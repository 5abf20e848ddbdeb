use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::common::RelativePath, error::DomainError, templates::TemplateKind,
    value_objects::Layer,
};

/// Planned feature tree ready for materialization.
///
/// This is the output of the planner. It holds paths and template selectors
/// only; content is rendered when the file is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<BlueprintEntry>,
}

impl Blueprint {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Absolute feature directory, `<target>/features/<featureName>`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_directory(&mut self, path: RelativePath, layer: Layer) {
        self.entries
            .push(BlueprintEntry::Directory(DirectoryEntry { path, layer }));
    }

    pub fn add_file(&mut self, path: RelativePath, template: TemplateKind) {
        self.entries.push(BlueprintEntry::File(FileEntry {
            layer: template.layer(),
            path,
            template,
        }));
    }

    pub fn with_directory(mut self, path: impl Into<RelativePath>, layer: Layer) -> Self {
        self.add_directory(path.into(), layer);
        self
    }

    pub fn with_file(mut self, path: impl Into<RelativePath>, template: TemplateKind) -> Self {
        self.add_file(path.into(), template);
        self
    }

    /// Check the structural invariants: non-empty, no duplicate paths and
    /// every file's directory planned before the file itself.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyBlueprint {
                feature: self.root.display().to_string(),
            });
        }

        let mut seen = HashSet::new();
        let mut dirs = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }

            match entry {
                BlueprintEntry::Directory(d) => {
                    dirs.insert(d.path.clone());
                }
                BlueprintEntry::File(f) => {
                    if let Some(parent) = f.path.parent()
                        && !dirs.contains(&parent)
                    {
                        return Err(DomainError::OrphanFile {
                            path: f.path.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[BlueprintEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter_map(|e| match e {
            BlueprintEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.iter().filter_map(|e| match e {
            BlueprintEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn files_in(&self, layer: Layer) -> impl Iterator<Item = &FileEntry> {
        self.files().filter(move |f| f.layer == layer)
    }

    /// Absolute location of a planned path.
    pub fn resolve(&self, path: &RelativePath) -> PathBuf {
        self.root.join(path)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlueprintEntry {
    File(FileEntry),
    Directory(DirectoryEntry),
}

impl BlueprintEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub path: RelativePath,
    pub template: TemplateKind,
    pub layer: Layer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    pub path: RelativePath,
    pub layer: Layer,
}

/// A rendered file, ready to hand to the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_entries_in_order() {
        let blueprint = Blueprint::new("/tmp/features/counter")
            .with_directory("domain", Layer::Domain)
            .with_directory("domain/entities", Layer::Domain)
            .with_file("domain/entities/counter_type.dart", TemplateKind::EntityContract);

        assert_eq!(blueprint.entry_count(), 3);
        assert_eq!(blueprint.files().count(), 1);
        assert_eq!(blueprint.directories().count(), 2);
        assert!(blueprint.validate().is_ok());
        assert_eq!(
            blueprint.resolve(&RelativePath::from("domain")),
            PathBuf::from("/tmp/features/counter/domain")
        );
    }

    #[test]
    fn rejects_duplicates() {
        let blueprint = Blueprint::new("/tmp/x")
            .with_directory("domain", Layer::Domain)
            .with_directory("domain", Layer::Domain);

        assert!(matches!(
            blueprint.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Blueprint::new("/tmp/x").validate(),
            Err(DomainError::EmptyBlueprint { .. })
        ));
    }

    #[test]
    fn rejects_file_before_its_directory() {
        let blueprint = Blueprint::new("/tmp/x")
            .with_file("domain/entities/x_type.dart", TemplateKind::EntityContract)
            .with_directory("domain/entities", Layer::Domain);

        assert!(matches!(
            blueprint.validate(),
            Err(DomainError::OrphanFile { .. })
        ));
    }
}
