//! Startup dependency analysis.
//!
//! Looks for the `pubspec.yaml` nearest to the target directory and warns
//! about packages the generated code imports but the project does not
//! declare. It runs as a spawned task next to generation; the command only
//! gives it a short grace period at the very end so its warnings are not lost
//! when the runtime shuts down.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use featgen_core::prelude::{CodeStyle, FeatureSpec};
use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const PUBSPEC_FILE: &str = "pubspec.yaml";

/// How long a finished command waits for a check that is still running.
pub const SETTLE_TIMEOUT: Duration = Duration::from_millis(500);

/// Packages accepted in place of a required one.
const ALTERNATIVES: &[(&str, &str)] = &[("bloc", "flutter_bloc")];

/// Packages every generated feature imports, whatever its style.
const ALWAYS_IMPORTED: &[&str] = &[
    "flutter",
    "bloc",
    "retrofit",
    "freezed_annotation",
    "shared_lib",
    "base",
];

/// The two dependency tables of a pubspec. Everything else is ignored.
#[derive(Debug, Default, Deserialize)]
struct Pubspec {
    #[serde(default)]
    dependencies: Option<BTreeMap<String, serde_yaml::Value>>,
    #[serde(default)]
    dev_dependencies: Option<BTreeMap<String, serde_yaml::Value>>,
}

impl Pubspec {
    fn declares(&self, package: &str) -> bool {
        [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .flatten()
            .any(|table| table.contains_key(package))
    }
}

/// Packages imported by the files generated for `spec`.
pub fn required_packages(spec: &FeatureSpec) -> Vec<&'static str> {
    let mut packages = ALWAYS_IMPORTED.to_vec();
    match spec.code_style() {
        CodeStyle::Default => packages.push("meta"),
        CodeStyle::Equatable => packages.push("equatable"),
        CodeStyle::Freezed => {}
    }
    packages
}

/// Required packages declared in neither `dependencies` nor
/// `dev_dependencies`.
pub fn missing_dependencies<'a>(
    pubspec: &str,
    required: &[&'a str],
) -> Result<Vec<&'a str>, serde_yaml::Error> {
    let pubspec: Pubspec = serde_yaml::from_str(pubspec)?;

    Ok(required
        .iter()
        .copied()
        .filter(|package| {
            let alternative = ALTERNATIVES
                .iter()
                .find(|(name, _)| name == package)
                .map(|(_, alt)| *alt);
            !pubspec.declares(package) && !alternative.is_some_and(|alt| pubspec.declares(alt))
        })
        .collect())
}

/// Nearest `pubspec.yaml` in `start` or one of its ancestors.
pub async fn find_pubspec(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PUBSPEC_FILE);
        if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            return Some(candidate);
        }
    }
    None
}

/// Spawn the check. The task warns about, and resolves to, the missing
/// packages; it resolves to nothing when no readable pubspec is found.
pub fn spawn_check(target: PathBuf, required: Vec<&'static str>) -> JoinHandle<Vec<&'static str>> {
    tokio::spawn(async move {
        let Some(pubspec) = find_pubspec(&target).await else {
            debug!(target = %target.display(), "No pubspec.yaml found, skipping dependency check");
            return Vec::new();
        };
        let contents = match tokio::fs::read_to_string(&pubspec).await {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %pubspec.display(), error = %e, "Cannot read pubspec.yaml");
                return Vec::new();
            }
        };
        let missing = match missing_dependencies(&contents, &required) {
            Ok(missing) => missing,
            Err(e) => {
                debug!(path = %pubspec.display(), error = %e, "Cannot parse pubspec.yaml");
                return Vec::new();
            }
        };

        for package in &missing {
            warn!(
                package,
                pubspec = %pubspec.display(),
                "Generated code imports a package missing from pubspec.yaml"
            );
        }
        missing
    })
}

/// Give a running check up to [`SETTLE_TIMEOUT`] to finish.
///
/// Returns the missing packages, or `None` if the check did not finish in
/// time or panicked.
pub async fn settle(check: JoinHandle<Vec<&'static str>>) -> Option<Vec<&'static str>> {
    match tokio::time::timeout(SETTLE_TIMEOUT, check).await {
        Ok(Ok(missing)) => Some(missing),
        Ok(Err(e)) => {
            debug!(error = %e, "Dependency check failed");
            None
        }
        Err(_) => {
            debug!("Dependency check still running at exit, skipped");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use featgen_core::prelude::{ArchitecturePlanner, DataSourceVariant};

    const PUBSPEC: &str = "\
name: shop
environment:
  sdk: '>=3.0.0 <4.0.0'
  retrofit: not-a-dependency

dependencies:
  flutter:
    sdk: flutter
  flutter_bloc: ^8.1.3
  equatable: ^2.0.5

dev_dependencies:
  build_runner: ^2.4.0

flutter:
  uses-material-design: true
";

    fn spec(cubit: bool, equatable: bool, freezed: bool) -> FeatureSpec {
        FeatureSpec::builder()
            .feature_name("cart")
            .cubit(cubit)
            .equatable(equatable)
            .freezed(freezed)
            .build()
            .unwrap()
    }

    /// Package names of every `import 'package:...'` in the generated files.
    fn imported_packages(spec: &FeatureSpec) -> BTreeSet<String> {
        let blueprint = ArchitecturePlanner::new()
            .plan(spec, Path::new("/app/lib"))
            .unwrap();
        blueprint
            .files()
            .flat_map(|f| {
                let content = f.template.render(spec);
                content
                    .lines()
                    .filter_map(|line| line.trim().strip_prefix("import 'package:"))
                    .filter_map(|rest| rest.split_once('/'))
                    .map(|(package, _)| package.to_string())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn flutter_bloc_satisfies_bloc() {
        assert_eq!(
            missing_dependencies(PUBSPEC, &["bloc", "equatable", "retrofit"]).unwrap(),
            vec!["retrofit"]
        );
    }

    #[test]
    fn keys_outside_dependency_tables_are_not_packages() {
        assert_eq!(
            missing_dependencies(PUBSPEC, &["name", "sdk", "uses-material-design"]).unwrap(),
            vec!["name", "sdk", "uses-material-design"]
        );
    }

    #[test]
    fn flow_mappings_are_read() {
        let pubspec = "name: shop\ndependencies: {flutter_bloc: ^8.1.3, retrofit: ^4.0.0, equatable: ^2.0.5}\n";
        assert!(
            missing_dependencies(pubspec, &["bloc", "retrofit", "equatable"])
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn dev_dependencies_count_and_empty_tables_are_allowed() {
        let pubspec = "name: shop\ndependencies:\ndev_dependencies:\n  retrofit: ^4.0.0\n";
        assert_eq!(
            missing_dependencies(pubspec, &["retrofit", "equatable"]).unwrap(),
            vec!["equatable"]
        );
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(missing_dependencies("dependencies: [unclosed", &["bloc"]).is_err());
    }

    #[test]
    fn required_packages_follow_code_style() {
        let plain = required_packages(&spec(false, false, false));
        assert!(plain.contains(&"meta"));
        assert!(plain.contains(&"freezed_annotation"));
        assert!(!plain.contains(&"equatable"));

        assert!(required_packages(&spec(true, true, false)).contains(&"equatable"));

        let freezed = required_packages(&spec(false, true, true));
        assert!(!freezed.contains(&"equatable"));
        assert!(!freezed.contains(&"meta"));
    }

    #[test]
    fn required_packages_match_generated_imports() {
        for cubit in [false, true] {
            for equatable in [false, true] {
                for freezed in [false, true] {
                    for data_source in [
                        DataSourceVariant::Both,
                        DataSourceVariant::LocalOnly,
                        DataSourceVariant::RemoteOnly,
                    ] {
                        let spec = FeatureSpec::builder()
                            .feature_name("cart")
                            .cubit(cubit)
                            .equatable(equatable)
                            .freezed(freezed)
                            .data_source(data_source)
                            .build()
                            .unwrap();

                        let required: BTreeSet<String> = required_packages(&spec)
                            .into_iter()
                            .map(str::to_string)
                            .collect();
                        assert_eq!(
                            imported_packages(&spec),
                            required,
                            "cubit={cubit} equatable={equatable} freezed={freezed} {data_source}"
                        );
                    }
                }
            }
        }
    }

    #[tokio::test]
    async fn pubspec_is_found_in_an_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join("lib");
        std::fs::create_dir(&lib).unwrap();
        std::fs::write(dir.path().join(PUBSPEC_FILE), PUBSPEC).unwrap();

        assert_eq!(find_pubspec(&lib).await, Some(dir.path().join(PUBSPEC_FILE)));
    }

    #[tokio::test]
    async fn settled_check_reports_missing_packages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PUBSPEC_FILE), PUBSPEC).unwrap();

        let check = spawn_check(dir.path().to_path_buf(), vec!["bloc", "retrofit"]);

        assert_eq!(settle(check).await, Some(vec!["retrofit"]));
    }

    #[tokio::test]
    async fn check_without_pubspec_reports_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let check = spawn_check(dir.path().to_path_buf(), vec!["bloc"]);
        assert_eq!(settle(check).await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn settle_gives_up_on_a_stuck_check() {
        let stuck = tokio::spawn(std::future::pending::<Vec<&'static str>>());
        assert_eq!(settle(stuck).await, None);
    }
}
