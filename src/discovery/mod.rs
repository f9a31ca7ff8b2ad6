//! Manifest lookup and fixture discovery.
//!
//! # Example
//!
//! ```ignore
//! use tokenset::discovery::discover;
//!
//! let result = discover(".", &[])?;
//! let components = result.load_components()?;
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::validation::ComponentInstances;

pub use loader::{load_fixture, load_fixtures, parse_fixture};
pub use manifest::Manifest;
pub use scanner::{detect_fixture_format, scan_directory, scan_paths, FixtureFormat};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "tokenset.yaml";

/// Result of discovering fixtures in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The loaded manifest (default if no tokenset.yaml was found).
    pub manifest: Manifest,

    /// Path of the manifest, if one was found.
    pub manifest_path: Option<PathBuf>,

    /// Discovered fixture files.
    pub fixtures: Vec<PathBuf>,
}

impl DiscoveryResult {
    /// Load and merge every discovered fixture.
    pub fn load_components(&self) -> Result<ComponentInstances> {
        load_fixtures(&self.fixtures)
    }
}

/// Load the manifest from `explicit`, or from `root/tokenset.yaml` if present.
pub fn load_manifest(root: &Path, explicit: Option<&Path>) -> Result<(Manifest, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((Manifest::load(path)?, Some(path.to_path_buf())));
    }

    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        Ok((Manifest::load(&manifest_path)?, Some(manifest_path)))
    } else {
        Ok((Manifest::default(), None))
    }
}

/// Discover fixtures in a project directory.
///
/// When `paths` is empty, the manifest's fixture paths (relative to `root`)
/// are scanned instead.
pub fn discover(root: impl AsRef<Path>, paths: &[PathBuf]) -> Result<DiscoveryResult> {
    discover_with_manifest(root, paths, None)
}

/// Discover fixtures, reading the manifest from an explicit path if given.
///
/// Relative manifest fixture paths resolve against the manifest's own
/// directory, so `--manifest proj/tokenset.yaml` scans under `proj/`.
pub fn discover_with_manifest(
    root: impl AsRef<Path>,
    paths: &[PathBuf],
    manifest_path: Option<&Path>,
) -> Result<DiscoveryResult> {
    let root = root.as_ref();
    let (manifest, manifest_path) = load_manifest(root, manifest_path)?;

    let sources: Vec<PathBuf> = if paths.is_empty() {
        let base = manifest_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(root);
        manifest
            .effective_fixtures()
            .iter()
            .map(|source| base.join(source))
            .collect()
    } else {
        paths.to_vec()
    };

    let fixtures = scan_paths(&sources, &manifest)?;

    Ok(DiscoveryResult {
        manifest,
        manifest_path,
        fixtures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();

        let result = discover(dir.path(), &[]).unwrap();

        assert!(result.manifest_path.is_none());
        assert!(result.fixtures.is_empty());
    }

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("home.components.yaml"), "components: {}").unwrap();

        let result = discover(dir.path(), &[]).unwrap();

        assert!(result.manifest_path.is_none());
        assert_eq!(result.fixtures.len(), 1);
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("tokenset.yaml"),
            "strict: true\nfixtures:\n  - ui/\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("ui")).unwrap();
        fs::write(dir.path().join("ui/nav.components.yaml"), "components: {}").unwrap();
        fs::write(dir.path().join("ignored.components.yaml"), "components: {}").unwrap();

        let result = discover(dir.path(), &[]).unwrap();

        assert!(result.manifest.strict);
        assert!(result.manifest_path.is_some());
        assert_eq!(result.fixtures.len(), 1);
        assert!(result.fixtures[0].ends_with("ui/nav.components.yaml"));
    }

    #[test]
    fn test_manifest_fixtures_resolve_from_manifest_dir() {
        let project = tempdir().unwrap();
        fs::write(project.path().join("tokenset.yaml"), "fixtures: [ui/]\n").unwrap();
        fs::create_dir_all(project.path().join("ui")).unwrap();
        fs::write(project.path().join("ui/nav.components.yaml"), "components: {}").unwrap();

        let elsewhere = tempdir().unwrap();
        let manifest = project.path().join("tokenset.yaml");
        let result = discover_with_manifest(elsewhere.path(), &[], Some(&manifest)).unwrap();

        assert_eq!(result.manifest_path.as_deref(), Some(manifest.as_path()));
        assert_eq!(result.fixtures.len(), 1);
        assert!(result.fixtures[0].starts_with(project.path()));
        assert!(result.fixtures[0].ends_with("ui/nav.components.yaml"));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("typo.components.yaml");

        let err = discover(dir.path(), &[missing]).unwrap_err();
        assert!(matches!(err, crate::error::TokenError::Io { .. }));
    }

    #[test]
    fn test_explicit_paths_override_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tokenset.yaml"), "fixtures: [ui/]\n").unwrap();
        let explicit = dir.path().join("one.components.yaml");
        fs::write(&explicit, "components: {}").unwrap();

        let result = discover(dir.path(), &[explicit.clone()]).unwrap();
        assert_eq!(result.fixtures, vec![explicit]);
    }
}
