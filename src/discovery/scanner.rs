//! File system scanner for component fixtures.
//!
//! Recursively scans directories for `.components.yaml`, `.components.yml`
//! and `.components.json` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;
use crate::error::{Result, TokenError};

/// Encoding of a fixture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Yaml,
    Json,
}

/// Detect a fixture's format from its file name.
pub fn detect_fixture_format(path: &Path) -> Option<FixtureFormat> {
    let filename = path.file_name()?.to_str()?;

    if filename.ends_with(".components.yaml") || filename.ends_with(".components.yml") {
        Some(FixtureFormat::Yaml)
    } else if filename.ends_with(".components.json") {
        Some(FixtureFormat::Json)
    } else {
        None
    }
}

/// Scan a directory for fixture files, sorted by path.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file())
        .filter(|path| !manifest.is_excluded(path))
        .filter(|path| detect_fixture_format(path).is_some())
        .collect();

    found.sort();
    found
}

/// Scan files and directories for fixtures.
///
/// Files given explicitly are kept even without a fixture extension.
/// A path that does not exist is an error.
pub fn scan_paths(paths: &[PathBuf], manifest: &Manifest) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        if path.is_dir() {
            found.extend(scan_directory(path, manifest));
        } else if path.is_file() {
            found.push(path.clone());
        } else {
            return Err(TokenError::Io {
                path: path.clone(),
                message: "Fixture path not found".to_string(),
            });
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_detect_fixture_format() {
        assert_eq!(
            detect_fixture_format(Path::new("home.components.yaml")),
            Some(FixtureFormat::Yaml)
        );
        assert_eq!(
            detect_fixture_format(Path::new("ui/nav.components.yml")),
            Some(FixtureFormat::Yaml)
        );
        assert_eq!(
            detect_fixture_format(Path::new("/abs/blog.components.json")),
            Some(FixtureFormat::Json)
        );
        assert_eq!(detect_fixture_format(Path::new("tokenset.yaml")), None);
        assert_eq!(detect_fixture_format(Path::new("components.json")), None);
    }

    #[test]
    fn test_scan_directory_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pages/blog")).unwrap();
        fs::write(dir.path().join("home.components.yaml"), "components: {}").unwrap();
        fs::write(dir.path().join("pages/blog/post.components.json"), "{}").unwrap();
        fs::write(dir.path().join("pages/readme.md"), "# notes").unwrap();

        let found = scan_directory(dir.path(), &Manifest::default());
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| detect_fixture_format(p).is_some()));
    }

    #[test]
    fn test_scan_respects_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("a.components.yaml"), "").unwrap();
        fs::write(dir.path().join("drafts/b.components.yaml"), "").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };
        let found = scan_directory(dir.path(), &manifest);
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("a.components.yaml"));
    }

    #[test]
    fn test_scan_missing_directory() {
        let found = scan_directory(Path::new("/nonexistent/fixtures"), &Manifest::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_scan_paths_keeps_explicit_files() {
        let dir = tempdir().unwrap();
        let explicit = dir.path().join("snapshot.yaml");
        fs::write(&explicit, "components: {}").unwrap();

        let found = scan_paths(&[explicit.clone()], &Manifest::default()).unwrap();
        assert_eq!(found, vec![explicit]);
    }

    #[test]
    fn test_scan_paths_rejects_missing_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("typo.components.yaml");

        match scan_paths(&[missing.clone()], &Manifest::default()) {
            Err(TokenError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
