//! Project manifest (tokenset.yaml) parsing.
//!
//! The manifest holds validation settings and extra component mappings
//! layered over the builtin ones.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::validation::{ComponentTokenMap, MappingTable};

/// Project manifest loaded from tokenset.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Treat validation warnings as failures.
    pub strict: bool,

    /// Fixture files or directories validated when none are given.
    /// Defaults to the current directory if empty.
    pub fixtures: Vec<String>,

    /// Patterns to exclude from fixture discovery.
    pub excludes: Vec<String>,

    /// Component mappings added to (or replacing) the builtin table.
    pub components: BTreeMap<String, ComponentTokenMap>,
}

impl Manifest {
    /// Load manifest from a tokenset.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| TokenError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check tokenset.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Get effective fixture paths, defaulting to current directory.
    pub fn effective_fixtures(&self) -> Vec<String> {
        if self.fixtures.is_empty() {
            vec![".".to_string()]
        } else {
            self.fixtures.clone()
        }
    }

    /// Builtin component mappings with this manifest's mappings layered on top.
    pub fn mapping_table(&self) -> MappingTable {
        let mut table = MappingTable::builtin();
        table.extend(self.components.clone());
        table
    }
}

/// Simple glob pattern matching.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        // **/dir/* matches anything inside dir anywhere in the path
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir))
                || path.contains(&format!("/{}/", dir));
        }
        return path.contains(suffix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix))
            || path.contains(&format!("/{}/", prefix));
    }

    path.contains(pattern)
}
