//! Fixture loading.
//!
//! A fixture lists rendered component instances by component type:
//!
//! ```yaml
//! components:
//!   button:
//!     - id: hero-cta
//!       props: { variant: primary, size: lg }
//!       styles:
//!         backgroundColor: var(--color-primary)
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, TokenError};
use crate::validation::ComponentInstances;

use super::scanner::{detect_fixture_format, FixtureFormat};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Fixture {
    components: ComponentInstances,
}

/// Parse fixture content in the given format.
pub fn parse_fixture(content: &str, format: FixtureFormat) -> Result<ComponentInstances> {
    if content.trim().is_empty() {
        return Ok(ComponentInstances::new());
    }

    let fixture: Fixture = match format {
        FixtureFormat::Yaml => serde_yaml::from_str(content).map_err(|e| TokenError::Parse {
            message: format!("Invalid fixture: {}", e),
            help: Some("Expected `components: {<type>: [{id, props, styles}]}`".to_string()),
        })?,
        FixtureFormat::Json => serde_json::from_str(content).map_err(|e| TokenError::Parse {
            message: format!("Invalid fixture: {}", e),
            help: Some(r#"Expected {"components": {"<type>": [{"id", "props", "styles"}]}}"#.to_string()),
        })?,
    };

    Ok(fixture.components)
}

/// Load a single fixture file.
///
/// Files without a fixture extension are read as JSON when they end in
/// `.json` and as YAML otherwise.
pub fn load_fixture(path: &Path) -> Result<ComponentInstances> {
    let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read fixture: {}", e),
    })?;

    let format = detect_fixture_format(path).unwrap_or_else(|| {
        if path.extension().is_some_and(|ext| ext == "json") {
            FixtureFormat::Json
        } else {
            FixtureFormat::Yaml
        }
    });

    parse_fixture(&content, format).map_err(|e| match e {
        TokenError::Parse { message, help } => TokenError::Parse {
            message: format!("{}: {}", path.display(), message),
            help,
        },
        other => other,
    })
}

/// Load and merge fixtures; instances of the same type are appended in order.
pub fn load_fixtures(paths: &[PathBuf]) -> Result<ComponentInstances> {
    let mut merged = ComponentInstances::new();

    for path in paths {
        let components = load_fixture(path)?;
        debug!(path = %path.display(), types = components.len(), "loaded fixture");
        for (component_type, instances) in components {
            merged.entry(component_type).or_default().extend(instances);
        }
    }

    Ok(merged)
}
