//! Check command implementation.

use std::path::Path;

use crate::discovery::load_manifest;
use crate::error::{Result, TokenError};
use crate::output::{display_path, plural, Printer};
use crate::registry::token_count;
use crate::validation::{check_registry, print_diagnostics};

pub fn run(manifest: Option<&Path>, printer: &Printer) -> Result<()> {
    let (manifest, manifest_path) = load_manifest(Path::new("."), manifest)?;
    if let Some(path) = &manifest_path {
        printer.info("Manifest", &display_path(path));
    }

    let mappings = manifest.mapping_table();
    printer.status(
        "Checking",
        &format!(
            "{} and {}",
            plural(token_count(), "token", "tokens"),
            plural(mappings.len(), "component mapping", "component mappings")
        ),
    );

    let result = check_registry(&mappings);
    print_diagnostics(&result, printer);

    if result.fails(manifest.strict) {
        return Err(TokenError::Validation {
            message: "token registry check failed".to_string(),
            help: None,
        });
    }

    Ok(())
}
