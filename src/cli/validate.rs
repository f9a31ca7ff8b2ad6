//! Validate command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::discover_with_manifest;
use crate::error::{Result, TokenError};
use crate::output::{display_path, plural, Printer};
use crate::validation::{validate_design_system_with, DesignSystemReport};

/// Validate rendered component fixtures against their tokens
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Fixture files or directories (default: manifest fixtures, or .)
    pub paths: Vec<PathBuf>,

    /// Print the full report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Fail on warnings as well as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, manifest: Option<&Path>, printer: &Printer) -> Result<()> {
    let discovery = discover_with_manifest(".", &args.paths, manifest)?;
    if let Some(path) = &discovery.manifest_path {
        printer.info("Manifest", &display_path(path));
    }

    if discovery.fixtures.is_empty() {
        printer.warning("Skipped", "no component fixtures found");
        return Ok(());
    }

    printer.status(
        "Validating",
        &plural(discovery.fixtures.len(), "fixture", "fixtures"),
    );
    let components = discovery.load_components()?;
    let report = validate_design_system_with(&components, &discovery.manifest.mapping_table());

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| TokenError::Parse {
            message: format!("Failed to encode report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    print_report(&report, printer);

    verdict(&report, args.strict || discovery.manifest.strict)
}

/// Fail on any error, or on any warning when strict.
fn verdict(report: &DesignSystemReport, strict: bool) -> Result<()> {
    if report.is_valid && (!strict || report.warnings.is_empty()) {
        return Ok(());
    }

    Err(TokenError::Validation {
        message: format!(
            "{} and {}",
            plural(report.errors.len(), "error", "errors"),
            plural(report.warnings.len(), "warning", "warnings")
        ),
        help: Some("Run with --json to see every token application".to_string()),
    })
}

fn print_report(report: &DesignSystemReport, printer: &Printer) {
    for warning in &report.warnings {
        printer.warning("Warning", warning);
    }
    for error in &report.errors {
        printer.error("Mismatch", error);
    }

    let summary = format!(
        "{} of {} consistent across {}",
        report.consistent_count(),
        plural(report.token_applications.len(), "token application", "token applications"),
        plural(report.components.len(), "component type", "component types"),
    );
    if report.is_valid {
        printer.success("Finished", &summary);
    } else {
        printer.error("Failed", &summary);
    }
}
