//! Validation of applied design tokens.
//!
//! Three layers, from narrow to wide:
//! - `validate_token_application` compares one instance's styles with the
//!   tokens it should use
//! - `check_component_consistency` compares instances rendered with equal props
//! - `validate_design_system` runs both across every component type
//!
//! `check_registry` is separate: it lints the token table and component
//! mappings themselves.

mod application;
mod checks;
mod consistency;
mod diagnostic;
mod mapping;
mod system;

pub use application::{validate_token_application, TokenApplicationResult};
pub use consistency::{
    check_component_consistency, ComponentConsistencyResult, ComponentInstance, InstanceValue,
    StyleMismatch,
};
pub use mapping::{ComponentTokenMap, MappingTable};
pub use system::{
    validate_design_system, validate_design_system_with, ComponentInstances, DesignSystemReport,
};
pub use diagnostic::{Check, CheckResult, Diagnostic, Severity, Tally};

use crate::output::{plural, Printer};

/// Run all registry checks against the token table and mappings.
pub fn check_registry(mappings: &MappingTable) -> CheckResult {
    let mut result = checks::check_reference_shape();
    result.extend_from(checks::check_category_prefixes());
    result.extend_from(checks::check_style_paths());
    result.extend_from(checks::check_mapping_paths(mappings));
    result.extend_from(checks::check_unchecked_vars());
    result
}

/// Print check findings to stderr, one block per failing check.
pub fn print_diagnostics(result: &CheckResult, printer: &Printer) {
    for (check, findings) in result.by_check() {
        eprintln!(
            "{}[{}]: {}",
            printer.severity(check.severity()),
            check.code(),
            plural(findings.len(), "finding", "findings")
        );
        for d in findings {
            eprintln!("  {} {}", d.subject, printer.dim(&d.message));
        }
        if let Some(help) = check.help() {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }

    let tally = result.tally();
    let summary = format!(
        "{} and {}",
        plural(tally.errors, "error", "errors"),
        plural(tally.warnings, "warning", "warnings")
    );
    match (tally.errors, tally.warnings) {
        (0, 0) => printer.success("Checked", "no problems found"),
        (0, _) => printer.warning("Checked", &summary),
        _ => printer.error("Failed", &summary),
    }
}
