//! Registry self-check findings.
//!
//! Every finding belongs to one [`Check`], which fixes its code, severity
//! and remedy. Findings are reported grouped by check.

use std::collections::BTreeMap;
use std::fmt;

/// How much a finding matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// The registry self-checks, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Check {
    /// Token values are `var(--...)` references.
    ReferenceShape,
    /// Flat-category tokens carry their category's prefix.
    CategoryPrefix,
    /// Style derivation tables only name resolvable paths.
    StylePaths,
    /// Component mappings only name resolvable paths.
    MappingPaths,
    /// `unchecked_token_var` agrees with the registry.
    UncheckedVar,
}

impl Check {
    pub const ALL: [Check; 5] = [
        Check::ReferenceShape,
        Check::CategoryPrefix,
        Check::StylePaths,
        Check::MappingPaths,
        Check::UncheckedVar,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Check::ReferenceShape => "tokenset::check::reference-shape",
            Check::CategoryPrefix => "tokenset::check::category-prefix",
            Check::StylePaths => "tokenset::check::style-paths",
            Check::MappingPaths => "tokenset::check::mapping-paths",
            Check::UncheckedVar => "tokenset::check::unchecked-var",
        }
    }

    /// Drift in `unchecked_token_var` only affects callers that bypass the
    /// registry, so it is a warning. Everything else is an error.
    pub fn severity(self) -> Severity {
        match self {
            Check::UncheckedVar => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn help(self) -> Option<&'static str> {
        match self {
            Check::ReferenceShape => Some("Token values must reference a CSS custom property"),
            Check::CategoryPrefix => Some("Rename the custom property to match its category"),
            Check::StylePaths => None,
            Check::MappingPaths => Some("Run `tokenset list` to see every resolvable path"),
            Check::UncheckedVar => Some("Use get_token_value for this token"),
        }
    }
}

/// One finding: which check raised it, about what, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub check: Check,
    /// The token path or component type the finding is about.
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        self.check.severity()
    }

    pub fn code(&self) -> &'static str {
        self.check.code()
    }
}

/// Error and warning totals for a check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub errors: usize,
    pub warnings: usize,
}

/// Findings collected from one or more checks.
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    diagnostics: Vec<Diagnostic>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding for `check` about `subject`.
    pub fn record(&mut self, check: Check, subject: impl Into<String>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            check,
            subject: subject.into(),
            message: message.into(),
        });
    }

    /// Append every finding from `other`.
    pub fn extend_from(&mut self, other: CheckResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn tally(&self) -> Tally {
        self.diagnostics
            .iter()
            .fold(Tally::default(), |mut tally, d| {
                match d.severity() {
                    Severity::Error => tally.errors += 1,
                    Severity::Warning => tally.warnings += 1,
                }
                tally
            })
    }

    /// Whether the run should fail: on any error, or on warnings when strict.
    pub fn fails(&self, strict: bool) -> bool {
        let tally = self.tally();
        tally.errors > 0 || (strict && tally.warnings > 0)
    }

    /// Findings grouped by check, in check order.
    pub fn by_check(&self) -> BTreeMap<Check, Vec<&Diagnostic>> {
        let mut groups: BTreeMap<Check, Vec<&Diagnostic>> = BTreeMap::new();
        for d in &self.diagnostics {
            groups.entry(d.check).or_default().push(d);
        }
        groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}
