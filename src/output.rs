//! Status output for the tokenset CLI.
//!
//! Lines are `<verb> <message>` with the verb right-aligned and coloured by
//! tone. Status lines go to stderr so stdout only ever carries token
//! values, class strings and JSON.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::Severity;

const VERB_WIDTH: usize = 12;

/// Colour class of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Note,
    Caution,
    Failure,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[1;32m",
            Tone::Note => "\x1b[1;36m",
            Tone::Caution => "\x1b[1;33m",
            Tone::Failure => "\x1b[1;31m",
        }
    }
}

impl From<Severity> for Tone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => Tone::Caution,
            Severity::Error => Tone::Failure,
        }
    }
}

const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Writes status lines to stderr, coloured when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits ANSI codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Render a status line without printing it.
    pub fn line(&self, tone: Tone, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_WIDTH$}");
        format!("{} {}", self.paint(tone.ansi(), &verb), message)
    }

    pub fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let line = self.line(tone, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }

    /// e.g. "  Validating 3 fixtures"
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn success(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Caution, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.emit(Tone::Failure, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// A severity label ("error", "warning") in its tone's colour.
    pub fn severity(&self, severity: Severity) -> String {
        self.paint(Tone::from(severity).ansi(), &severity.to_string())
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "fixture", "fixtures")` gives "1 fixture".
pub fn plural(n: usize, singular: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { many })
}

/// Show `path` relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "fixture", "fixtures"), "1 fixture");
        assert_eq!(plural(0, "token", "tokens"), "0 tokens");
        assert_eq!(plural(24, "token", "tokens"), "24 tokens");
    }

    #[test]
    fn test_plain_line_aligns_verb() {
        let printer = Printer::plain();
        assert_eq!(
            printer.line(Tone::Progress, "Checking", "87 tokens"),
            "    Checking 87 tokens"
        );
    }

    #[test]
    fn test_plain_printer_has_no_ansi() {
        let printer = Printer::plain();
        assert_eq!(printer.dim("help:"), "help:");
        assert_eq!(printer.severity(Severity::Error), "error");
        assert_eq!(printer.severity(Severity::Warning), "warning");
    }

    #[test]
    fn test_coloured_severity_uses_tone() {
        let printer = Printer { color: true };
        assert_eq!(
            printer.severity(Severity::Warning),
            "\x1b[1;33mwarning\x1b[0m"
        );
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }
}
