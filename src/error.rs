use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tokenset operations
#[derive(Error, Diagnostic, Debug)]
pub enum TokenError {
    #[error("Token path '{path}' not found: no entry for '{segment}'")]
    #[diagnostic(
        code(tokenset::path::not_found),
        help("Run `tokenset list` to see every resolvable path")
    )]
    TokenPathNotFound { path: String, segment: String },

    #[error("Token path '{path}' resolves to a group, not a token")]
    #[diagnostic(
        code(tokenset::path::not_scalar),
        help("Extend the path down to a leaf, e.g. 'typography.fontSize.lg'")
    )]
    TokenPathNotScalar { path: String },

    #[error("Invalid base class name: {value:?}")]
    #[diagnostic(
        code(tokenset::classes::invalid_base),
        help("Base classes must be non-empty and use only letters, digits, '-', '_' and whitespace")
    )]
    InvalidBaseClassName { value: String },

    #[error("Unknown token category: {name}")]
    #[diagnostic(
        code(tokenset::category),
        help("Expected one of: colors, spacing, typography, animations, radius, shadows")
    )]
    UnknownCategory { name: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tokenset::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tokenset::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(tokenset::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = TokenError::TokenPathNotFound {
            path: "colors.nope".to_string(),
            segment: "nope".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Token path 'colors.nope' not found: no entry for 'nope'"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let err = TokenError::TokenPathNotScalar {
            path: "colors".to_string(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("tokenset::path::not_scalar"));
    }
}
