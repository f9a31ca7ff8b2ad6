//! Token lookup by category/key pair or by dotted path.
//!
//! `get_token_value` is the checked entry point: it fails with a typed error
//! when a path does not lead to a token. `unchecked_token_var` builds a
//! reference string without consulting the registry at all.

use tracing::debug;

use crate::error::{Result, TokenError};
use crate::registry::{category_entries, DESIGN_TOKENS};
use crate::types::{TokenCategory, TokenEntry};

/// Get a token by category and direct key.
///
/// When `key` names a group inside a nested category (e.g. `fontSize` in
/// typography) this returns the group's first token rather than failing.
/// That partial lookup is lossy; use `get_token_value` with a full path to
/// address nested tokens.
pub fn get_token(category: TokenCategory, key: &str) -> Option<&'static str> {
    let entry = TokenEntry::Node(category_entries(category)).child(key)?;
    match *entry {
        TokenEntry::Leaf(value) => Some(value),
        TokenEntry::Node(children) => children.first().and_then(|(_, first)| first.as_leaf()),
    }
}

/// Resolve a dotted token path such as `typography.fontSize.lg`.
pub fn get_token_value(path: &str) -> Result<&'static str> {
    let mut current = &DESIGN_TOKENS;

    for segment in path.split('.') {
        current = current.child(segment).ok_or_else(|| {
            debug!(path, segment, "token path segment not found");
            TokenError::TokenPathNotFound {
                path: path.to_string(),
                segment: segment.to_string(),
            }
        })?;
    }

    current.as_leaf().ok_or_else(|| TokenError::TokenPathNotScalar {
        path: path.to_string(),
    })
}

/// Check whether `key` exists directly under a category.
///
/// Group keys of nested categories count as present.
pub fn validate_token(category: TokenCategory, key: &str) -> bool {
    TokenEntry::Node(category_entries(category))
        .child(key)
        .is_some()
}

/// Check whether a dotted path resolves to a token. Never fails.
pub fn validate_token_path(path: &str) -> bool {
    get_token_value(path).is_ok()
}

/// Build `var(--<prefix>-<token>)` for a category without checking the registry.
///
/// The result may name a custom property that no token defines, and nested
/// tokens built this way do not match the registry's own references (e.g.
/// `typography` + `size-lg` gives `var(--font-size-lg)`, but `lineHeight`
/// tokens live under `--line-height-*`). Prefer `get_token_value` wherever
/// the token must exist.
pub fn unchecked_token_var(category: TokenCategory, token: &str) -> String {
    format!("var(--{}-{})", category.prefix(), token)
}
