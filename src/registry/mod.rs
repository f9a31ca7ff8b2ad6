//! Design token registry.
//!
//! The registry is a constant table built at compile time: six categories,
//! each a group of named entries. Colour, spacing, radius and shadow tokens
//! are flat; typography and animation tokens are grouped one level deeper
//! (`typography.fontSize.lg`, `animations.ease.bounce`).
//!
//! # Example
//!
//! ```
//! use tokenset::registry::tokens_in_category;
//! use tokenset::TokenCategory;
//!
//! let typography = tokens_in_category(TokenCategory::Typography);
//! assert_eq!(typography["fontFamily.sans"], "var(--font-sans)");
//! ```

mod tokens;

use std::collections::BTreeMap;

use crate::types::{TokenCategory, TokenEntry};

/// The full token table, keyed by category name.
pub const DESIGN_TOKENS: TokenEntry = TokenEntry::Node(&[
    ("colors", TokenEntry::Node(tokens::COLORS)),
    ("spacing", TokenEntry::Node(tokens::SPACING)),
    ("typography", TokenEntry::Node(tokens::TYPOGRAPHY)),
    ("animations", TokenEntry::Node(tokens::ANIMATIONS)),
    ("radius", TokenEntry::Node(tokens::RADIUS)),
    ("shadows", TokenEntry::Node(tokens::SHADOWS)),
]);

/// Get the entries of a category in declaration order.
pub fn category_entries(category: TokenCategory) -> &'static [(&'static str, TokenEntry)] {
    match category {
        TokenCategory::Colors => tokens::COLORS,
        TokenCategory::Spacing => tokens::SPACING,
        TokenCategory::Typography => tokens::TYPOGRAPHY,
        TokenCategory::Animations => tokens::ANIMATIONS,
        TokenCategory::Radius => tokens::RADIUS,
        TokenCategory::Shadows => tokens::SHADOWS,
    }
}

/// Get every token of a category, flattened to dot-notation keys.
///
/// Flat categories pass through unchanged. Nested groups are joined at any
/// depth, so `typography.fontFamily.sans` appears as `"fontFamily.sans"`.
pub fn tokens_in_category(category: TokenCategory) -> BTreeMap<String, &'static str> {
    let mut flat = BTreeMap::new();
    TokenEntry::Node(category_entries(category)).for_each_leaf("", &mut |key, value| {
        flat.insert(key, value);
    });
    flat
}

/// Get every token in the registry as `(full path, reference)` pairs.
///
/// Paths are in registry declaration order.
pub fn all_tokens() -> Vec<(String, &'static str)> {
    let mut all = Vec::new();
    DESIGN_TOKENS.for_each_leaf("", &mut |path, value| all.push((path, value)));
    all
}

/// Get the total number of resolvable tokens.
pub fn token_count() -> usize {
    all_tokens().len()
}

/// Check whether a value has the `var(--...)` reference shape.
pub fn is_token_reference(value: &str) -> bool {
    value
        .strip_prefix("var(--")
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(|name| !name.is_empty() && !name.contains(&['(', ')'][..]))
}
