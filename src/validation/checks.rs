//! Self-checks for the token registry and component mappings.
//!
//! Each check returns a `CheckResult`.

use crate::registry::{all_tokens, is_token_reference, tokens_in_category};
use crate::resolver::{unchecked_token_var, validate_token_path};
use crate::styles::style_token_paths;
use crate::types::TokenCategory;

use super::mapping::MappingTable;
use super::diagnostic::{Check, CheckResult};

/// Check that every token is a `var(--...)` reference.
pub fn check_reference_shape() -> CheckResult {
    let mut result = CheckResult::new();

    for (path, value) in all_tokens() {
        if !is_token_reference(value) {
            let message = format!("'{}' is not a var(--...) reference", value);
            result.record(Check::ReferenceShape, path, message);
        }
    }

    result
}

/// Check that flat-category tokens use their category's prefix.
pub fn check_category_prefixes() -> CheckResult {
    let mut result = CheckResult::new();

    for category in TokenCategory::ALL.into_iter().filter(|c| !c.is_nested()) {
        let expected = format!("var(--{}-", category.prefix());
        for (key, value) in tokens_in_category(category) {
            if !value.starts_with(&expected) {
                result.record(
                    Check::CategoryPrefix,
                    format!("{}.{}", category, key),
                    format!("'{}' does not start with '--{}-'", value, category.prefix()),
                );
            }
        }
    }

    result
}

/// Check that every path used by style derivation resolves.
pub fn check_style_paths() -> CheckResult {
    let mut result = CheckResult::new();

    for path in style_token_paths() {
        if !validate_token_path(path) {
            result.record(Check::StylePaths, path, "style table refers to an unknown path");
        }
    }

    result
}

/// Check that every component mapping refers to resolvable paths.
pub fn check_mapping_paths(mappings: &MappingTable) -> CheckResult {
    let mut result = CheckResult::new();

    for (component_type, mapping) in mappings.iter() {
        for path in mapping.token_paths() {
            if !validate_token_path(path) {
                let message = format!("maps to unknown token path '{}'", path);
                result.record(Check::MappingPaths, component_type, message);
            }
        }
    }

    result
}

/// Check that unchecked `var()` construction agrees with the registry.
///
/// Only flat categories are compared; nested categories do not follow a
/// single prefix.
pub fn check_unchecked_vars() -> CheckResult {
    let mut result = CheckResult::new();

    for category in TokenCategory::ALL.into_iter().filter(|c| !c.is_nested()) {
        for (key, value) in tokens_in_category(category) {
            let built = unchecked_token_var(category, &key);
            if built != value {
                result.record(
                    Check::UncheckedVar,
                    format!("{}.{}", category, key),
                    format!("unchecked_token_var gives '{}' but the registry has '{}'", built, value),
                );
            }
        }
    }

    result
}
