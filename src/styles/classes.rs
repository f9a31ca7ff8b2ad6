//! Class-name construction for styled components.

use crate::error::{Result, TokenError};
use crate::types::{Padding, Size, Variant};

/// Build a component's class list from its base classes and styling inputs.
///
/// Appends `variant-*`, `size-*` and `padding-*` for each provided input.
/// The base must be non-empty after trimming and contain only ASCII letters,
/// digits, `-`, `_` and whitespace.
///
/// ```
/// use tokenset::{create_component_classes, Padding, Size, Variant};
///
/// let classes =
///     create_component_classes("card", Some(Variant::Primary), Some(Size::Lg), Some(Padding::Md))?;
/// assert_eq!(classes, "card variant-primary size-lg padding-md");
/// # Ok::<(), tokenset::TokenError>(())
/// ```
pub fn create_component_classes(
    base_classes: &str,
    variant: Option<Variant>,
    size: Option<Size>,
    padding: Option<Padding>,
) -> Result<String> {
    let base = base_classes.trim();
    if base.is_empty() || !base.chars().all(is_class_char) {
        return Err(TokenError::InvalidBaseClassName {
            value: base_classes.to_string(),
        });
    }

    let mut classes: Vec<String> = base.split_whitespace().map(str::to_string).collect();
    if let Some(variant) = variant {
        classes.push(format!("variant-{}", variant));
    }
    if let Some(size) = size {
        classes.push(format!("size-{}", size));
    }
    if let Some(padding) = padding {
        classes.push(format!("padding-{}", padding));
    }

    Ok(classes.join(" "))
}

fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c.is_whitespace()
}
