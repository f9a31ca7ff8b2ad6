//! Style derivation from component variant, size and padding.
//!
//! Each derivation goes through a fixed table of token paths, and every
//! value is resolved through the registry. All functions are total.

mod classes;

use serde::Serialize;

use crate::resolver::get_token_value;
use crate::types::{Padding, Size, StyleMap, Variant};

pub use classes::create_component_classes;

/// Token paths bound to a variant's background, foreground and border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantTokenPaths {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
}

/// Token paths bound to a size's padding and font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeTokenPaths {
    pub padding: &'static str,
    pub font_size: &'static str,
}

/// Get the token paths for a variant.
///
/// `info` shares its paths with `primary`.
pub fn variant_token_paths(variant: Variant) -> VariantTokenPaths {
    let (background, foreground, border) = match variant {
        Variant::Primary | Variant::Info => {
            ("colors.primary", "colors.primary-foreground", "colors.primary")
        }
        Variant::Secondary => (
            "colors.secondary",
            "colors.secondary-foreground",
            "colors.secondary",
        ),
        Variant::Success => ("colors.success", "colors.primary-foreground", "colors.success"),
        Variant::Warning => ("colors.warning", "colors.accent-foreground", "colors.warning"),
    };
    VariantTokenPaths {
        background,
        foreground,
        border,
    }
}

/// Get the token paths for a size.
pub fn size_token_paths(size: Size) -> SizeTokenPaths {
    let (padding, font_size) = match size {
        Size::Sm => ("spacing.sm", "typography.fontSize.sm"),
        Size::Default => ("spacing.md", "typography.fontSize.base"),
        Size::Lg => ("spacing.lg", "typography.fontSize.lg"),
    };
    SizeTokenPaths { padding, font_size }
}

/// Get the token path for a padding.
pub fn padding_token_path(padding: Padding) -> &'static str {
    match padding {
        Padding::Sm => "spacing.sm",
        Padding::Md => "spacing.md",
        Padding::Lg => "spacing.lg",
    }
}

/// Every token path the style tables refer to.
pub fn style_token_paths() -> Vec<&'static str> {
    let mut paths = Vec::new();
    for &variant in Variant::ALL {
        let p = variant_token_paths(variant);
        paths.extend([p.background, p.foreground, p.border]);
    }
    for &size in Size::ALL {
        let p = size_token_paths(size);
        paths.extend([p.padding, p.font_size]);
    }
    paths.extend(Padding::ALL.iter().map(|&p| padding_token_path(p)));
    paths
}

// The tables above only name registry paths (checked by `check_style_paths`),
// so a miss here would be a table bug rather than bad input.
fn resolve(path: &'static str) -> &'static str {
    get_token_value(path).unwrap_or_default()
}

/// Colour styles for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantStyles {
    pub background_color: &'static str,
    pub color: &'static str,
    pub border_color: &'static str,
}

impl VariantStyles {
    /// Convert to a style-attribute map.
    pub fn to_style_map(&self) -> StyleMap {
        style_map([
            ("backgroundColor", self.background_color),
            ("color", self.color),
            ("borderColor", self.border_color),
        ])
    }
}

/// Padding and font size for a component size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeStyles {
    pub padding: &'static str,
    pub font_size: &'static str,
}

impl SizeStyles {
    /// Convert to a style-attribute map.
    pub fn to_style_map(&self) -> StyleMap {
        style_map([("padding", self.padding), ("fontSize", self.font_size)])
    }
}

/// Padding for a container component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddingStyles {
    pub padding: &'static str,
}

impl PaddingStyles {
    /// Convert to a style-attribute map.
    pub fn to_style_map(&self) -> StyleMap {
        style_map([("padding", self.padding)])
    }
}

fn style_map<const N: usize>(entries: [(&str, &str); N]) -> StyleMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Get the colour styles for a variant.
pub fn get_variant_styles(variant: Variant) -> VariantStyles {
    let paths = variant_token_paths(variant);
    VariantStyles {
        background_color: resolve(paths.background),
        color: resolve(paths.foreground),
        border_color: resolve(paths.border),
    }
}

/// Get the padding and font size for a size.
pub fn get_size_styles(size: Size) -> SizeStyles {
    let paths = size_token_paths(size);
    SizeStyles {
        padding: resolve(paths.padding),
        font_size: resolve(paths.font_size),
    }
}

/// Get the padding for a padding value.
pub fn get_padding_styles(padding: Padding) -> PaddingStyles {
    PaddingStyles {
        padding: resolve(padding_token_path(padding)),
    }
}

/// Merge variant, size and padding styles into one map.
///
/// Padding wins over the size's padding when both are given.
pub fn component_styles(
    variant: Option<Variant>,
    size: Option<Size>,
    padding: Option<Padding>,
) -> StyleMap {
    let mut styles = StyleMap::new();
    if let Some(variant) = variant {
        styles.extend(get_variant_styles(variant).to_style_map());
    }
    if let Some(size) = size {
        styles.extend(get_size_styles(size).to_style_map());
    }
    if let Some(padding) = padding {
        styles.extend(get_padding_styles(padding).to_style_map());
    }
    styles
}
