//! Component styling vocabularies: variant, size and padding.
//!
//! Size and padding share the `sm`/`lg` spellings but differ in the middle
//! value (`default` vs `md`). They are separate types on purpose.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Colour variant of a component.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Info,
}

/// Size of a component; drives padding and font size together.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Default,
    Lg,
}

/// Padding of a container component.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    Sm,
    #[default]
    Md,
    Lg,
}

macro_rules! vocabulary {
    ($ty:ident, $label:literal, [$($variant:ident => $name:literal),+ $(,)?]) => {
        impl $ty {
            /// Every value, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Get the lowercase name used in class names and fixtures.
            pub fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            /// Look up a value by name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some($ty::$variant),)+
                    _ => None,
                }
            }

            /// Look up a value by name, falling back to the default.
            pub fn from_name_or_default(name: &str) -> Self {
                Self::from_name(name).unwrap_or_default()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl FromStr for $ty {
            type Err = TokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| TokenError::Parse {
                    message: format!("Unknown {} '{}'", $label, s),
                    help: Some(format!(
                        "Expected one of: {}",
                        Self::ALL.iter().map(|v| v.name()).collect::<Vec<_>>().join(", ")
                    )),
                })
            }
        }
    };
}

vocabulary!(Variant, "variant", [
    Primary => "primary",
    Secondary => "secondary",
    Success => "success",
    Warning => "warning",
    Info => "info",
]);

vocabulary!(Size, "size", [
    Sm => "sm",
    Default => "default",
    Lg => "lg",
]);

vocabulary!(Padding, "padding", [
    Sm => "sm",
    Md => "md",
    Lg => "lg",
]);
