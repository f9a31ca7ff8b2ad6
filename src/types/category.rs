//! Token categories and their CSS custom-property prefixes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// One of the six top-level token groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Colors,
    Spacing,
    Typography,
    Animations,
    Radius,
    Shadows,
}

impl TokenCategory {
    /// All categories in registry order.
    pub const ALL: [TokenCategory; 6] = [
        TokenCategory::Colors,
        TokenCategory::Spacing,
        TokenCategory::Typography,
        TokenCategory::Animations,
        TokenCategory::Radius,
        TokenCategory::Shadows,
    ];

    /// Get the name used as the first segment of a token path.
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Typography => "typography",
            TokenCategory::Animations => "animations",
            TokenCategory::Radius => "radius",
            TokenCategory::Shadows => "shadows",
        }
    }

    /// Get the custom-property prefix, as in `var(--<prefix>-<key>)`.
    pub fn prefix(&self) -> &'static str {
        match self {
            TokenCategory::Colors => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Typography => "font",
            TokenCategory::Animations => "motion",
            TokenCategory::Radius => "radius",
            TokenCategory::Shadows => "shadow",
        }
    }

    /// Whether the category groups its tokens into nested sub-tables.
    pub fn is_nested(&self) -> bool {
        matches!(self, TokenCategory::Typography | TokenCategory::Animations)
    }

    /// Look up a category by its path name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TokenCategory {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TokenError::UnknownCategory {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(TokenCategory::Colors.prefix(), "color");
        assert_eq!(TokenCategory::Shadows.prefix(), "shadow");
        assert_eq!(TokenCategory::Animations.prefix(), "motion");
        assert_eq!(TokenCategory::Typography.prefix(), "font");
    }

    #[test]
    fn test_name_round_trip() {
        for category in TokenCategory::ALL {
            assert_eq!(category.name().parse::<TokenCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = "borders".parse::<TokenCategory>().unwrap_err();
        assert!(matches!(err, TokenError::UnknownCategory { name } if name == "borders"));
    }

    #[test]
    fn test_nested_categories() {
        let nested: Vec<_> = TokenCategory::ALL
            .into_iter()
            .filter(|c| c.is_nested())
            .collect();
        assert_eq!(nested, vec![TokenCategory::Typography, TokenCategory::Animations]);
    }
}
