//! Per-property comparison of expected tokens against applied styles.

use serde::Serialize;
use tracing::warn;

use crate::resolver::get_token_value;
use crate::types::StyleMap;

/// The outcome of checking one style property against its expected token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenApplicationResult {
    pub component: String,
    /// The instance the styles came from, when checked as part of a system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// First segment of the token path.
    pub token_category: String,
    /// Remainder of the token path after the category.
    pub token_name: String,
    /// The style value actually applied, if the property was set at all.
    pub applied_value: Option<String>,
    pub expected_value: String,
    pub is_consistent: bool,
}

impl TokenApplicationResult {
    /// Attribute this result to a component instance.
    pub fn for_instance(mut self, id: impl Into<String>) -> Self {
        self.instance_id = Some(id.into());
        self
    }
}

/// Compare applied styles against expected token bindings.
///
/// `expected_tokens` maps a style property to a token path. One result is
/// produced per entry whose path resolves; entries with unresolvable paths
/// are skipped.
pub fn validate_token_application(
    component: &str,
    expected_tokens: &StyleMap,
    actual_styles: &StyleMap,
) -> Vec<TokenApplicationResult> {
    let mut results = Vec::with_capacity(expected_tokens.len());

    for (property, token_path) in expected_tokens {
        let expected_value = match get_token_value(token_path) {
            Ok(value) => value,
            Err(e) => {
                warn!(component, property = %property, error = %e, "skipping unresolvable token");
                continue;
            }
        };

        let (token_category, token_name) = token_path
            .split_once('.')
            .unwrap_or((token_path.as_str(), ""));
        let applied_value = actual_styles.get(property).cloned();

        results.push(TokenApplicationResult {
            component: component.to_string(),
            instance_id: None,
            token_category: token_category.to_string(),
            token_name: token_name.to_string(),
            is_consistent: applied_value.as_deref() == Some(expected_value),
            applied_value,
            expected_value: expected_value.to_string(),
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map(entries: &[(&str, &str)]) -> StyleMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_consistent_application() {
        let expected = map(&[("backgroundColor", "colors.primary")]);
        let actual = map(&[("backgroundColor", "var(--color-primary)")]);

        let results = validate_token_application("button", &expected, &actual);
        assert_eq!(
            results,
            vec![TokenApplicationResult {
                component: "button".to_string(),
                instance_id: None,
                token_category: "colors".to_string(),
                token_name: "primary".to_string(),
                applied_value: Some("var(--color-primary)".to_string()),
                expected_value: "var(--color-primary)".to_string(),
                is_consistent: true,
            }]
        );
    }

    #[test]
    fn test_mismatch_and_missing_property() {
        let expected = map(&[
            ("color", "colors.primary-foreground"),
            ("fontSize", "typography.fontSize.lg"),
        ]);
        let actual = map(&[("color", "#ffffff")]);

        let results = validate_token_application("badge", &expected, &actual);
        assert_eq!(results.len(), 2);

        let color = &results[0];
        assert!(!color.is_consistent);
        assert_eq!(color.applied_value.as_deref(), Some("#ffffff"));

        let font = &results[1];
        assert_eq!(font.token_category, "typography");
        assert_eq!(font.token_name, "fontSize.lg");
        assert_eq!(font.applied_value, None);
        assert!(!font.is_consistent);
    }

    #[test]
    fn test_unresolvable_path_is_skipped() {
        let expected = map(&[
            ("borderRadius", "radius.gigantic"),
            ("boxShadow", "shadows.card"),
        ]);
        let actual = map(&[("boxShadow", "var(--shadow-card)")]);

        let results = validate_token_application("card", &expected, &actual);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].token_name, "card");
        assert!(results[0].is_consistent);
    }

    #[test]
    fn test_serialized_field_names() {
        let expected = map(&[("padding", "spacing.md")]);
        let results = validate_token_application("card", &expected, &StyleMap::new());
        insta::assert_json_snapshot!(results, @r#"
        [
          {
            "component": "card",
            "tokenCategory": "spacing",
            "tokenName": "md",
            "appliedValue": null,
            "expectedValue": "var(--spacing-md)",
            "isConsistent": false
          }
        ]
        "#);
    }
}
