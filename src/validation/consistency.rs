//! Cross-instance consistency: identical props should render identical styles.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::types::{Padding, Size, StyleMap, Variant};

/// One rendered instance of a component, as observed by a test harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInstance {
    pub id: String,
    /// Props the instance was rendered with.
    #[serde(default)]
    pub props: Map<String, Value>,
    /// Computed style values keyed by camelCase property name.
    #[serde(default, alias = "computedStyles")]
    pub styles: StyleMap,
}

impl ComponentInstance {
    /// Create an instance with no props and no styles.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            props: Map::new(),
            styles: StyleMap::new(),
        }
    }

    /// Set a prop.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Set a computed style.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// The `variant` prop, if set. Unknown names fall back to the default.
    pub fn variant(&self) -> Option<Variant> {
        self.string_prop("variant").map(Variant::from_name_or_default)
    }

    /// The `size` prop, if set. Unknown names fall back to the default.
    pub fn size(&self) -> Option<Size> {
        self.string_prop("size").map(Size::from_name_or_default)
    }

    /// The `padding` prop, if set. Unknown names fall back to the default.
    pub fn padding(&self) -> Option<Padding> {
        self.string_prop("padding").map(Padding::from_name_or_default)
    }

    fn string_prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    /// Key used to group instances rendered with equal props.
    pub fn props_key(&self) -> String {
        // serde_json maps keep keys sorted, so equal props give equal keys
        Value::Object(self.props.clone()).to_string()
    }
}

/// A style value observed on one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceValue {
    pub instance_id: String,
    pub value: Option<String>,
}

/// A style property whose value diverges within one props group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMismatch {
    pub property: String,
    /// Props group the mismatch was found in, as a JSON object string.
    pub props: String,
    /// Value on the group's first instance.
    pub expected_value: String,
    /// Every instance that diverges from the expected value.
    pub actual_values: Vec<InstanceValue>,
}

/// Consistency report for every instance of one component type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConsistencyResult {
    pub component_type: String,
    pub instance_count: usize,
    pub is_consistent: bool,
    pub mismatches: Vec<StyleMismatch>,
}

/// Check that instances with equal props have equal computed styles.
///
/// Within each group the first instance is the reference; only properties
/// present on the reference are compared. Groups with a single instance have
/// nothing to compare against and are skipped.
pub fn check_component_consistency(
    component_type: &str,
    instances: &[ComponentInstance],
) -> ComponentConsistencyResult {
    let mut groups: Vec<(String, Vec<&ComponentInstance>)> = Vec::new();
    for instance in instances {
        let key = instance.props_key();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(instance),
            None => groups.push((key, vec![instance])),
        }
    }

    let mut mismatches = Vec::new();
    for (props, members) in &groups {
        let Some((reference, others)) = members.split_first() else {
            continue;
        };
        if others.is_empty() {
            continue;
        }
        trace!(component_type, props = %props, size = members.len(), "comparing props group");

        for (property, expected) in &reference.styles {
            let actual_values: Vec<InstanceValue> = others
                .iter()
                .filter(|i| i.styles.get(property) != Some(expected))
                .map(|i| InstanceValue {
                    instance_id: i.id.clone(),
                    value: i.styles.get(property).cloned(),
                })
                .collect();

            if !actual_values.is_empty() {
                mismatches.push(StyleMismatch {
                    property: property.clone(),
                    props: props.clone(),
                    expected_value: expected.clone(),
                    actual_values,
                });
            }
        }
    }

    ComponentConsistencyResult {
        component_type: component_type.to_string(),
        instance_count: instances.len(),
        is_consistent: mismatches.is_empty(),
        mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn button(id: &str, variant: &str, bg: &str) -> ComponentInstance {
        ComponentInstance::new(id)
            .with_prop("variant", variant)
            .with_style("backgroundColor", bg)
    }

    #[test]
    fn test_consistent_group() {
        let instances = vec![
            button("a", "primary", "var(--color-primary)"),
            button("b", "primary", "var(--color-primary)"),
        ];
        let result = check_component_consistency("button", &instances);
        assert!(result.is_consistent);
        assert_eq!(result.instance_count, 2);
        assert!(result.mismatches.is_empty());
    }

    #[test]
    fn test_divergent_instances_reported() {
        let instances = vec![
            button("a", "primary", "var(--color-primary)"),
            button("b", "primary", "var(--color-secondary)"),
            button("c", "primary", "var(--color-primary)"),
            ComponentInstance::new("d").with_prop("variant", "primary"),
        ];
        let result = check_component_consistency("button", &instances);
        assert!(!result.is_consistent);
        assert_eq!(
            result.mismatches,
            vec![StyleMismatch {
                property: "backgroundColor".to_string(),
                props: r#"{"variant":"primary"}"#.to_string(),
                expected_value: "var(--color-primary)".to_string(),
                actual_values: vec![
                    InstanceValue {
                        instance_id: "b".to_string(),
                        value: Some("var(--color-secondary)".to_string()),
                    },
                    InstanceValue {
                        instance_id: "d".to_string(),
                        value: None,
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_different_props_not_compared() {
        let instances = vec![
            button("a", "primary", "var(--color-primary)"),
            button("b", "secondary", "var(--color-secondary)"),
        ];
        assert!(check_component_consistency("button", &instances).is_consistent);
    }

    #[test]
    fn test_props_key_ignores_insertion_order() {
        let a = ComponentInstance::new("a")
            .with_prop("size", "lg")
            .with_prop("variant", "info");
        let b = ComponentInstance::new("b")
            .with_prop("variant", "info")
            .with_prop("size", "lg");
        assert_eq!(a.props_key(), b.props_key());
    }

    #[test]
    fn test_extra_properties_on_others_ignored() {
        let instances = vec![
            button("a", "primary", "var(--color-primary)"),
            button("b", "primary", "var(--color-primary)").with_style("margin", "4px"),
        ];
        assert!(check_component_consistency("button", &instances).is_consistent);
    }

    #[test]
    fn test_prop_accessors() {
        let instance = ComponentInstance::new("x")
            .with_prop("variant", "danger")
            .with_prop("size", "lg")
            .with_prop("padding", 3);
        assert_eq!(instance.variant(), Some(Variant::Primary));
        assert_eq!(instance.size(), Some(Size::Lg));
        assert_eq!(instance.padding(), None);
    }

    #[test]
    fn test_empty_instances() {
        let result = check_component_consistency("card", &[]);
        assert!(result.is_consistent);
        assert_eq!(result.instance_count, 0);
    }
}
