//! Component type → expected token bindings.
//!
//! A mapping names the token path each style property should resolve to,
//! with optional overrides keyed by the instance's variant, size and
//! padding props.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::styles::{padding_token_path, size_token_paths, variant_token_paths};
use crate::types::{Padding, Size, StyleMap, Variant};

use super::consistency::ComponentInstance;

/// Expected token paths for one component type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentTokenMap {
    /// Property → token path bindings that always apply.
    pub base: StyleMap,
    /// Overrides applied when the instance has a `variant` prop.
    pub variants: BTreeMap<Variant, StyleMap>,
    /// Overrides applied when the instance has a `size` prop.
    pub sizes: BTreeMap<Size, StyleMap>,
    /// Overrides applied when the instance has a `padding` prop.
    pub paddings: BTreeMap<Padding, StyleMap>,
}

impl ComponentTokenMap {
    /// The bindings used for component types with no mapping.
    pub fn fallback() -> Self {
        Self {
            base: bindings(&[
                ("backgroundColor", "colors.card"),
                ("color", "colors.card-foreground"),
                ("borderColor", "colors.border"),
                ("borderRadius", "radius.lg"),
            ]),
            ..Default::default()
        }
    }

    /// Resolve the expected property → token path bindings for an instance.
    ///
    /// Overrides merge over `base` in order: variant, size, padding.
    pub fn expected_tokens(&self, instance: &ComponentInstance) -> StyleMap {
        let mut expected = self.base.clone();
        if let Some(overrides) = instance.variant().and_then(|v| self.variants.get(&v)) {
            expected.extend(overrides.clone());
        }
        if let Some(overrides) = instance.size().and_then(|s| self.sizes.get(&s)) {
            expected.extend(overrides.clone());
        }
        if let Some(overrides) = instance.padding().and_then(|p| self.paddings.get(&p)) {
            expected.extend(overrides.clone());
        }
        expected
    }

    /// Every token path this mapping refers to.
    pub fn token_paths(&self) -> impl Iterator<Item = &str> {
        self.base
            .values()
            .chain(self.variants.values().flat_map(|m| m.values()))
            .chain(self.sizes.values().flat_map(|m| m.values()))
            .chain(self.paddings.values().flat_map(|m| m.values()))
            .map(String::as_str)
    }
}

/// Lookup table of component mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    components: BTreeMap<String, ComponentTokenMap>,
}

impl MappingTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self {
            components: BTreeMap::new(),
        }
    }

    /// Create the table of builtin component mappings.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.insert("button", button_mapping());
        table.insert("badge", badge_mapping());
        table.insert("card", card_mapping());
        table.insert("nav-link", nav_link_mapping());
        table.insert("input", input_mapping());
        table
    }

    /// Add or replace a component mapping.
    pub fn insert(&mut self, component_type: impl Into<String>, mapping: ComponentTokenMap) {
        self.components.insert(component_type.into(), mapping);
    }

    /// Layer other mappings over this table, replacing same-named entries.
    pub fn extend(&mut self, other: impl IntoIterator<Item = (String, ComponentTokenMap)>) {
        self.components.extend(other);
    }

    /// Get a component's mapping.
    pub fn get(&self, component_type: &str) -> Option<&ComponentTokenMap> {
        self.components.get(component_type)
    }

    /// Iterate over `(component type, mapping)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentTokenMap)> {
        self.components.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of mappings.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn bindings(entries: &[(&str, &str)]) -> StyleMap {
    entries
        .iter()
        .map(|(property, path)| (property.to_string(), path.to_string()))
        .collect()
}

fn variant_bindings(variant: Variant) -> StyleMap {
    let paths = variant_token_paths(variant);
    bindings(&[
        ("backgroundColor", paths.background),
        ("color", paths.foreground),
        ("borderColor", paths.border),
    ])
}

fn size_bindings(size: Size) -> StyleMap {
    let paths = size_token_paths(size);
    bindings(&[("padding", paths.padding), ("fontSize", paths.font_size)])
}

fn all_variants() -> BTreeMap<Variant, StyleMap> {
    Variant::ALL.iter().map(|&v| (v, variant_bindings(v))).collect()
}

fn button_mapping() -> ComponentTokenMap {
    let mut base = variant_bindings(Variant::default());
    base.extend(size_bindings(Size::default()));
    base.insert("borderRadius".to_string(), "radius.md".to_string());

    ComponentTokenMap {
        base,
        variants: all_variants(),
        sizes: Size::ALL.iter().map(|&s| (s, size_bindings(s))).collect(),
        paddings: BTreeMap::new(),
    }
}

fn badge_mapping() -> ComponentTokenMap {
    let mut base = variant_bindings(Variant::default());
    base.extend(bindings(&[
        ("borderRadius", "radius.full"),
        ("fontSize", "typography.fontSize.xs"),
        ("padding", "spacing.xs"),
    ]));

    ComponentTokenMap {
        base,
        variants: all_variants(),
        ..Default::default()
    }
}

fn card_mapping() -> ComponentTokenMap {
    let mut base = ComponentTokenMap::fallback().base;
    base.extend(bindings(&[
        ("boxShadow", "shadows.card"),
        ("padding", padding_token_path(Padding::default())),
    ]));

    ComponentTokenMap {
        base,
        paddings: Padding::ALL
            .iter()
            .map(|&p| (p, bindings(&[("padding", padding_token_path(p))])))
            .collect(),
        ..Default::default()
    }
}

fn nav_link_mapping() -> ComponentTokenMap {
    ComponentTokenMap {
        base: bindings(&[
            ("color", "colors.foreground"),
            ("fontSize", "typography.fontSize.sm"),
            ("fontWeight", "typography.fontWeight.medium"),
        ]),
        ..Default::default()
    }
}

fn input_mapping() -> ComponentTokenMap {
    let mut base = bindings(&[
        ("backgroundColor", "colors.background"),
        ("color", "colors.foreground"),
        ("borderColor", "colors.input"),
        ("borderRadius", "radius.md"),
    ]);
    base.extend(size_bindings(Size::default()));

    ComponentTokenMap {
        base,
        sizes: Size::ALL.iter().map(|&s| (s, size_bindings(s))).collect(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::validate_token_path;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_paths_resolve() {
        for (name, mapping) in MappingTable::builtin().iter() {
            for path in mapping.token_paths() {
                assert!(validate_token_path(path), "{name}: {path}");
            }
        }
    }

    #[test]
    fn test_button_variant_and_size_overrides() {
        let table = MappingTable::builtin();
        let button = table.get("button").unwrap();
        let instance = ComponentInstance::new("b1")
            .with_prop("variant", "warning")
            .with_prop("size", "sm");

        let expected = button.expected_tokens(&instance);
        assert_eq!(
            expected,
            bindings(&[
                ("backgroundColor", "colors.warning"),
                ("borderColor", "colors.warning"),
                ("borderRadius", "radius.md"),
                ("color", "colors.accent-foreground"),
                ("fontSize", "typography.fontSize.sm"),
                ("padding", "spacing.sm"),
            ])
        );
    }

    #[test]
    fn test_card_padding_override() {
        let table = MappingTable::builtin();
        let card = table.get("card").unwrap();

        let plain = card.expected_tokens(&ComponentInstance::new("c1"));
        assert_eq!(plain["padding"], "spacing.md");
        assert_eq!(plain["boxShadow"], "shadows.card");

        let roomy = card.expected_tokens(&ComponentInstance::new("c2").with_prop("padding", "lg"));
        assert_eq!(roomy["padding"], "spacing.lg");
    }

    #[test]
    fn test_fallback_base_set() {
        let fallback = ComponentTokenMap::fallback();
        let expected = fallback.expected_tokens(&ComponentInstance::new("x").with_prop("variant", "info"));
        assert_eq!(
            expected,
            bindings(&[
                ("backgroundColor", "colors.card"),
                ("borderColor", "colors.border"),
                ("borderRadius", "radius.lg"),
                ("color", "colors.card-foreground"),
            ])
        );
    }

    #[test]
    fn test_extend_replaces_entries() {
        let mut table = MappingTable::builtin();
        let before = table.len();
        table.extend([(
            "card".to_string(),
            ComponentTokenMap {
                base: bindings(&[("backgroundColor", "colors.muted")]),
                ..Default::default()
            },
        )]);
        assert_eq!(table.len(), before);
        assert_eq!(table.get("card").unwrap().base.len(), 1);
    }

    #[test]
    fn test_deserialize_mapping() {
        let yaml = r#"
base:
  backgroundColor: colors.card
variants:
  success:
    backgroundColor: colors.success
sizes:
  default:
    padding: spacing.md
"#;
        let mapping: ComponentTokenMap = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(mapping.variants[&Variant::Success]["backgroundColor"], "colors.success");
        assert_eq!(mapping.sizes[&Size::Default]["padding"], "spacing.md");
        assert!(mapping.paddings.is_empty());
    }
}
