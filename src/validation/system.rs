//! Whole-system validation across every component type and instance.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::resolver::validate_token_path;

use super::application::{validate_token_application, TokenApplicationResult};
use super::consistency::{check_component_consistency, ComponentConsistencyResult, ComponentInstance};
use super::mapping::{ComponentTokenMap, MappingTable};

/// Instances to validate, grouped by component type.
pub type ComponentInstances = BTreeMap<String, Vec<ComponentInstance>>;

/// Aggregated result of validating a design system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub components: Vec<ComponentConsistencyResult>,
    pub token_applications: Vec<TokenApplicationResult>,
}

impl DesignSystemReport {
    /// Number of token applications that matched their expected value.
    pub fn consistent_count(&self) -> usize {
        self.token_applications
            .iter()
            .filter(|r| r.is_consistent)
            .count()
    }
}

/// Validate components against the builtin component mappings.
pub fn validate_design_system(components: &ComponentInstances) -> DesignSystemReport {
    validate_design_system_with(components, &MappingTable::builtin())
}

/// Validate components against a given mapping table.
///
/// Every component type is checked for cross-instance consistency, and every
/// instance is checked against the tokens its mapping expects. Component
/// types without a mapping use `ComponentTokenMap::fallback` and are
/// reported as warnings.
pub fn validate_design_system_with(
    components: &ComponentInstances,
    mappings: &MappingTable,
) -> DesignSystemReport {
    let mut report = DesignSystemReport {
        is_valid: true,
        ..Default::default()
    };
    let fallback = ComponentTokenMap::fallback();

    for (component_type, instances) in components {
        let consistency = check_component_consistency(component_type, instances);
        for mismatch in &consistency.mismatches {
            for actual in &mismatch.actual_values {
                report.errors.push(format!(
                    "{}: '{}' differs between instances with props {} (expected {}, '{}' has {})",
                    component_type,
                    mismatch.property,
                    mismatch.props,
                    mismatch.expected_value,
                    actual.instance_id,
                    actual.value.as_deref().unwrap_or("nothing"),
                ));
            }
        }
        if !consistency.is_consistent {
            report.is_valid = false;
        }
        report.components.push(consistency);

        let mapping = match mappings.get(component_type) {
            Some(mapping) => mapping,
            None => {
                report.warnings.push(format!(
                    "{}: no token mapping, checking against the default card tokens",
                    component_type
                ));
                &fallback
            }
        };

        for instance in instances {
            let expected = mapping.expected_tokens(instance);
            for (property, path) in &expected {
                if !validate_token_path(path) {
                    report.warnings.push(format!(
                        "{} '{}': '{}' maps to unknown token path '{}'",
                        component_type, instance.id, property, path
                    ));
                }
            }

            let applications: Vec<_> =
                validate_token_application(component_type, &expected, &instance.styles)
                    .into_iter()
                    .map(|result| result.for_instance(&instance.id))
                    .collect();
            debug!(
                component_type = %component_type,
                instance = %instance.id,
                checked = applications.len(),
                "validated token application"
            );

            for result in applications.iter().filter(|r| !r.is_consistent) {
                report.is_valid = false;
                report.errors.push(format!(
                    "{} '{}': {}.{} expected {}, found {}",
                    component_type,
                    instance.id,
                    result.token_category,
                    result.token_name,
                    result.expected_value,
                    result.applied_value.as_deref().unwrap_or("nothing"),
                ));
            }
            report.token_applications.extend(applications);
        }
    }

    report
}
