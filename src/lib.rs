//! tokenset - design token resolution and validation
//!
//! A typed registry of design tokens (CSS custom-property references),
//! checked lookups by path, style derivation for component variants, sizes
//! and paddings, and validators that compare rendered component styles
//! against the tokens they should use.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod registry;
pub mod resolver;
pub mod styles;
pub mod types;
pub mod validation;

pub use discovery::{discover, DiscoveryResult, Manifest};
pub use error::{Result, TokenError};
pub use registry::{all_tokens, tokens_in_category, DESIGN_TOKENS};
pub use resolver::{
    get_token, get_token_value, unchecked_token_var, validate_token, validate_token_path,
};
pub use styles::{
    create_component_classes, get_padding_styles, get_size_styles, get_variant_styles,
    PaddingStyles, SizeStyles, VariantStyles,
};
pub use types::{Padding, Size, StyleMap, TokenCategory, TokenEntry, Variant};
pub use validation::{
    check_component_consistency, check_registry, validate_design_system,
    validate_design_system_with, validate_token_application, Check, CheckResult,
    ComponentConsistencyResult, ComponentInstance, ComponentInstances, DesignSystemReport,
    MappingTable, TokenApplicationResult,
};
