//! Core domain types for tokenset.
//!
//! This module contains the closed vocabularies the engine works with:
//! - `TokenCategory` - the six top-level token groups
//! - `TokenEntry` - a leaf reference or a nested group of entries
//! - `Variant`, `Size`, `Padding` - component styling inputs

mod category;
mod component;
mod entry;

use std::collections::BTreeMap;

pub use category::TokenCategory;
pub use component::{Padding, Size, Variant};
pub use entry::TokenEntry;

/// A style-attribute map keyed by camelCase CSS property name.
pub type StyleMap = BTreeMap<String, String>;
