use clap::Args;

use crate::error::{Result, TokenError};
use crate::styles::component_styles;
use crate::types::{Padding, Size, Variant};

/// Show the styles derived from variant, size and padding
#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Colour variant (primary, secondary, success, warning, info)
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Size (sm, default, lg)
    #[arg(long)]
    pub size: Option<Size>,

    /// Padding (sm, md, lg)
    #[arg(long)]
    pub padding: Option<Padding>,

    /// Print a JSON object instead of CSS declarations
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StylesArgs) -> Result<()> {
    // With no inputs, show the default variant and size
    let no_inputs = args.variant.is_none() && args.size.is_none() && args.padding.is_none();
    let (variant, size, padding) = if no_inputs {
        (Some(Variant::default()), Some(Size::default()), None)
    } else {
        (args.variant, args.size, args.padding)
    };

    let styles = component_styles(variant, size, padding);

    if args.json {
        let json = serde_json::to_string_pretty(&styles).map_err(|e| TokenError::Parse {
            message: format!("Failed to encode styles: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for (property, value) in &styles {
            println!("{}: {};", css_property(property), value);
        }
    }

    Ok(())
}

/// Convert a camelCase style property to its CSS spelling.
fn css_property(property: &str) -> String {
    let mut css = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            css.push('-');
            css.push(c.to_ascii_lowercase());
        } else {
            css.push(c);
        }
    }
    css
}
