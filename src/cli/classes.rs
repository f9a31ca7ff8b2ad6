use clap::Args;

use crate::error::Result;
use crate::styles::create_component_classes;
use crate::types::{Padding, Size, Variant};

/// Build a component class list
#[derive(Args, Debug)]
pub struct ClassesArgs {
    /// Base classes, e.g. "card" or "btn btn-ghost"
    pub base: String,

    /// Colour variant (primary, secondary, success, warning, info)
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Size (sm, default, lg)
    #[arg(long)]
    pub size: Option<Size>,

    /// Padding (sm, md, lg)
    #[arg(long)]
    pub padding: Option<Padding>,
}

pub fn run(args: ClassesArgs) -> Result<()> {
    let classes = create_component_classes(&args.base, args.variant, args.size, args.padding)?;
    println!("{}", classes);
    Ok(())
}
