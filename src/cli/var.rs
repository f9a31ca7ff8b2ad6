use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::resolver::{unchecked_token_var, validate_token};
use crate::types::TokenCategory;

/// Build a var() reference without checking the registry
#[derive(Args, Debug)]
pub struct VarArgs {
    /// Token category (colors, spacing, typography, animations, radius, shadows)
    pub category: TokenCategory,

    /// Token name appended after the category prefix
    pub token: String,
}

pub fn run(args: VarArgs, printer: &Printer) -> Result<()> {
    if !validate_token(args.category, &args.token) {
        printer.warning(
            "Unchecked",
            &format!("'{}' is not a {} token", args.token, args.category),
        );
    }
    println!("{}", unchecked_token_var(args.category, &args.token));
    Ok(())
}
