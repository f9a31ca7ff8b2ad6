use clap::Args;

use crate::error::Result;
use crate::resolver::get_token_value;

/// Resolve a dotted token path
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Token path, e.g. colors.primary or typography.fontSize.lg
    pub path: String,
}

pub fn run(args: GetArgs) -> Result<()> {
    println!("{}", get_token_value(&args.path)?);
    Ok(())
}
