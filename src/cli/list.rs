//! List command implementation.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::tokens_in_category;
use crate::types::TokenCategory;

/// List tokens, flattened to dot-notation keys
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list this category
    pub category: Option<TokenCategory>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let categories: Vec<TokenCategory> = match args.category {
        Some(category) => vec![category],
        None => TokenCategory::ALL.to_vec(),
    };

    let mut total = 0;
    for category in categories {
        let tokens = tokens_in_category(category);
        total += tokens.len();
        for (key, value) in tokens {
            println!("{}.{} = {}", category, key, value);
        }
    }

    printer.info("Listed", &plural(total, "token", "tokens"));
    Ok(())
}
