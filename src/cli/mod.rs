pub mod check;
pub mod classes;
pub mod completions;
pub mod get;
pub mod list;
pub mod styles;
pub mod validate;
pub mod var;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// tokenset - design token resolver and consistency checker
#[derive(Parser, Debug)]
#[command(name = "tokenset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a tokenset.yaml manifest (default: ./tokenset.yaml if present)
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a dotted token path
    Get(get::GetArgs),

    /// Build a var() reference without checking the registry
    Var(var::VarArgs),

    /// List tokens, flattened to dot-notation keys
    List(list::ListArgs),

    /// Show the styles derived from variant, size and padding
    Styles(styles::StylesArgs),

    /// Build a component class list
    Classes(classes::ClassesArgs),

    /// Self-check the token table and component mappings
    Check,

    /// Validate rendered component fixtures against their tokens
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
