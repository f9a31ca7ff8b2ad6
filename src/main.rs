use clap::Parser;
use miette::Result;
use tokenset::cli::{Cli, Commands};
use tokenset::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new();
    let manifest = cli.manifest.as_deref();

    match cli.command {
        Commands::Get(args) => tokenset::cli::get::run(args)?,
        Commands::Var(args) => tokenset::cli::var::run(args, &printer)?,
        Commands::List(args) => tokenset::cli::list::run(args, &printer)?,
        Commands::Styles(args) => tokenset::cli::styles::run(args)?,
        Commands::Classes(args) => tokenset::cli::classes::run(args)?,
        Commands::Check => tokenset::cli::check::run(manifest, &printer)?,
        Commands::Validate(args) => tokenset::cli::validate::run(args, manifest, &printer)?,
        Commands::Completions(args) => tokenset::cli::completions::run(args)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
