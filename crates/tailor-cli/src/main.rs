//! Tailor CLI - resume tailoring from job postings.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            file,
            profile,
            output,
            seed,
            with_analysis,
        } => commands::generate::run(file, profile, output, seed, with_analysis, cli.verbose),

        Commands::Analyze { file, json } => commands::analyze::run(file, json, cli.verbose),

        Commands::Serve {
            host,
            port,
            cors_origin,
        } => commands::serve::run(host, port, cors_origin, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
