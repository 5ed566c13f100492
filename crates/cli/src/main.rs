use anyhow::Result;
use clap::Parser;
use evalscope_cli::cli::{Cli, Commands};
use evalscope_cli::commands;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { filepath, json } => commands::analyze::analyze_command(&filepath, json),
        Commands::Eval {
            filepath,
            offline,
            json,
            watch,
        } => commands::eval::eval_command(&filepath, offline, json, watch),
        Commands::Init { force } => commands::init::init_command(force),
    }
}
