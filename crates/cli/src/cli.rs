use clap::{Parser, Subcommand};

/// Evaluate learner JavaScript the way the lesson editor does
#[derive(Parser)]
#[command(name = "evalscope")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    RUST_LOG=debug           Enable debug logging\n    EVALSCOPE_API_KEY        Enable the remote analysis path"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the declarations the static analyzer finds, without executing
    Analyze {
        /// Path to the JavaScript file to scan
        filepath: String,

        /// Show raw JSON output
        #[arg(short = 'j', long = "json")]
        json: bool,
    },
    /// Evaluate a file and display captured variables and console output
    Eval {
        /// Path to the JavaScript file to evaluate
        filepath: String,

        /// Skip the remote analysis path
        #[arg(short = 'o', long = "offline")]
        offline: bool,

        /// Show the raw evaluation result as JSON
        #[arg(short = 'j', long = "json")]
        json: bool,

        /// Re-evaluate whenever the file changes
        #[arg(short = 'w', long = "watch")]
        watch: bool,
    },
    /// Write a default .evalscope.json in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}
