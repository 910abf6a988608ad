//! `universe`: generate, inspect and validate procedural universes.
//!
//! ```text
//! universe generate --seed Kepler-452 --systems 50 --pretty > universe.json
//! universe default-config > universe.toml
//! universe validate universe.json
//! ```
//!
//! Logs go to stderr and honour `RUST_LOG` (default `warn`).

mod commands;


use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a universe and write it as JSON
    Generate(GenerateArgs),
    /// Print the default configuration as TOML
    DefaultConfig,
    /// Validate a JSON snapshot and print the report
    Validate {
        /// Snapshot written by `generate`
        snapshot: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Numeric or text seed; random when omitted
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Number of systems; more than one also builds groups
    #[arg(short = 'n', long, default_value_t = 1)]
    pub systems: usize,

    /// TOML file overriding the default configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Exit with an error when validation reports violations
    #[arg(long)]
    pub strict: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => commands::generate(&args),
        Command::DefaultConfig => {
            print!("{}", commands::default_config()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { snapshot } => commands::validate_snapshot(&snapshot),
    }
}
