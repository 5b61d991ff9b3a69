//! flixkit CLI — tooling for Flow interaction templates.
//!
//! Provides four commands: `generate`, `cadence`, `hash` and `inspect`.
//!
//! Each command is a thin wrapper over [`flixkit_core`]. Generated text goes to stdout
//! (or `--output`); progress and summaries go to stderr.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use flixkit_core::config::{FlixkitConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(
    name = "flixkit",
    about = "Flow interaction template toolkit — hashing, import rewriting, client bindings",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to flixkit.config.json (default: ./flixkit.config.json)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a client binding for an interaction template
    Generate {
        /// Path to the interaction template JSON file
        template: PathBuf,

        /// Binding language (default from config: fcl-js)
        #[arg(long)]
        lang: Option<String>,

        /// Directory of binding templates overriding the embedded ones
        #[arg(long)]
        template_dir: Option<PathBuf>,

        /// Where the binding loads the template from (default: the template path)
        #[arg(long)]
        location: Option<String>,

        /// Write the binding to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the template's cadence with imports resolved for a network
    Cadence {
        /// Path to the interaction template JSON file
        template: PathBuf,

        /// Network to resolve imports against (default from config: testnet)
        #[arg(long)]
        network: Option<String>,
    },

    /// Print the SHA3-256 hash of a file
    Hash {
        /// File to hash
        file: PathBuf,

        /// Parse the file as an interaction template and hash its canonical JSON
        #[arg(long)]
        canonical: bool,
    },

    /// Summarize an interaction template
    Inspect {
        /// Path to the interaction template JSON file
        template: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = FlixkitConfig::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Generate {
            template,
            lang,
            template_dir,
            location,
            output,
        } => {
            commands::generate::run(
                &config,
                &template,
                lang.as_deref(),
                template_dir.as_deref(),
                location.as_deref(),
                output.as_deref(),
            )?;
        }
        Commands::Cadence { template, network } => {
            commands::cadence::run(&config, &template, network.as_deref())?;
        }
        Commands::Hash { file, canonical } => {
            commands::hash::run(&file, canonical)?;
        }
        Commands::Inspect { template } => {
            commands::inspect::run(&template)?;
        }
    }

    Ok(())
}
