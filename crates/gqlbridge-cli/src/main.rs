//! gqlbridge CLI - GraphQL schema to Java source generator
//!
//! Commands:
//! - `gqlbridge generate` - Generate Java sources from a schema document
//! - `gqlbridge check` - Validate a configuration file
//! - `gqlbridge init` - Write the default configuration

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod check;
mod generate;
mod init;
mod logging;
mod writer;

#[derive(Parser)]
#[command(name = "gqlbridge")]
#[command(author, version, about = "Generate Java model classes from a GraphQL schema", long_about = None)]
struct Cli {
    /// Log debug events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources
    Generate(generate::GenerateArgs),

    /// Validate a configuration file and print the effective settings
    Check {
        /// Path to the configuration file (default: discovered in the current directory)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Write the default configuration
    Init {
        /// Destination file
        #[arg(short, long, default_value = "gqlbridge.yaml")]
        path: String,

        /// Replace an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let success = match cli.command {
        Commands::Generate(args) => generate::run(&args)?,
        Commands::Check { config } => {
            check::run(config)?;
            true
        }
        Commands::Init { path, force } => {
            init::run(&path, force)?;
            true
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
