//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod classify;
pub mod generate_config;
pub mod list;

/// Triangle shape classification from edge lengths
#[derive(Debug, Parser)]
#[command(name = "trishape", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify edges given on the command line, as JSON, or from files
    Classify(classify::ClassifyArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the command
    ///
    /// Returns `Ok(false)` when the command ran but some input was rejected.
    pub fn execute(&self) -> Result<bool> {
        match self {
            Commands::Classify(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(true)
            }
            Commands::GenerateConfig(args) => args.execute().map(|()| true),
        }
    }
}
