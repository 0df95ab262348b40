//! List command implementation

use clap::{Subcommand, ValueEnum};
use trishape_core::{ErrorKind, TriangleType};

use super::classify::OutputFormat;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List triangle types
    Types,

    /// List available output formats
    Formats,

    /// List error kinds in the order they are checked
    Errors,
}

impl ListCommands {
    /// Lines printed by the subcommand
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Types => TriangleType::ALL
                .iter()
                .map(|t| format!("{:<12} {} distinct edge length(s)", t, t.distinct_edges()))
                .collect(),
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .filter_map(|f| f.to_possible_value())
                .map(|v| v.get_name().to_string())
                .collect(),
            ListCommands::Errors => ErrorKind::ALL
                .iter()
                .map(|k| format!("{:<24} [{}] {}", k.code(), k.stage(), k))
                .collect(),
        }
    }

    /// Print the listing to stdout
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }
}
