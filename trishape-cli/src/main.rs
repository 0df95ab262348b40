//! trishape command-line entry point

use clap::Parser;
use std::process::ExitCode;
use trishape_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(true) => ExitCode::SUCCESS,
        // Ran fine, but at least one input is not a valid triangle
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
