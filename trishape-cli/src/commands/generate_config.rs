//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   trishape classify -c {} -i edges.txt",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        r#"# trishape configuration

[output]
# Output format when --format is not given: "text", "json" or "markdown"
default_format = "text"

# Pretty print JSON output
pretty_json = true

# Prefix text output lines with the file and line they came from
# (always on for --input batches)
show_source = false

[processing]
# Classify batch input in parallel (same as --parallel)
parallel = false

# Worker threads for parallel classification (0 = one per CPU)
worker_threads = 0
"#
        .to_string()
    }
}
