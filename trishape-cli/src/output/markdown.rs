//! Markdown output formatter

use super::{Classification, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs classifications as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    total: usize,
    valid: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total: 0,
            valid: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| # | Source | Edges | Result |")?;
        writeln!(self.writer, "|---|--------|-------|--------|")?;
        Ok(())
    }
}

/// Pipes would split the cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_classification(&mut self, classification: &Classification) -> Result<()> {
        if self.total == 0 {
            self.write_header()?;
        }

        self.total += 1;
        if classification.is_success() {
            self.valid += 1;
        }

        writeln!(
            self.writer,
            "| {} | {} | `{}` | {} |",
            self.total,
            escape_cell(&classification.source),
            escape_cell(&classification.arguments_display()),
            classification.outcome_display()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.total == 0 {
            self.write_header()?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total inputs: {}, valid triangles: {}*",
            self.total, self.valid
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
