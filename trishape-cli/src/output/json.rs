//! JSON output formatter

use super::{Classification, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs all classifications as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    classifications: Vec<Classification>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            classifications: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_classification(&mut self, classification: &Classification) -> Result<()> {
        self.classifications.push(classification.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.classifications)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.classifications)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
