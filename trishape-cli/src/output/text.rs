//! Plain text output formatter

use super::{Classification, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one `arguments: result` line per classification
pub struct TextFormatter<W: Write> {
    writer: W,
    with_source: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            with_source: false,
        }
    }

    /// Prefix every line with the origin of its arguments
    pub fn with_source(mut self, with_source: bool) -> Self {
        self.with_source = with_source;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_classification(&mut self, classification: &Classification) -> Result<()> {
        if self.with_source {
            write!(self.writer, "{}: ", classification.source)?;
        }
        writeln!(
            self.writer,
            "{} => {}",
            classification.arguments_display(),
            classification.outcome_display()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Case;
    use trishape_core::EdgeValue;

    fn render(with_source: bool) -> String {
        let case = Case::new(
            "cases.txt:1",
            vec![EdgeValue::Number(2.0), EdgeValue::Number(2.0), EdgeValue::Number(3.0)],
        );

        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer).with_source(with_source);
        formatter
            .format_classification(&Classification::from_case(&case))
            .unwrap();
        formatter.finish().unwrap();

        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_output() {
        assert_eq!(render(false), "[2, 2, 3] => isosceles\n");
    }

    #[test]
    fn test_text_output_with_source() {
        assert_eq!(render(true), "cases.txt:1: [2, 2, 3] => isosceles\n");
    }
}
