//! Reading argument lines from files and standard input

use super::edge_parser::parse_arguments_json;
use super::glob_resolver::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use trishape_core::EdgeValue;

/// One argument list to classify, with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// Origin of the arguments, e.g. `edges.txt:3`
    pub source: String,
    /// The raw arguments
    pub arguments: Vec<EdgeValue>,
}

impl Case {
    /// Create a new case
    pub fn new(source: impl Into<String>, arguments: Vec<EdgeValue>) -> Self {
        Self {
            source: source.into(),
            arguments,
        }
    }
}

/// Reader for batch input
///
/// Each non-empty line that does not start with `#` is a JSON array holding
/// one argument list.
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read the full text of an input source
    pub fn read_source(source: &InputSource) -> Result<String> {
        match source {
            InputSource::File(path) => Self::read_text(path),
            InputSource::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read standard input")?;
                Ok(buffer)
            }
        }
    }

    /// Parse every case in a text, labelling each with `name:line`
    pub fn parse_cases(name: &str, text: &str) -> Result<Vec<Case>> {
        let mut cases = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let source = format!("{}:{}", name, index + 1);
            let arguments = parse_arguments_json(line).map_err(|message| CliError::ParseError {
                source: source.clone(),
                message,
            })?;

            cases.push(Case::new(source, arguments));
        }

        Ok(cases)
    }

    /// Read and parse every case from an input source
    pub fn read_cases(source: &InputSource) -> Result<Vec<Case>> {
        let text = Self::read_source(source)?;
        let cases = Self::parse_cases(&source.to_string(), &text)?;
        log::debug!("{} cases read from {}", cases.len(), source);
        Ok(cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_parse_cases_skips_blank_and_comment_lines() {
        let text = "# header\n[3, 4, 5]\n\n  [[1, 1, 1]]  \n# trailing\n";
        let cases = FileReader::parse_cases("edges.txt", text).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].source, "edges.txt:2");
        assert_eq!(cases[0].arguments.len(), 3);
        assert_eq!(cases[1].source, "edges.txt:4");
        assert_eq!(cases[1].arguments.len(), 1);
    }

    #[test]
    fn test_parse_cases_reports_line() {
        let text = "[3, 4, 5]\nnot json\n";
        let err_msg = FileReader::parse_cases("bad.txt", text)
            .unwrap_err()
            .to_string();

        assert!(err_msg.contains("bad.txt:2"));
        assert!(err_msg.contains("invalid JSON"));
    }

    #[test]
    fn test_read_cases_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("cases.txt");
        fs::write(&file_path, "[1, 2, 3]\n[\"1\", \"2\", 3]\n").unwrap();

        let cases = FileReader::read_cases(&InputSource::File(file_path.clone())).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(
            cases[1].arguments[0],
            EdgeValue::Text("1".to_string())
        );
        assert!(cases[0]
            .source
            .starts_with(&file_path.display().to_string()));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let cases = FileReader::read_cases(&InputSource::File(file_path)).unwrap();
        assert!(cases.is_empty());
    }
}
