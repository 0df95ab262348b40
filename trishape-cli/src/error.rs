//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Input line or token that could not be parsed into edge arguments
    ParseError {
        /// Where the input came from (file and line, or "command line")
        source: String,
        /// What went wrong
        message: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ParseError { source, message } => {
                write!(f, "Parse error in {source}: {message}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("edges.txt".to_string());
        assert_eq!(error.to_string(), "File not found: edges.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_parse_error_display() {
        let error = CliError::ParseError {
            source: "edges.txt:3".to_string(),
            message: "expected a JSON array".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Parse error in edges.txt:3: expected a JSON array"
        );
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert_eq!(success.as_ref().unwrap(), "test");

        let failure: CliResult<String> = Err(CliError::FileNotFound("x".to_string()).into());
        assert!(failure
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("File not found"));
    }
}
