//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use trishape_core::{EdgeValue, ErrorKind, TriangleType};

use crate::input::Case;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Outcome of classifying one argument list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Origin of the arguments
    pub source: String,
    /// The arguments as given
    pub arguments: Vec<EdgeValue>,
    /// Triangle type, when classification succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triangle_type: Option<TriangleType>,
    /// Error kind, when classification failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
}

impl Classification {
    /// Classify a case
    pub fn from_case(case: &Case) -> Self {
        let outcome = trishape_core::classify_arguments(case.arguments.clone());
        log::debug!("{}: {:?}", case.source, outcome);

        Self {
            source: case.source.clone(),
            arguments: case.arguments.clone(),
            triangle_type: outcome.ok(),
            error: outcome.err(),
        }
    }

    /// Returns `true` if the arguments form a valid triangle
    pub fn is_success(&self) -> bool {
        self.triangle_type.is_some()
    }

    /// The arguments rendered as one list, e.g. `[3, 4, 5]`
    pub fn arguments_display(&self) -> String {
        EdgeValue::Sequence(self.arguments.clone()).to_string()
    }

    /// The result rendered for humans
    pub fn outcome_display(&self) -> String {
        match (self.triangle_type, self.error) {
            (Some(triangle_type), _) => triangle_type.to_string(),
            (None, Some(error)) => format!("error ({}): {}", error.code(), error),
            (None, None) => "unclassified".to_string(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single classification
    fn format_classification(&mut self, classification: &Classification) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Destination writer: a file when a path is given, stdout otherwise
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    use anyhow::Context;

    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
