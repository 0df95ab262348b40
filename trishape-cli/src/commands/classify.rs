//! Classify command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::input::{parse_arguments_json, parse_tokens, resolve_patterns, Case, FileReader};
use crate::output::{
    open_writer, Classification, JsonFormatter, MarkdownFormatter, OutputFormatter,
    TextFormatter,
};
use crate::progress::ProgressReporter;
use crate::CliError;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Edge values: numbers, true/false, null, JSON values, or text
    ///
    /// Options go before the edges; tokens such as `-inf` or `-1e3` are read as edges.
    #[arg(
        value_name = "EDGE",
        allow_hyphen_values = true,
        conflicts_with_all = ["json", "input"]
    )]
    pub edges: Vec<String>,

    /// Argument list as a JSON array, e.g. '[3, 4, 5]' or '[[3, 4, 5]]'
    #[arg(long, value_name = "JSON", conflicts_with = "input")]
    pub json: Option<String>,

    /// Input files or patterns with one JSON argument list per line (`-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Classify batch input in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel classification
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `edges => result` line per input
    Text,
    /// JSON array of classification records
    Json,
    /// Markdown table
    Markdown,
}

impl ClassifyArgs {
    /// Execute the classify command
    ///
    /// Returns `Ok(true)` when every input is a valid triangle.
    pub fn execute(&self) -> Result<bool> {
        self.init_logging();

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        log::debug!("Arguments: {:?}", self);
        log::debug!("Configuration: {:?}", config);

        let cases = self.collect_cases()?;
        log::info!("Classifying {} input(s)", cases.len());

        let classifications = self.classify_cases(&cases, &config)?;

        let format = self.resolve_format(&config)?;
        let mut formatter = self.create_formatter(format, &config)?;
        for classification in &classifications {
            formatter.format_classification(classification)?;
        }
        formatter.finish()?;

        let rejected = classifications.iter().filter(|c| !c.is_success()).count();
        if rejected > 0 {
            log::info!("{rejected} of {} input(s) rejected", classifications.len());
        }

        Ok(rejected == 0)
    }

    /// Gather the argument lists to classify, from exactly one input mode
    fn collect_cases(&self) -> Result<Vec<Case>> {
        if !self.input.is_empty() {
            return self.read_batch();
        }

        if let Some(json) = &self.json {
            let arguments =
                parse_arguments_json(json).map_err(|message| CliError::ParseError {
                    source: "--json".to_string(),
                    message,
                })?;
            return Ok(vec![Case::new("--json", arguments)]);
        }

        Ok(vec![Case::new("command line", parse_tokens(&self.edges))])
    }

    fn read_batch(&self) -> Result<Vec<Case>> {
        let sources = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_sources(sources.len() as u64);

        let mut cases = Vec::new();
        for source in &sources {
            let source_cases = FileReader::read_cases(source)?;
            progress.source_completed(&source.to_string(), source_cases.len());
            cases.extend(source_cases);
        }
        progress.finish();

        Ok(cases)
    }

    /// Classify every case, keeping input order
    fn classify_cases(&self, cases: &[Case], config: &CliConfig) -> Result<Vec<Classification>> {
        if !(self.parallel || config.processing.parallel) {
            return Ok(cases.iter().map(Classification::from_case).collect());
        }

        let threads = self.threads.unwrap_or(config.processing.worker_threads);
        log::debug!("Parallel classification with {threads} thread(s) (0 = auto)");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        Ok(pool.install(|| {
            cases
                .par_iter()
                .map(Classification::from_case)
                .collect::<Vec<_>>()
        }))
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        OutputFormat::from_str(&config.output.default_format, true)
            .map_err(|e| CliError::ConfigError(e).into())
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        config: &CliConfig,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer = open_writer(self.output.as_deref())?;

        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => {
                let show_source = config.output.show_source || !self.input.is_empty();
                Box::new(TextFormatter::new(writer).with_source(show_source))
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when commands run in-process
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use trishape_core::{ErrorKind, TriangleType};

    fn args() -> ClassifyArgs {
        ClassifyArgs {
            edges: Vec::new(),
            json: None,
            input: Vec::new(),
            output: None,
            format: None,
            config: None,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_cases_from_edges() {
        let args = ClassifyArgs {
            edges: vec!["\"1\"".to_string(), "2".to_string(), "3".to_string()],
            ..args()
        };

        let cases = args.collect_cases().unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].source, "command line");

        let classification = Classification::from_case(&cases[0]);
        assert_eq!(classification.error, Some(ErrorKind::WrongArgumentType));
    }

    #[test]
    fn test_no_edges_is_wrong_count() {
        let cases = args().collect_cases().unwrap();
        let classification = Classification::from_case(&cases[0]);
        assert_eq!(classification.error, Some(ErrorKind::WrongArgumentCount));
    }

    #[test]
    fn test_cases_from_json() {
        let args = ClassifyArgs {
            json: Some("[[9999, 9999, 0.0001]]".to_string()),
            ..args()
        };

        let cases = args.collect_cases().unwrap();
        let classification = Classification::from_case(&cases[0]);
        assert_eq!(classification.triangle_type, Some(TriangleType::Isosceles));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let args = ClassifyArgs {
            json: Some("3, 4, 5".to_string()),
            ..args()
        };

        let err_msg = args.collect_cases().unwrap_err().to_string();
        assert!(err_msg.contains("Parse error in --json"));
    }

    #[test]
    fn test_parallel_keeps_input_order() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("cases.txt");
        let lines: Vec<String> = (1..=50).map(|n| format!("[{n}, {n}, {n}]")).collect();
        fs::write(&file_path, lines.join("\n")).unwrap();

        let args = ClassifyArgs {
            input: vec![file_path.display().to_string()],
            parallel: true,
            threads: Some(4),
            ..args()
        };

        let cases = args.collect_cases().unwrap();
        let classifications = args
            .classify_cases(&cases, &CliConfig::default())
            .unwrap();

        assert_eq!(classifications.len(), 50);
        for (index, classification) in classifications.iter().enumerate() {
            assert_eq!(
                classification.source,
                format!("{}:{}", file_path.display(), index + 1)
            );
            assert!(classification.is_success());
        }
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("out.json");

        let args = ClassifyArgs {
            edges: vec!["3".to_string(), "4".to_string(), "5".to_string()],
            output: Some(output_path.clone()),
            format: Some(OutputFormat::Json),
            ..args()
        };

        assert!(args.execute().unwrap());

        let content = fs::read_to_string(&output_path).unwrap();
        let records: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(records[0]["triangle_type"], "scalene");
    }

    #[test]
    fn test_execute_reports_rejection() {
        let temp_dir = TempDir::new().unwrap();

        let args = ClassifyArgs {
            edges: vec!["1".to_string(), "2".to_string(), "3".to_string()],
            output: Some(temp_dir.path().join("out.txt")),
            ..args()
        };

        assert!(!args.execute().unwrap());
    }

    #[test]
    fn test_format_falls_back_to_config() {
        let config = CliConfig::from_toml("[output]\ndefault_format = \"markdown\"\n").unwrap();
        assert_eq!(args().resolve_format(&config).unwrap(), OutputFormat::Markdown);

        let args = ClassifyArgs {
            format: Some(OutputFormat::Text),
            ..args()
        };
        assert_eq!(args.resolve_format(&config).unwrap(), OutputFormat::Text);
    }
}
