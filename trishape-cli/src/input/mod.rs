//! Input handling module

pub mod edge_parser;
pub mod file_reader;
pub mod glob_resolver;

pub use edge_parser::{parse_arguments_json, parse_token, parse_tokens};
pub use file_reader::{Case, FileReader};
pub use glob_resolver::{resolve_patterns, InputSource};
