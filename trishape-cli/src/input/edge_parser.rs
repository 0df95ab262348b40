//! Conversion of command-line tokens and JSON lines into edge arguments

use trishape_core::EdgeValue;

/// Parse a single command-line token
///
/// Numbers (including `inf` and `NaN`), `true`, `false` and `null` map to
/// their typed values. Tokens that look like JSON (`[..]`, `{..}`, `".."`) are
/// parsed as JSON. Everything else is text.
pub fn parse_token(token: &str) -> EdgeValue {
    let trimmed = token.trim();

    match trimmed {
        "null" => return EdgeValue::Null,
        "true" => return EdgeValue::Boolean(true),
        "false" => return EdgeValue::Boolean(false),
        _ => {}
    }

    if let Ok(number) = trimmed.parse::<f64>() {
        return EdgeValue::Number(number);
    }

    if trimmed.starts_with(['[', '{', '"']) {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
            return EdgeValue::from(value);
        }
    }

    EdgeValue::Text(token.to_string())
}

/// Parse every token of a command line
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<EdgeValue> {
    tokens.iter().map(|t| parse_token(t.as_ref())).collect()
}

/// Parse a JSON array holding an argument list, e.g. `[3, 4, 5]` or `[[3, 4, 5]]`
pub fn parse_arguments_json(line: &str) -> Result<Vec<EdgeValue>, String> {
    let value: serde_json::Value =
        serde_json::from_str(line).map_err(|e| format!("invalid JSON: {e}"))?;

    match EdgeValue::from(value) {
        EdgeValue::Sequence(arguments) => Ok(arguments),
        other => Err(format!(
            "expected a JSON array of arguments, found {}",
            other.type_name()
        )),
    }
}
