//! Validation error kinds

use thiserror::Error;

/// Reason a triangle could not be constructed or classified
///
/// Each kind belongs to exactly one stage of the validation pipeline. The
/// stages run in declaration order and only the first failure is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Arguments do not have the shape of three edges
    #[error("wrong number of arguments: expected three edges or one sequence of three")]
    WrongArgumentCount,

    /// An edge is not a number, or is NaN
    #[error("wrong argument type: every edge must be a number")]
    WrongArgumentType,

    /// An edge is zero or negative
    #[error("edge lengths must be greater than zero")]
    NonPositiveSide,

    /// The edges violate the triangle inequality
    #[error("edges cannot form a triangle")]
    InvalidTriangleSides,
}

impl ErrorKind {
    /// All error kinds, in pipeline order
    pub const ALL: [ErrorKind; 4] = [
        ErrorKind::WrongArgumentCount,
        ErrorKind::WrongArgumentType,
        ErrorKind::NonPositiveSide,
        ErrorKind::InvalidTriangleSides,
    ];

    /// Stable identifier, matches the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::WrongArgumentCount => "wrong_argument_count",
            ErrorKind::WrongArgumentType => "wrong_argument_type",
            ErrorKind::NonPositiveSide => "non_positive_side",
            ErrorKind::InvalidTriangleSides => "invalid_triangle_sides",
        }
    }

    /// Name of the validation stage that reports this kind
    pub fn stage(&self) -> &'static str {
        match self {
            ErrorKind::WrongArgumentCount => "construction",
            ErrorKind::WrongArgumentType => "type check",
            ErrorKind::NonPositiveSide => "sign check",
            ErrorKind::InvalidTriangleSides => "triangle inequality",
        }
    }
}

/// Result type for triangle operations
pub type Result<T> = std::result::Result<T, ErrorKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ErrorKind::NonPositiveSide.to_string(),
            "edge lengths must be greater than zero"
        );
        assert_eq!(
            ErrorKind::InvalidTriangleSides.to_string(),
            "edges cannot form a triangle"
        );
        assert!(ErrorKind::WrongArgumentCount
            .to_string()
            .starts_with("wrong number of arguments"));
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = ErrorKind::ALL.iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = ErrorKind::WrongArgumentType;
        let _: &dyn std::error::Error = &error;
        assert!(format!("{:?}", error).contains("WrongArgumentType"));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serialized_form_matches_code() {
        for kind in ErrorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
        }
    }
}
