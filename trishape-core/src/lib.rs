//! Triangle shape classification
//!
//! Classifies a triangle as equilateral, isosceles or scalene from three edge
//! lengths. Edges are accepted as loosely typed [`EdgeValue`]s so that input
//! from JSON or the command line can be checked the same way as native
//! numbers.
//!
//! Validation is lazy and ordered: constructing a [`Triangle`] only checks
//! the shape of the arguments, and [`Triangle::classify`] then runs the type,
//! sign and triangle-inequality checks, reporting the first failure.
//!
//! # Example
//!
//! ```rust
//! use trishape_core::{ErrorKind, Triangle, TriangleType};
//!
//! let triangle = Triangle::from_triple(3, 4, 5).unwrap();
//! assert_eq!(triangle.classify(), Ok(TriangleType::Scalene));
//!
//! let triangle = Triangle::from_sequence([1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(triangle.classify(), Err(ErrorKind::InvalidTriangleSides));
//!
//! assert_eq!(
//!     Triangle::from_sequence([1.0, 2.0]),
//!     Err(ErrorKind::WrongArgumentCount)
//! );
//! ```

#![warn(missing_docs)]

pub mod edge;
pub mod error;
pub mod triangle;
pub mod types;

// Re-export key types
pub use edge::EdgeValue;
pub use error::{ErrorKind, Result};
pub use triangle::Triangle;
pub use types::TriangleType;

/// Construct and classify a triangle in one call
pub fn classify(
    a: impl Into<EdgeValue>,
    b: impl Into<EdgeValue>,
    c: impl Into<EdgeValue>,
) -> Result<TriangleType> {
    Triangle::from_triple(a, b, c)?.classify()
}

/// Classify an argument list of unknown shape
///
/// See [`Triangle::from_arguments`] for the accepted shapes.
pub fn classify_arguments(args: Vec<EdgeValue>) -> Result<TriangleType> {
    Triangle::from_arguments(args)?.classify()
}
