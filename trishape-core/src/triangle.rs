//! Triangle construction and the validation pipeline

use crate::edge::EdgeValue;
use crate::error::{ErrorKind, Result};
use crate::types::TriangleType;

/// A candidate triangle holding three unvalidated edges
///
/// Construction only checks the shape of the arguments. Value checks run
/// when [`Triangle::classify`] or [`Triangle::validate`] is called, in this
/// order: type, sign, triangle inequality.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    edges: [EdgeValue; 3],
}

impl Triangle {
    /// Build from three positional values
    ///
    /// Fails with [`ErrorKind::WrongArgumentCount`] when a value is null or
    /// is itself a sequence.
    pub fn from_triple(
        a: impl Into<EdgeValue>,
        b: impl Into<EdgeValue>,
        c: impl Into<EdgeValue>,
    ) -> Result<Self> {
        let edges = [a.into(), b.into(), c.into()];

        if let Some(bad) = edges.iter().find(|e| e.is_null() || e.is_sequence()) {
            log::debug!("positional argument of type {} rejected", bad.type_name());
            return Err(ErrorKind::WrongArgumentCount);
        }

        Ok(Self { edges })
    }

    /// Build from one ordered sequence of exactly three values
    pub fn from_sequence<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<EdgeValue>,
    {
        let values: Vec<EdgeValue> = values.into_iter().map(Into::into).collect();
        let edges: [EdgeValue; 3] = values.try_into().map_err(|values: Vec<EdgeValue>| {
            log::debug!("sequence of {} values rejected", values.len());
            ErrorKind::WrongArgumentCount
        })?;

        Ok(Self { edges })
    }

    /// Build from an argument list of unknown shape
    ///
    /// Accepts either a single sequence argument or three positional ones.
    pub fn from_arguments(args: Vec<EdgeValue>) -> Result<Self> {
        let args = match <[EdgeValue; 3]>::try_from(args) {
            Ok([a, b, c]) => return Self::from_triple(a, b, c),
            Err(args) => args,
        };

        match <[EdgeValue; 1]>::try_from(args) {
            Ok([EdgeValue::Sequence(values)]) => Self::from_sequence(values),
            Ok(_) => {
                log::debug!("single non-sequence argument rejected");
                Err(ErrorKind::WrongArgumentCount)
            }
            Err(args) => {
                log::debug!("{} arguments rejected", args.len());
                Err(ErrorKind::WrongArgumentCount)
            }
        }
    }

    /// The edges in argument order
    pub fn edges(&self) -> &[EdgeValue; 3] {
        &self.edges
    }

    /// Run the type, sign and triangle-inequality checks
    ///
    /// Returns the edge lengths in argument order.
    pub fn validate(&self) -> Result<[f64; 3]> {
        let mut lengths = [0.0; 3];
        for (length, edge) in lengths.iter_mut().zip(&self.edges) {
            *length = edge.as_length().ok_or_else(|| {
                log::debug!("edge of type {} is not a length", edge.type_name());
                ErrorKind::WrongArgumentType
            })?;
        }
        log::trace!("type check passed: {lengths:?}");

        if lengths.iter().any(|&length| length <= 0.0) {
            log::debug!("non-positive edge in {lengths:?}");
            return Err(ErrorKind::NonPositiveSide);
        }
        log::trace!("sign check passed");

        let [a, b, c] = sorted(lengths);
        if a + b <= c {
            log::debug!("triangle inequality fails: {a} + {b} <= {c}");
            return Err(ErrorKind::InvalidTriangleSides);
        }
        log::trace!("triangle inequality holds");

        Ok(lengths)
    }

    /// Returns `true` if the edges pass every validation stage
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate the edges and classify the triangle
    pub fn classify(&self) -> Result<TriangleType> {
        let lengths = self.validate()?;

        let distinct = distinct_count(&sorted(lengths));
        let triangle_type = TriangleType::from_distinct_count(distinct)
            .unwrap_or_else(|| unreachable!("three edges have {distinct} distinct lengths"));
        log::trace!("classified {lengths:?} as {triangle_type}");

        Ok(triangle_type)
    }
}

impl From<[f64; 3]> for Triangle {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self {
            edges: [a.into(), b.into(), c.into()],
        }
    }
}

impl TryFrom<&[f64]> for Triangle {
    type Error = ErrorKind;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_sequence(values.iter().copied())
    }
}

impl TryFrom<Vec<EdgeValue>> for Triangle {
    type Error = ErrorKind;

    fn try_from(args: Vec<EdgeValue>) -> Result<Self> {
        Self::from_arguments(args)
    }
}

/// Ascending copy; callers only pass NaN-free lengths
fn sorted(mut lengths: [f64; 3]) -> [f64; 3] {
    lengths.sort_by(f64::total_cmp);
    lengths
}

/// Number of distinct values in an ascending array, by exact equality
fn distinct_count(sorted: &[f64; 3]) -> usize {
    1 + sorted.windows(2).filter(|pair| pair[0] != pair[1]).count()
}
