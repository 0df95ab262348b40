//! Raw edge arguments
//!
//! Edges arrive from dynamically typed sources (JSON documents, command-line
//! tokens), so an argument is kept as an [`EdgeValue`] until the validation
//! pipeline decides whether it is a usable length.

use std::fmt;

/// One unvalidated edge argument
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeValue {
    /// Numeric value, possibly NaN or infinite
    Number(f64),
    /// Text value (never parsed as a number)
    Text(String),
    /// Boolean value
    Boolean(bool),
    /// Ordered sequence of values
    Sequence(Vec<EdgeValue>),
    /// Structured object; its contents are irrelevant to classification
    Object,
    /// Absent or null value
    Null,
}

impl EdgeValue {
    /// Returns `true` for an absent or null value
    pub fn is_null(&self) -> bool {
        matches!(self, EdgeValue::Null)
    }

    /// Returns `true` for a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, EdgeValue::Sequence(_))
    }

    /// The numeric length carried by this value, if it has one
    ///
    /// NaN is not a length. Infinities are, and are left for the
    /// triangle-inequality check to reject.
    pub fn as_length(&self) -> Option<f64> {
        match self {
            EdgeValue::Number(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }

    /// Short name of the value's type, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            EdgeValue::Number(n) if n.is_nan() => "NaN",
            EdgeValue::Number(_) => "number",
            EdgeValue::Text(_) => "text",
            EdgeValue::Boolean(_) => "boolean",
            EdgeValue::Sequence(_) => "sequence",
            EdgeValue::Object => "object",
            EdgeValue::Null => "null",
        }
    }
}

impl fmt::Display for EdgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeValue::Number(n) => write!(f, "{n}"),
            EdgeValue::Text(text) => write!(f, "{text:?}"),
            EdgeValue::Boolean(b) => write!(f, "{b}"),
            EdgeValue::Sequence(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            EdgeValue::Object => write!(f, "{{}}"),
            EdgeValue::Null => write!(f, "null"),
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*; $doc:literal) => {
        $(
            #[doc = $doc]
            impl From<$ty> for EdgeValue {
                fn from(value: $ty) -> Self {
                    EdgeValue::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, u8, u16, u32; "Exact conversion to a numeric edge.");
impl_from_number!(i64, isize, u64, usize;
    "Lossy conversion to a numeric edge. Magnitudes above 2^53 round to the \
     nearest `f64`, so neighbouring integers may compare equal.");

impl From<&str> for EdgeValue {
    fn from(value: &str) -> Self {
        EdgeValue::Text(value.to_string())
    }
}

impl From<String> for EdgeValue {
    fn from(value: String) -> Self {
        EdgeValue::Text(value)
    }
}

impl From<bool> for EdgeValue {
    fn from(value: bool) -> Self {
        EdgeValue::Boolean(value)
    }
}

impl<T: Into<EdgeValue>> From<Vec<T>> for EdgeValue {
    fn from(values: Vec<T>) -> Self {
        EdgeValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<EdgeValue>> From<Option<T>> for EdgeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(EdgeValue::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for EdgeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => EdgeValue::Null,
            Value::Bool(b) => EdgeValue::Boolean(b),
            // Every JSON number is representable as f64, possibly with rounding
            Value::Number(n) => n.as_f64().map_or(EdgeValue::Null, EdgeValue::Number),
            Value::String(s) => EdgeValue::Text(s),
            Value::Array(values) => {
                EdgeValue::Sequence(values.into_iter().map(EdgeValue::from).collect())
            }
            Value::Object(_) => EdgeValue::Object,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EdgeValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        match self {
            EdgeValue::Number(n) => serializer.serialize_f64(*n),
            EdgeValue::Text(text) => serializer.serialize_str(text),
            EdgeValue::Boolean(b) => serializer.serialize_bool(*b),
            EdgeValue::Sequence(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            EdgeValue::Object => serializer.collect_map(std::iter::empty::<(String, ())>()),
            EdgeValue::Null => serializer.serialize_unit(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EdgeValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
        Ok(EdgeValue::from(value))
    }
}
