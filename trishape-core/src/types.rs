//! Classification results

use std::fmt;

/// Shape of a valid triangle, keyed by the number of distinct edge lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TriangleType {
    /// All three edges are equal
    Equilateral,
    /// Exactly two edges are equal
    Isosceles,
    /// No two edges are equal
    Scalene,
}

impl TriangleType {
    /// All triangle types, ordered by distinct edge count
    pub const ALL: [TriangleType; 3] = [
        TriangleType::Equilateral,
        TriangleType::Isosceles,
        TriangleType::Scalene,
    ];

    /// Map a distinct edge count to a triangle type
    pub fn from_distinct_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(TriangleType::Equilateral),
            2 => Some(TriangleType::Isosceles),
            3 => Some(TriangleType::Scalene),
            _ => None,
        }
    }

    /// Number of distinct edge lengths this type stands for
    pub fn distinct_edges(&self) -> usize {
        match self {
            TriangleType::Equilateral => 1,
            TriangleType::Isosceles => 2,
            TriangleType::Scalene => 3,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleType::Equilateral => "equilateral",
            TriangleType::Isosceles => "isosceles",
            TriangleType::Scalene => "scalene",
        }
    }
}

impl fmt::Display for TriangleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
