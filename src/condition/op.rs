use std::{cmp::Ordering, fmt, str::FromStr};

use crate::error::ConfigurationError;

/// Comparison operator applied between a field value and a threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// Greater than (`>`).
    GreaterThan,
    /// Greater than or equal to (`>=`).
    GreaterThanOrEqual,
    /// Less than (`<`).
    LessThan,
    /// Less than or equal to (`<=`).
    LessThanOrEqual,
    /// Equals (`=`).
    Equal,
    /// Not equals (`!=`).
    NotEqual,
}

impl ComparisonOp {
    /// Returns a textual representation of the operator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOp::GreaterThan => ">",
            ComparisonOp::GreaterThanOrEqual => ">=",
            ComparisonOp::LessThan => "<",
            ComparisonOp::LessThanOrEqual => "<=",
            ComparisonOp::Equal => "=",
            ComparisonOp::NotEqual => "!=",
        }
    }

    /// Returns the operator that swaps the left/right side of the comparison.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ComparisonOp::Equal => ComparisonOp::Equal,
            ComparisonOp::NotEqual => ComparisonOp::NotEqual,
            ComparisonOp::LessThan => ComparisonOp::GreaterThan,
            ComparisonOp::LessThanOrEqual => ComparisonOp::GreaterThanOrEqual,
            ComparisonOp::GreaterThan => ComparisonOp::LessThan,
            ComparisonOp::GreaterThanOrEqual => ComparisonOp::LessThanOrEqual,
        }
    }

    /// Applies the operator to `lhs` and `rhs`.
    ///
    /// Unordered operands (either side NaN) never satisfy any operator, including
    /// [`ComparisonOp::NotEqual`].
    #[inline]
    #[must_use]
    pub fn test(self, lhs: f64, rhs: f64) -> bool {
        match lhs.partial_cmp(&rhs) {
            Some(ordering) => self.matches(ordering),
            None => false,
        }
    }

    #[inline]
    fn matches(self, ordering: Ordering) -> bool {
        match self {
            ComparisonOp::GreaterThan => ordering == Ordering::Greater,
            ComparisonOp::GreaterThanOrEqual => ordering != Ordering::Less,
            ComparisonOp::LessThan => ordering == Ordering::Less,
            ComparisonOp::LessThanOrEqual => ordering != Ordering::Greater,
            ComparisonOp::Equal => ordering == Ordering::Equal,
            ComparisonOp::NotEqual => ordering != Ordering::Equal,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOp {
    type Err = ConfigurationError;

    /// Accepts symbolic operators and the short mnemonic names (`GT`, `GE`, `LT`,
    /// `LE`, `EQ`, `NE`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim() {
            ">" => ComparisonOp::GreaterThan,
            ">=" => ComparisonOp::GreaterThanOrEqual,
            "<" => ComparisonOp::LessThan,
            "<=" => ComparisonOp::LessThanOrEqual,
            "=" | "==" => ComparisonOp::Equal,
            "!=" => ComparisonOp::NotEqual,
            other => match other.to_ascii_uppercase().as_str() {
                "GT" => ComparisonOp::GreaterThan,
                "GE" => ComparisonOp::GreaterThanOrEqual,
                "LT" => ComparisonOp::LessThan,
                "LE" => ComparisonOp::LessThanOrEqual,
                "EQ" => ComparisonOp::Equal,
                "NE" => ComparisonOp::NotEqual,
                _ => return Err(ConfigurationError::UnknownOperator(s.to_string())),
            },
        };
        Ok(op)
    }
}
