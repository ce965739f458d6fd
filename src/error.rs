//! Errors raised while configuring conditions and filters.
//!
//! Evaluation itself is total: every field a condition touches is resolved
//! against the record type when the condition is built, so the only failures
//! surface before a single record is read.

use thiserror::Error;

/// Misconfiguration of a condition tree or a filter pass.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A comparison named a field the record type does not carry.
    #[error("Unknown field '{field}' for record {record}; available fields: {available:?}")]
    UnknownField {
        /// Requested field name.
        field: String,
        /// Record type the lookup ran against.
        record: &'static str,
        /// Field names the record type exposes.
        available: &'static [&'static str],
    },
    /// A comparison threshold was NaN and could never be satisfied.
    #[error("Threshold for field '{field}' is NaN")]
    NanThreshold {
        /// Field the comparison reads.
        field: &'static str,
    },
    /// Operator text did not name a known comparison.
    #[error("Unknown comparison operator: {0}")]
    UnknownOperator(String),
    /// A filter pass was requested without a root condition.
    #[error("Conditional filter has no condition set")]
    MissingCondition,
    /// Organized cloud dimensions disagree with the number of points.
    #[error("Organized cloud of {width}x{height} cannot hold {len} points")]
    DimensionMismatch {
        /// Requested row width.
        width: usize,
        /// Requested row count.
        height: usize,
        /// Number of points supplied.
        len: usize,
    },
}
