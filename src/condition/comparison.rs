//! Leaf condition comparing a record field against a threshold.

use std::fmt;

use super::ComparisonOp;
use crate::{
    error::ConfigurationError,
    point::{FieldAccessor, Record},
};

/// Leaf condition comparing one record field against a fixed threshold.
pub struct Comparison<R> {
    field: FieldAccessor<R>,
    op: ComparisonOp,
    threshold: f64,
}

impl<R: Record> Comparison<R> {
    /// Resolves `field` against `R` and builds the comparison.
    ///
    /// The threshold is narrowed to the field's type. Fails when `R` has no such
    /// field, or when `threshold` is NaN (no record could ever pass).
    pub fn new(
        field: &str,
        op: ComparisonOp,
        threshold: impl Into<f64>,
    ) -> Result<Self, ConfigurationError> {
        let field = FieldAccessor::new(field)?;
        Self::from_accessor(field, op, threshold)
    }

    /// Builds the comparison over an already resolved field.
    pub fn from_accessor(
        field: FieldAccessor<R>,
        op: ComparisonOp,
        threshold: impl Into<f64>,
    ) -> Result<Self, ConfigurationError> {
        let threshold = threshold.into();
        if threshold.is_nan() {
            return Err(ConfigurationError::NanThreshold {
                field: field.name(),
            });
        }
        Ok(Self {
            op,
            threshold: field.narrow(threshold),
            field,
        })
    }

    /// Returns true when the record's field satisfies the comparison.
    #[inline]
    pub fn evaluate(&self, record: &R) -> bool {
        self.op.test(self.field.get(record), self.threshold)
    }
}

impl<R> Comparison<R> {
    /// Field being compared.
    pub fn field(&self) -> &FieldAccessor<R> {
        &self.field
    }

    /// Operator.
    pub fn op(&self) -> ComparisonOp {
        self.op
    }

    /// Threshold on the right-hand side, in the field's precision.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<R> Clone for Comparison<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            op: self.op,
            threshold: self.threshold,
        }
    }
}

impl<R> fmt::Debug for Comparison<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparison")
            .field("field", &self.field.name())
            .field("op", &self.op)
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl<R> fmt::Display for Comparison<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field.name(), self.op, self.threshold)
    }
}
