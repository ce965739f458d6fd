//! Builder for composing condition trees.

use super::{Combinator, Comparison, ComparisonOp, Composite, Condition};
use crate::{error::ConfigurationError, point::Record};

/// Builder for composing conditions incrementally.
///
/// Comparison leaves are resolved as they are added; the first failure is kept
/// and returned from [`ConditionBuilder::build`], later clauses are ignored.
#[derive(Debug)]
pub struct ConditionBuilder<R> {
    combinator: Combinator,
    clauses: Vec<Condition<R>>,
    error: Option<ConfigurationError>,
}

impl<R: Record> ConditionBuilder<R> {
    const fn new(combinator: Combinator) -> Self {
        Self {
            combinator,
            clauses: Vec::new(),
            error: None,
        }
    }

    /// Creates a builder that emits an `AND` of all clauses.
    #[must_use]
    pub fn and() -> Self {
        Self::new(Combinator::And)
    }

    /// Creates a builder that emits an `OR` of all clauses.
    #[must_use]
    pub fn or() -> Self {
        Self::new(Combinator::Or)
    }

    /// Adds an existing condition.
    #[must_use]
    pub fn condition(mut self, condition: impl Into<Condition<R>>) -> Self {
        if self.error.is_none() {
            self.clauses.push(condition.into());
        }
        self
    }

    /// Adds a comparison.
    #[must_use]
    pub fn compare(mut self, field: &str, op: ComparisonOp, threshold: impl Into<f64>) -> Self {
        if self.error.is_some() {
            return self;
        }
        match Comparison::new(field, op, threshold) {
            Ok(comparison) => self.clauses.push(Condition::Comparison(comparison)),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Adds a `>` comparison.
    #[must_use]
    pub fn greater_than(self, field: &str, threshold: impl Into<f64>) -> Self {
        self.compare(field, ComparisonOp::GreaterThan, threshold)
    }

    /// Adds a `>=` comparison.
    #[must_use]
    pub fn greater_than_or_equal(self, field: &str, threshold: impl Into<f64>) -> Self {
        self.compare(field, ComparisonOp::GreaterThanOrEqual, threshold)
    }

    /// Adds a `<` comparison.
    #[must_use]
    pub fn less_than(self, field: &str, threshold: impl Into<f64>) -> Self {
        self.compare(field, ComparisonOp::LessThan, threshold)
    }

    /// Adds a `<=` comparison.
    #[must_use]
    pub fn less_than_or_equal(self, field: &str, threshold: impl Into<f64>) -> Self {
        self.compare(field, ComparisonOp::LessThanOrEqual, threshold)
    }

    /// Adds an equality comparison.
    #[must_use]
    pub fn equals(self, field: &str, threshold: impl Into<f64>) -> Self {
        self.compare(field, ComparisonOp::Equal, threshold)
    }

    /// Adds an inequality comparison.
    #[must_use]
    pub fn not_equals(self, field: &str, threshold: impl Into<f64>) -> Self {
        self.compare(field, ComparisonOp::NotEqual, threshold)
    }

    /// Adds an opaque record predicate.
    #[must_use]
    pub fn functor<F>(self, evaluator: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.condition(Condition::functor(evaluator))
    }

    fn branch<F>(mut self, combinator: Combinator, negate: bool, build: F) -> Self
    where
        F: FnOnce(ConditionBuilder<R>) -> ConditionBuilder<R>,
    {
        if self.error.is_some() {
            return self;
        }
        match build(ConditionBuilder::new(combinator)).build() {
            Ok(condition) if negate => self.clauses.push(Condition::not(condition)),
            Ok(condition) => self.clauses.push(condition),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Adds a nested conjunction built by the supplied closure.
    #[must_use]
    pub fn and_group<F>(self, build: F) -> Self
    where
        F: FnOnce(ConditionBuilder<R>) -> ConditionBuilder<R>,
    {
        self.branch(Combinator::And, false, build)
    }

    /// Adds a nested disjunction built by the supplied closure.
    #[must_use]
    pub fn or_group<F>(self, build: F) -> Self
    where
        F: FnOnce(ConditionBuilder<R>) -> ConditionBuilder<R>,
    {
        self.branch(Combinator::Or, false, build)
    }

    /// Adds the negation of a conjunction built by the supplied closure.
    #[must_use]
    pub fn not_group<F>(self, build: F) -> Self
    where
        F: FnOnce(ConditionBuilder<R>) -> ConditionBuilder<R>,
    {
        self.branch(Combinator::And, true, build)
    }

    /// Consumes the builder and returns the composed condition.
    ///
    /// A builder without clauses yields the combinator's identity: an empty `AND`
    /// passes everything, an empty `OR` nothing.
    pub fn build(self) -> Result<Condition<R>, ConfigurationError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(Condition::Composite(Composite::with_children(
            self.combinator,
            self.clauses,
        )))
    }
}

impl<R: Record> Default for ConditionBuilder<R> {
    fn default() -> Self {
        Self::and()
    }
}
