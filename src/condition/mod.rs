//! Condition trees deciding, per record, whether it is kept.
//!
//! A [`Condition`] is a tagged tree: [`Comparison`] and [`Functor`] leaves,
//! [`Composite`] branches combining children under AND/OR, and a `Not` wrapper.
//! Parents own their children, so trees are finite and acyclic by construction.
//! Conditions are immutable once built and can be shared across threads for
//! concurrent read-only evaluation.

mod builder;
mod comparison;
mod composite;
mod functor;
mod op;

use std::{collections::BTreeSet, fmt};

pub use builder::ConditionBuilder;
pub use comparison::Comparison;
pub use composite::{Combinator, Composite};
pub use functor::Functor;
pub use op::ComparisonOp;

use crate::{error::ConfigurationError, point::Record};

/// Recursive condition node; leaf and branch variants coexist.
pub enum Condition<R> {
    /// Field versus threshold.
    Comparison(Comparison<R>),
    /// AND/OR over child conditions.
    Composite(Composite<R>),
    /// Logical negation.
    Not(Box<Condition<R>>),
    /// Opaque user predicate.
    Functor(Functor<R>),
}

impl<R: Record> Condition<R> {
    /// Returns true when `record` satisfies the condition.
    #[inline]
    pub fn evaluate(&self, record: &R) -> bool {
        match self {
            Condition::Comparison(comparison) => comparison.evaluate(record),
            Condition::Composite(composite) => composite.evaluate(record),
            Condition::Not(inner) => !inner.evaluate(record),
            Condition::Functor(functor) => functor.evaluate(record),
        }
    }

    /// Builds a comparison leaf; see [`Comparison::new`].
    pub fn compare(
        field: &str,
        op: ComparisonOp,
        threshold: impl Into<f64>,
    ) -> Result<Self, ConfigurationError> {
        Comparison::new(field, op, threshold).map(Condition::Comparison)
    }
}

impl<R> Condition<R> {
    /// Conjunction of `clauses`, flattening directly nested conjunctions.
    ///
    /// An empty conjunction passes every record.
    pub fn and<I>(clauses: I) -> Self
    where
        I: IntoIterator<Item = Condition<R>>,
    {
        Self::flatten(Combinator::And, clauses)
    }

    /// Disjunction of `clauses`, flattening directly nested disjunctions.
    ///
    /// An empty disjunction passes no record.
    pub fn or<I>(clauses: I) -> Self
    where
        I: IntoIterator<Item = Condition<R>>,
    {
        Self::flatten(Combinator::Or, clauses)
    }

    /// Logical negation of `condition`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(condition: Condition<R>) -> Self {
        Condition::Not(Box::new(condition))
    }

    /// Wraps an arbitrary record predicate.
    pub fn functor<F>(evaluator: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Condition::Functor(Functor::new(evaluator))
    }

    /// Returns the logical negation, pushed down to the leaves.
    ///
    /// AND and OR swap under De Morgan's laws and double negations collapse.
    /// Leaves are wrapped rather than rewritten: inverting a comparison operator
    /// would let NaN fields pass.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Condition::Not(inner) => *inner,
            Condition::Composite(composite) => {
                let (combinator, children) = composite.into_parts();
                Condition::Composite(Composite::with_children(
                    combinator.dual(),
                    children.into_iter().map(Condition::negate),
                ))
            }
            leaf @ (Condition::Comparison(_) | Condition::Functor(_)) => Condition::not(leaf),
        }
    }

    /// True for comparison and functor nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Condition::Comparison(_) | Condition::Functor(_))
    }

    /// Names of the fields read by comparisons anywhere in the tree.
    ///
    /// Functors are opaque and contribute nothing.
    pub fn referenced_fields(&self) -> BTreeSet<&'static str> {
        let mut out = BTreeSet::new();
        self.collect_fields(&mut out);
        out
    }

    /// Number of levels in the tree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Condition::Comparison(_) | Condition::Functor(_) => 1,
            Condition::Not(inner) => 1 + inner.depth(),
            Condition::Composite(composite) => {
                1 + composite
                    .children()
                    .iter()
                    .map(Condition::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    fn collect_fields(&self, out: &mut BTreeSet<&'static str>) {
        match self {
            Condition::Comparison(comparison) => {
                out.insert(comparison.field().name());
            }
            Condition::Composite(composite) => {
                for child in composite.children() {
                    child.collect_fields(out);
                }
            }
            Condition::Not(inner) => inner.collect_fields(out),
            Condition::Functor(_) => {}
        }
    }

    fn flatten<I>(combinator: Combinator, clauses: I) -> Self
    where
        I: IntoIterator<Item = Condition<R>>,
    {
        let mut acc = Vec::new();
        for clause in clauses {
            match clause {
                Condition::Composite(nested) if nested.combinator() == combinator => {
                    let (_, mut children) = nested.into_parts();
                    acc.append(&mut children);
                }
                other => acc.push(other),
            }
        }
        Condition::Composite(Composite::with_children(combinator, acc))
    }
}

impl<R> Clone for Condition<R> {
    fn clone(&self) -> Self {
        match self {
            Condition::Comparison(comparison) => Condition::Comparison(comparison.clone()),
            Condition::Composite(composite) => Condition::Composite(composite.clone()),
            Condition::Not(inner) => Condition::Not(inner.clone()),
            Condition::Functor(functor) => Condition::Functor(functor.clone()),
        }
    }
}

impl<R> fmt::Debug for Condition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Comparison(comparison) => fmt::Debug::fmt(comparison, f),
            Condition::Composite(composite) => fmt::Debug::fmt(composite, f),
            Condition::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
            Condition::Functor(functor) => fmt::Debug::fmt(functor, f),
        }
    }
}

impl<R> fmt::Display for Condition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Comparison(comparison) => fmt::Display::fmt(comparison, f),
            Condition::Composite(composite) => fmt::Display::fmt(composite, f),
            Condition::Not(inner) => write!(f, "NOT {inner}"),
            Condition::Functor(_) => f.write_str("<functor>"),
        }
    }
}

impl<R> From<Comparison<R>> for Condition<R> {
    fn from(value: Comparison<R>) -> Self {
        Condition::Comparison(value)
    }
}

impl<R> From<Composite<R>> for Condition<R> {
    fn from(value: Composite<R>) -> Self {
        Condition::Composite(value)
    }
}

impl<R> From<Functor<R>> for Condition<R> {
    fn from(value: Functor<R>) -> Self {
        Condition::Functor(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Combinator, ComparisonOp, Condition};
    use crate::point::{PointXy, PointXyz};

    fn cmp(field: &str, op: ComparisonOp, threshold: f32) -> Condition<PointXy> {
        Condition::compare(field, op, threshold).expect("field exists")
    }

    #[test]
    fn and_or_flatten_nested() {
        let a = cmp("x", ComparisonOp::GreaterThan, 0.0);
        let b = cmp("y", ComparisonOp::LessThan, 0.0);
        let nested = Condition::and([a.clone(), b.clone()]);
        match Condition::and([a.clone(), nested, b.clone()]) {
            Condition::Composite(composite) => assert_eq!(composite.len(), 4),
            other => panic!("expected Composite, got {other:?}"),
        }

        // Mixed combinators stay nested.
        let nested_or = Condition::or([a.clone(), b.clone()]);
        match Condition::and([a, nested_or]) {
            Condition::Composite(composite) => {
                assert_eq!(composite.combinator(), Combinator::And);
                assert_eq!(composite.len(), 2);
            }
            other => panic!("expected Composite, got {other:?}"),
        }
    }

    #[test]
    fn not_inverts() {
        let not = Condition::not(cmp("x", ComparisonOp::GreaterThan, 0.0));
        assert!(not.evaluate(&PointXy::new(-1.0, 0.0)));
        assert!(!not.evaluate(&PointXy::new(1.0, 0.0)));
        // NaN fails the comparison, so its negation passes.
        assert!(not.evaluate(&PointXy::new(f32::NAN, 0.0)));
        assert_eq!(not.to_string(), "NOT x > 0");
    }

    #[test]
    fn negate_applies_demorgan() {
        let condition = Condition::and([
            cmp("x", ComparisonOp::GreaterThan, 0.0),
            cmp("y", ComparisonOp::Equal, 1.0),
        ]);
        let negated = condition.clone().negate();
        match &negated {
            Condition::Composite(composite) => {
                assert_eq!(composite.combinator(), Combinator::Or);
                assert!(composite
                    .children()
                    .iter()
                    .all(|child| matches!(child, Condition::Not(_))));
            }
            other => panic!("expected Composite, got {other:?}"),
        }

        for point in [
            PointXy::new(1.0, 1.0),
            PointXy::new(1.0, 2.0),
            PointXy::new(-1.0, 1.0),
            PointXy::new(f32::NAN, 1.0),
        ] {
            assert_eq!(negated.evaluate(&point), !condition.evaluate(&point));
        }
    }

    #[test]
    fn negate_collapses_double_not_and_swaps_identities() {
        let leaf = cmp("x", ComparisonOp::LessThan, 3.0);
        assert!(matches!(leaf.clone().negate().negate(), Condition::Comparison(_)));

        let point = PointXy::new(0.0, 0.0);
        assert!(!Condition::<PointXy>::and([]).negate().evaluate(&point));
        assert!(Condition::<PointXy>::or([]).negate().evaluate(&point));
    }

    #[test]
    fn referenced_fields_skip_functors() {
        let condition = Condition::<PointXyz>::or([
            Condition::compare("z", ComparisonOp::GreaterThan, 0.0).expect("z exists"),
            Condition::not(
                Condition::compare("x", ComparisonOp::Equal, 0.0).expect("x exists"),
            ),
            Condition::functor(|p: &PointXyz| p.y > 0.0),
        ]);
        let fields: Vec<_> = condition.referenced_fields().into_iter().collect();
        assert_eq!(fields, vec!["x", "z"]);
    }

    #[test]
    fn depth_counts_levels() {
        let leaf = cmp("x", ComparisonOp::GreaterThan, 0.0);
        assert_eq!(leaf.depth(), 1);
        assert_eq!(Condition::<PointXy>::and([]).depth(), 1);
        let tree = Condition::or([
            leaf.clone(),
            Condition::and([leaf.clone(), Condition::not(leaf)]),
        ]);
        assert_eq!(tree.depth(), 4);
        assert!(!tree.is_leaf());
    }

    #[test]
    fn conditions_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Condition<PointXy>>();
        assert_send_sync::<Condition<PointXyz>>();
    }
}
