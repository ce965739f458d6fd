use std::fmt;

use super::Condition;
use crate::point::Record;

/// Boolean rule a [`Composite`] applies to its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Every child must pass. No children: passes.
    And,
    /// At least one child must pass. No children: fails.
    Or,
}

impl Combinator {
    /// Result of combining zero children.
    #[must_use]
    pub fn identity(self) -> bool {
        match self {
            Combinator::And => true,
            Combinator::Or => false,
        }
    }

    /// The combinator swapped in by De Morgan's laws.
    #[must_use]
    pub fn dual(self) -> Self {
        match self {
            Combinator::And => Combinator::Or,
            Combinator::Or => Combinator::And,
        }
    }

    /// Returns a textual representation of the combinator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Branch condition combining an ordered list of child conditions.
///
/// Children are owned exclusively, so a tree of composites is always finite and
/// acyclic. Evaluation stops at the first child that decides the result.
pub struct Composite<R> {
    combinator: Combinator,
    children: Vec<Condition<R>>,
}

impl<R> Composite<R> {
    /// Empty composite; evaluates to [`Combinator::identity`] until children are added.
    pub fn new(combinator: Combinator) -> Self {
        Self {
            combinator,
            children: Vec::new(),
        }
    }

    /// Empty conjunction.
    pub fn and() -> Self {
        Self::new(Combinator::And)
    }

    /// Empty disjunction.
    pub fn or() -> Self {
        Self::new(Combinator::Or)
    }

    /// Composite over the supplied children, kept in order.
    pub fn with_children<I>(combinator: Combinator, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Condition<R>>,
    {
        Self {
            combinator,
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a child.
    pub fn push(&mut self, child: impl Into<Condition<R>>) {
        self.children.push(child.into());
    }

    /// Appends a child, builder style.
    #[must_use]
    pub fn with(mut self, child: impl Into<Condition<R>>) -> Self {
        self.push(child);
        self
    }

    /// Combinator applied to the children.
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Children in evaluation order.
    pub fn children(&self) -> &[Condition<R>] {
        &self.children
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Combinator, Vec<Condition<R>>) {
        (self.combinator, self.children)
    }
}

impl<R: Record> Composite<R> {
    /// Combines the children's results for `record`.
    #[inline]
    pub fn evaluate(&self, record: &R) -> bool {
        match self.combinator {
            Combinator::And => self.children.iter().all(|child| child.evaluate(record)),
            Combinator::Or => self.children.iter().any(|child| child.evaluate(record)),
        }
    }
}

impl<R> Clone for Composite<R> {
    fn clone(&self) -> Self {
        Self {
            combinator: self.combinator,
            children: self.children.clone(),
        }
    }
}

impl<R> fmt::Debug for Composite<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("combinator", &self.combinator)
            .field("children", &self.children)
            .finish()
    }
}

impl<R> fmt::Display for Composite<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            return f.write_str(if self.combinator.identity() {
                "TRUE"
            } else {
                "FALSE"
            });
        }
        f.write_str("(")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.combinator)?;
            }
            write!(f, "{child}")?;
        }
        f.write_str(")")
    }
}
