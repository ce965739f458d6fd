use std::{fmt, sync::Arc};

/// Leaf condition wrapping an arbitrary predicate over a whole record.
///
/// The wrapped function is opaque: nothing about it is validated or inspected.
/// It should be free of side effects; the filter may skip calling it when a
/// sibling already decided a composite's result.
pub struct Functor<R> {
    evaluator: Arc<dyn Fn(&R) -> bool + Send + Sync>,
}

impl<R> Functor<R> {
    /// Wraps `evaluator`.
    pub fn new<F>(evaluator: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self {
            evaluator: Arc::new(evaluator),
        }
    }

    /// Calls the wrapped function.
    #[inline]
    pub fn evaluate(&self, record: &R) -> bool {
        (self.evaluator)(record)
    }
}

impl<R> Clone for Functor<R> {
    fn clone(&self) -> Self {
        Self {
            evaluator: Arc::clone(&self.evaluator),
        }
    }
}

impl<R> fmt::Debug for Functor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Functor(..)")
    }
}
