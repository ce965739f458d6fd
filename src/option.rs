//! Options controlling the shape of a conditional filter's output.

/// Output options for [`ConditionalFilter`](crate::filter::ConditionalFilter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOptions {
    pub(crate) keep_organized: bool,
    pub(crate) fill_value: f64,
    pub(crate) extract_removed_indices: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            keep_organized: false,
            fill_value: f64::NAN,
            extract_removed_indices: false,
        }
    }
}

impl FilterOptions {
    /// Keep rejected records in place, masked with the fill value, so the output
    /// retains the input's length and dimensions.
    #[must_use]
    pub fn keep_organized(self, keep_organized: bool) -> Self {
        FilterOptions {
            keep_organized,
            ..self
        }
    }

    /// Value written into every floating field of a rejected record in organized
    /// mode. Integer fields keep their original value.
    #[must_use]
    pub fn fill_value(self, fill_value: impl Into<f64>) -> Self {
        FilterOptions {
            fill_value: fill_value.into(),
            ..self
        }
    }

    /// Report the input indices of rejected records alongside the output.
    #[must_use]
    pub fn extract_removed_indices(self, extract_removed_indices: bool) -> Self {
        FilterOptions {
            extract_removed_indices,
            ..self
        }
    }

    /// Whether rejected records are kept as masked placeholders.
    pub fn is_keep_organized(&self) -> bool {
        self.keep_organized
    }

    /// Fill value used for masked records.
    pub fn fill(&self) -> f64 {
        self.fill_value
    }

    /// Whether rejected indices are reported.
    pub fn is_extract_removed_indices(&self) -> bool {
        self.extract_removed_indices
    }
}
