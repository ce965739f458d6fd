//! Filter passes applying a condition tree across a collection of records.
//!
//! Every pass evaluates the condition against every input record in input order,
//! never mutates the input and allocates a fresh output. Nothing is cached between
//! passes.

use crate::{
    condition::Condition,
    error::ConfigurationError,
    logging::sift_log,
    option::FilterOptions,
    point::{PointCloud, Record},
};

/// Records of `input` that satisfy `condition`, in input order.
pub fn filter<R: Record>(input: &[R], condition: &Condition<R>) -> Vec<R> {
    input
        .iter()
        .filter(|record| condition.evaluate(record))
        .cloned()
        .collect()
}

/// Ascending indices of the records of `input` that satisfy `condition`.
pub fn filter_indices<R: Record>(input: &[R], condition: &Condition<R>) -> Vec<usize> {
    input
        .iter()
        .enumerate()
        .filter(|(_, record)| condition.evaluate(record))
        .map(|(index, _)| index)
        .collect()
}

/// Result of a [`ConditionalFilter`] pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutput<R> {
    /// Records that passed, or the masked grid in organized mode.
    pub cloud: PointCloud<R>,
    /// Ascending input indices of rejected records, when extraction is enabled.
    pub removed_indices: Option<Vec<usize>>,
}

/// Configured filter driver: one root condition plus output options.
///
/// The condition is optional while the driver is being configured; running a
/// pass without one is a [`ConfigurationError::MissingCondition`].
#[derive(Debug, Clone)]
pub struct ConditionalFilter<R> {
    condition: Option<Condition<R>>,
    options: FilterOptions,
}

impl<R> Default for ConditionalFilter<R> {
    fn default() -> Self {
        Self {
            condition: None,
            options: FilterOptions::default(),
        }
    }
}

impl<R: Record> ConditionalFilter<R> {
    /// Driver without a condition.
    pub fn new(options: FilterOptions) -> Self {
        Self {
            condition: None,
            options,
        }
    }

    /// Sets the root condition, builder style.
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<Condition<R>>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Replaces the root condition.
    pub fn set_condition(&mut self, condition: impl Into<Condition<R>>) {
        self.condition = Some(condition.into());
    }

    /// Removes and returns the root condition.
    pub fn clear_condition(&mut self) -> Option<Condition<R>> {
        self.condition.take()
    }

    /// Current root condition.
    pub fn condition(&self) -> Option<&Condition<R>> {
        self.condition.as_ref()
    }

    /// Output options.
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Runs one filter pass over `input`.
    pub fn filter(&self, input: &PointCloud<R>) -> Result<FilterOutput<R>, ConfigurationError> {
        let Some(condition) = self.condition.as_ref() else {
            sift_log!(
                log::Level::Warn,
                "conditional_filter_missing_condition",
                "input={}",
                input.len(),
            );
            return Err(ConfigurationError::MissingCondition);
        };

        let mut removed = self.options.extract_removed_indices.then(Vec::new);
        let mut points = Vec::with_capacity(input.len());
        let mut rejected = 0usize;
        for (index, record) in input.iter().enumerate() {
            if condition.evaluate(record) {
                points.push(record.clone());
                continue;
            }
            rejected += 1;
            if let Some(removed) = removed.as_mut() {
                removed.push(index);
            }
            if self.options.keep_organized {
                points.push(masked(record, self.options.fill_value));
            }
        }

        let cloud = if self.options.keep_organized {
            let is_dense =
                input.is_dense() && (rejected == 0 || self.options.fill_value.is_finite());
            PointCloud::from_parts(points, input.width(), input.height(), is_dense)
        } else {
            let width = points.len();
            PointCloud::from_parts(points, width, 1, input.is_dense())
        };

        sift_log!(
            log::Level::Debug,
            "conditional_filter_completed",
            "input={} kept={} removed={} organized={} condition={}",
            input.len(),
            input.len() - rejected,
            rejected,
            self.options.keep_organized,
            condition,
        );

        Ok(FilterOutput {
            cloud,
            removed_indices: removed,
        })
    }
}

// Only floating fields are masked; integer fields cannot represent NaN.
fn masked<R: Record>(record: &R, fill_value: f64) -> R {
    let mut out = record.clone();
    for index in (0..R::FIELDS.len()).filter(|index| R::holds_nan(*index)) {
        out.set_field(index, fill_value);
    }
    out
}
