#![deny(missing_docs)]
//! Composable conditional filtering for point-cloud record streams.
//!
//! Records expose named numeric fields through [`point::Record`]. A
//! [`condition::Condition`] tree decides per record whether it is kept:
//! field comparisons and opaque functors at the leaves, AND/OR composites and
//! negation above them. [`filter::filter`] and [`filter::ConditionalFilter`]
//! apply a tree across a collection, preserving input order.
//!
//! ```
//! use pointsift::{
//!     condition::ConditionBuilder,
//!     filter::filter,
//!     point::PointXy,
//! };
//!
//! let points = [
//!     PointXy::new(1.0, 1.0),
//!     PointXy::new(5.0, 5.0),
//!     PointXy::new(10.0, 1.0),
//! ];
//! let condition = ConditionBuilder::<PointXy>::or()
//!     .greater_than("x", 4.0)
//!     .greater_than("y", 4.0)
//!     .build()?;
//! assert_eq!(
//!     filter(&points, &condition),
//!     vec![PointXy::new(5.0, 5.0), PointXy::new(10.0, 1.0)]
//! );
//! # Ok::<(), pointsift::error::ConfigurationError>(())
//! ```

mod logging;

/// Condition trees: comparisons, composites, functors and their builder.
pub mod condition;

/// Configuration errors.
pub mod error;

/// Filter passes over record collections.
pub mod filter;

/// Output options for configured filter passes.
pub mod option;

/// Records, field access and point clouds.
pub mod point;

pub use crate::{
    condition::{
        Combinator, Comparison, ComparisonOp, Composite, Condition, ConditionBuilder, Functor,
    },
    error::ConfigurationError,
    filter::{ConditionalFilter, FilterOutput},
    option::FilterOptions,
    point::{FieldAccessor, PointCloud, Record},
};
