//! Records with named numeric fields and the collections that hold them.
//!
//! A [`Record`] exposes its fields through a fixed, ordered name table. Conditions
//! resolve field names against that table once, at construction, and read values
//! by index from then on.

mod cloud;
mod field;
mod macros;
mod types;

pub use cloud::{FieldBounds, PointCloud};
pub use field::FieldAccessor;
pub use types::{PointXy, PointXyz, PointXyzi};

/// A unit of input data with named numeric fields.
///
/// Field values are widened to `f64` on read; `f32` fields compare exactly against
/// thresholds supplied as `f32`.
pub trait Record: Clone {
    /// Field names in declaration order. Indices into this table address fields.
    const FIELDS: &'static [&'static str];

    /// Reads the field at `index`.
    ///
    /// `index` is always below `FIELDS.len()` when called through a
    /// [`FieldAccessor`].
    fn field(&self, index: usize) -> f64;

    /// Overwrites the field at `index`, narrowing `value` to the field's type.
    fn set_field(&mut self, index: usize, value: f64);

    /// Rounds `value` through the type of the field at `index`.
    ///
    /// Thresholds are narrowed once so that comparisons happen in the field's own
    /// precision: `0.1` against an `f32` field compares as `0.1f32`.
    fn narrow(index: usize, value: f64) -> f64 {
        let _ = index;
        value
    }

    /// True when the field at `index` can hold NaN, i.e. it is a floating field.
    fn holds_nan(index: usize) -> bool {
        Self::narrow(index, f64::NAN).is_nan()
    }

    /// Position of `name` in [`Record::FIELDS`].
    fn field_index(name: &str) -> Option<usize> {
        Self::FIELDS.iter().position(|field| *field == name)
    }
}
