use std::{ops::Index, slice, vec};

use super::{FieldAccessor, Record};
use crate::error::ConfigurationError;

/// Ordered, owned collection of records.
///
/// Organized clouds keep a `width x height` grid layout (row-major); unorganized
/// clouds have `height == 1`. `is_dense` is true when no record carries a
/// non-finite value.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud<R> {
    points: Vec<R>,
    width: usize,
    height: usize,
    is_dense: bool,
}

/// Finite value range observed for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    /// Smallest finite value.
    pub min: f64,
    /// Largest finite value.
    pub max: f64,
}

impl FieldBounds {
    /// Center of the range.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) * 0.5
    }
}

impl<R> Default for PointCloud<R> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            width: 0,
            height: 1,
            is_dense: true,
        }
    }
}

impl<R> PointCloud<R> {
    /// Wraps `points` as an unorganized dense cloud.
    pub fn from_points(points: Vec<R>) -> Self {
        Self {
            width: points.len(),
            height: 1,
            is_dense: true,
            points,
        }
    }

    /// Wraps `points` as a `width x height` grid.
    pub fn organized(
        points: Vec<R>,
        width: usize,
        height: usize,
    ) -> Result<Self, ConfigurationError> {
        if width.checked_mul(height) != Some(points.len()) {
            return Err(ConfigurationError::DimensionMismatch {
                width,
                height,
                len: points.len(),
            });
        }
        Ok(Self {
            points,
            width,
            height,
            is_dense: true,
        })
    }

    /// Overrides the density flag.
    #[must_use]
    pub fn with_dense(self, is_dense: bool) -> Self {
        Self { is_dense, ..self }
    }

    pub(crate) fn from_parts(points: Vec<R>, width: usize, height: usize, is_dense: bool) -> Self {
        debug_assert_eq!(width * height, points.len());
        Self {
            points,
            width,
            height,
            is_dense,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the cloud holds no records.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Row width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count; `1` for unorganized clouds.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True for grid-shaped clouds with more than one row.
    pub fn is_organized(&self) -> bool {
        self.height > 1
    }

    /// Density flag.
    pub fn is_dense(&self) -> bool {
        self.is_dense
    }

    /// Records in order.
    pub fn points(&self) -> &[R] {
        &self.points
    }

    /// Iterates records in order.
    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.points.iter()
    }

    /// Releases the underlying records.
    pub fn into_points(self) -> Vec<R> {
        self.points
    }
}

impl<R: Record> PointCloud<R> {
    /// Finite range of `field` across the cloud, or `None` when no record holds a
    /// finite value for it.
    pub fn bounds(&self, field: &FieldAccessor<R>) -> Option<FieldBounds> {
        self.points
            .iter()
            .map(|point| field.get(point))
            .filter(|value| value.is_finite())
            .fold(None, |acc, value| match acc {
                None => Some(FieldBounds {
                    min: value,
                    max: value,
                }),
                Some(bounds) => Some(FieldBounds {
                    min: bounds.min.min(value),
                    max: bounds.max.max(value),
                }),
            })
    }
}

impl<R> From<Vec<R>> for PointCloud<R> {
    fn from(points: Vec<R>) -> Self {
        Self::from_points(points)
    }
}

impl<R> FromIterator<R> for PointCloud<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl<R> Index<usize> for PointCloud<R> {
    type Output = R;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a, R> IntoIterator for &'a PointCloud<R> {
    type Item = &'a R;
    type IntoIter = slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<R> IntoIterator for PointCloud<R> {
    type Item = R;
    type IntoIter = vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
