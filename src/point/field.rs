use std::{fmt, marker::PhantomData};

use super::Record;
use crate::error::ConfigurationError;

/// A field name resolved against a record type.
///
/// Resolution happens once, in [`FieldAccessor::new`]; [`FieldAccessor::get`] is
/// total afterwards.
pub struct FieldAccessor<R> {
    index: usize,
    name: &'static str,
    _record: PhantomData<fn(&R)>,
}

impl<R: Record> FieldAccessor<R> {
    /// Resolves `name` against `R::FIELDS`.
    pub fn new(name: &str) -> Result<Self, ConfigurationError> {
        let index = R::field_index(name).ok_or_else(|| ConfigurationError::UnknownField {
            field: name.to_string(),
            record: std::any::type_name::<R>(),
            available: R::FIELDS,
        })?;
        Ok(Self {
            index,
            name: R::FIELDS[index],
            _record: PhantomData,
        })
    }

    /// Reads the resolved field from `record`.
    #[inline]
    pub fn get(&self, record: &R) -> f64 {
        record.field(self.index)
    }

    /// Rounds `value` through the resolved field's type; see [`Record::narrow`].
    #[inline]
    pub fn narrow(&self, value: f64) -> f64 {
        R::narrow(self.index, value)
    }

    /// Writes `value` into the resolved field of `record`.
    #[inline]
    pub fn set(&self, record: &mut R, value: f64) {
        record.set_field(self.index, value);
    }
}

impl<R> FieldAccessor<R> {
    /// Canonical field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Position of the field in the record's field table.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<R> Clone for FieldAccessor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldAccessor<R> {}

impl<R> PartialEq for FieldAccessor<R> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<R> Eq for FieldAccessor<R> {}

impl<R> fmt::Debug for FieldAccessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .field("index", &self.index)
            .finish()
    }
}
