/// Declares a plain struct of numeric fields and implements [`Record`] for it.
///
/// Field order in [`Record::FIELDS`] follows declaration order. Every field type
/// must support `as` casts to and from `f64`.
///
/// ```
/// use pointsift::{define_record, point::Record};
///
/// define_record! {
///     /// Point with a return intensity and ring id.
///     pub struct LidarPoint {
///         pub x: f32,
///         pub y: f32,
///         pub z: f32,
///         pub ring: u16,
///     }
/// }
///
/// assert_eq!(LidarPoint::FIELDS, &["x", "y", "z", "ring"]);
/// assert_eq!(LidarPoint::field_index("ring"), Some(3));
/// assert_eq!(LidarPoint::narrow(3, 7.9), 7.0);
/// assert!(!LidarPoint::holds_nan(3));
/// ```
///
/// [`Record`]: crate::point::Record
/// [`Record::FIELDS`]: crate::point::Record::FIELDS
#[macro_export]
macro_rules! define_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        $vis struct $name {
            $($(#[$fmeta])* $fvis $field: $ty,)+
        }

        impl $crate::point::Record for $name {
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

            #[inline]
            #[allow(unused_assignments)]
            fn field(&self, index: usize) -> f64 {
                let mut slot = 0usize;
                $(
                    if slot == index {
                        return self.$field as f64;
                    }
                    slot += 1;
                )+
                unreachable!("field index {} out of range for {}", index, stringify!($name))
            }

            #[inline]
            #[allow(unused_assignments)]
            fn narrow(index: usize, value: f64) -> f64 {
                let mut slot = 0usize;
                $(
                    if slot == index {
                        return value as $ty as f64;
                    }
                    slot += 1;
                )+
                unreachable!("field index {} out of range for {}", index, stringify!($name))
            }

            #[inline]
            #[allow(unused_assignments)]
            fn set_field(&mut self, index: usize, value: f64) {
                let mut slot = 0usize;
                $(
                    if slot == index {
                        self.$field = value as $ty;
                        return;
                    }
                    slot += 1;
                )+
                unreachable!("field index {} out of range for {}", index, stringify!($name))
            }
        }
    };
}
