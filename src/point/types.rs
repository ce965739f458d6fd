//! Point layouts shared by most point-cloud pipelines.

use crate::define_record;

define_record! {
    /// Planar point.
    pub struct PointXy {
        /// X coordinate.
        pub x: f32,
        /// Y coordinate.
        pub y: f32,
    }
}

define_record! {
    /// Point in 3D space.
    pub struct PointXyz {
        /// X coordinate.
        pub x: f32,
        /// Y coordinate.
        pub y: f32,
        /// Z coordinate.
        pub z: f32,
    }
}

define_record! {
    /// Point in 3D space with a sensor intensity.
    pub struct PointXyzi {
        /// X coordinate.
        pub x: f32,
        /// Y coordinate.
        pub y: f32,
        /// Z coordinate.
        pub z: f32,
        /// Return intensity.
        pub intensity: f32,
    }
}

impl PointXy {
    /// Builds a point from its coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl PointXyz {
    /// Builds a point from its coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl PointXyzi {
    /// Builds a point from its coordinates and intensity.
    pub const fn new(x: f32, y: f32, z: f32, intensity: f32) -> Self {
        Self { x, y, z, intensity }
    }
}
