//! Structural access to `x`, `y`, `z` components.
//!
//! The scripting API lets a vector be built from any object with readable
//! `x`, `y` and `z` fields. [`Xyz`] is that shape as a trait, so
//! [`Vector3::from_xyz`](super::Vector3::from_xyz) accepts nalgebra vectors
//! and points, tuples, and anything a host binding implements it for.

use nalgebra as na;

/// A value exposing readable `x`, `y`, `z` components.
pub trait Xyz {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
}

impl Xyz for na::Vector3<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> f64 {
        self.z
    }
}

// Simulation code commonly carries f32 positions.
impl Xyz for na::Vector3<f32> {
    fn x(&self) -> f64 {
        f64::from(self.x)
    }
    fn y(&self) -> f64 {
        f64::from(self.y)
    }
    fn z(&self) -> f64 {
        f64::from(self.z)
    }
}

impl Xyz for na::Point3<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> f64 {
        self.z
    }
}

impl Xyz for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> f64 {
        self.2
    }
}
