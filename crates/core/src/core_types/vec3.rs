//! Vector value type for 3D positions and directions.
//!
//! # Design
//! - Wraps `nalgebra::Vector3<f64>` behind a private field
//! - Every constructor rejects NaN and infinite components
//! - All operations are pure and return new values; there is no in-place variant
//! - `PartialEq` is exact, [`Vector3::equals`] is tolerance-based
//!
//! Operations that produce a vector never hand back a non-finite component:
//! a NaN or infinite scalar operand, or a result outside the `f64` range,
//! fails with [`VectorError::InvalidArgument`]. Magnitudes are computed on
//! a rescaled copy so `length` and `unit` stay exact near the ends of the
//! range.

use std::fmt;
use std::ops::Neg;

use nalgebra as na;
use serde::{Deserialize, Serialize};

use super::error::VectorError;
use super::operand::Operand;
use super::serde_repr::Components;
use super::xyz::Xyz;

/// Tolerance used by [`Vector3::equals`].
///
/// Components compare equal when `|a - b| <= EQUALS_EPSILON * max(1, |a|, |b|)`,
/// i.e. absolute near zero and relative for large magnitudes.
pub const EQUALS_EPSILON: f64 = 1e-6;

/// Immutable 3D vector with finite `f64` components.
///
/// Used for world positions, directions, velocities and rotations exchanged
/// with the host runtime.
///
/// ```
/// use mp_vector_core::Vector3;
///
/// let x = Vector3::new(1.0, 0.0, 0.0)?;
/// let y = Vector3::from_array([0.0, 1.0, 0.0])?;
/// assert!(x.cross(y)?.equals(Vector3::Z));
/// # Ok::<(), mp_vector_core::VectorError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Components", into = "Components")]
#[repr(transparent)]
pub struct Vector3(na::Vector3<f64>);

impl Vector3 {
    /// All components zero.
    pub const ZERO: Vector3 = Vector3(na::Vector3::new(0.0, 0.0, 0.0));

    /// All components one.
    pub const ONE: Vector3 = Vector3(na::Vector3::new(1.0, 1.0, 1.0));

    /// Unit vector along the x axis.
    pub const X: Vector3 = Vector3(na::Vector3::new(1.0, 0.0, 0.0));

    /// Unit vector along the y axis.
    pub const Y: Vector3 = Vector3(na::Vector3::new(0.0, 1.0, 0.0));

    /// Unit vector along the z axis.
    pub const Z: Vector3 = Vector3(na::Vector3::new(0.0, 0.0, 1.0));

    /// Create a vector from three components.
    ///
    /// # Errors
    /// [`VectorError::InvalidArgument`] if any component is NaN or infinite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, VectorError> {
        for (name, value) in [("x", x), ("y", y), ("z", z)] {
            if !value.is_finite() {
                return Err(VectorError::non_finite(name, value));
            }
        }
        Ok(Vector3(na::Vector3::new(x, y, z)))
    }

    /// Create a vector from an ordered `[x, y, z]` triple.
    ///
    /// # Errors
    /// [`VectorError::InvalidArgument`] if any component is NaN or infinite.
    pub fn from_array(components: [f64; 3]) -> Result<Self, VectorError> {
        let [x, y, z] = components;
        Self::new(x, y, z)
    }

    /// Create a vector from the first three elements of a slice.
    ///
    /// # Errors
    /// [`VectorError::InvalidArgument`] if the slice has fewer than three
    /// elements or any of the first three is NaN or infinite.
    pub fn from_slice(components: &[f64]) -> Result<Self, VectorError> {
        match components {
            [x, y, z, ..] => Self::new(*x, *y, *z),
            _ => Err(VectorError::missing_components(components.len())),
        }
    }

    /// Copy the components of any value exposing `x`, `y`, `z`.
    ///
    /// # Errors
    /// [`VectorError::InvalidArgument`] if any component is NaN or infinite.
    pub fn from_xyz(source: &impl Xyz) -> Result<Self, VectorError> {
        Self::new(source.x(), source.y(), source.z())
    }

    /// Wrap an already-computed nalgebra vector without validation.
    #[inline]
    pub(crate) const fn from_na(v: na::Vector3<f64>) -> Self {
        Vector3(v)
    }

    /// Wrap the result of `operation`, rejecting it if it left the `f64` range.
    fn checked(v: na::Vector3<f64>, operation: &'static str) -> Result<Self, VectorError> {
        if v.iter().all(|c| c.is_finite()) {
            Ok(Vector3(v))
        } else {
            Err(VectorError::overflow(operation))
        }
    }

    /// X component.
    #[inline]
    pub fn x(self) -> f64 {
        self.0.x
    }

    /// Y component.
    #[inline]
    pub fn y(self) -> f64 {
        self.0.y
    }

    /// Z component.
    #[inline]
    pub fn z(self) -> f64 {
        self.0.z
    }

    /// Add a scalar to every component, or add another vector component-wise.
    ///
    /// # Errors
    /// [`VectorError::InvalidArgument`] if the scalar is NaN or infinite, or
    /// a component of the sum overflows.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: impl Into<Operand>) -> Result<Self, VectorError> {
        let rhs = rhs.into().resolve()?;
        Self::checked(self.0 + rhs, "add")
    }

    /// Subtract a scalar from every component, or another vector component-wise.
    ///
    /// # Errors
    /// [`VectorError::InvalidArgument`] if the scalar is NaN or infinite, or
    /// a component of the difference overflows.
    pub fn subtract(self, rhs: impl Into<Operand>) -> Result<Self, VectorError> {
        let rhs = rhs.into().resolve()?;
        Self::checked(self.0 - rhs, "subtract")
    }

    /// Scale by a scalar, or take the component-wise (Hadamard) product.
    ///
    /// This is neither the dot nor the cross product; see [`Vector3::dot`]
    /// and [`Vector3::cross`].
    ///
    /// # Errors
    /// [`VectorError::InvalidArgument`] if the scalar is NaN or infinite, or
    /// a component of the product overflows.
    pub fn multiply(self, rhs: impl Into<Operand>) -> Result<Self, VectorError> {
        let rhs = rhs.into().resolve()?;
        Self::checked(self.0.component_mul(&rhs), "multiply")
    }

    /// Divide by a scalar, or component-wise by another vector.
    ///
    /// # Errors
    /// - [`VectorError::InvalidArgument`] if the scalar is NaN or infinite,
    ///   or a component of the quotient overflows
    /// - [`VectorError::DivisionByZero`] if the scalar or any divisor
    ///   component is exactly zero
    pub fn divide(self, rhs: impl Into<Operand>) -> Result<Self, VectorError> {
        let rhs = rhs.into().resolve()?;
        if rhs.iter().any(|c| *c == 0.0) {
            return Err(VectorError::division_by_zero("divide"));
        }
        Self::checked(self.0.component_div(&rhs), "divide")
    }

    /// Dot product `x1*x2 + y1*y2 + z1*z2`.
    ///
    /// Infinite when the true product exceeds the `f64` range.
    #[inline]
    pub fn dot(self, other: Vector3) -> f64 {
        self.0.dot(&other.0)
    }

    /// Right-handed cross product.
    ///
    /// # Errors
    /// [`VectorError::InvalidArgument`] if a component overflows.
    pub fn cross(self, other: Vector3) -> Result<Self, VectorError> {
        Self::checked(self.0.cross(&other.0), "cross")
    }

    /// Largest absolute component, the scale used by the magnitude methods.
    #[inline]
    fn max_abs(self) -> f64 {
        self.0.x.abs().max(self.0.y.abs()).max(self.0.z.abs())
    }

    /// Euclidean magnitude.
    ///
    /// Computed as `m * |v / m|` with `m` the largest absolute component, so
    /// squaring never underflows or overflows. Infinite only when the true
    /// magnitude exceeds `f64::MAX`.
    pub fn length(self) -> f64 {
        let scale = self.max_abs();
        if scale == 0.0 {
            return 0.0;
        }
        (self.0 / scale).norm() * scale
    }

    /// Unit vector pointing the same way.
    ///
    /// # Errors
    /// [`VectorError::DivisionByZero`] if every component is zero.
    pub fn unit(self) -> Result<Self, VectorError> {
        let scale = self.max_abs();
        if scale == 0.0 {
            return Err(VectorError::division_by_zero("unit"));
        }
        // Largest component is now +-1, so the norm lies in [1, sqrt(3)]
        let scaled = self.0 / scale;
        Ok(Self::from_na(scaled / scaled.norm()))
    }

    /// Smallest component.
    pub fn min(self) -> f64 {
        self.0.x.min(self.0.y).min(self.0.z)
    }

    /// Largest component.
    pub fn max(self) -> f64 {
        self.0.x.max(self.0.y).max(self.0.z)
    }

    /// `(-x, -y, -z)`
    pub fn negative(self) -> Self {
        Self::from_na(-self.0)
    }

    /// Compare component-wise within [`EQUALS_EPSILON`].
    pub fn equals(self, other: Vector3) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| {
            let scale = 1.0_f64.max(a.abs()).max(b.abs());
            (a - b).abs() <= EQUALS_EPSILON * scale
        })
    }

    /// Components as `[x, y, z]`.
    pub fn to_array(self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Linear interpolation: `self + (other - self) * t`.
    ///
    /// # Errors
    /// [`VectorError::InvalidArgument`] if `t` is NaN or infinite, or the
    /// interpolated point overflows.
    pub fn lerp(self, other: Vector3, t: f64) -> Result<Self, VectorError> {
        if !t.is_finite() {
            return Err(VectorError::non_finite("t", t));
        }
        Self::checked(self.0.lerp(&other.0, t), "lerp")
    }

    /// Euclidean distance between two points.
    ///
    /// Rescaled like [`Vector3::length`], so points near `f64::MAX` on
    /// opposite sides still give a finite distance when it is representable.
    pub fn distance(self, other: Vector3) -> f64 {
        let scale = self.max_abs().max(other.max_abs());
        if scale == 0.0 {
            return 0.0;
        }
        (self.0 / scale - other.0 / scale).norm() * scale
    }

    /// Per-component minimum of two vectors.
    pub fn component_min(self, other: Vector3) -> Self {
        Self::from_na(self.0.inf(&other.0))
    }

    /// Per-component maximum of two vectors.
    pub fn component_max(self, other: Vector3) -> Self {
        Self::from_na(self.0.sup(&other.0))
    }

    /// True when every component is exactly zero.
    pub fn is_zero(self) -> bool {
        self.0.iter().all(|c| *c == 0.0)
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Vector3::ZERO
    }
}

impl Xyz for Vector3 {
    fn x(&self) -> f64 {
        self.0.x
    }
    fn y(&self) -> f64 {
        self.0.y
    }
    fn z(&self) -> f64 {
        self.0.z
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        self.negative()
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl TryFrom<[f64; 3]> for Vector3 {
    type Error = VectorError;
    fn try_from(components: [f64; 3]) -> Result<Self, Self::Error> {
        Vector3::from_array(components)
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = VectorError;
    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Vector3::from_slice(components)
    }
}

impl TryFrom<(f64, f64, f64)> for Vector3 {
    type Error = VectorError;
    fn try_from(t: (f64, f64, f64)) -> Result<Self, Self::Error> {
        Vector3::from_xyz(&t)
    }
}

impl TryFrom<na::Vector3<f64>> for Vector3 {
    type Error = VectorError;
    fn try_from(v: na::Vector3<f64>) -> Result<Self, Self::Error> {
        Vector3::from_xyz(&v)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> (f64, f64, f64) {
        (v.0.x, v.0.y, v.0.z)
    }
}

impl From<Vector3> for na::Vector3<f64> {
    fn from(v: Vector3) -> na::Vector3<f64> {
        v.0
    }
}

impl From<Vector3> for na::Point3<f64> {
    fn from(v: Vector3) -> na::Point3<f64> {
        na::Point3::from(v.0)
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.0.x)
            .field("y", &self.0.y)
            .field("z", &self.0.z)
            .finish()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.0.x, self.0.y, self.0.z)
    }
}
