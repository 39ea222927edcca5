//! Angular views of a [`Vector3`].
//!
//! Angles use the spherical convention shared by `to_angles` and
//! `from_angles`:
//! - `theta` (heading) = `atan2(z, x)`, in `(-PI, PI]`
//! - `phi` (elevation) = `asin(y / length)`, in `[-PI/2, PI/2]`
//!
//! Both directions are normalised with [`Vector3::unit`] first, which
//! rescales before squaring, so the angles hold across the whole `f64` range.
//!
//! so `+y` is up and `theta = 0` points along `+x`.

use std::f64::consts::TAU;

use nalgebra as na;
use rand::Rng;

use super::error::VectorError;
use super::vec3::Vector3;

impl Vector3 {
    /// Angle in radians between two vectors, in `[0, PI]`.
    ///
    /// The cosine of the two unit vectors is clamped to `[-1, 1]` before
    /// `acos` so rounding can never produce NaN for (anti)parallel inputs.
    ///
    /// # Errors
    /// [`VectorError::DivisionByZero`] if either vector has zero length.
    pub fn angle_to(self, other: Vector3) -> Result<f64, VectorError> {
        if self.is_zero() || other.is_zero() {
            return Err(VectorError::division_by_zero("angle_to"));
        }
        let cos = self.unit()?.dot(other.unit()?);
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// Heading and elevation `[theta, phi]` of this direction.
    ///
    /// # Errors
    /// [`VectorError::DivisionByZero`] if the length is zero.
    pub fn to_angles(self) -> Result<[f64; 2], VectorError> {
        if self.is_zero() {
            return Err(VectorError::division_by_zero("to_angles"));
        }
        let theta = self.z().atan2(self.x());
        let phi = self.unit()?.y().clamp(-1.0, 1.0).asin();
        Ok([theta, phi])
    }

    /// Unit vector for a heading and elevation; inverse of [`Vector3::to_angles`].
    ///
    /// # Errors
    /// [`VectorError::InvalidArgument`] if either angle is NaN or infinite.
    pub fn from_angles(theta: f64, phi: f64) -> Result<Self, VectorError> {
        if !theta.is_finite() {
            return Err(VectorError::non_finite("theta", theta));
        }
        if !phi.is_finite() {
            return Err(VectorError::non_finite("phi", phi));
        }
        Ok(Self::from_angles_unchecked(theta, phi))
    }

    fn from_angles_unchecked(theta: f64, phi: f64) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Self::from_na(na::Vector3::new(
            cos_theta * cos_phi,
            sin_phi,
            sin_theta * cos_phi,
        ))
    }

    /// Uniformly distributed random unit vector.
    ///
    /// Elevation is drawn through `sin(phi)` so directions are uniform over
    /// the sphere.
    pub fn random_direction<R: Rng>(rng: &mut R) -> Self {
        let theta = rng.random_range(0.0..TAU);
        let sin_phi: f64 = rng.random_range(-1.0..=1.0);
        Self::from_angles_unchecked(theta, sin_phi.asin())
    }
}
