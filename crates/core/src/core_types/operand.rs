//! Right-hand operand of the arithmetic operations.

use nalgebra as na;

use super::error::VectorError;
use super::vec3::Vector3;

/// A scalar or a vector on the right-hand side of `add`, `subtract`,
/// `multiply` and `divide`.
///
/// Scalars broadcast to all three components. Callers rarely name this type:
/// both `f64` and [`Vector3`] convert into it. A scalar is only checked when
/// an operation resolves it, so a NaN or infinite scalar surfaces as
/// [`VectorError::InvalidArgument`] from that operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Applied to every component.
    Scalar(f64),
    /// Applied component-wise.
    Vector(Vector3),
}

impl Operand {
    /// Expand to one finite value per component.
    pub(crate) fn resolve(self) -> Result<na::Vector3<f64>, VectorError> {
        match self {
            Operand::Scalar(s) if !s.is_finite() => Err(VectorError::non_finite("scalar", s)),
            Operand::Scalar(s) => Ok(na::Vector3::repeat(s)),
            Operand::Vector(v) => Ok(v.into()),
        }
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<Vector3> for Operand {
    fn from(v: Vector3) -> Self {
        Operand::Vector(v)
    }
}

impl From<&Vector3> for Operand {
    fn from(v: &Vector3) -> Self {
        Operand::Vector(*v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_broadcasts() {
        let b = Operand::from(2.5).resolve().unwrap();
        assert_eq!(b, na::Vector3::new(2.5, 2.5, 2.5));
    }

    #[test]
    fn test_vector_passes_through() {
        let v = Vector3::new(1.0, 0.0, 3.0).unwrap();
        assert_eq!(Operand::from(v).resolve().unwrap(), na::Vector3::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn test_non_finite_scalar_rejected() {
        for s in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Operand::Scalar(s).resolve(),
                Err(VectorError::InvalidArgument { .. })
            ));
        }
    }
}
