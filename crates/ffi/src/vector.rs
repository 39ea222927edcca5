//! FFI-exposed vector layouts.

use mp_vector_core::{Vector3, VectorError, Xyz};

/// C-compatible 3D vector.
///
/// Passed by value into every `mp_vector3_*` function. Components coming
/// from the host are validated on each call: NaN or infinite values fail
/// with `MpVectorErrorCode::InvalidArgument`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MpVector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MpVector3 {
    /// Validate into a core vector.
    pub(crate) fn to_core(self) -> Result<Vector3, VectorError> {
        Vector3::from_xyz(&self)
    }
}

impl Xyz for MpVector3 {
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

impl From<Vector3> for MpVector3 {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x(),
            y: v.y(),
            z: v.z(),
        }
    }
}

/// Heading/elevation pair produced by `mp_vector3_to_angles`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MpAngles {
    /// Heading in radians: `atan2(z, x)`.
    pub theta: f64,
    /// Elevation in radians: `asin(y / length)`.
    pub phi: f64,
}
