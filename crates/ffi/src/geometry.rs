//! Geometric queries across the FFI boundary.
//!
//! All functions return `NullPointer` if an output pointer is null and
//! `InvalidArgument` if an input vector has a NaN or infinite component.

use crate::error::MpVectorErrorCode;
use crate::helpers::write_out;
use crate::vector::{MpAngles, MpVector3};

/// Dot product of `a` and `b`.
///
/// # Safety
/// `out` must be null or valid for writing a `double`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_dot(a: MpVector3, b: MpVector3, out: *mut f64) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.dot(b.to_core()?)))
}

/// Right-handed cross product `a x b`.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_cross(
    a: MpVector3,
    b: MpVector3,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.cross(b.to_core()?)?.into()))
}

/// Euclidean magnitude of `a`.
///
/// # Safety
/// `out` must be null or valid for writing a `double`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_length(a: MpVector3, out: *mut f64) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.length()))
}

/// Euclidean distance between points `a` and `b`.
///
/// # Safety
/// `out` must be null or valid for writing a `double`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_distance(
    a: MpVector3,
    b: MpVector3,
    out: *mut f64,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.distance(b.to_core()?)))
}

/// Unit vector in the direction of `a`.
///
/// # Returns
/// `DivisionByZero` if `a` has zero length.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_unit(a: MpVector3, out: *mut MpVector3) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.unit()?.into()))
}

/// Angle between `a` and `b` in radians, in `[0, PI]`.
///
/// # Returns
/// `DivisionByZero` if either vector has zero length.
///
/// # Safety
/// `out` must be null or valid for writing a `double`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_angle_to(
    a: MpVector3,
    b: MpVector3,
    out: *mut f64,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.angle_to(b.to_core()?)?))
}

/// Heading and elevation of `a`.
///
/// # Returns
/// `DivisionByZero` if `a` has zero length.
///
/// # Safety
/// `out` must be null or valid for writing an `MpAngles`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_to_angles(a: MpVector3, out: *mut MpAngles) -> MpVectorErrorCode {
    write_out(out, "out", || {
        let [theta, phi] = a.to_core()?.to_angles()?;
        Ok(MpAngles { theta, phi })
    })
}

/// Smallest component of `a`.
///
/// # Safety
/// `out` must be null or valid for writing a `double`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_min(a: MpVector3, out: *mut f64) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.min()))
}

/// Largest component of `a`.
///
/// # Safety
/// `out` must be null or valid for writing a `double`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_max(a: MpVector3, out: *mut f64) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.max()))
}

/// Per-component minimum of `a` and `b`.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_component_min(
    a: MpVector3,
    b: MpVector3,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.component_min(b.to_core()?).into()))
}

/// Per-component maximum of `a` and `b`.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_component_max(
    a: MpVector3,
    b: MpVector3,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.component_max(b.to_core()?).into()))
}

/// Whether `a` and `b` are equal within the core comparison tolerance.
///
/// # Safety
/// `out` must be null or valid for writing a `bool`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_equals(
    a: MpVector3,
    b: MpVector3,
    out: *mut bool,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.equals(b.to_core()?)))
}

/// Write the components of `a` as three consecutive doubles.
///
/// # Safety
/// `out` must be null or point to 3 writable doubles.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_to_array(a: MpVector3, out: *mut f64) -> MpVectorErrorCode {
    write_out(out.cast::<[f64; 3]>(), "out", || Ok(a.to_core()?.to_array()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_cross_and_length() {
        let x = MpVector3 { x: 1.0, y: 0.0, z: 0.0 };
        let y = MpVector3 { x: 0.0, y: 1.0, z: 0.0 };
        let mut out = MpVector3::default();
        let mut length = 0.0;
        unsafe {
            assert_eq!(mp_vector3_cross(x, y, &mut out), MpVectorErrorCode::Ok);
            let v = MpVector3 { x: 3.0, y: 4.0, z: 0.0 };
            assert_eq!(mp_vector3_length(v, &mut length), MpVectorErrorCode::Ok);
        }
        assert_eq!(out, MpVector3 { x: 0.0, y: 0.0, z: 1.0 });
        assert_eq!(length, 5.0);
    }

    #[test]
    fn test_component_bounds() {
        let a = MpVector3 { x: 1.0, y: 7.0, z: -3.0 };
        let b = MpVector3 { x: 2.0, y: -1.0, z: -4.0 };
        let mut lo = MpVector3::default();
        let mut hi = MpVector3::default();
        unsafe {
            assert_eq!(mp_vector3_component_min(a, b, &mut lo), MpVectorErrorCode::Ok);
            assert_eq!(mp_vector3_component_max(a, b, &mut hi), MpVectorErrorCode::Ok);
        }
        assert_eq!(lo, MpVector3 { x: 1.0, y: -1.0, z: -4.0 });
        assert_eq!(hi, MpVector3 { x: 2.0, y: 7.0, z: -3.0 });
    }

    #[test]
    fn test_unit_of_zero_vector() {
        let mut out = MpVector3::default();
        let code = unsafe { mp_vector3_unit(MpVector3::default(), &mut out) };
        assert_eq!(code, MpVectorErrorCode::DivisionByZero);
    }

    #[test]
    fn test_to_array_writes_three_values() {
        let mut values = [0.0; 3];
        let code = unsafe {
            mp_vector3_to_array(MpVector3 { x: 1.0, y: 2.0, z: 3.0 }, values.as_mut_ptr())
        };
        assert_eq!(code, MpVectorErrorCode::Ok);
        assert_eq!(values, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_equals_and_angles() {
        let a = MpVector3 { x: 0.0, y: 0.0, z: 2.0 };
        let mut same = false;
        let mut angles = MpAngles::default();
        unsafe {
            assert_eq!(mp_vector3_equals(a, a, &mut same), MpVectorErrorCode::Ok);
            assert_eq!(mp_vector3_to_angles(a, &mut angles), MpVectorErrorCode::Ok);
        }
        assert!(same);
        assert!((angles.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(angles.phi, 0.0);
    }

    #[test]
    fn test_large_magnitudes() {
        let a = MpVector3 { x: 1e200, y: 0.0, z: 0.0 };
        let b = MpVector3 { x: 0.0, y: 1e200, z: 0.0 };
        let mut angle = 0.0;
        let mut unit = MpVector3::default();
        unsafe {
            assert_eq!(mp_vector3_angle_to(a, b, &mut angle), MpVectorErrorCode::Ok);
            assert_eq!(mp_vector3_unit(a, &mut unit), MpVectorErrorCode::Ok);
        }
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(unit, MpVector3 { x: 1.0, y: 0.0, z: 0.0 });
    }
}
