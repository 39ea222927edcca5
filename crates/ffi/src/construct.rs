//! Vector construction across the FFI boundary.

use std::slice;

use mp_vector_core::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{DefaultVectorFfiError, MpVectorErrorCode};
use crate::helpers::{track_error, write_out};
use crate::vector::MpVector3;

/// Create a vector from three components.
///
/// # Returns
/// - `Ok` with `out` populated
/// - `NullPointer` if `out` is null
/// - `InvalidArgument` if any component is NaN or infinite
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_new(
    x: f64,
    y: f64,
    z: f64,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(Vector3::new(x, y, z)?.into()))
}

/// Create a vector from the first three values of an array.
///
/// # Parameters
/// - `components`: Pointer to `len` doubles
/// - `len`: Number of doubles available; must be at least 3
///
/// # Returns
/// - `Ok` with `out` populated
/// - `NullPointer` if `components` or `out` is null
/// - `InvalidArgument` if `len < 3` or any of the first three values is NaN or infinite
///
/// # Safety
/// `components` must point to `len` readable doubles. `out` must be null or
/// valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_from_array(
    components: *const f64,
    len: usize,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    if components.is_null() {
        return track_error(&DefaultVectorFfiError::null_pointer("components"));
    }
    let components = slice::from_raw_parts(components, len);
    write_out(out, "out", || Ok(Vector3::from_slice(components)?.into()))
}

/// Check a host-supplied vector without transforming it.
///
/// # Returns
/// - `Ok` with `out` holding an identical copy
/// - `NullPointer` if `out` is null
/// - `InvalidArgument` if any component is NaN or infinite
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_clone(v: MpVector3, out: *mut MpVector3) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(v.to_core()?.into()))
}

/// Unit vector for a heading `theta` and elevation `phi` (radians).
///
/// # Returns
/// - `Ok` with `out` populated
/// - `NullPointer` if `out` is null
/// - `InvalidArgument` if either angle is NaN or infinite
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_from_angles(
    theta: f64,
    phi: f64,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(Vector3::from_angles(theta, phi)?.into()))
}

/// Uniformly random unit vector, deterministic for a given `seed`.
///
/// # Returns
/// - `Ok` with `out` populated
/// - `NullPointer` if `out` is null
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_random_direction(
    seed: u64,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || {
        let mut rng = StdRng::seed_from_u64(seed);
        Ok(Vector3::random_direction(&mut rng).into())
    })
}
