//! Component-wise arithmetic across the FFI boundary.
//!
//! Each operation has a vector form (`mp_vector3_add`) and a scalar form
//! (`mp_vector3_add_scalar`) where the scalar applies to every component.
//!
//! All functions return `NullPointer` if `out` is null and `InvalidArgument`
//! if an input vector or scalar is NaN or infinite, or if the result would
//! leave the `f64` range.

use crate::error::MpVectorErrorCode;
use crate::helpers::write_out;
use crate::vector::MpVector3;

/// `out = a + b`, component-wise.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_add(
    a: MpVector3,
    b: MpVector3,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.add(b.to_core()?)?.into()))
}

/// `out = a + s` on every component.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_add_scalar(
    a: MpVector3,
    s: f64,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.add(s)?.into()))
}

/// `out = a - b`, component-wise.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_subtract(
    a: MpVector3,
    b: MpVector3,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.subtract(b.to_core()?)?.into()))
}

/// `out = a - s` on every component.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_subtract_scalar(
    a: MpVector3,
    s: f64,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.subtract(s)?.into()))
}

/// Component-wise (Hadamard) product of `a` and `b`.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_multiply(
    a: MpVector3,
    b: MpVector3,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.multiply(b.to_core()?)?.into()))
}

/// `a` scaled by `s`.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_multiply_scalar(
    a: MpVector3,
    s: f64,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.multiply(s)?.into()))
}

/// `a / b`, component-wise.
///
/// # Returns
/// `DivisionByZero` if any component of `b` is zero.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_divide(
    a: MpVector3,
    b: MpVector3,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.divide(b.to_core()?)?.into()))
}

/// `a / s` on every component.
///
/// # Returns
/// `DivisionByZero` if `s` is zero.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_divide_scalar(
    a: MpVector3,
    s: f64,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.divide(s)?.into()))
}

/// `(-x, -y, -z)`
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_negative(a: MpVector3, out: *mut MpVector3) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.negative().into()))
}

/// Linear interpolation `a + (b - a) * t`.
///
/// # Returns
/// `InvalidArgument` if `t` is NaN or infinite.
///
/// # Safety
/// `out` must be null or valid for writing an `MpVector3`.
#[no_mangle]
pub unsafe extern "C" fn mp_vector3_lerp(
    a: MpVector3,
    b: MpVector3,
    t: f64,
    out: *mut MpVector3,
) -> MpVectorErrorCode {
    write_out(out, "out", || Ok(a.to_core()?.lerp(b.to_core()?, t)?.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{mp_vector_get_last_error, mp_vector_get_last_error_code};
    use std::ffi::CStr;

    const A: MpVector3 = MpVector3 { x: 1.0, y: 2.0, z: 3.0 };
    const B: MpVector3 = MpVector3 { x: 2.0, y: 2.0, z: 2.0 };

    #[test]
    fn test_scalar_and_vector_forms() {
        let mut out = MpVector3::default();
        unsafe {
            assert_eq!(mp_vector3_add_scalar(A, 1.0, &mut out), MpVectorErrorCode::Ok);
            assert_eq!(out, MpVector3 { x: 2.0, y: 3.0, z: 4.0 });

            assert_eq!(mp_vector3_subtract(A, B, &mut out), MpVectorErrorCode::Ok);
            assert_eq!(out, MpVector3 { x: -1.0, y: 0.0, z: 1.0 });

            assert_eq!(mp_vector3_multiply(A, B, &mut out), MpVectorErrorCode::Ok);
            assert_eq!(out, MpVector3 { x: 2.0, y: 4.0, z: 6.0 });

            assert_eq!(mp_vector3_divide_scalar(A, 2.0, &mut out), MpVectorErrorCode::Ok);
            assert_eq!(out, MpVector3 { x: 0.5, y: 1.0, z: 1.5 });
        }
    }

    #[test]
    fn test_divide_by_zero_sets_last_error() {
        let mut out = MpVector3::default();
        let code = unsafe { mp_vector3_divide_scalar(A, 0.0, &mut out) };
        assert_eq!(code, MpVectorErrorCode::DivisionByZero);
        assert_eq!(out, MpVector3::default());

        let msg = unsafe { CStr::from_ptr(mp_vector_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "Division by zero in divide");

        // A later success clears the slot
        unsafe { mp_vector3_negative(A, &mut out) };
        assert_eq!(mp_vector_get_last_error_code(), MpVectorErrorCode::Ok);
        assert!(mp_vector_get_last_error().is_null());
    }

    #[test]
    fn test_null_out_pointer() {
        let code = unsafe { mp_vector3_add(A, B, std::ptr::null_mut()) };
        assert_eq!(code, MpVectorErrorCode::NullPointer);
    }

    #[test]
    fn test_invalid_input_vector() {
        let bad = MpVector3 { x: f64::INFINITY, y: 0.0, z: 0.0 };
        let mut out = MpVector3::default();
        let code = unsafe { mp_vector3_add(A, bad, &mut out) };
        assert_eq!(code, MpVectorErrorCode::InvalidArgument);
    }

    #[test]
    fn test_non_finite_scalar_rejected() {
        let mut out = MpVector3::default();
        for s in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            unsafe {
                assert_eq!(mp_vector3_add_scalar(A, s, &mut out), MpVectorErrorCode::InvalidArgument);
                assert_eq!(
                    mp_vector3_subtract_scalar(A, s, &mut out),
                    MpVectorErrorCode::InvalidArgument
                );
                assert_eq!(
                    mp_vector3_multiply_scalar(A, s, &mut out),
                    MpVectorErrorCode::InvalidArgument
                );
                assert_eq!(
                    mp_vector3_divide_scalar(A, s, &mut out),
                    MpVectorErrorCode::InvalidArgument
                );
                assert_eq!(mp_vector3_lerp(A, B, s, &mut out), MpVectorErrorCode::InvalidArgument);
            }
            assert_eq!(out, MpVector3::default());
        }
    }

    #[test]
    fn test_overflow_rejected() {
        let big = MpVector3 { x: f64::MAX, y: 0.0, z: 0.0 };
        let mut out = MpVector3::default();
        let code = unsafe { mp_vector3_multiply_scalar(big, 2.0, &mut out) };
        assert_eq!(code, MpVectorErrorCode::InvalidArgument);
        let msg = unsafe { CStr::from_ptr(mp_vector_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "Invalid argument: result of multiply is not finite");
    }
}
