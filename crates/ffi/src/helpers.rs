use crate::error::{with_last_error_mut, DefaultVectorFfiError, MpVectorErrorCode, VectorFfiError};
use std::ffi::CString;

/// Record `error` in this thread's last-error slot and log it.
pub(crate) fn set_last_error(error: &impl VectorFfiError) {
    tracing::warn!(code = ?error.code(), "{}", error.msg());
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Record `error` and return the code the vector function should hand back.
#[inline]
pub(crate) fn track_error(error: &impl VectorFfiError) -> MpVectorErrorCode {
    set_last_error(error);
    error.code()
}

/// Reset the last-error slot after a vector function succeeds.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = MpVectorErrorCode::Ok;
    });
}

/// Run `compute` and write its value through `out`.
///
/// Null `out` and failed computations are recorded as the last error; a
/// successful write clears it.
///
/// # Safety
/// `out` must be null or valid for writing a `T`.
pub(crate) unsafe fn write_out<T, F>(out: *mut T, out_name: &str, compute: F) -> MpVectorErrorCode
where
    F: FnOnce() -> Result<T, DefaultVectorFfiError>,
{
    if out.is_null() {
        return track_error(&DefaultVectorFfiError::null_pointer(out_name));
    }

    match compute() {
        Ok(value) => {
            out.write(value);
            clear_last_error();
            MpVectorErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}
