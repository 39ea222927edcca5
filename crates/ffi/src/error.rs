use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use mp_vector_core::VectorError;

/// A failure that can be reported to the host as a code plus message.
///
/// `code()` is what the `mp_vector3_*` function returns; `msg()` is what
/// `mp_vector_get_last_error` hands back afterwards on the same thread.
pub(crate) trait VectorFfiError {
    fn code(&self) -> MpVectorErrorCode;

    fn msg(&self) -> &str;
}

/// The only [`VectorFfiError`] the vector functions produce: a null `out`
/// pointer, or a core [`VectorError`] carried over with its `Display` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVectorFfiError {
    code: MpVectorErrorCode,
    msg: String,
}

impl DefaultVectorFfiError {
    /// `param_name` was null where a result had to be written.
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: MpVectorErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl From<VectorError> for DefaultVectorFfiError {
    fn from(error: VectorError) -> Self {
        let code = match error {
            VectorError::InvalidArgument { .. } => MpVectorErrorCode::InvalidArgument,
            VectorError::DivisionByZero { .. } => MpVectorErrorCode::DivisionByZero,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl VectorFfiError for DefaultVectorFfiError {
    fn code(&self) -> MpVectorErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// Status returned by every `mp_vector3_*` function; `Ok` is zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpVectorErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// The `out` pointer was null.
    NullPointer = 1,

    /// An input vector or scalar was NaN or infinite, or the result would
    /// not have been finite.
    InvalidArgument = 2,

    /// The operation would have divided by zero
    /// (zero divisor, or normalising a zero-length vector).
    DivisionByZero = 3,
}

impl From<DefaultVectorFfiError> for MpVectorErrorCode {
    fn from(error: DefaultVectorFfiError) -> Self {
        error.code
    }
}

thread_local! {
    /// Message and code of the last `mp_vector3_*` call on this thread. The
    /// message is owned here so `mp_vector_get_last_error` can lend it out.
    static LAST_ERROR: RefCell<(Option<CString>, MpVectorErrorCode)> = const { RefCell::new((None, MpVectorErrorCode::Ok)) };
}

/// Borrow the last-error slot.
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, MpVectorErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Borrow the last-error slot mutably.
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, MpVectorErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread observes only its own failures.
///
/// # Lifetime
/// The returned pointer is valid until the next `mp_vector3_*` call on this
/// thread. **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// MpVector3 unit;
/// if (mp_vector3_unit(v, &unit) != MpVectorErrorCode_Ok) {
///     const char* error = mp_vector_get_last_error();
///     if (error) {
///         printf("normalise failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn mp_vector_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns:
/// - `MpVectorErrorCode::Ok` (0) if the last call on this thread succeeded
/// - The specific error code from the last failed operation
#[no_mangle]
pub extern "C" fn mp_vector_get_last_error_code() -> MpVectorErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
