//! C ABI for `mp-vector-core`.
//!
//! Native host runtimes call `mp_vector3_*` functions with vectors passed by
//! value and results written through `out` pointers. Every function returns
//! an [`MpVectorErrorCode`]; on failure the message is available from
//! [`mp_vector_get_last_error`] on the same thread.
//!
//! `build.rs` generates `MpVectorFFI.h` at the workspace root with cbindgen.

mod arithmetic;
mod construct;
mod error;
mod geometry;
mod helpers;
mod vector;

pub use arithmetic::*;
pub use construct::*;
pub use error::{mp_vector_get_last_error, mp_vector_get_last_error_code, MpVectorErrorCode};
pub use geometry::*;
pub use vector::{MpAngles, MpVector3};
