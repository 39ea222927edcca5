//! Core types and utilities

pub mod direction;
pub mod error;
pub mod operand;
mod serde_repr;
pub mod vec3;
pub mod xyz;

pub use error::VectorError;
pub use operand::Operand;
pub use vec3::{Vector3, EQUALS_EPSILON};
pub use xyz::Xyz;
