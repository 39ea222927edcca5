//! 3D Vector Core Library
//!
//! An immutable, finite-valued 3D vector type for host game-modification
//! runtimes. Positions, directions, velocities and rotations handed across
//! the scripting API are all represented by [`Vector3`].
//!
//! ## Overview
//!
//! - Validated construction from components, arrays, slices, or any value
//!   exposing `x`, `y`, `z` (see [`Xyz`])
//! - Pure arithmetic with scalar broadcasting (see [`Operand`]); results that
//!   would not be finite are rejected
//! - Geometric operations: dot, cross, length, normalisation, angles
//! - Serde support accepting both `{x, y, z}` objects and `[x, y, z]` arrays
//!
//! ```
//! use mp_vector_core::Vector3;
//!
//! let a = Vector3::new(3.0, 4.0, 0.0)?;
//! assert_eq!(a.length(), 5.0);
//!
//! let doubled = a.multiply(2.0)?;
//! assert!(doubled.equals(Vector3::new(6.0, 8.0, 0.0)?));
//! # Ok::<(), mp_vector_core::VectorError>(())
//! ```

// Core types and utilities
pub mod core_types;

// Re-export core types
pub use core_types::{Operand, Vector3, VectorError, Xyz, EQUALS_EPSILON};
