//! Wire shape for serializing [`Vector3`].
//!
//! Serializes as `{ "x", "y", "z" }`. Deserializes from that object or from
//! an `[x, y, z]` array, running the same validation as the constructors.

use serde::{Deserialize, Serialize};

use super::error::VectorError;
use super::vec3::Vector3;

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum Components {
    Object { x: f64, y: f64, z: f64 },
    Array(Vec<f64>),
}

impl From<Vector3> for Components {
    fn from(v: Vector3) -> Self {
        Components::Object {
            x: v.x(),
            y: v.y(),
            z: v.z(),
        }
    }
}

impl TryFrom<Components> for Vector3 {
    type Error = VectorError;
    fn try_from(c: Components) -> Result<Self, Self::Error> {
        match c {
            Components::Object { x, y, z } => Vector3::new(x, y, z),
            Components::Array(values) => Vector3::from_slice(&values),
        }
    }
}
