//! Errors raised by [`Vector3`](super::Vector3) construction and operations.

/// Errors that can occur when building or operating on a vector.
///
/// Both conditions are caller bugs rather than transient faults, so nothing
/// in this crate retries them.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Input did not resolve to three finite components.
    InvalidArgument {
        /// What was wrong with the input.
        reason: String,
    },
    /// An operation would have divided by zero.
    DivisionByZero {
        /// Name of the operation that refused to divide.
        operation: &'static str,
    },
}

impl VectorError {
    /// Create error for a component that is NaN or infinite.
    ///
    /// # Arguments
    /// * `component` - Component name (`"x"`, `"y"`, `"z"`, `"theta"`, ...)
    /// * `value` - The rejected value
    pub fn non_finite(component: &str, value: f64) -> Self {
        tracing::debug!(component, value, "rejected non-finite component");
        Self::InvalidArgument {
            reason: format!("component '{component}' must be finite, got {value}"),
        }
    }

    /// Create error for a sequence that holds fewer than three components.
    pub fn missing_components(found: usize) -> Self {
        tracing::debug!(found, "rejected short component sequence");
        Self::InvalidArgument {
            reason: format!("expected 3 components, got {found}"),
        }
    }

    /// Create error for finite inputs whose result leaves the `f64` range.
    pub fn overflow(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected non-finite result");
        Self::InvalidArgument {
            reason: format!("result of {operation} is not finite"),
        }
    }

    /// Create error for a division that would use a zero divisor.
    pub fn division_by_zero(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected division by zero");
        Self::DivisionByZero { operation }
    }
}

impl std::fmt::Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorError::InvalidArgument { reason } => write!(f, "Invalid argument: {reason}"),
            VectorError::DivisionByZero { operation } => {
                write!(f, "Division by zero in {operation}")
            }
        }
    }
}

impl std::error::Error for VectorError {}
