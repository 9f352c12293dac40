//! Errors returned by the design optimizer.

use thiserror::Error;

/// Error returned when a design request cannot be optimized as given.
///
/// Detected before any search runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    /// None of the candidate names is present in the material index.
    #[error("no usable materials")]
    NoUsableMaterials,

    /// A requested dimension or the load is zero, negative or not finite.
    #[error("{quantity} must be positive and finite (received {value})")]
    NonPositive {
        /// Which request value was rejected.
        quantity: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A usable material carries a negative or non-finite property.
    #[error("material '{name}' has invalid {property} (received {value})")]
    InvalidMaterial {
        /// Name of the offending material.
        name: String,
        /// Which property was rejected.
        property: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Error returned when no optimal design is produced.
///
/// The `Display` text is the failure reason reported to callers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DesignError {
    /// The request was rejected before optimization.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The search found no feasible, converged design.
    ///
    /// Sub-causes (infeasible within bounds, iteration limit, evaluation
    /// failure) are deliberately not distinguished.
    #[error("optimization failed")]
    Convergence,
}

impl DesignError {
    /// Returns the failure reason as a string.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_are_human_readable() {
        assert_eq!(
            DesignError::from(InputError::NoUsableMaterials).reason(),
            "no usable materials"
        );
        assert_eq!(DesignError::Convergence.reason(), "optimization failed");

        let error = InputError::NonPositive {
            quantity: "max load",
            value: -3.0,
        };
        assert_eq!(
            error.to_string(),
            "max load must be positive and finite (received -3)"
        );
    }
}
