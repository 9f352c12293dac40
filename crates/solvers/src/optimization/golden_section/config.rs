use thiserror::Error;

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
    margin_tol: f64,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("margin_tol must be finite and non-negative")]
    Margin,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
            margin_tol: 1e-9,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(
        max_iters: usize,
        x_abs_tol: f64,
        x_rel_tol: f64,
        margin_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !is_tolerance(x_abs_tol) {
            return Err(ConfigError::XAbs);
        }
        if !is_tolerance(x_rel_tol) {
            return Err(ConfigError::XRel);
        }
        if !is_tolerance(margin_tol) {
            return Err(ConfigError::Margin);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
            margin_tol,
        })
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance for x convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance for x convergence.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns how far below zero a margin may fall and still count as feasible.
    #[must_use]
    pub fn margin_tol(&self) -> f64 {
        self.margin_tol
    }
}

fn is_tolerance(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, -1.0, 0.0, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, 0.0, f64::NAN, 0.0), Err(ConfigError::XRel));
        assert_eq!(
            Config::new(10, 0.0, 0.0, f64::INFINITY),
            Err(ConfigError::Margin)
        );
    }

    #[test]
    fn default_is_valid() {
        let default = Config::default();
        let rebuilt = Config::new(
            default.max_iters(),
            default.x_abs_tol(),
            default.x_rel_tol(),
            default.margin_tol(),
        );
        assert_eq!(rebuilt, Ok(default));
    }
}
