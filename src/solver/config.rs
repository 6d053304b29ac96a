//! Newton iteration settings for the star-state solve.

use crate::error::{Result, RiemannError};

/// Settings for the Newton iteration on the star pressure (or depth).
///
/// The defaults match the interactive demos: relative step below 1e-8 or at
/// most 20 iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Stop once ½|Δx| / (x_old + x_new) falls below this value.
    pub tolerance: f64,
    /// Maximum number of Newton steps before returning the current estimate.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 20,
        }
    }
}

impl SolverConfig {
    /// Tight settings for reference solutions.
    ///
    /// - tolerance: 1e-14
    /// - max_iterations: 50
    pub fn precise() -> Self {
        Self {
            tolerance: 1e-14,
            max_iterations: 50,
        }
    }

    /// Set the relative step tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Reject non-positive tolerance or a zero iteration cap.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(RiemannError::invalid_parameter(
                "tolerance",
                self.tolerance,
                "must be finite and positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(RiemannError::invalid_parameter(
                "max_iterations",
                0.0,
                "at least one iteration is required",
            ));
        }
        Ok(())
    }
}
