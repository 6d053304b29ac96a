//! Error types for Riemann problem setup.
//!
//! Only malformed input is an error. Vacuum states and Newton iterations that
//! run out of steps are regular outcomes of a solve and are reported through
//! [`SolverResult`](crate::solver::SolverResult) instead.

use thiserror::Error;

use crate::types::Side;

/// Errors raised when a Riemann problem is built from invalid data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiemannError {
    /// A quantity that must be non-negative (density, pressure, depth) is negative.
    #[error("{side} state: {quantity} must be non-negative, got {value}")]
    NegativeQuantity {
        side: Side,
        quantity: &'static str,
        value: f64,
    },

    /// A state component is NaN or infinite.
    #[error("{side} state: {quantity} is not finite ({value})")]
    NonFinite {
        side: Side,
        quantity: &'static str,
        value: f64,
    },

    /// A non-vacuum state whose density, pressure or depth is zero.
    #[error("{side} state: {reason}")]
    DegenerateState { side: Side, reason: &'static str },

    /// A physical or numerical parameter is outside its admissible range.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl RiemannError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Check that `value` is finite and non-negative.
    pub(crate) fn check_non_negative(
        side: Side,
        quantity: &'static str,
        value: f64,
    ) -> Result<()> {
        Self::check_finite(side, quantity, value)?;
        if value < 0.0 {
            return Err(Self::NegativeQuantity {
                side,
                quantity,
                value,
            });
        }
        Ok(())
    }

    /// Check that `value` is finite.
    pub(crate) fn check_finite(side: Side, quantity: &'static str, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Self::NonFinite {
                side,
                quantity,
                value,
            });
        }
        Ok(())
    }
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, RiemannError>;
