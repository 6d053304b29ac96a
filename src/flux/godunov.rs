//! Godunov flux from the exact Riemann solution.
//!
//! F* = f(q*(0)), where q*(ξ) is the self-similar solution of the Riemann
//! problem between the two interface states.

use crate::equations::RiemannSystem;
use crate::error::Result;
use crate::solver::{SolverConfig, compute_speeds, sample_similarity, solve};

/// Exact Godunov flux between `q_l` and `q_r`.
///
/// # Arguments
/// * `system` - Equations being solved
/// * `q_l` - State left of the interface
/// * `q_r` - State right of the interface
/// * `config` - Newton settings for the star state
///
/// # Errors
/// Propagates validation errors for inadmissible states.
pub fn godunov_flux<S: RiemannSystem>(
    system: &S,
    q_l: &S::State,
    q_r: &S::State,
    config: &SolverConfig,
) -> Result<Vec<f64>> {
    let result = solve(system, q_l, q_r, config)?;
    let speeds = compute_speeds(system, &result);
    let interface = sample_similarity(system, &result, &speeds, 0.0);
    Ok(system.flux(&interface))
}
