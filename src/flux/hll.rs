//! HLL (Harten-Lax-van Leer) flux with exact wave-speed bounds.
//!
//! The HLL solver replaces the Riemann fan by a single intermediate state
//! between the slowest and fastest waves:
//!
//! F* = (s_r * F_l - s_l * F_r + s_l * s_r * (q_r - q_l)) / (s_r - s_l)
//!
//! Here s_l and s_r are the outer head speeds of the exact solution, so the
//! bounds are sharp rather than estimated. The contact wave of the Euler
//! equations is not resolved.
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid Dynamics"

use crate::equations::RiemannSystem;
use crate::error::Result;
use crate::solver::{SolverConfig, compute_speeds, solve};

/// HLL numerical flux between `q_l` and `q_r`.
///
/// # Arguments
/// * `system` - Equations being solved
/// * `q_l` - State left of the interface
/// * `q_r` - State right of the interface
/// * `config` - Newton settings used to find the wave speeds
///
/// # Returns
/// Numerical flux in conserved-variable order
pub fn hll_flux<S: RiemannSystem>(
    system: &S,
    q_l: &S::State,
    q_r: &S::State,
    config: &SolverConfig,
) -> Result<Vec<f64>> {
    let result = solve(system, q_l, q_r, config)?;
    let speeds = compute_speeds(system, &result);
    let (s_l, s_r) = (speeds.left.head, speeds.right.head);

    let f_l = system.flux(q_l);
    let f_r = system.flux(q_r);

    if s_l >= 0.0 {
        // All waves go right, use left flux
        return Ok(f_l);
    }
    if s_r <= 0.0 {
        // All waves go left, use right flux
        return Ok(f_r);
    }

    let u_l = system.conserved(q_l);
    let u_r = system.conserved(q_r);
    let inv_ds = 1.0 / (s_r - s_l);

    Ok((0..f_l.len())
        .map(|k| inv_ds * (s_r * f_l[k] - s_l * f_r[k] + s_l * s_r * (u_r[k] - u_l[k])))
        .collect())
}
