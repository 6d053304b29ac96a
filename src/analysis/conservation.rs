//! Rankine-Hugoniot residuals.
//!
//! Across a discontinuity moving at speed s the conserved variables U and
//! fluxes F satisfy s [U] = [F]. The residuals here measure how well a
//! computed solution honors that across its shocks and contact.

use crate::equations::RiemannSystem;
use crate::solver::{RiemannProblem, WaveKind};
use crate::types::{Side, Sides};

/// max_k |s (U_down - U_up)_k - (F_down - F_up)_k|
pub fn jump_residual<S: RiemannSystem>(
    system: &S,
    upstream: &S::State,
    downstream: &S::State,
    speed: f64,
) -> f64 {
    let u_up = system.conserved(upstream);
    let u_down = system.conserved(downstream);
    let f_up = system.flux(upstream);
    let f_down = system.flux(downstream);

    (0..u_up.len())
        .map(|k| (speed * (u_down[k] - u_up[k]) - (f_down[k] - f_up[k])).abs())
        .fold(0.0, f64::max)
}

/// Residual across each nonlinear wave; zero for rarefactions and vacuum sides.
pub fn wave_residuals<S: RiemannSystem>(problem: &RiemannProblem<S>) -> Sides<f64> {
    Sides::new(Side::Left, Side::Right).map(|side| {
        let wave = problem.speeds().wave(side);
        if wave.kind != WaveKind::Shock {
            return 0.0;
        }
        jump_residual(
            problem.system(),
            problem.boundary(side),
            &problem.result().star[side],
            wave.head,
        )
    })
}

/// Residual across the contact between the two star states (zero when dry).
pub fn contact_residual<S: RiemannSystem>(problem: &RiemannProblem<S>) -> f64 {
    let result = problem.result();
    if result.is_dry_star() {
        return 0.0;
    }
    jump_residual(
        problem.system(),
        &result.star.left,
        &result.star.right,
        problem.speeds().contact,
    )
}
