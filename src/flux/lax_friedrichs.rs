//! Local Lax-Friedrichs (Rusanov) flux.

use crate::equations::RiemannSystem;

/// Lax-Friedrichs flux for a system.
///
/// F* = 0.5 * (F(q_l) + F(q_r)) - 0.5 * λ * (q_r - q_l)
///
/// where λ is the largest |eigenvalue| over both states. Needs no Riemann
/// solve, so it never fails; vacuum states contribute zero flux and zero speed.
pub fn lax_friedrichs_flux<S: RiemannSystem>(
    system: &S,
    q_l: &S::State,
    q_r: &S::State,
) -> Vec<f64> {
    let f_l = system.flux(q_l);
    let f_r = system.flux(q_r);
    let u_l = system.conserved(q_l);
    let u_r = system.conserved(q_r);
    let lambda = system.max_wave_speed(q_l).max(system.max_wave_speed(q_r));

    f_l.iter()
        .zip(&f_r)
        .zip(u_l.iter().zip(&u_r))
        .map(|((fl, fr), (ul, ur))| 0.5 * (fl + fr) - 0.5 * lambda * (ur - ul))
        .collect()
}
