//! Hyperbolic systems with an exact Riemann solution.
//!
//! The exact solver in [`crate::solver`] is written once against the
//! [`RiemannSystem`] trait. An implementation provides the wave curves of
//! the system through a state: the integral curve (rarefaction branch) and
//! the Hugoniot locus (shock branch), parameterized by the scalar that is
//! continuous across the middle of the solution (pressure for gas dynamics,
//! depth for shallow water), together with their derivatives, initial
//! guesses, and the closed-form rarefaction fan.
//!
//! Both branches are written as the velocity jump φ(x) from the state to the
//! star value x, so that the velocity reached from side K is
//!
//! u(x) = u_K + sign(K) · φ_K(x),    sign(Left) = -1, sign(Right) = +1.

mod euler;
mod shallow_water;

pub use euler::Euler1D;
pub use shallow_water::ShallowWater1D;

use std::fmt::Debug;

use crate::error::Result;
use crate::solver::WaveKind;
use crate::types::Side;

/// A 1D hyperbolic system whose Riemann problem is solved exactly.
///
/// # Implementation Notes
///
/// - Wave-curve methods are only called on non-vacuum states with x ≥ 0.
/// - `rarefaction_curve` is used for x ≤ `wave_variable(q)`, `shock_curve` above.
/// - `eigenvalues` and `sound_speed` return `None` for vacuum states.
pub trait RiemannSystem: Clone + Debug + Send + Sync {
    /// Primitive state type.
    type State: Copy + Debug + PartialEq + Send + Sync;

    /// Number of waves in the Riemann fan (3 for Euler, 2 for shallow water).
    const N_WAVES: usize;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Check that a boundary state is physically admissible.
    fn validate(&self, q: &Self::State, side: Side) -> Result<()>;

    /// The vacuum (dry) state.
    fn vacuum(&self) -> Self::State;

    /// Whether `q` is vacuum (undefined velocity).
    fn is_vacuum(&self, q: &Self::State) -> bool;

    /// Velocity of the state, `None` for vacuum.
    fn velocity(&self, q: &Self::State) -> Option<f64>;

    /// The quantity solved for in the star region: pressure or depth.
    fn wave_variable(&self, q: &Self::State) -> f64;

    /// Sound speed (Euler) or celerity (shallow water).
    fn sound_speed(&self, q: &Self::State) -> Option<f64>;

    /// Eigenvalues of the flux Jacobian in increasing order.
    fn eigenvalues(&self, q: &Self::State) -> Option<Vec<f64>>;

    /// Velocity gained by a rarefaction expanding the state into vacuum.
    ///
    /// Euler: 2c/(γ-1). Shallow water: 2c.
    fn vacuum_velocity_jump(&self, q: &Self::State) -> f64;

    /// Velocity jump φ(x) along the integral curve (x ≤ wave variable of q).
    fn rarefaction_curve(&self, q: &Self::State, x: f64) -> f64;

    /// dφ/dx along the integral curve.
    fn rarefaction_slope(&self, q: &Self::State, x: f64) -> f64;

    /// Velocity jump φ(x) along the Hugoniot locus (x > wave variable of q).
    fn shock_curve(&self, q: &Self::State, x: f64) -> f64;

    /// dφ/dx along the Hugoniot locus.
    fn shock_slope(&self, q: &Self::State, x: f64) -> f64;

    /// Exact star value when both waves are rarefactions.
    fn two_rarefaction_estimate(&self, left: &Self::State, right: &Self::State) -> f64;

    /// Approximate star value assuming both waves are shocks.
    fn two_shock_estimate(&self, left: &Self::State, right: &Self::State) -> f64;

    /// State on the star side of a wave leaving `q`.
    fn star_state(
        &self,
        q: &Self::State,
        x_star: f64,
        u_star: f64,
        kind: WaveKind,
    ) -> Self::State;

    /// Rankine-Hugoniot speed of the shock connecting `q` to the star value.
    fn shock_speed(&self, q: &Self::State, x_star: f64, side: Side) -> f64;

    /// State inside the rarefaction fan leaving `q`, at similarity variable ξ = x/t.
    fn fan_state(&self, q: &Self::State, xi: f64, side: Side) -> Self::State;

    /// Space-reflected state (velocity negated).
    fn mirrored(&self, q: &Self::State) -> Self::State;

    /// Conserved variables.
    fn conserved(&self, q: &Self::State) -> Vec<f64>;

    /// Physical flux f(q).
    fn flux(&self, q: &Self::State) -> Vec<f64>;

    /// Primitive state from conserved variables, vacuum below the threshold.
    ///
    /// # Panics
    ///
    /// Panics if `u` holds fewer than [`N_WAVES`](Self::N_WAVES) values.
    fn from_conserved(&self, u: &[f64]) -> Self::State;

    /// Velocity reached from `q` at star value `x` (the f1/f2 wave curves).
    ///
    /// Picks the integral curve for x ≤ wave variable, the Hugoniot locus above.
    fn wave_curve(&self, q: &Self::State, x: f64, side: Side) -> f64 {
        let u = self.velocity(q).unwrap_or(0.0);
        let phi = if x <= self.wave_variable(q) {
            self.rarefaction_curve(q, x)
        } else {
            self.shock_curve(q, x)
        };
        u + side.sign() * phi
    }

    /// Derivative of [`wave_curve`](Self::wave_curve) with respect to x.
    fn wave_curve_slope(&self, q: &Self::State, x: f64, side: Side) -> f64 {
        let slope = if x <= self.wave_variable(q) {
            self.rarefaction_slope(q, x)
        } else {
            self.shock_slope(q, x)
        };
        side.sign() * slope
    }

    /// Speed of the vacuum front of a rarefaction leaving `q` toward `side`'s opposite.
    ///
    /// Left state: u + jump. Right state: u - jump.
    fn vacuum_front(&self, q: &Self::State, side: Side) -> Option<f64> {
        let u = self.velocity(q)?;
        Some(u - side.sign() * self.vacuum_velocity_jump(q))
    }

    /// Smallest and largest characteristic speed of the state.
    fn characteristic_bounds(&self, q: &Self::State) -> Option<(f64, f64)> {
        let eigs = self.eigenvalues(q)?;
        Some((*eigs.first()?, *eigs.last()?))
    }

    /// Maximum absolute wave speed |u| + c, zero for vacuum.
    fn max_wave_speed(&self, q: &Self::State) -> f64 {
        self.characteristic_bounds(q)
            .map(|(lo, hi)| lo.abs().max(hi.abs()))
            .unwrap_or(0.0)
    }

    /// Whether the flow is supersonic (|u| > c). Vacuum is never supersonic.
    fn is_supersonic(&self, q: &Self::State) -> bool {
        match (self.velocity(q), self.sound_speed(q)) {
            (Some(u), Some(c)) => u.abs() > c,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::state::{EulerState, SWEState};

    const TOL: f64 = 1e-12;

    #[test]
    fn test_wave_curve_passes_through_state() {
        let euler = Euler1D::new(1.4);
        let q = EulerState::new(1.0, 0.3, 2.0);
        for side in [Side::Left, Side::Right] {
            let u = euler.wave_curve(&q, q.pressure, side);
            assert!((u - 0.3).abs() < TOL, "{side}: u = {u}");
        }

        let swe = ShallowWater1D::new(1.0);
        let q = SWEState::from_primitives(2.0, -1.0);
        for side in [Side::Left, Side::Right] {
            let u = swe.wave_curve(&q, q.h, side);
            assert!((u + 1.0).abs() < TOL, "{side}: u = {u}");
        }
    }

    #[test]
    fn test_wave_curve_orientation() {
        // Compression slows the left state down and speeds the right state up.
        let euler = Euler1D::new(1.4);
        let q = EulerState::new(1.0, 0.0, 1.0);
        assert!(euler.wave_curve(&q, 2.0, Side::Left) < 0.0);
        assert!(euler.wave_curve(&q, 2.0, Side::Right) > 0.0);
        assert!(euler.wave_curve(&q, 0.5, Side::Left) > 0.0);
        assert!(euler.wave_curve(&q, 0.5, Side::Right) < 0.0);
    }

    #[test]
    fn test_wave_curve_slope_matches_finite_difference() {
        let euler = Euler1D::new(1.4);
        let q = EulerState::new(1.2, 0.1, 1.5);
        let swe = ShallowWater1D::new(9.81);
        let s = SWEState::from_primitives(1.5, 0.4);
        let h = 1e-6;

        for x in [0.4, 1.0, 2.5] {
            for side in [Side::Left, Side::Right] {
                let fd = (euler.wave_curve(&q, x + h, side) - euler.wave_curve(&q, x - h, side))
                    / (2.0 * h);
                let exact = euler.wave_curve_slope(&q, x, side);
                assert!((fd - exact).abs() < 1e-6, "euler x={x}: {fd} vs {exact}");

                let fd = (swe.wave_curve(&s, x + h, side) - swe.wave_curve(&s, x - h, side))
                    / (2.0 * h);
                let exact = swe.wave_curve_slope(&s, x, side);
                assert!((fd - exact).abs() < 1e-6, "swe x={x}: {fd} vs {exact}");
            }
        }
    }

    #[test]
    fn test_vacuum_front() {
        let swe = ShallowWater1D::new(1.0);
        let q = SWEState::from_primitives(4.0, 1.0);
        // c = 2, jump = 4
        assert!((swe.vacuum_front(&q, Side::Left).unwrap() - 5.0).abs() < TOL);
        assert!((swe.vacuum_front(&q, Side::Right).unwrap() + 3.0).abs() < TOL);
        assert_eq!(swe.vacuum_front(&SWEState::zero(), Side::Left), None);
    }

    #[test]
    fn test_supersonic() {
        let swe = ShallowWater1D::new(1.0);
        assert!(swe.is_supersonic(&SWEState::from_primitives(1.0, 2.0)));
        assert!(!swe.is_supersonic(&SWEState::from_primitives(1.0, 0.5)));
        assert!(!swe.is_supersonic(&SWEState::zero()));
    }

    #[test]
    fn test_max_wave_speed() {
        let swe = ShallowWater1D::new(10.0);
        let q = SWEState::from_primitives(1.0, 2.0);
        let expected = 2.0 + 10.0_f64.sqrt();
        assert!((swe.max_wave_speed(&q) - expected).abs() < TOL);
        assert_eq!(swe.max_wave_speed(&SWEState::zero()), 0.0);
    }
}
