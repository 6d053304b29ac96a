//! Point evaluation of the self-similar solution.

use super::{SolverResult, WaveBounds, WaveKind, WaveSpeeds};
use crate::equations::RiemannSystem;
use crate::types::Side;

/// State at position `x` and time `t`, the discontinuity sitting at x = 0 at t = 0.
///
/// For t ≤ 0 this returns the initial data: the left state for x < 0, the
/// right state otherwise.
pub fn sample<S: RiemannSystem>(
    system: &S,
    result: &SolverResult<S::State>,
    speeds: &WaveSpeeds,
    x: f64,
    t: f64,
) -> S::State {
    if t <= 0.0 {
        return if x < 0.0 { result.left } else { result.right };
    }
    sample_similarity(system, result, speeds, x / t)
}

/// State at similarity coordinate ξ = x/t.
///
/// ξ = 0 gives the interface state used by Godunov-type fluxes.
pub fn sample_similarity<S: RiemannSystem>(
    system: &S,
    result: &SolverResult<S::State>,
    speeds: &WaveSpeeds,
    xi: f64,
) -> S::State {
    if xi < speeds.contact {
        sample_side(system, result, &speeds.left, Side::Left, xi)
    } else {
        sample_side(system, result, &speeds.right, Side::Right, xi)
    }
}

fn sample_side<S: RiemannSystem>(
    system: &S,
    result: &SolverResult<S::State>,
    wave: &WaveBounds,
    side: Side,
    xi: f64,
) -> S::State {
    let s = side.sign();
    let boundary = result.boundary(side);

    // Outside the wave
    if s * (xi - wave.head) > 0.0 {
        return *boundary;
    }
    // Inside the fan
    if wave.kind == WaveKind::Rarefaction && s * (xi - wave.tail) >= 0.0 {
        return system.fan_state(boundary, xi, side);
    }
    result.star[side]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::{Euler1D, ShallowWater1D};
    use crate::solver::state::{EulerState, SWEState};
    use crate::solver::{SolverConfig, compute_speeds, solve};

    fn sod() -> (Euler1D, SolverResult<EulerState>, WaveSpeeds) {
        let euler = Euler1D::air();
        let result = solve(
            &euler,
            &EulerState::new(1.0, 0.0, 1.0),
            &EulerState::new(0.125, 0.0, 0.1),
            &SolverConfig::default(),
        )
        .unwrap();
        let speeds = compute_speeds(&euler, &result);
        (euler, result, speeds)
    }

    #[test]
    fn test_initial_data_at_t_zero() {
        let (euler, result, speeds) = sod();
        assert_eq!(sample(&euler, &result, &speeds, -0.1, 0.0), result.left);
        assert_eq!(sample(&euler, &result, &speeds, 0.0, 0.0), result.right);
        assert_eq!(sample(&euler, &result, &speeds, 0.3, -1.0), result.right);
    }

    #[test]
    fn test_sod_regions() {
        let (euler, result, speeds) = sod();
        let t = 0.2;

        assert_eq!(sample(&euler, &result, &speeds, -0.5, t), result.left);
        assert_eq!(sample(&euler, &result, &speeds, 0.5, t), result.right);

        // Between contact (0.927) and shock (1.752)
        let q = sample(&euler, &result, &speeds, 1.3 * t, t);
        assert!((q.density - 0.26557).abs() < 1e-4);
        assert!((q.pressure - 0.30313).abs() < 1e-4);

        // Between fan tail (-0.070) and contact
        let q = sample(&euler, &result, &speeds, 0.5 * t, t);
        assert!((q.density - 0.42632).abs() < 1e-4);

        // Inside the fan: bounded by the head and tail states
        let q = sample(&euler, &result, &speeds, -0.6 * t, t);
        assert!(q.density < 1.0 && q.density > 0.42632);
        let u = q.velocity.unwrap();
        assert!(u > 0.0 && u < 0.92745);
    }

    #[test]
    fn test_fan_is_continuous_at_edges() {
        let (euler, result, speeds) = sod();
        let head = sample_similarity(&euler, &result, &speeds, speeds.left.head);
        assert!((head.density - 1.0).abs() < 1e-10);

        let tail = sample_similarity(&euler, &result, &speeds, speeds.left.tail);
        assert!((tail.density - result.star.left.density).abs() < 1e-6);
        assert!((tail.pressure - result.star_value).abs() < 1e-6);
    }

    #[test]
    fn test_dry_star_is_vacuum_between_fronts() {
        let euler = Euler1D::air();
        let result = solve(
            &euler,
            &EulerState::new(1.0, -10.0, 0.4),
            &EulerState::new(1.0, 10.0, 0.4),
            &SolverConfig::default(),
        )
        .unwrap();
        let speeds = compute_speeds(&euler, &result);
        assert!(sample_similarity(&euler, &result, &speeds, 0.0).is_vacuum());
        assert!(!sample_similarity(&euler, &result, &speeds, -11.0).is_vacuum());
    }

    #[test]
    fn test_swe_interface_state_at_rest() {
        let swe = ShallowWater1D::normalized();
        let q = SWEState::new(1.5, 0.0);
        let result = solve(&swe, &q, &q, &SolverConfig::default()).unwrap();
        let speeds = compute_speeds(&swe, &result);
        let interface = sample_similarity(&swe, &result, &speeds, 0.0);
        assert!((interface.h - 1.5).abs() < 1e-10);
        assert!(interface.hu.abs() < 1e-10);
    }
}
