//! Wave curves through a state in the phase plane.
//!
//! For a state q and a side, the integral curve is the set of star values
//! reachable through a rarefaction, the Hugoniot locus the set reachable
//! through a shock. Plotted together for both boundary states, their
//! admissible branches intersect at the star state.

use std::f64::consts::SQRT_2;

use crate::equations::RiemannSystem;
use crate::types::Side;

/// A point (x, u) of a wave curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocusPoint {
    /// Pressure (Euler) or depth (shallow water)
    pub value: f64,
    pub velocity: f64,
}

/// Both wave curves through a state.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locus {
    pub integral: Vec<LocusPoint>,
    pub hugoniot: Vec<LocusPoint>,
}

/// Map ξ ∈ [0, x1 - x0] onto [x0, x1], clustering points near x0.
///
/// x0 + (x1 - x0) (√((ξ / (x1 - x0))² + 1) - 1) / (√2 - 1)
pub fn densified(xi: f64, x0: f64, x1: f64) -> f64 {
    let length = x1 - x0;
    if length == 0.0 {
        return x0;
    }
    let r = xi / length;
    x0 + length * ((r * r + 1.0).sqrt() - 1.0) / (SQRT_2 - 1.0)
}

/// Sample the integral curve and Hugoniot locus of `q` seen from `side`.
///
/// With `admissible_only` the integral curve covers [0, x_q] and the Hugoniot
/// locus [x_q, x_max], x_q being the state's own pressure or depth. Otherwise
/// both cover [0, x_max]. Each curve gets `n_points + 1` samples; points
/// where a curve is singular (the Hugoniot locus of shallow water at zero
/// depth) are dropped. A vacuum state gives the origin for both curves.
pub fn compute_locus<S: RiemannSystem>(
    system: &S,
    q: &S::State,
    side: Side,
    x_max: f64,
    n_points: usize,
    admissible_only: bool,
) -> Locus {
    let Some(u) = system.velocity(q) else {
        let origin = LocusPoint {
            value: 0.0,
            velocity: 0.0,
        };
        return Locus {
            integral: vec![origin],
            hugoniot: vec![origin],
        };
    };

    let n = n_points.max(1);
    let s = side.sign();
    let x_q = system.wave_variable(q);
    let (integral_end, hugoniot_start) = if admissible_only {
        (x_q, x_q)
    } else {
        (x_max, 0.0)
    };

    Locus {
        integral: sample_branch(0.0, integral_end, n, |x| {
            u + s * system.rarefaction_curve(q, x)
        }),
        hugoniot: sample_branch(hugoniot_start, x_max, n, |x| {
            u + s * system.shock_curve(q, x)
        }),
    }
}

fn sample_branch<F>(x0: f64, x1: f64, n: usize, curve: F) -> Vec<LocusPoint>
where
    F: Fn(f64) -> f64,
{
    let step = (x1 - x0) / n as f64;
    (0..=n)
        .map(|i| {
            let value = densified(i as f64 * step, x0, x1);
            LocusPoint {
                value,
                velocity: curve(value),
            }
        })
        .filter(|p| p.velocity.is_finite())
        .collect()
}
