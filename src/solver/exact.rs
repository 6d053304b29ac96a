//! Exact star-state solver.
//!
//! The velocity must be continuous across the middle of the Riemann fan, so
//! the star pressure (or depth) x is the root of
//!
//! f(x) = f₁(x) - f₂(x)
//!
//! where f₁ is the velocity reached from the left state along its 1-wave curve
//! and f₂ the velocity reached from the right state along its last wave curve.
//! Each curve is the integral curve below the state's own value and the
//! Hugoniot locus above it.
//!
//! The signs of f at the two boundary values classify the waves before any
//! iteration: a side whose value lies below the root is compressed by a
//! shock, otherwise it expands through a rarefaction. Two rarefactions have a
//! closed-form solution; the other cases run Newton's method from a closed-form
//! initial guess.

use log::{debug, trace, warn};

use super::{SolverConfig, WaveKind};
use crate::equations::RiemannSystem;
use crate::error::Result;
use crate::types::{Side, Sides};

/// Solution of the star region for one pair of boundary states.
///
/// A pure function of (left, right, system, config): solving the same input
/// twice gives identical results.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult<Q> {
    /// Left boundary state
    pub left: Q,
    /// Right boundary state
    pub right: Q,
    /// States on either side of the contact (equal for shallow water)
    pub star: Sides<Q>,
    /// Star pressure (Euler) or star depth (shallow water); zero when dry
    pub star_value: f64,
    /// Star velocity, `None` when the star region is vacuum
    pub star_velocity: Option<f64>,
    /// Kind of the left and right waves
    pub waves: Sides<WaveKind>,
    /// Newton iterations performed (zero for closed-form cases)
    pub iterations: usize,
    /// False if the iteration cap was hit before the tolerance was met
    pub converged: bool,
}

impl<Q> SolverResult<Q> {
    /// Whether a vacuum separates the two waves.
    pub fn is_dry_star(&self) -> bool {
        self.star_velocity.is_none()
    }

    /// Boundary state on `side`.
    pub fn boundary(&self, side: Side) -> &Q {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Solve the Riemann problem for the star state.
///
/// # Errors
///
/// Returns an error if either state fails [`RiemannSystem::validate`] or the
/// configuration is invalid. Vacuum and non-convergence are not errors.
///
/// # Example
///
/// ```
/// use riemann_rs::equations::Euler1D;
/// use riemann_rs::solver::{SolverConfig, WaveKind, solve, state::EulerState};
///
/// let euler = Euler1D::air();
/// let left = EulerState::new(1.0, 0.0, 1.0);
/// let right = EulerState::new(0.125, 0.0, 0.1);
///
/// let result = solve(&euler, &left, &right, &SolverConfig::default()).unwrap();
/// assert_eq!(result.waves.left, WaveKind::Rarefaction);
/// assert_eq!(result.waves.right, WaveKind::Shock);
/// assert!((result.star_pressure() - 0.30313).abs() < 1e-4);
/// ```
pub fn solve<S: RiemannSystem>(
    system: &S,
    left: &S::State,
    right: &S::State,
    config: &SolverConfig,
) -> Result<SolverResult<S::State>> {
    system.validate(left, Side::Left)?;
    system.validate(right, Side::Right)?;
    config.validate()?;
    Ok(solve_unchecked(system, left, right, config))
}

/// f(x) = f₁(x) - f₂(x): velocity mismatch across the contact at star value x.
///
/// Both states must be non-vacuum.
pub fn star_function<S: RiemannSystem>(
    system: &S,
    left: &S::State,
    right: &S::State,
    x: f64,
) -> f64 {
    system.wave_curve(left, x, Side::Left) - system.wave_curve(right, x, Side::Right)
}

/// df/dx, branch-matched to [`star_function`].
pub fn star_function_slope<S: RiemannSystem>(
    system: &S,
    left: &S::State,
    right: &S::State,
    x: f64,
) -> f64 {
    system.wave_curve_slope(left, x, Side::Left) - system.wave_curve_slope(right, x, Side::Right)
}

/// Wave kinds when the star region is vacuum, `None` when it is not.
///
/// The star region is dry when either side is vacuum, or when the two
/// rarefactions cannot meet: u_L + jump_L < u_R - jump_R.
fn dry_star_waves<S: RiemannSystem>(
    system: &S,
    left: &S::State,
    right: &S::State,
) -> Option<Sides<WaveKind>> {
    let fronts = Sides::new(
        system.vacuum_front(left, Side::Left),
        system.vacuum_front(right, Side::Right),
    );
    if let (Some(front_l), Some(front_r)) = (fronts.left, fronts.right) {
        if front_l >= front_r {
            return None;
        }
    }
    Some(fronts.map(|front| match front {
        Some(_) => WaveKind::Rarefaction,
        None => WaveKind::Vacuum,
    }))
}

fn solve_unchecked<S: RiemannSystem>(
    system: &S,
    left: &S::State,
    right: &S::State,
    config: &SolverConfig,
) -> SolverResult<S::State> {
    if let Some(waves) = dry_star_waves(system, left, right) {
        debug!("{}: dry star region, waves {}", system.name(), waves);
        return SolverResult {
            left: *left,
            right: *right,
            star: Sides::uniform(system.vacuum()),
            star_value: 0.0,
            star_velocity: None,
            waves,
            iterations: 0,
            converged: true,
        };
    }

    let x_l = system.wave_variable(left);
    let x_r = system.wave_variable(right);
    let f_l = star_function(system, left, right, x_l);
    let f_r = star_function(system, left, right, x_r);

    let classify = |f: f64| {
        if f > 0.0 {
            WaveKind::Shock
        } else {
            WaveKind::Rarefaction
        }
    };
    let waves = Sides::new(classify(f_l), classify(f_r));
    let x_rr = system.two_rarefaction_estimate(left, right);

    let (x_star, iterations, converged) = match (waves.left, waves.right) {
        (WaveKind::Rarefaction, WaveKind::Rarefaction) => {
            debug!("{}: two rarefactions, closed form x* = {:.6e}", system.name(), x_rr);
            (x_rr, 0, true)
        }
        (WaveKind::Shock, WaveKind::Shock) => {
            let guess = system.two_shock_estimate(left, right);
            debug!("{}: two shocks, initial guess {:.6e}", system.name(), guess);
            newton(system, left, right, guess, x_l.min(x_r), config)
        }
        _ => {
            let guess = system.two_shock_estimate(left, right).min(x_rr);
            debug!(
                "{}: shock/rarefaction {}, initial guess {:.6e}",
                system.name(),
                waves,
                guess
            );
            newton(system, left, right, guess, x_l.min(x_r), config)
        }
    };

    let u_star = system.wave_curve(left, x_star, Side::Left);
    let star = Sides::new(
        system.star_state(left, x_star, u_star, waves.left),
        system.star_state(right, x_star, u_star, waves.right),
    );

    SolverResult {
        left: *left,
        right: *right,
        star,
        star_value: x_star,
        star_velocity: Some(u_star),
        waves,
        iterations,
        converged,
    }
}

/// Newton iteration on f, never stepping below `x_min`.
///
/// Returns (x, iterations, converged). Running out of iterations is logged
/// and the last iterate is returned.
fn newton<S: RiemannSystem>(
    system: &S,
    left: &S::State,
    right: &S::State,
    guess: f64,
    x_min: f64,
    config: &SolverConfig,
) -> (f64, usize, bool) {
    let mut x = guess.max(x_min);

    for iteration in 1..=config.max_iterations {
        let step = star_function(system, left, right, x)
            / star_function_slope(system, left, right, x);
        let x_new = (x - step).max(x_min);
        let change = 0.5 * (x_new - x).abs() / (x_new + x);
        trace!(
            "{}: newton {} x = {:.12e} change = {:.3e}",
            system.name(),
            iteration,
            x_new,
            change
        );
        x = x_new;

        if change < config.tolerance {
            return (x, iteration, true);
        }
    }

    warn!(
        "{}: star state not converged after {} iterations (x = {:.6e})",
        system.name(),
        config.max_iterations,
        x
    );
    (x, config.max_iterations, false)
}
