//! A solved Riemann problem with its wave speeds.
//!
//! [`RiemannProblem`] runs the full pipeline once on construction and then
//! answers point, profile and fan queries at any time. Editing a boundary
//! state produces a new problem; the solution is never stale.

use super::{SolverConfig, SolverResult, WaveKind, WaveSpeeds, compute_speeds, sample, solve};
use crate::equations::RiemannSystem;
use crate::error::Result;
use crate::types::{Side, Sides};

/// Riemann problem for `S`, solved at construction.
///
/// # Example
///
/// ```
/// use riemann_rs::equations::ShallowWater1D;
/// use riemann_rs::solver::{RiemannProblem, state::SWEState};
///
/// let dam = RiemannProblem::new(
///     ShallowWater1D::normalized(),
///     SWEState::new(1.0, 0.0),
///     SWEState::new(0.1, 0.0),
/// )
/// .unwrap();
///
/// let profile = dam.uniform_profile(-1.0, 1.0, 200, 0.5);
/// assert_eq!(profile.len(), 201);
/// ```
#[derive(Clone, Debug)]
pub struct RiemannProblem<S: RiemannSystem> {
    system: S,
    config: SolverConfig,
    result: SolverResult<S::State>,
    speeds: WaveSpeeds,
}

impl<S: RiemannSystem> RiemannProblem<S> {
    /// Solve with the default [`SolverConfig`].
    pub fn new(system: S, left: S::State, right: S::State) -> Result<Self> {
        Self::with_config(system, left, right, SolverConfig::default())
    }

    /// Solve with explicit solver settings.
    pub fn with_config(
        system: S,
        left: S::State,
        right: S::State,
        config: SolverConfig,
    ) -> Result<Self> {
        let result = solve(&system, &left, &right, &config)?;
        let speeds = compute_speeds(&system, &result);
        Ok(Self {
            system,
            config,
            result,
            speeds,
        })
    }

    /// Re-solve with a new left state.
    pub fn with_left(&self, left: S::State) -> Result<Self> {
        Self::with_config(self.system.clone(), left, self.result.right, self.config)
    }

    /// Re-solve with a new right state.
    pub fn with_right(&self, right: S::State) -> Result<Self> {
        Self::with_config(self.system.clone(), self.result.left, right, self.config)
    }

    /// The problem reflected in space: x → -x, left and right exchanged.
    pub fn mirrored(&self) -> Result<Self> {
        let reflected = Sides::new(self.result.left, self.result.right)
            .swapped()
            .map(|q| self.system.mirrored(&q));
        Self::with_config(
            self.system.clone(),
            reflected.left,
            reflected.right,
            self.config,
        )
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn result(&self) -> &SolverResult<S::State> {
        &self.result
    }

    pub fn speeds(&self) -> &WaveSpeeds {
        &self.speeds
    }

    /// Boundary state on `side`.
    pub fn boundary(&self, side: Side) -> &S::State {
        self.result.boundary(side)
    }

    /// State at (x, t).
    pub fn state_at(&self, x: f64, t: f64) -> S::State {
        sample(&self.system, &self.result, &self.speeds, x, t)
    }

    /// States at each position in `xs` at time `t`.
    pub fn profile(&self, xs: &[f64], t: f64) -> Vec<S::State> {
        xs.iter().map(|&x| self.state_at(x, t)).collect()
    }

    /// Parallel version of [`profile`](Self::profile).
    #[cfg(feature = "parallel")]
    pub fn profile_parallel(&self, xs: &[f64], t: f64) -> Vec<S::State> {
        use rayon::prelude::*;

        xs.par_iter().map(|&x| self.state_at(x, t)).collect()
    }

    /// `n + 1` equally spaced samples on [x_min, x_max] at time `t`.
    pub fn uniform_profile(
        &self,
        x_min: f64,
        x_max: f64,
        n: usize,
        t: f64,
    ) -> Vec<(f64, S::State)> {
        let n = n.max(1);
        let dx = (x_max - x_min) / n as f64;
        (0..=n)
            .map(|i| {
                let x = x_min + i as f64 * dx;
                (x, self.state_at(x, t))
            })
            .collect()
    }

    /// Positions of all wave edges at time `t`, left to right.
    pub fn wave_positions(&self, t: f64) -> Vec<f64> {
        self.speeds.as_vec().into_iter().map(|s| s * t).collect()
    }

    /// Characteristic speeds of the local state at (x, t), `None` in vacuum.
    pub fn eigenvalues_at(&self, x: f64, t: f64) -> Option<Vec<f64>> {
        self.system.eigenvalues(&self.state_at(x, t))
    }

    /// `n + 1` samples across the rarefaction fan on `side`, head to tail.
    ///
    /// Empty unless that wave is a rarefaction and t > 0.
    pub fn fan_profile(&self, side: Side, t: f64, n: usize) -> Vec<(f64, S::State)> {
        let wave = self.speeds.wave(side);
        if wave.kind != WaveKind::Rarefaction || t <= 0.0 {
            return Vec::new();
        }
        let n = n.max(1);
        let boundary = self.result.boundary(side);
        let dxi = (wave.tail - wave.head) / n as f64;
        (0..=n)
            .map(|i| {
                let xi = wave.head + i as f64 * dxi;
                (xi * t, self.system.fan_state(boundary, xi, side))
            })
            .collect()
    }
}
