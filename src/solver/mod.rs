//! Exact Riemann solver.
//!
//! # Submodules
//!
//! - [`state`]: Primitive state types (EulerState, SWEState)
//! - [`config`]: Newton iteration settings
//! - [`exact`]: Star-state solve and wave classification
//! - [`speeds`]: Wave head/tail and contact speeds
//! - [`sampler`]: Self-similar solution at (x, t)
//! - [`problem`]: A solved problem bundled with its speeds, plus profiles
//!
//! The pipeline is `solve` → `compute_speeds` → `sample`, all generic over
//! [`RiemannSystem`](crate::equations::RiemannSystem).

pub mod config;
pub mod exact;
pub mod problem;
pub mod sampler;
pub mod speeds;
pub mod state;

use std::fmt;

pub use config::SolverConfig;
pub use exact::{SolverResult, solve, star_function, star_function_slope};
pub use problem::RiemannProblem;
pub use sampler::{sample, sample_similarity};
pub use speeds::{WaveBounds, WaveSpeeds, compute_speeds};
pub use state::{EULER_VACUUM_EPS, EulerState, SWE_DRY_EPS, SWEState};

/// Kind of a nonlinear wave in the Riemann fan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaveKind {
    /// Continuous expansion fan
    Rarefaction,
    /// Discontinuity satisfying the Rankine-Hugoniot conditions
    Shock,
    /// No wave: the boundary state on this side is itself vacuum
    Vacuum,
}

impl WaveKind {
    /// One-letter tag: R, S or V.
    pub fn tag(&self) -> char {
        match self {
            WaveKind::Rarefaction => 'R',
            WaveKind::Shock => 'S',
            WaveKind::Vacuum => 'V',
        }
    }
}

impl fmt::Display for WaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WaveKind::Rarefaction => "rarefaction",
            WaveKind::Shock => "shock",
            WaveKind::Vacuum => "vacuum",
        };
        f.write_str(name)
    }
}

impl SolverResult<EulerState> {
    /// Star pressure p* (zero when the star region is vacuum).
    pub fn star_pressure(&self) -> f64 {
        self.star_value
    }

    /// Densities left and right of the contact.
    pub fn star_densities(&self) -> crate::types::Sides<f64> {
        self.star.map(|q| q.density)
    }
}

impl SolverResult<SWEState> {
    /// Star depth h* (zero when dry).
    pub fn star_height(&self) -> f64 {
        self.star_value
    }

    /// Star discharge h*u* (zero when dry).
    pub fn star_momentum(&self) -> f64 {
        self.star.left.hu
    }
}
