//! # riemann-rs
//!
//! Exact Riemann solvers for one-dimensional hyperbolic conservation laws.
//!
//! This crate provides:
//! - Ideal-gas Euler equations and shallow water equations behind a common
//!   [`RiemannSystem`] trait
//! - Star-state solve by Newton iteration, with closed forms for two
//!   rarefactions and for vacuum
//! - Wave speeds with an entropy check, and sampling of the self-similar
//!   solution at any (x, t)
//! - Godunov, HLL and Lax-Friedrichs interface fluxes
//! - Phase-plane wave curves and Rankine-Hugoniot diagnostics
//!
//! # Example
//!
//! ```
//! use riemann_rs::{Euler1D, EulerState, RiemannProblem, WaveKind};
//!
//! let sod = RiemannProblem::new(
//!     Euler1D::air(),
//!     EulerState::new(1.0, 0.0, 1.0),
//!     EulerState::new(0.125, 0.0, 0.1),
//! )
//! .unwrap();
//!
//! assert_eq!(sod.speeds().right.kind, WaveKind::Shock);
//! let q = sod.state_at(0.2, 0.2);
//! assert!((q.pressure - 0.30313).abs() < 1e-4);
//! ```

pub mod analysis;
pub mod equations;
pub mod error;
pub mod flux;
pub mod solver;
pub mod types;

// Re-export main types for convenience
pub use analysis::{Locus, LocusPoint, compute_locus};
pub use equations::{Euler1D, RiemannSystem, ShallowWater1D};
pub use error::{Result, RiemannError};
pub use flux::{godunov_flux, hll_flux, lax_friedrichs_flux};
pub use solver::{
    EulerState, RiemannProblem, SWEState, SolverConfig, SolverResult, WaveBounds, WaveKind,
    WaveSpeeds, compute_speeds, sample, solve,
};
pub use types::{Side, Sides};
