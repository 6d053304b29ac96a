//! Phase-plane and conservation diagnostics for Riemann solutions.
//!
//! - [`loci`]: integral curves and Hugoniot loci through a state, sampled for
//!   plotting in the (pressure or depth, velocity) plane
//! - [`conservation`]: Rankine-Hugoniot residuals across the waves of a
//!   solved problem
//!
//! # Example
//!
//! ```
//! use riemann_rs::analysis::compute_locus;
//! use riemann_rs::equations::Euler1D;
//! use riemann_rs::solver::state::EulerState;
//! use riemann_rs::types::Side;
//!
//! let euler = Euler1D::air();
//! let q = EulerState::new(1.0, 0.0, 1.0);
//! let locus = compute_locus(&euler, &q, Side::Left, 3.0, 50, true);
//!
//! // Admissible branches meet at the state itself
//! let last = locus.integral.last().unwrap();
//! assert!((last.value - 1.0).abs() < 1e-12);
//! assert!((locus.hugoniot[0].value - 1.0).abs() < 1e-12);
//! ```

pub mod conservation;
pub mod loci;

pub use conservation::{contact_residual, jump_residual, wave_residuals};
pub use loci::{Locus, LocusPoint, compute_locus, densified};
