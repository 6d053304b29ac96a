//! Numerical fluxes at an interface between two states.
//!
//! - [`godunov_flux`]: flux of the exact Riemann solution at ξ = 0
//! - [`hll_flux`]: two-wave HLL average bounded by the exact wave speeds
//! - [`lax_friedrichs_flux`]: local Lax-Friedrichs (Rusanov) flux
//!
//! All fluxes are generic over [`RiemannSystem`](crate::equations::RiemannSystem)
//! and return the flux vector in the order of
//! [`RiemannSystem::conserved`](crate::equations::RiemannSystem::conserved).

mod godunov;
mod hll;
mod lax_friedrichs;

pub use godunov::godunov_flux;
pub use hll::hll_flux;
pub use lax_friedrichs::lax_friedrichs_flux;
