//! Strongly-typed domain types for safer APIs.
//!
//! The Riemann problem is two-sided everywhere: boundary states, wave kinds,
//! star densities. [`Sides`] gives each side a named field so that the left
//! and right values are never confused by position.

mod sides;

pub use sides::{Side, Sides};
