//! State types for the two gas/fluid models.
//!
//! States are plain `Copy` values in primitive form. The equations in
//! [`crate::equations`] interpret them (sound speed, eigenvalues, vacuum test).

mod euler;
mod swe_1d;

pub use euler::{EULER_VACUUM_EPS, EulerState};
pub use swe_1d::{SWE_DRY_EPS, SWEState};
