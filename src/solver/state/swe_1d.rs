//! 1D Shallow water state types.
//!
//! For shallow water equations, we have state (h, hu) where:
//! - h = water depth
//! - hu = momentum (h * velocity)

/// Default dry threshold for the water depth.
pub const SWE_DRY_EPS: f64 = 1e-10;

/// Shallow water state: (h, hu).
///
/// A state is dry when h is below the threshold of the equations it is
/// used with. Dry states carry zero momentum.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SWEState {
    /// Water depth h (must be non-negative)
    pub h: f64,
    /// Momentum hu = h * u
    pub hu: f64,
}

impl SWEState {
    /// Create a new SWE state.
    pub fn new(h: f64, hu: f64) -> Self {
        Self { h, hu }
    }

    /// Create a state from primitive variables (h, u).
    pub fn from_primitives(h: f64, u: f64) -> Self {
        Self { h, hu: h * u }
    }

    /// Velocity u = hu / h, undefined for a dry state.
    pub fn velocity(&self, h_min: f64) -> Option<f64> {
        if self.is_dry(h_min) {
            None
        } else {
            Some(self.hu / self.h)
        }
    }

    /// Check if this state is "dry" (h < h_min).
    pub fn is_dry(&self, h_min: f64) -> bool {
        self.h < h_min
    }

    /// Dry this state in place: zero depth and momentum.
    pub fn set_dry(&mut self) {
        *self = Self::zero();
    }

    /// Create a zero (dry) state.
    pub fn zero() -> Self {
        Self { h: 0.0, hu: 0.0 }
    }

    /// Space-reflected state (x → -x): momentum negated.
    pub fn mirrored(&self) -> Self {
        Self {
            h: self.h,
            hu: -self.hu,
        }
    }

    /// Convert to array representation [h, hu].
    pub fn to_array(&self) -> [f64; 2] {
        [self.h, self.hu]
    }

    /// Create from array representation [h, hu].
    pub fn from_array(arr: [f64; 2]) -> Self {
        Self {
            h: arr[0],
            hu: arr[1],
        }
    }
}
