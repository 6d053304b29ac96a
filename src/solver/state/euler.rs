//! 1D Euler state type.
//!
//! Primitive variables (ρ, u, p). The velocity is `None` exactly when the
//! state is vacuum, and a vacuum state always carries zero density and
//! pressure.

/// Default vacuum threshold for density and pressure.
pub const EULER_VACUUM_EPS: f64 = 1e-14;

/// Gas state in primitive variables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerState {
    /// Density ρ (non-negative)
    pub density: f64,
    /// Velocity u, undefined in vacuum
    pub velocity: Option<f64>,
    /// Pressure p (non-negative)
    pub pressure: f64,
}

impl EulerState {
    /// Create a state from (ρ, u, p).
    ///
    /// Density or pressure in `[0, EULER_VACUUM_EPS)` produces the vacuum
    /// state. Negative values are kept as given so that
    /// [`RiemannSystem::validate`](crate::equations::RiemannSystem::validate)
    /// rejects them.
    pub fn new(density: f64, velocity: f64, pressure: f64) -> Self {
        let below = |v: f64| (0.0..EULER_VACUUM_EPS).contains(&v);
        if (below(density) && pressure >= 0.0) || (below(pressure) && density >= 0.0) {
            return Self::vacuum();
        }
        Self {
            density,
            velocity: Some(velocity),
            pressure,
        }
    }

    /// The vacuum state: ρ = p = 0, velocity undefined.
    pub const fn vacuum() -> Self {
        Self {
            density: 0.0,
            velocity: None,
            pressure: 0.0,
        }
    }

    /// Check if this is a vacuum state.
    #[inline]
    pub fn is_vacuum(&self) -> bool {
        self.velocity.is_none()
    }

    /// Turn this state into vacuum in place.
    pub fn set_vacuum(&mut self) {
        *self = Self::vacuum();
    }

    /// Momentum ρu (zero in vacuum).
    pub fn momentum(&self) -> f64 {
        self.density * self.velocity.unwrap_or(0.0)
    }

    /// Space-reflected state (x → -x): velocity negated.
    pub fn mirrored(&self) -> Self {
        Self {
            velocity: self.velocity.map(|u| -u),
            ..*self
        }
    }
}

impl Default for EulerState {
    fn default() -> Self {
        Self::vacuum()
    }
}
