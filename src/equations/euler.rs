//! 1D Euler equations of gas dynamics.
//!
//! ∂ρ/∂t + ∂(ρu)/∂x = 0
//! ∂(ρu)/∂t + ∂(ρu² + p)/∂x = 0
//! ∂E/∂t + ∂(u(E + p))/∂x = 0
//!
//! closed by the ideal gas law E = p/(γ-1) + ρu²/2.
//!
//! Wave curves follow Toro, "Riemann Solvers and Numerical Methods for Fluid
//! Dynamics", chapter 4.

use super::RiemannSystem;
use crate::error::{Result, RiemannError};
use crate::solver::WaveKind;
use crate::solver::state::{EULER_VACUUM_EPS, EulerState};
use crate::types::Side;

/// Ideal-gas Euler equations with adiabatic exponent γ.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euler1D {
    /// Ratio of specific heats γ (must be > 1)
    pub gamma: f64,
}

impl Euler1D {
    /// Create Euler equations with the given γ.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if γ ≤ 1. Use [`Euler1D::try_new`] for user input.
    pub fn new(gamma: f64) -> Self {
        debug_assert!(gamma > 1.0, "gamma must be greater than 1, got {}", gamma);
        Self { gamma }
    }

    /// Create Euler equations, rejecting γ ≤ 1 or non-finite γ.
    pub fn try_new(gamma: f64) -> Result<Self> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(RiemannError::invalid_parameter(
                "gamma",
                gamma,
                "must be finite and greater than 1",
            ));
        }
        Ok(Self { gamma })
    }

    /// Diatomic ideal gas (γ = 1.4).
    pub fn air() -> Self {
        Self::new(1.4)
    }

    /// (γ - 1) / (2γ), the exponent of the isentropic pressure ratio.
    #[inline]
    fn z(&self) -> f64 {
        (self.gamma - 1.0) / (2.0 * self.gamma)
    }

    /// Unwrapped sound speed for non-vacuum states.
    #[inline]
    fn c(&self, q: &EulerState) -> f64 {
        (self.gamma * q.pressure / q.density).sqrt()
    }

    /// Total energy per unit volume.
    pub fn total_energy(&self, q: &EulerState) -> f64 {
        match q.velocity {
            Some(u) => q.pressure / (self.gamma - 1.0) + 0.5 * q.density * u * u,
            None => 0.0,
        }
    }
}

impl Default for Euler1D {
    fn default() -> Self {
        Self::air()
    }
}

impl RiemannSystem for Euler1D {
    type State = EulerState;

    const N_WAVES: usize = 3;

    fn name(&self) -> &'static str {
        "euler-1d"
    }

    fn validate(&self, q: &EulerState, side: Side) -> Result<()> {
        RiemannError::check_non_negative(side, "density", q.density)?;
        RiemannError::check_non_negative(side, "pressure", q.pressure)?;
        match q.velocity {
            Some(u) => {
                RiemannError::check_finite(side, "velocity", u)?;
                if q.density == 0.0 || q.pressure == 0.0 {
                    return Err(RiemannError::DegenerateState {
                        side,
                        reason: "a state with a velocity needs positive density and pressure",
                    });
                }
            }
            None if q.density != 0.0 || q.pressure != 0.0 => {
                return Err(RiemannError::DegenerateState {
                    side,
                    reason: "a vacuum state must have zero density and pressure",
                });
            }
            None => {}
        }
        Ok(())
    }

    fn vacuum(&self) -> EulerState {
        EulerState::vacuum()
    }

    fn is_vacuum(&self, q: &EulerState) -> bool {
        q.is_vacuum()
    }

    fn velocity(&self, q: &EulerState) -> Option<f64> {
        q.velocity
    }

    fn wave_variable(&self, q: &EulerState) -> f64 {
        q.pressure
    }

    fn sound_speed(&self, q: &EulerState) -> Option<f64> {
        if q.is_vacuum() {
            None
        } else {
            Some(self.c(q))
        }
    }

    fn eigenvalues(&self, q: &EulerState) -> Option<Vec<f64>> {
        let u = q.velocity?;
        let c = self.c(q);
        // λ₁ = u - c, λ₂ = u, λ₃ = u + c
        Some(vec![u - c, u, u + c])
    }

    fn vacuum_velocity_jump(&self, q: &EulerState) -> f64 {
        2.0 * self.c(q) / (self.gamma - 1.0)
    }

    fn rarefaction_curve(&self, q: &EulerState, x: f64) -> f64 {
        // φ = 2c/(γ-1) [(x/p)^z - 1]
        self.vacuum_velocity_jump(q) * ((x / q.pressure).powf(self.z()) - 1.0)
    }

    fn rarefaction_slope(&self, q: &EulerState, x: f64) -> f64 {
        let g = self.gamma;
        (x / q.pressure).powf(-(g + 1.0) / (2.0 * g)) / (q.density * self.c(q))
    }

    fn shock_curve(&self, q: &EulerState, x: f64) -> f64 {
        let g = self.gamma;
        let a = 2.0 / ((g + 1.0) * q.density);
        let b = (g - 1.0) / (g + 1.0) * q.pressure;
        (x - q.pressure) * (a / (x + b)).sqrt()
    }

    fn shock_slope(&self, q: &EulerState, x: f64) -> f64 {
        let g = self.gamma;
        let a = 2.0 / ((g + 1.0) * q.density);
        let b = (g - 1.0) / (g + 1.0) * q.pressure;
        (a / (x + b)).sqrt() * (1.0 - 0.5 * (x - q.pressure) / (x + b))
    }

    fn two_rarefaction_estimate(&self, left: &EulerState, right: &EulerState) -> f64 {
        let z = self.z();
        let (c_l, c_r) = (self.c(left), self.c(right));
        let (u_l, u_r) = (left.velocity.unwrap_or(0.0), right.velocity.unwrap_or(0.0));
        let num = c_l + c_r - 0.5 * (self.gamma - 1.0) * (u_r - u_l);
        let den = c_l / left.pressure.powf(z) + c_r / right.pressure.powf(z);
        (num / den).powf(1.0 / z)
    }

    fn two_shock_estimate(&self, left: &EulerState, right: &EulerState) -> f64 {
        let (u_l, u_r) = (left.velocity.unwrap_or(0.0), right.velocity.unwrap_or(0.0));
        let inv_sqrt_rho = 1.0 / left.density.sqrt() + 1.0 / right.density.sqrt();
        let p_avg = (left.pressure / left.density.sqrt() + right.pressure / right.density.sqrt())
            / inv_sqrt_rho;
        let du = (self.gamma + 1.0).sqrt() * (u_l - u_r) / inv_sqrt_rho;
        let root = du + (du * du + 8.0 * p_avg).sqrt();
        root * root / 8.0
    }

    fn star_state(&self, q: &EulerState, x_star: f64, u_star: f64, kind: WaveKind) -> EulerState {
        let ratio = x_star / q.pressure;
        let density = match kind {
            WaveKind::Vacuum => return EulerState::vacuum(),
            // Isentrope
            WaveKind::Rarefaction => q.density * ratio.powf(1.0 / self.gamma),
            // Hugoniot density ratio
            WaveKind::Shock => {
                let alpha = (self.gamma - 1.0) / (self.gamma + 1.0);
                q.density * (ratio + alpha) / (ratio * alpha + 1.0)
            }
        };
        if density < EULER_VACUUM_EPS || x_star < EULER_VACUUM_EPS {
            return EulerState::vacuum();
        }
        EulerState {
            density,
            velocity: Some(u_star),
            pressure: x_star,
        }
    }

    fn shock_speed(&self, q: &EulerState, x_star: f64, side: Side) -> f64 {
        let g = self.gamma;
        let u = q.velocity.unwrap_or(0.0);
        let mach = ((g + 1.0) / (2.0 * g) * x_star / q.pressure + (g - 1.0) / (2.0 * g)).sqrt();
        u + side.sign() * self.c(q) * mach
    }

    fn fan_state(&self, q: &EulerState, xi: f64, side: Side) -> EulerState {
        let g = self.gamma;
        let s = side.sign();
        let u = q.velocity.unwrap_or(0.0);
        let c = self.c(q);

        let base = (2.0 / (g + 1.0) - s * (g - 1.0) / ((g + 1.0) * c) * (u - xi)).max(0.0);
        if base == 0.0 {
            return EulerState::vacuum();
        }
        let velocity = 2.0 / (g + 1.0) * (-s * c + 0.5 * (g - 1.0) * u + xi);
        EulerState {
            density: q.density * base.powf(2.0 / (g - 1.0)),
            velocity: Some(velocity),
            pressure: q.pressure * base.powf(2.0 * g / (g - 1.0)),
        }
    }

    fn mirrored(&self, q: &EulerState) -> EulerState {
        q.mirrored()
    }

    fn conserved(&self, q: &EulerState) -> Vec<f64> {
        vec![q.density, q.momentum(), self.total_energy(q)]
    }

    fn from_conserved(&self, u: &[f64]) -> EulerState {
        debug_assert_eq!(u.len(), 3, "expected [ρ, ρu, E]");
        let [density, momentum, energy] = [u[0], u[1], u[2]];
        if density < EULER_VACUUM_EPS {
            return EulerState::vacuum();
        }
        let velocity = momentum / density;
        let pressure = (self.gamma - 1.0) * (energy - 0.5 * momentum * velocity);
        // Round-off can leave a slightly negative pressure near vacuum
        if pressure < EULER_VACUUM_EPS {
            return EulerState::vacuum();
        }
        EulerState::new(density, velocity, pressure)
    }

    fn flux(&self, q: &EulerState) -> Vec<f64> {
        let Some(u) = q.velocity else {
            return vec![0.0; 3];
        };
        let e = self.total_energy(q);
        // f = [ρu, ρu² + p, u(E + p)]
        vec![q.density * u, q.density * u * u + q.pressure, u * (e + q.pressure)]
    }
}
