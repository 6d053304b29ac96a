//! 1D Shallow Water Equations.
//!
//! The 1D shallow water equations (Saint-Venant equations) over a flat bed:
//!
//! ∂h/∂t + ∂(hu)/∂x = 0                    (mass conservation)
//! ∂(hu)/∂t + ∂(hu² + gh²/2)/∂x = 0        (momentum conservation)
//!
//! where:
//! - h = water depth
//! - u = velocity
//! - hu = momentum
//! - g = gravitational acceleration
//!
//! There is no contact wave: the Riemann fan is a 1-wave and a 2-wave around
//! a single star state (h*, u*). The depth plays the role the pressure plays
//! for gas dynamics.

use super::RiemannSystem;
use crate::error::{Result, RiemannError};
use crate::solver::WaveKind;
use crate::solver::state::{SWE_DRY_EPS, SWEState};
use crate::types::Side;

/// 1D Shallow Water Equations.
///
/// State vector: q = [h, hu]
/// Flux: f(q) = [hu, hu²/h + gh²/2]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShallowWater1D {
    /// Gravitational acceleration (default 9.81 m/s²)
    pub g: f64,
    /// Depth below which a state is dry (default 1e-10)
    pub h_min: f64,
}

impl ShallowWater1D {
    /// Create shallow water equations with the given gravity.
    pub fn new(g: f64) -> Self {
        debug_assert!(g > 0.0, "gravity must be positive, got {}", g);
        Self {
            g,
            h_min: SWE_DRY_EPS,
        }
    }

    /// Create shallow water equations, rejecting non-positive gravity or threshold.
    pub fn try_new(g: f64, h_min: f64) -> Result<Self> {
        if !g.is_finite() || g <= 0.0 {
            return Err(RiemannError::invalid_parameter(
                "g",
                g,
                "must be finite and positive",
            ));
        }
        if !h_min.is_finite() || h_min <= 0.0 {
            return Err(RiemannError::invalid_parameter(
                "h_min",
                h_min,
                "must be finite and positive",
            ));
        }
        Ok(Self { g, h_min })
    }

    /// Standard gravity (9.81 m/s²).
    pub fn standard() -> Self {
        Self::new(9.81)
    }

    /// Gravity-normalized equations (g = 1), so that c = sqrt(h).
    pub fn normalized() -> Self {
        Self::new(1.0)
    }

    /// Compute wave celerity c = sqrt(gh).
    pub fn celerity(&self, h: f64) -> f64 {
        (self.g * h.max(0.0)).sqrt()
    }

    /// Froude number Fr = |u| / c, zero for dry states.
    pub fn froude(&self, q: &SWEState) -> f64 {
        match q.velocity(self.h_min) {
            Some(u) => u.abs() / self.celerity(q.h),
            None => 0.0,
        }
    }

    #[inline]
    fn u(&self, q: &SWEState) -> f64 {
        q.velocity(self.h_min).unwrap_or(0.0)
    }
}

impl Default for ShallowWater1D {
    fn default() -> Self {
        Self::standard()
    }
}

impl RiemannSystem for ShallowWater1D {
    type State = SWEState;

    const N_WAVES: usize = 2;

    fn name(&self) -> &'static str {
        "shallow-water-1d"
    }

    fn validate(&self, q: &SWEState, side: Side) -> Result<()> {
        RiemannError::check_non_negative(side, "depth", q.h)?;
        RiemannError::check_finite(side, "momentum", q.hu)?;
        if q.is_dry(self.h_min) && q.hu != 0.0 {
            return Err(RiemannError::DegenerateState {
                side,
                reason: "a dry state must have zero momentum",
            });
        }
        Ok(())
    }

    fn vacuum(&self) -> SWEState {
        SWEState::zero()
    }

    fn is_vacuum(&self, q: &SWEState) -> bool {
        q.is_dry(self.h_min)
    }

    fn velocity(&self, q: &SWEState) -> Option<f64> {
        q.velocity(self.h_min)
    }

    fn wave_variable(&self, q: &SWEState) -> f64 {
        q.h
    }

    fn sound_speed(&self, q: &SWEState) -> Option<f64> {
        if self.is_vacuum(q) {
            None
        } else {
            Some(self.celerity(q.h))
        }
    }

    fn eigenvalues(&self, q: &SWEState) -> Option<Vec<f64>> {
        let u = q.velocity(self.h_min)?;
        let c = self.celerity(q.h);
        // λ₁ = u - c, λ₂ = u + c
        Some(vec![u - c, u + c])
    }

    fn vacuum_velocity_jump(&self, q: &SWEState) -> f64 {
        2.0 * self.celerity(q.h)
    }

    fn rarefaction_curve(&self, q: &SWEState, x: f64) -> f64 {
        2.0 * (self.celerity(x) - self.celerity(q.h))
    }

    fn rarefaction_slope(&self, _q: &SWEState, x: f64) -> f64 {
        (self.g / x).sqrt()
    }

    fn shock_curve(&self, q: &SWEState, x: f64) -> f64 {
        (x - q.h) * (0.5 * self.g * (x + q.h) / (x * q.h)).sqrt()
    }

    fn shock_slope(&self, q: &SWEState, x: f64) -> f64 {
        let s = (0.5 * self.g * (x + q.h) / (x * q.h)).sqrt();
        // s² = g/2 (1/h + 1/x)  =>  ds/dx = -g / (4 x² s)
        s - (x - q.h) * self.g / (4.0 * x * x * s)
    }

    fn two_rarefaction_estimate(&self, left: &SWEState, right: &SWEState) -> f64 {
        let du = self.u(left) - self.u(right);
        let c_sum = self.celerity(left.h) + self.celerity(right.h);
        let root = du + 2.0 * c_sum;
        root * root / (16.0 * self.g)
    }

    fn two_shock_estimate(&self, left: &SWEState, right: &SWEState) -> f64 {
        // Toro's two-shock depth, linearized about the two-rarefaction depth
        let h0 = self.two_rarefaction_estimate(left, right).max(self.h_min);
        let g_k = |h_k: f64| (0.5 * self.g * (h0 + h_k) / (h0 * h_k)).sqrt();
        let (g_l, g_r) = (g_k(left.h), g_k(right.h));
        (g_l * left.h + g_r * right.h + self.u(left) - self.u(right)) / (g_l + g_r)
    }

    fn star_state(&self, _q: &SWEState, x_star: f64, u_star: f64, kind: WaveKind) -> SWEState {
        match kind {
            WaveKind::Rarefaction | WaveKind::Shock if x_star >= self.h_min => {
                SWEState::from_primitives(x_star, u_star)
            }
            _ => SWEState::zero(),
        }
    }

    fn shock_speed(&self, q: &SWEState, x_star: f64, side: Side) -> f64 {
        let speed = (0.5 * self.g * x_star * (1.0 + x_star / q.h)).sqrt();
        self.u(q) + side.sign() * speed
    }

    fn fan_state(&self, q: &SWEState, xi: f64, side: Side) -> SWEState {
        let s = side.sign();
        let u = self.u(q);
        let c_q = self.celerity(q.h);

        // Riemann invariant u ∓ 2c is carried through the fan
        let c = ((-s * u + 2.0 * c_q + s * xi) / 3.0).max(0.0);
        let h = c * c / self.g;
        if h < self.h_min {
            return SWEState::zero();
        }
        let velocity = (u - s * 2.0 * c_q + 2.0 * xi) / 3.0;
        SWEState::from_primitives(h, velocity)
    }

    fn mirrored(&self, q: &SWEState) -> SWEState {
        q.mirrored()
    }

    fn conserved(&self, q: &SWEState) -> Vec<f64> {
        if self.is_vacuum(q) {
            return vec![0.0, 0.0];
        }
        q.to_array().to_vec()
    }

    fn from_conserved(&self, u: &[f64]) -> SWEState {
        debug_assert_eq!(u.len(), 2, "expected [h, hu]");
        let q = SWEState::new(u[0], u[1]);
        if self.is_vacuum(&q) {
            SWEState::zero()
        } else {
            q
        }
    }

    fn flux(&self, q: &SWEState) -> Vec<f64> {
        let h = q.h;

        // Handle dry cells
        if h < self.h_min {
            return vec![0.0, 0.0];
        }

        let u = q.hu / h;

        // f = [hu, hu² / h + g h² / 2]
        vec![q.hu, q.hu * u + 0.5 * self.g * h * h]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_shallow_water_creation() {
        let swe = ShallowWater1D::standard();
        assert!((swe.g - 9.81).abs() < TOL);
        assert!((swe.h_min - 1e-10).abs() < TOL);
        assert!((ShallowWater1D::normalized().g - 1.0).abs() < TOL);
    }

    #[test]
    fn test_try_new_rejects_bad_parameters() {
        assert!(ShallowWater1D::try_new(0.0, 1e-10).is_err());
        assert!(ShallowWater1D::try_new(-9.81, 1e-10).is_err());
        assert!(ShallowWater1D::try_new(9.81, 0.0).is_err());
        assert!(ShallowWater1D::try_new(9.81, 1e-8).is_ok());
    }

    #[test]
    fn test_validate_dry_state() {
        let swe = ShallowWater1D::normalized();
        assert!(swe.validate(&SWEState::zero(), Side::Left).is_ok());
        assert!(swe.validate(&SWEState::new(1e-12, 0.0), Side::Left).is_ok());
        assert!(matches!(
            swe.validate(&SWEState::new(1e-12, 5.0), Side::Right),
            Err(RiemannError::DegenerateState {
                side: Side::Right,
                ..
            })
        ));
        assert!(swe.validate(&SWEState::new(-0.1, 0.0), Side::Left).is_err());
        // Dry cells coming back from a finite-volume update are normalized
        assert_eq!(swe.from_conserved(&[1e-12, 5.0]), SWEState::zero());
    }

    #[test]
    fn test_flux_still_water() {
        let swe = ShallowWater1D::new(10.0);

        // Still water: h = 2, u = 0, hu = 0
        let flux = swe.flux(&SWEState::new(2.0, 0.0));

        // f = [hu, hu²/h + gh²/2] = [0, 0 + 10 * 4 / 2] = [0, 20]
        assert!(flux[0].abs() < TOL);
        assert!((flux[1] - 20.0).abs() < TOL);
    }

    #[test]
    fn test_flux_moving_water() {
        let swe = ShallowWater1D::new(10.0);

        // h = 2, u = 3, hu = 6
        let flux = swe.flux(&SWEState::new(2.0, 6.0));

        // f = [6, 36/2 + 10*4/2] = [6, 38]
        assert!((flux[0] - 6.0).abs() < TOL);
        assert!((flux[1] - 38.0).abs() < TOL);
    }

    #[test]
    fn test_flux_dry_cell() {
        let swe = ShallowWater1D::new(10.0);
        let flux = swe.flux(&SWEState::new(1e-12, 1e-12));
        assert!(flux[0].abs() < TOL);
        assert!(flux[1].abs() < TOL);
    }

    #[test]
    fn test_eigenvalues() {
        let swe = ShallowWater1D::new(10.0);

        // h = 1, u = 2, c = sqrt(10)
        let eigs = swe.eigenvalues(&SWEState::new(1.0, 2.0)).unwrap();

        let c = (10.0_f64).sqrt();
        assert!((eigs[0] - (2.0 - c)).abs() < TOL);
        assert!((eigs[1] - (2.0 + c)).abs() < TOL);
        assert_eq!(swe.eigenvalues(&SWEState::zero()), None);
    }

    #[test]
    fn test_froude_number() {
        let swe = ShallowWater1D::new(10.0);

        // h = 10, u = 1, c = 10, Fr = 0.1
        assert!((swe.froude(&SWEState::new(10.0, 10.0)) - 0.1).abs() < TOL);
        // h = 0.1, u = 10, c = 1, Fr = 10
        assert!(swe.is_supersonic(&SWEState::new(0.1, 1.0)));
        assert_eq!(swe.froude(&SWEState::zero()), 0.0);
    }

    #[test]
    fn test_celerity() {
        let swe = ShallowWater1D::new(10.0);
        let expected = (10.0 * 2.5_f64).sqrt();
        assert!((swe.celerity(2.5) - expected).abs() < TOL);

        // Negative depth should be treated as zero
        assert!(swe.celerity(-1.0).abs() < TOL);
    }

    #[test]
    fn test_two_rarefaction_estimate_normalized() {
        // g = 1: h* = (u_L - u_R + 2(√h_L + √h_R))² / 16
        let swe = ShallowWater1D::normalized();
        let l = SWEState::from_primitives(4.0, -1.0);
        let r = SWEState::from_primitives(1.0, 1.0);
        let expected = (-2.0_f64 + 2.0 * 3.0).powi(2) / 16.0;
        assert!((swe.two_rarefaction_estimate(&l, &r) - expected).abs() < TOL);
    }

    #[test]
    fn test_fan_state_ritter_profile() {
        // Dam break onto a dry bed: h = (2c_L - ξ)² / (9g)
        let swe = ShallowWater1D::new(9.81);
        let q = SWEState::new(2.0, 0.0);
        let c_l = swe.celerity(2.0);
        for xi in [-c_l, -0.5 * c_l, 0.0, c_l] {
            let s = swe.fan_state(&q, xi, Side::Left);
            let h = (2.0 * c_l - xi).powi(2) / (9.0 * 9.81);
            let u = 2.0 / 3.0 * (xi + c_l);
            assert!((s.h - h).abs() < 1e-10, "xi={xi}: h={} vs {h}", s.h);
            assert!((s.velocity(swe.h_min).unwrap() - u).abs() < 1e-10);
        }
        assert_eq!(swe.fan_state(&q, 2.0 * c_l + 1e-6, Side::Left), SWEState::zero());
    }

    #[test]
    fn test_shock_speed_conserves_mass() {
        // Rankine-Hugoniot for mass: s (h* - h) = h* u* - h u
        let swe = ShallowWater1D::new(9.81);
        let q = SWEState::new(0.5, 0.0);
        let h_star = 1.2;
        let u_star = swe.wave_curve(&q, h_star, Side::Right);
        let s = swe.shock_speed(&q, h_star, Side::Right);
        let lhs = s * (h_star - q.h);
        let rhs = h_star * u_star - q.hu;
        assert!((lhs - rhs).abs() < 1e-10, "{lhs} vs {rhs}");
    }
}
