//! Wave speeds of a solved Riemann problem.
//!
//! Each nonlinear wave is described by its head (the edge facing the
//! boundary state) and its tail (the edge facing the contact). A shock has
//! head == tail. Across the whole fan the speeds are ordered
//!
//! left.head ≤ left.tail ≤ contact ≤ right.tail ≤ right.head

use log::debug;

use super::{SolverResult, WaveKind};
use crate::equations::RiemannSystem;
use crate::types::Side;

/// Speeds bounding one nonlinear wave.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveBounds {
    /// Edge adjacent to the boundary state
    pub head: f64,
    /// Edge adjacent to the star region
    pub tail: f64,
    /// Kind of the wave after the entropy check
    pub kind: WaveKind,
}

impl WaveBounds {
    fn collapsed(speed: f64, kind: WaveKind) -> Self {
        Self {
            head: speed,
            tail: speed,
            kind,
        }
    }

    /// Whether the wave is a rarefaction fan.
    pub fn is_fan(&self) -> bool {
        self.kind == WaveKind::Rarefaction
    }
}

/// All characteristic speeds of the self-similar solution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveSpeeds {
    pub left: WaveBounds,
    /// Contact speed (u* for Euler, the single star velocity for shallow water)
    pub contact: f64,
    pub right: WaveBounds,
    has_contact: bool,
}

impl WaveSpeeds {
    /// Speeds in increasing order.
    ///
    /// Euler: [left head, left tail, contact, right tail, right head].
    /// Shallow water: [left head, left tail, right tail, right head].
    pub fn as_vec(&self) -> Vec<f64> {
        let mut speeds = vec![self.left.head, self.left.tail];
        if self.has_contact {
            speeds.push(self.contact);
        }
        speeds.push(self.right.tail);
        speeds.push(self.right.head);
        speeds
    }

    /// Bounds of the wave on `side`.
    pub fn wave(&self, side: Side) -> &WaveBounds {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Whether all speeds are ordered left to right.
    pub fn is_ordered(&self) -> bool {
        let left = self.left;
        let right = self.right;
        left.head <= left.tail
            && left.tail <= self.contact
            && self.contact <= right.tail
            && right.tail <= right.head
    }
}

/// Compute head, tail and contact speeds from a solver result.
///
/// Rarefactions whose head would overtake their tail are replaced by a shock
/// moving at the Rankine-Hugoniot speed. Vacuum sides collapse onto the
/// vacuum front of the opposite state.
pub fn compute_speeds<S: RiemannSystem>(
    system: &S,
    result: &SolverResult<S::State>,
) -> WaveSpeeds {
    let has_contact = S::N_WAVES == 3;
    let front_l = system.vacuum_front(&result.left, Side::Left);
    let front_r = system.vacuum_front(&result.right, Side::Right);

    let (left, contact, right) = match (front_l, front_r, result.star_velocity) {
        (None, None, _) => {
            let still = WaveBounds::collapsed(0.0, WaveKind::Vacuum);
            (still, 0.0, still)
        }
        (None, Some(front), _) => (
            WaveBounds::collapsed(front, WaveKind::Vacuum),
            front,
            fan_into_vacuum(system, &result.right, front, Side::Right),
        ),
        (Some(front), None, _) => (
            fan_into_vacuum(system, &result.left, front, Side::Left),
            front,
            WaveBounds::collapsed(front, WaveKind::Vacuum),
        ),
        (Some(front_l), Some(front_r), None) => (
            fan_into_vacuum(system, &result.left, front_l, Side::Left),
            0.5 * (front_l + front_r),
            fan_into_vacuum(system, &result.right, front_r, Side::Right),
        ),
        (Some(_), Some(_), Some(u_star)) => (
            wave_bounds(system, result, Side::Left),
            u_star,
            wave_bounds(system, result, Side::Right),
        ),
    };

    WaveSpeeds {
        left,
        contact,
        right,
        has_contact,
    }
}

/// Outermost characteristic of `q` on `side`: u - c on the left, u + c on the right.
fn outer_characteristic<S: RiemannSystem>(system: &S, q: &S::State, side: Side) -> Option<f64> {
    let (lo, hi) = system.characteristic_bounds(q)?;
    Some(match side {
        Side::Left => lo,
        Side::Right => hi,
    })
}

fn fan_into_vacuum<S: RiemannSystem>(
    system: &S,
    q: &S::State,
    front: f64,
    side: Side,
) -> WaveBounds {
    WaveBounds {
        head: outer_characteristic(system, q, side).unwrap_or(front),
        tail: front,
        kind: WaveKind::Rarefaction,
    }
}

fn wave_bounds<S: RiemannSystem>(
    system: &S,
    result: &SolverResult<S::State>,
    side: Side,
) -> WaveBounds {
    let boundary = result.boundary(side);
    let kind = result.waves[side];
    let head = outer_characteristic(system, boundary, side);
    let tail = outer_characteristic(system, &result.star[side], side);

    if kind == WaveKind::Rarefaction {
        match (head, tail) {
            // The head must stay on the boundary side of the tail
            (Some(head), Some(tail)) if side.sign() * (head - tail) >= 0.0 => {
                return WaveBounds { head, tail, kind };
            }
            // Star state below the vacuum threshold: the fan ends at the contact
            (Some(head), None) => {
                let tail = result.star_velocity.unwrap_or(head);
                return WaveBounds { head, tail, kind };
            }
            _ => {}
        }
    }

    let speed = system.shock_speed(boundary, result.star_value, side);
    if kind != WaveKind::Shock {
        debug!(
            "{}: {side} rarefaction head overtakes tail, using shock speed {:.6e}",
            system.name(),
            speed
        );
    }
    WaveBounds::collapsed(speed, WaveKind::Shock)
}
