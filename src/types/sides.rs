//! Left/right side types with named fields.
//!
//! A Riemann problem always has exactly two sides. These types replace
//! positional `[left, right]` arrays so that the two can never be swapped by
//! accident.

use std::fmt;

/// One side of the initial discontinuity at x = 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// x < 0, connected to the star region by the 1-wave.
    Left,
    /// x > 0, connected to the star region by the last wave (2-wave or 3-wave).
    Right,
}

impl Side {
    /// Orientation of the side: -1 for left, +1 for right.
    ///
    /// Wave curves leave the left state with velocity decreasing in the
    /// pressure (or depth) and the right state with velocity increasing.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A pair of values, one per side.
///
/// # Example
///
/// ```
/// use riemann_rs::types::{Side, Sides};
///
/// let densities = Sides::new(1.0, 0.125);
/// assert_eq!(densities[Side::Left], 1.0);
/// assert_eq!(densities.swapped().left, 0.125);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sides<T> {
    /// Value on the left (x < 0)
    pub left: T,
    /// Value on the right (x > 0)
    pub right: T,
}

impl<T> Sides<T> {
    /// Create a pair from explicit left and right values.
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// Same value on both sides.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            left: value.clone(),
            right: value,
        }
    }

    /// Map a function over both sides.
    pub fn map<U, F>(self, mut f: F) -> Sides<U>
    where
        F: FnMut(T) -> U,
    {
        Sides {
            left: f(self.left),
            right: f(self.right),
        }
    }

    /// Exchange left and right.
    pub fn swapped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Get a reference to one side.
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Convert to array [left, right].
    pub fn to_array(self) -> [T; 2] {
        [self.left, self.right]
    }

    /// Iterate over values in order: left, right.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.left, &self.right].into_iter()
    }
}

impl<T> std::ops::Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T: fmt::Display> fmt::Display for Sides<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L:{} R:{}", self.left, self.right)
    }
}

impl<T> From<[T; 2]> for Sides<T> {
    fn from([left, right]: [T; 2]) -> Self {
        Self { left, right }
    }
}

impl<T> From<Sides<T>> for [T; 2] {
    fn from(sides: Sides<T>) -> Self {
        sides.to_array()
    }
}
