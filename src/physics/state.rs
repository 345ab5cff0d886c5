//! Phase-space state
//!
//! A point (x, y, z) of the three-dimensional phase space. States are small
//! `Copy` values: every integration step produces a new one and never mutates
//! the previous state.

use nalgebra::Vector3;
use serde::Deserialize;
use std::fmt;

/// Point in phase space
///
/// Supports the vector-space operations the Runge-Kutta stages need
/// (`+`, `-`, scalar `*`) so that a stage reads like its formula:
///
/// ```rust
/// use lorenz_rs::physics::State;
///
/// let y = State::new(1.0, 1.0, 1.0);
/// let k = State::new(0.0, 26.0, -1.666);
/// let stage = y + k * 0.005;
/// assert!((stage.y - 1.13).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct State {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl State {

    // ======================================= constructors =======================================

    /// Create a state from its three components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin (0, 0, 0)
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create from a nalgebra vector
    pub fn from_vector(vector: &Vector3<f64>) -> Self {
        Self::new(vector[0], vector[1], vector[2])
    }

    // ========================================== Queries ==========================================

    /// Components as an array `[x, y, z]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Components as a nalgebra column vector
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// True when no component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to another state
    pub fn distance(&self, other: &State) -> f64 {
        (*self - *other).norm()
    }

    /// Largest absolute component
    pub fn max_abs(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

impl From<[f64; 3]> for State {
    fn from(components: [f64; 3]) -> Self {
        Self::new(components[0], components[1], components[2])
    }
}

impl From<State> for [f64; 3] {
    fn from(state: State) -> Self {
        state.to_array()
    }
}

impl From<Vector3<f64>> for State {
    fn from(vector: Vector3<f64>) -> Self {
        Self::from_vector(&vector)
    }
}

// ================================== Simple arithmetic functions ==================================

impl std::ops::Add for State {
    type Output = State;
    fn add(self, rhs: Self) -> Self::Output {
        State::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for State {
    type Output = State;
    fn sub(self, rhs: Self) -> Self::Output {
        State::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Neg for State {
    type Output = State;
    fn neg(self) -> Self::Output {
        State::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Mul<f64> for State {
    type Output = State;
    fn mul(self, scalar: f64) -> Self::Output {
        State::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Mul<State> for f64 {
    type Output = State;
    fn mul(self, rhs: State) -> Self::Output {
        rhs * self
    }
}

// ======================== Display ============================

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z, p = p),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

// ==================== Tests ====================
