//! Mock vector fields for testing
//!
//! These fields have known analytical solutions, making them
//! ideal for validating stepper accuracy.

#![allow(dead_code)]

use lorenz_rs::physics::{State, VectorField};

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Exponential decay of every component: dy/dt = -k*y
///
/// Analytical solution: y(t) = y₀ * exp(-k*t)
///
/// The decay rate k is the field parameter.
pub struct ExponentialDecay;

impl ExponentialDecay {
    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: State, decay_rate: f64) -> State {
        y0 * (-decay_rate * t).exp()
    }
}

impl VectorField for ExponentialDecay {
    type Parameters = f64;

    fn derivative(&self, _t: f64, state: &State, decay_rate: &f64) -> State {
        *state * -decay_rate
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Constant Growth: dy/dt = c
// =================================================================================================

/// Constant growth: dy/dt = c
///
/// Analytical solution: y(t) = y₀ + c*t
///
/// Euler is exact for this problem, RK4 should also be exact.
pub struct ConstantGrowth;

impl ConstantGrowth {
    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: State, velocity: State) -> State {
        y0 + velocity * t
    }
}

impl VectorField for ConstantGrowth {
    type Parameters = State;

    fn derivative(&self, _t: f64, _state: &State, velocity: &State) -> State {
        *velocity
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}

// =================================================================================================
// Harmonic Oscillator: x'' = -ω²x
// =================================================================================================

/// Harmonic oscillator written as a first-order system
///
/// x is the position, y the velocity, z stays constant:
///
/// ```text
/// dx/dt = y
/// dy/dt = -ω² x
/// dz/dt = 0
/// ```
///
/// The angular frequency ω is the field parameter.
pub struct HarmonicOscillator;

impl HarmonicOscillator {
    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: State, omega: f64) -> State {
        let (sin, cos) = (omega * t).sin_cos();
        State::new(
            y0.x * cos + y0.y / omega * sin,
            -y0.x * omega * sin + y0.y * cos,
            y0.z,
        )
    }

    /// Conserved energy ½(v² + ω²x²)
    pub fn energy(&self, state: &State, omega: f64) -> f64 {
        0.5 * (state.y * state.y + omega * omega * state.x * state.x)
    }
}

impl VectorField for HarmonicOscillator {
    type Parameters = f64;

    fn derivative(&self, _t: f64, state: &State, omega: &f64) -> State {
        State::new(state.y, -omega * omega * state.x, 0.0)
    }

    fn name(&self) -> &str {
        "Harmonic Oscillator"
    }
}
