//! Lorenz system
//!
//! ```text
//! dx/dt = σ (y − x)
//! dy/dt = x (ρ − z) − y
//! dz/dt = x y − β z
//! ```
//!
//! A three-variable truncation of Rayleigh-Bénard convection. For the
//! classic coefficients σ = 10, ρ = 28, β = 8/3 trajectories settle on the
//! butterfly-shaped strange attractor; for ρ < 1 every trajectory decays to
//! the origin.
//!
//! # Example
//!
//! ```rust
//! use lorenz_rs::models::{Lorenz, LorenzParameters};
//! use lorenz_rs::physics::{State, VectorField};
//!
//! let parameters = LorenzParameters::default();
//! let d = Lorenz.derivative(0.0, &State::new(1.0, 1.0, 1.0), &parameters);
//!
//! assert_eq!(d.x, 0.0);
//! assert_eq!(d.y, 26.0);
//! assert!((d.z - (1.0 - 8.0 / 3.0)).abs() < 1e-15);
//! ```

use crate::physics::{State, VectorField};
use crate::solver::SolverError;
use serde::Deserialize;

// =================================================================================================
// Parameters
// =================================================================================================

/// Coefficients {σ, ρ, β} of the Lorenz field
///
/// Passed by value through the field, the stepper and the integrator; never
/// stored globally.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LorenzParameters {
    /// Prandtl number σ
    pub sigma: f64,

    /// Normalised Rayleigh number ρ
    pub rho: f64,

    /// Geometric factor β
    pub beta: f64,
}

impl LorenzParameters {
    /// Create a parameter set
    pub const fn new(sigma: f64, rho: f64, beta: f64) -> Self {
        Self { sigma, rho, beta }
    }

    /// σ = 10, ρ = 28, β = 8/3 (chaotic regime)
    pub const fn classic() -> Self {
        Self::new(10.0, 28.0, 8.0 / 3.0)
    }

    /// Same σ and β with another ρ
    pub const fn with_rho(self, rho: f64) -> Self {
        Self { rho, ..self }
    }

    /// Validate that all coefficients are finite
    ///
    /// The field itself accepts any real; this check is for run files and
    /// analyses where a NaN coefficient can only be a mistake.
    pub fn validate(&self) -> Result<(), SolverError> {
        for (name, value) in [("sigma", self.sigma), ("rho", self.rho), ("beta", self.beta)] {
            if !value.is_finite() {
                return Err(SolverError::InvalidParameters {
                    reason: format!("{} = {} is not finite", name, value),
                });
            }
        }
        Ok(())
    }
}

impl Default for LorenzParameters {
    fn default() -> Self {
        Self::classic()
    }
}

// =================================================================================================
// Vector field
// =================================================================================================

/// Lorenz right-hand side
#[derive(Debug, Clone, Copy, Default)]
pub struct Lorenz;

impl VectorField for Lorenz {
    type Parameters = LorenzParameters;

    fn derivative(&self, _t: f64, state: &State, p: &LorenzParameters) -> State {
        let State { x, y, z } = *state;

        State::new(
            p.sigma * (y - x),
            x * (p.rho - z) - y,
            x * y - p.beta * z,
        )
    }

    fn name(&self) -> &str {
        "Lorenz"
    }

    fn description(&self) -> Option<&str> {
        Some("dx = σ(y − x), dy = x(ρ − z) − y, dz = xy − βz")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
