//! Forward Euler stepper
//!
//! # Mathematical Background
//!
//! The simplest explicit scheme for dy/dt = f(t, y):
//!
//! ```text
//! yₙ₊₁ = yₙ + h * f(tₙ, yₙ)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(h))
//! - **Complexity**: 1 function evaluation per step
//!
//! # When to Use
//!
//! - Reference baseline when checking the convergence order of RK4
//! - Quick exploratory runs with relaxed accuracy requirements
//!
//! On the Lorenz attractor Euler needs a much smaller step than RK4 to stay
//! on the attractor; prefer [`RK4Stepper`](crate::solver::RK4Stepper).

use crate::physics::{State, VectorField};
use crate::solver::traits::validate_step_size;
use crate::solver::{SolverError, Stepper};

/// Forward Euler stepper
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerStepper;

impl EulerStepper {
    /// Create a new forward Euler stepper
    pub fn new() -> Self {
        Self
    }
}

impl Stepper for EulerStepper {
    fn step<F: VectorField>(
        &self,
        field: &F,
        t: f64,
        state: &State,
        h: f64,
        parameters: &F::Parameters,
    ) -> Result<State, SolverError> {
        validate_step_size(h)?;

        let slope = field.derivative(t, state, parameters);
        Ok(*state + slope * h)
    }

    fn order(&self) -> u32 {
        1
    }

    fn evaluations_per_step(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}
