//! Vector field trait
//!
//! This module defines the core API between the equations and the numerics:
//! - `VectorField`: trait for all right-hand sides dy/dt = f(t, y; p)

use crate::physics::State;

// ==================================================================================================
// Vector Field Trait
// =================================================================================================

/// Trait for right-hand sides of autonomous or time-dependent ODE systems
///
/// # Responsibility
/// Evaluates the derivative of the system at a given time and state.
/// Does NOT integrate it (that's the Stepper's job).
///
/// The field provides the "physics" (equations), the stepper provides
/// the "numerics" (method to advance them).
///
/// # Parameters
///
/// The coefficients of the field travel as an explicit, typed record through
/// every call (`Self::Parameters`). A field value holds no coefficients of its
/// own, so the same field can be evaluated for many parameter sets without
/// rebuilding it.
///
/// # Example
///
/// ```rust
/// use lorenz_rs::physics::{State, VectorField};
///
/// struct Decay;
///
/// impl VectorField for Decay {
///     type Parameters = f64;
///
///     fn derivative(&self, _t: f64, state: &State, k: &f64) -> State {
///         *state * -*k
///     }
///
///     fn name(&self) -> &str {
///         "Decay"
///     }
/// }
///
/// let d = Decay.derivative(0.0, &State::new(1.0, 2.0, 3.0), &0.5);
/// assert_eq!(d, State::new(-0.5, -1.0, -1.5));
/// ```
pub trait VectorField: Send + Sync {

    /// Coefficients of the field (constant during one integration run)
    type Parameters: Copy + Send + Sync;

    /// Computes dy/dt at `(t, state)` for the given parameters
    ///
    /// # Note
    /// Must be pure: no side effects, no hidden state. Non-finite inputs
    /// propagate arithmetically; detecting them is the integrator's job.
    fn derivative(&self, t: f64, state: &State, parameters: &Self::Parameters) -> State;

    /// Name of the field (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the field (option)
    fn description(&self) -> Option<&str> {
        None
    }
}
