//! Phase space and vector fields
//!
//! This module provides the two building blocks every integration works on:
//!
//! - **State**: a point (x, y, z) of the phase space, with vector arithmetic
//! - **VectorField**: the right-hand side f(t, y; p) of dy/dt = f(t, y; p)
//!
//! # Architecture
//!
//! Vector fields are **separate from numerical steppers**:
//! - The field provides the **equations** (physics)
//! - The stepper provides the **method** to advance them (numerics)
//!
//! This separation allows:
//! - Same field with different steppers (Euler, Runge-Kutta)
//! - Same stepper with different fields (Lorenz, test fields with known solutions)
//!
//! # Implementing a New Field
//!
//! ```rust
//! use lorenz_rs::physics::{State, VectorField};
//!
//! /// Uniform drift dy/dt = v
//! struct Drift;
//!
//! impl VectorField for Drift {
//!     type Parameters = State;
//!
//!     fn derivative(&self, _t: f64, _state: &State, velocity: &State) -> State {
//!         *velocity
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Drift"
//!     }
//! }
//! ```
//!
//! # Available Fields
//!
//! - **Lorenz**: see [`crate::models::Lorenz`]

// module declaration
pub mod state;
pub mod traits;

// re-export commonly used types for convenience
pub use state::State;
pub use traits::VectorField;
