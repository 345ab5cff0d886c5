//! Numerical integration
//!
//! This module advances a [`VectorField`](crate::physics::VectorField) in time.
//! It knows nothing about the Lorenz equations: any field works with any
//! stepper.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Field** (`VectorField`) - WHAT to integrate
//!    - Right-hand side f(t, y; p)
//!    - Parameter record p, passed explicitly on every call
//!
//! 2. **Configuration** (`IntegrationConfig`) - the time grid
//!    - Interval `[t0, t_end]`
//!    - Fixed step `h`
//!
//! 3. **Stepper** (`Stepper` trait) - HOW to advance one step
//!    - `RK4Stepper` (default), `EulerStepper`
//!
//! 4. **Drivers** - loop over the grid
//!    - [`integrate`] / [`integrate_with`]: one trajectory
//!    - [`compare`] / [`compare_with`]: two trajectories from nearby initial
//!      states on the same grid
//!
//! # Module Organization
//!
//! - **`traits`**: `Stepper`, `IntegrationConfig`, `Trajectory`
//! - **`error`**: `SolverError`
//! - **`methods`**: stepper implementations
//! - **`integrator`**: fixed-grid integration loop
//! - **`comparison`**: twin runs for sensitivity studies
//!
//! # Quick Start Example
//!
//! ```rust
//! use lorenz_rs::models::{Lorenz, LorenzParameters};
//! use lorenz_rs::physics::State;
//! use lorenz_rs::solver::{integrate_with, IntegrationConfig, RK4Stepper};
//!
//! let config = IntegrationConfig::new(0.0, 2.0, 0.01);
//! let trajectory = integrate_with(
//!     &RK4Stepper,
//!     &Lorenz,
//!     &config,
//!     State::new(1.0, 1.0, 1.0),
//!     &LorenzParameters::classic(),
//! )?;
//!
//! println!("{} samples, final state {}", trajectory.len(), trajectory.final_state().unwrap());
//! # Ok::<(), lorenz_rs::solver::SolverError>(())
//! ```
//!
//! # Error Handling
//!
//! Every driver returns `Result<_, SolverError>`:
//!
//! - `InvalidStepSize`: `h` is zero, negative or not finite
//! - `InvalidInterval`: `t_end <= t0`
//! - `InvalidConfiguration`: the grid needs more than [`MAX_STEPS`] steps
//! - `NumericOverflow`: a state component became NaN or infinite; no partial
//!   trajectory is returned
//!
//! # Time Step Selection
//!
//! Rule of thumb for the Lorenz system with RK4:
//! - `h = 0.01` is accurate over the whole attractor
//! - `h` around `0.05` still runs, but trajectories separate from the
//!   reference much earlier
//! - large steps (`h >= 0.5`) leave the stability region and overflow

// =================================================================================================
// Module Declarations
// =================================================================================================

mod error;
mod methods;
mod traits;

pub mod comparison;
pub mod integrator;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use error::SolverError;

pub use traits::{IntegrationConfig, Stepper, Trajectory, MAX_STEPS};

pub use methods::{EulerStepper, RK4Stepper};

pub use comparison::{compare, compare_with, TrajectoryPair};
pub use integrator::{integrate, integrate_with};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::physics::State;

/// Validate a state for numerical issues
///
/// NaN arises from undefined operations (0/0, Inf - Inf), infinity from
/// overflow. Either one ends the run.
///
/// # Arguments
///
/// * `state` - State to validate
/// * `step` - Index of the sample (0 for the initial condition)
/// * `time` - Time of the sample
///
/// # Example
///
/// ```rust,ignore
/// validate_state(&state, 42, 0.42)?;  // Validates sample 42
/// ```
pub(crate) fn validate_state(state: &State, step: usize, time: f64) -> Result<(), SolverError> {
    if state.is_finite() {
        return Ok(());
    }

    log::warn!(
        "non-finite state {} at step {} (t = {}), aborting integration",
        state,
        step,
        time
    );

    Err(SolverError::NumericOverflow {
        step,
        time,
        state: *state,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
