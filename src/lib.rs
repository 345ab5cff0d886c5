//! lorenz-rs: Lorenz System Integration and Analysis
//!
//! Fixed-step Runge-Kutta integration of the Lorenz equations, twin runs for
//! sensitivity studies, and linear stability analysis of the equilibrium
//! points.
//!
//! # Architecture
//!
//! lorenz-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Vector fields define equations (what to integrate)
//!    - Steppers provide methods (how to advance one step)
//!
//! 2. **Explicit parameters**
//!    - The coefficients {σ, ρ, β} travel as a typed record through every
//!      call; there is no global state
//!    - Every failure is a [`solver::SolverError`], nothing panics
//!
//! # Quick Start
//!
//! ```rust
//! use lorenz_rs::prelude::*;
//!
//! # fn main() -> Result<(), SolverError> {
//! let params = LorenzParameters::classic();
//!
//! // 1. Integrate
//! let trajectory = integrate(&Lorenz, 0.0, 10.0, 0.01, State::new(1.0, 1.0, 1.0), &params)?;
//! println!("{} samples, final state {}", trajectory.len(), trajectory.final_state().unwrap());
//!
//! // 2. Compare two nearby starting points
//! let pair = compare(
//!     &Lorenz,
//!     &IntegrationConfig::new(0.0, 10.0, 0.01),
//!     State::new(1.0, 1.0, 1.0),
//!     State::new(1.01, 1.0, 1.0),
//!     &params,
//! )?;
//! assert_eq!(pair.reference.len(), pair.perturbed.len());
//!
//! // 3. Stability of the equilibria
//! for report in stability(&equilibria(&params), &params)? {
//!     println!("{}: {}", report.equilibrium, report.kind());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: phase-space state and the vector field trait
//! - [`models`]: the Lorenz field and its parameters
//! - [`solver`]: steppers, integrator, comparison driver
//! - [`analysis`]: equilibria, stability, divergence
//! - [`config`]: YAML run files
//! - [`output`]: plots and CSV export

// Core modules
pub mod physics;

pub mod models;
pub mod solver;

pub mod analysis;

// Ambient modules
pub mod config;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use lorenz_rs::prelude::*;
    //! ```
    pub use crate::analysis::{
        equilibria,
        jacobian,
        stability,
        EquilibriumKind,
        StabilityReport,
    };
    pub use crate::models::{Lorenz, LorenzParameters};
    pub use crate::physics::{State, VectorField};
    pub use crate::solver::{
        compare,
        integrate,
        integrate_with,
        EulerStepper,
        IntegrationConfig,
        RK4Stepper,
        SolverError,
        Stepper,
        Trajectory,
        TrajectoryPair,
    };
}
