//! Fixed-step numerical methods
//!
//! This module contains the implementations of the [`Stepper`](crate::solver::Stepper)
//! trait.
//!
//! # Available Steppers
//!
//! ## Explicit Methods
//!
//! - **[`RK4Stepper`]**: Classical fourth-order Runge-Kutta (default)
//!   - Fourth-order accuracy
//!   - 4 function evaluations per step
//!
//! - **[`EulerStepper`]**: Forward Euler
//!   - First-order accuracy
//!   - 1 function evaluation per step
//!   - Baseline for convergence checks
//!
//! # Design Philosophy
//!
//! Each stepper is:
//! - **Stateless**: Can be reused for any number of runs
//! - **Deterministic**: Identical inputs give bit-identical outputs
//! - **Fail-fast**: Rejects invalid step sizes before evaluating the field

pub mod euler;
pub mod rk4;

// Re-exports for convenience
pub use euler::EulerStepper;
pub use rk4::RK4Stepper;
