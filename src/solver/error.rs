//! Solver error taxonomy
//!
//! Every failure of the numerical kernel is reported synchronously as a
//! [`SolverError`]; nothing in the library panics on bad input.

use crate::physics::State;
use thiserror::Error;

/// Errors raised by the integrator, the steppers and the stability analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Step size is zero, negative or not finite
    #[error("invalid step size {step}: the step must be a finite positive number")]
    InvalidStepSize { step: f64 },

    /// Integration interval is empty, reversed or not finite
    #[error("invalid interval [{t0}, {t_end}]: t_end must be finite and greater than t0")]
    InvalidInterval { t0: f64, t_end: f64 },

    /// A state component became NaN or infinite
    #[error(
        "non-finite state {state} at step {step} (t = {time}). This indicates numerical \
         overflow; try reducing the step size or check the parameters"
    )]
    NumericOverflow { step: usize, time: f64, state: State },

    /// The dense eigenvalue computation did not converge
    #[error("eigenvalue computation failed: {reason}")]
    EigenSolverFailure { reason: String },

    /// Field coefficients are not usable
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// A run configuration is inconsistent or could not be read
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Two trajectories compared sample by sample do not share a time grid
    #[error("trajectories are not on the same time grid: {reason}")]
    GridMismatch { reason: String },
}
