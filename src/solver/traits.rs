//! Numerical stepper traits and types
//!
//! # Design Philosophy
//!
//! - `Stepper`: advances one state by one fixed step (the numerical method)
//! - `IntegrationConfig`: the fixed time grid (t0, t_end, h) of a run
//! - `Trajectory`: the full time/state record produced by a run, with
//!   string metadata for extensibility
//!
//! The parameters of the vector field are never part of the configuration:
//! they are passed explicitly alongside it, so a configuration can be reused
//! across parameter sweeps.

use crate::physics::{State, VectorField};
use crate::solver::SolverError;
use std::collections::HashMap;

/// Relative slack applied before rounding the step count up
///
/// `(50.0 - 0.0) / 0.01` evaluates to `5000.000000000001` in binary floating
/// point; without the slack `ceil` would add a spurious extra step.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Largest number of steps a single run may take
///
/// A trajectory stores `n + 1` samples of 32 bytes each, so the cap bounds a
/// run at about 3.2 GB.
pub const MAX_STEPS: usize = 100_000_000;

// =================================================================================================
// Stepper Trait
// =================================================================================================

/// Trait for fixed-step, single-step time integration methods
///
/// # Responsibility
/// Computes `y(t + h)` from `y(t)` using evaluations of a vector field.
/// Does NOT loop over time (that's the integrator's job).
///
/// # Contract
/// - `h` must be finite and strictly positive, otherwise
///   [`SolverError::InvalidStepSize`] is returned before any evaluation
/// - deterministic: identical inputs give bit-identical outputs
pub trait Stepper: Send + Sync {

    /// Advance `state` from `t` to `t + h`
    fn step<F: VectorField>(
        &self,
        field: &F,
        t: f64,
        state: &State,
        h: f64,
        parameters: &F::Parameters,
    ) -> Result<State, SolverError>;

    /// Global order of accuracy
    fn order(&self) -> u32;

    /// Number of vector field evaluations per step
    fn evaluations_per_step(&self) -> usize;

    /// Name of the method (used to display and logging)
    fn name(&self) -> &'static str;
}

/// Fail fast on step sizes that would make a fixed-step loop meaningless
pub(crate) fn validate_step_size(h: f64) -> Result<(), SolverError> {
    if !h.is_finite() || h <= 0.0 {
        return Err(SolverError::InvalidStepSize { step: h });
    }
    Ok(())
}

// =================================================================================================
// Integration configuration
// =================================================================================================

/// Fixed time grid of an integration run
///
/// # Step count convention
///
/// `n = ceil((t_end - t0) / step)`. Every step advances by exactly `step`,
/// so the last sample sits at `t0 + n * step`, which may exceed `t_end` by
/// less than one step. The trajectory has `n + 1` samples.
///
/// # Example
///
/// ```rust
/// use lorenz_rs::solver::IntegrationConfig;
///
/// let config = IntegrationConfig::new(0.0, 1.0, 0.3);
/// assert_eq!(config.step_count().unwrap(), 4);
/// assert!((config.final_time().unwrap() - 1.2).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Initial time
    pub t0: f64,

    /// Terminal time (reached or overshot by less than one step)
    pub t_end: f64,

    /// Fixed step size h
    pub step: f64,
}

impl IntegrationConfig {
    /// Create a configuration (not validated until used)
    pub fn new(t0: f64, t_end: f64, step: f64) -> Self {
        Self { t0, t_end, step }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SolverError> {
        validate_step_size(self.step)?;

        if !self.t0.is_finite() || !self.t_end.is_finite() || self.t_end <= self.t0 {
            return Err(SolverError::InvalidInterval { t0: self.t0, t_end: self.t_end });
        }

        Ok(())
    }

    /// Number of steps `n = ceil((t_end - t0) / step * (1 - 1e-9))`, at least 1
    ///
    /// The relative slack absorbs binary rounding of the ratio. As a
    /// consequence a `t_end` exceeding a grid point by less than that slack
    /// is not reached: the last sample then lies just short of `t_end`.
    ///
    /// # Errors
    ///
    /// Any error of [`validate`](Self::validate), and
    /// [`SolverError::InvalidConfiguration`] when the count is not finite or
    /// exceeds [`MAX_STEPS`].
    pub fn step_count(&self) -> Result<usize, SolverError> {
        self.validate()?;

        let ratio = (self.t_end - self.t0) / self.step;
        let steps = (ratio * (1.0 - STEP_COUNT_TOLERANCE)).ceil();

        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(SolverError::InvalidConfiguration {
                reason: format!(
                    "[{}, {}] with step {} needs {:e} steps, more than the limit of {}",
                    self.t0, self.t_end, self.step, steps, MAX_STEPS
                ),
            });
        }

        Ok((steps as usize).max(1))
    }

    /// Time of the last sample, `t0 + n * step`
    pub fn final_time(&self) -> Result<f64, SolverError> {
        let steps = self.step_count()?;
        Ok(self.time_at(steps))
    }

    /// Time of sample `index`, computed from the index to avoid drift
    pub fn time_at(&self, index: usize) -> f64 {
        self.t0 + (index as f64) * self.step
    }
}

impl Default for IntegrationConfig {
    /// `[0, 50]` with `h = 0.01`
    fn default() -> Self {
        Self::new(0.0, 50.0, 0.01)
    }
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Result of one integration run
///
/// Samples are stored in increasing time order; the first sample is exactly
/// the initial condition. Owned by the caller and never mutated by the solver
/// after it is returned.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// Sample times t0, t0 + h, ..., t0 + n h
    pub time_points: Vec<f64>,

    /// States at the sample times
    pub states: Vec<State>,

    /// Free-form run information (stepper, step count, ...)
    pub metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Create a trajectory from matching time and state sequences
    pub fn new(time_points: Vec<f64>, states: Vec<State>) -> Self {
        debug_assert_eq!(time_points.len(), states.len());
        Self {
            time_points,
            states,
            metadata: HashMap::new(),
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when there are no samples
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// First sample `(t0, y0)`
    pub fn initial(&self) -> Option<(f64, State)> {
        Some((*self.time_points.first()?, *self.states.first()?))
    }

    /// Last sample
    pub fn last(&self) -> Option<(f64, State)> {
        Some((*self.time_points.last()?, *self.states.last()?))
    }

    /// Last state
    pub fn final_state(&self) -> Option<&State> {
        self.states.last()
    }

    /// Iterate over `(time, state)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, &State)> + '_ {
        self.time_points.iter().copied().zip(self.states.iter())
    }

    /// x component series
    pub fn xs(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.x).collect()
    }

    /// y component series
    pub fn ys(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.y).collect()
    }

    /// z component series
    pub fn zs(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.z).collect()
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
