//! Fixed-grid time integration
//!
//! Drives a [`Stepper`] across `[t0, t_end]` and records every sample.
//!
//! # Algorithm
//!
//! 1. Validate the grid (`h > 0`, `t_end > t0`) and the initial state
//! 2. `n = ceil((t_end - t0) / h)` steps, storage reserved for `n + 1` samples
//! 3. Store `(t0, y0)` untouched
//! 4. For each step i: `y_{i+1} = step(t_i, y_i, h)`, `t_{i+1} = t0 + (i+1) h`,
//!    stop with [`SolverError::NumericOverflow`] on the first non-finite state
//!
//! Each step depends on the previous state; the loop is strictly sequential.

use crate::physics::{State, VectorField};
use crate::solver::{validate_state, IntegrationConfig, RK4Stepper, SolverError, Stepper, Trajectory};

/// Integrate with the classical RK4 stepper
///
/// # Arguments
///
/// * `field` - Right-hand side f(t, y; p)
/// * `t0` - Initial time
/// * `t_end` - Terminal time (must be greater than `t0`)
/// * `h` - Fixed step size (must be positive)
/// * `y0` - Initial state, stored as the first sample without modification
/// * `parameters` - Coefficients of the field, constant for the run
///
/// # Errors
///
/// - [`SolverError::InvalidStepSize`] when `h` is not a finite positive number
/// - [`SolverError::InvalidInterval`] when `t_end <= t0`
/// - [`SolverError::InvalidConfiguration`] when the grid needs more than
///   [`MAX_STEPS`](crate::solver::MAX_STEPS) steps
/// - [`SolverError::NumericOverflow`] when a state becomes NaN or infinite
///
/// # Example
///
/// ```rust
/// use lorenz_rs::models::{Lorenz, LorenzParameters};
/// use lorenz_rs::physics::State;
/// use lorenz_rs::solver::integrate;
///
/// let y0 = State::new(1.0, 1.0, 1.0);
/// let trajectory = integrate(&Lorenz, 0.0, 1.0, 0.01, y0, &LorenzParameters::default())?;
///
/// assert_eq!(trajectory.len(), 101);
/// assert_eq!(trajectory.initial(), Some((0.0, y0)));
/// # Ok::<(), lorenz_rs::solver::SolverError>(())
/// ```
pub fn integrate<F: VectorField>(
    field: &F,
    t0: f64,
    t_end: f64,
    h: f64,
    y0: State,
    parameters: &F::Parameters,
) -> Result<Trajectory, SolverError> {
    let config = IntegrationConfig::new(t0, t_end, h);
    integrate_with(&RK4Stepper, field, &config, y0, parameters)
}

/// Integrate with an explicit stepper and configuration
///
/// Same contract as [`integrate`]; the stepper name, step count, step size
/// and number of field evaluations are recorded in the trajectory metadata.
pub fn integrate_with<S: Stepper, F: VectorField>(
    stepper: &S,
    field: &F,
    config: &IntegrationConfig,
    y0: State,
    parameters: &F::Parameters,
) -> Result<Trajectory, SolverError> {

    // ====== Step 1: Validation ======

    let time_steps = config.step_count()?;
    validate_state(&y0, 0, config.t0)?;

    log::debug!(
        "{}: integrating {} over [{}, {}] with h = {} ({} steps)",
        stepper.name(),
        field.name(),
        config.t0,
        config.t_end,
        config.step,
        time_steps
    );

    // ====== Step 2: Setup ======

    let samples = time_steps.checked_add(1).ok_or_else(|| SolverError::InvalidConfiguration {
        reason: format!("{} steps cannot be stored", time_steps),
    })?;

    let mut time_points = Vec::with_capacity(samples);
    let mut states = Vec::with_capacity(samples);

    time_points.push(config.t0);
    states.push(y0);

    // ====== Step 3: Time Integration ======

    let mut state = y0;

    for step in 0..time_steps {
        let t = config.time_at(step);

        state = stepper.step(field, t, &state, config.step, parameters)?;

        // Times come from the index, never from repeated additions of h
        let t_next = config.time_at(step + 1);
        validate_state(&state, step + 1, t_next)?;

        time_points.push(t_next);
        states.push(state);
    }

    // ====== Step 4: Build Result ======

    let mut trajectory = Trajectory::new(time_points, states);

    trajectory.add_metadata("stepper", stepper.name());
    trajectory.add_metadata("field", field.name());
    trajectory.add_metadata("time steps", &time_steps.to_string());
    trajectory.add_metadata("dt", &config.step.to_string());
    trajectory.add_metadata(
        "function evaluations",
        &(stepper.evaluations_per_step() * time_steps).to_string(),
    );

    log::debug!(
        "{}: finished at t = {} with state {}",
        stepper.name(),
        config.time_at(time_steps),
        state
    );

    Ok(trajectory)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lorenz, LorenzParameters};
    use crate::solver::EulerStepper;

    /// dy/dt = c
    struct ConstantGrowth;

    impl VectorField for ConstantGrowth {
        type Parameters = f64;

        fn derivative(&self, _t: f64, _state: &State, c: &f64) -> State {
            State::new(*c, *c, *c)
        }

        fn name(&self) -> &str {
            "Constant Growth"
        }
    }

    /// Blows up to infinity after the first stage
    struct Explosive;

    impl VectorField for Explosive {
        type Parameters = ();

        fn derivative(&self, _t: f64, _state: &State, _: &()) -> State {
            State::new(f64::INFINITY, 0.0, 0.0)
        }

        fn name(&self) -> &str {
            "Explosive"
        }
    }

    /// Produces NaN
    struct NaNField;

    impl VectorField for NaNField {
        type Parameters = ();

        fn derivative(&self, _t: f64, _state: &State, _: &()) -> State {
            State::new(0.0, f64::NAN, 0.0)
        }

        fn name(&self) -> &str {
            "NaN Field"
        }
    }

    #[test]
    fn test_first_sample_is_initial_condition() {
        let y0 = State::new(0.1, -0.2, 0.3);
        let trajectory = integrate(&Lorenz, 2.5, 3.0, 0.01, y0, &LorenzParameters::classic()).unwrap();

        let (t, y) = trajectory.initial().unwrap();
        assert_eq!(t.to_bits(), 2.5_f64.to_bits());
        assert_eq!(y, y0);
    }

    #[test]
    fn test_trajectory_length_and_grid() {
        let trajectory = integrate(&ConstantGrowth, 0.0, 10.0, 0.1, State::origin(), &1.0).unwrap();

        assert_eq!(trajectory.len(), 101);
        assert_eq!(trajectory.time_points.len(), 101);

        for (i, t) in trajectory.time_points.iter().enumerate() {
            assert_eq!(*t, i as f64 * 0.1);
        }
        assert!((trajectory.last().unwrap().0 - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_final_time_may_overshoot_by_less_than_one_step() {
        let trajectory = integrate(&ConstantGrowth, 0.0, 1.0, 0.3, State::origin(), &1.0).unwrap();

        assert_eq!(trajectory.len(), 5);
        let (t_last, y_last) = trajectory.last().unwrap();
        assert!(t_last > 1.0 && t_last < 1.3);
        assert!((y_last.x - t_last).abs() < 1e-12);
    }

    #[test]
    fn test_constant_growth_is_exact() {
        let trajectory = integrate(&ConstantGrowth, 0.0, 5.0, 0.5, State::origin(), &2.0).unwrap();
        let final_state = trajectory.final_state().unwrap();
        assert!((final_state.x - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_invalid_step() {
        for h in [0.0, -0.01] {
            let result = integrate(&Lorenz, 0.0, 1.0, h, State::origin(), &LorenzParameters::classic());
            assert!(matches!(result, Err(SolverError::InvalidStepSize { .. })));
        }
    }

    #[test]
    fn test_rejects_invalid_interval() {
        let result = integrate(&Lorenz, 1.0, 1.0, 0.01, State::origin(), &LorenzParameters::classic());
        assert!(matches!(result, Err(SolverError::InvalidInterval { .. })));

        let result = integrate(&Lorenz, 2.0, 1.0, 0.01, State::origin(), &LorenzParameters::classic());
        assert_eq!(result, Err(SolverError::InvalidInterval { t0: 2.0, t_end: 1.0 }));
    }

    #[test]
    fn test_detects_infinity() {
        let result = integrate(&Explosive, 0.0, 1.0, 0.1, State::origin(), &());
        match result {
            Err(SolverError::NumericOverflow { step, time, state }) => {
                assert_eq!(step, 1);
                assert!((time - 0.1).abs() < 1e-15);
                assert!(!state.is_finite());
            }
            other => panic!("expected NumericOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_detects_nan() {
        let result = integrate(&NaNField, 0.0, 1.0, 0.1, State::origin(), &());
        assert!(matches!(result, Err(SolverError::NumericOverflow { step: 1, .. })));
    }

    #[test]
    fn test_rejects_non_finite_initial_state() {
        let y0 = State::new(f64::NAN, 1.0, 1.0);
        let result = integrate(&Lorenz, 0.0, 1.0, 0.1, y0, &LorenzParameters::classic());
        assert!(matches!(result, Err(SolverError::NumericOverflow { step: 0, .. })));
    }

    #[test]
    fn test_huge_step_count_is_an_error() {
        let y0 = State::new(1.0, 1.0, 1.0);
        let p = LorenzParameters::classic();

        let result = integrate(&Lorenz, 0.0, 1e300, 1e-300, y0, &p);
        assert!(matches!(result, Err(SolverError::InvalidConfiguration { .. })));

        let result = integrate(&Lorenz, 0.0, 1e12, 1e-3, y0, &p);
        assert!(matches!(result, Err(SolverError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_lorenz_overflow_with_huge_step() {
        // h = 1 is far outside RK4's stability region on the attractor
        let result = integrate(
            &Lorenz,
            0.0,
            200.0,
            1.0,
            State::new(1.0, 1.0, 1.0),
            &LorenzParameters::classic(),
        );
        assert!(matches!(result, Err(SolverError::NumericOverflow { .. })));
    }

    #[test]
    fn test_metadata() {
        let config = IntegrationConfig::new(0.0, 1.0, 0.01);
        let trajectory = integrate_with(
            &RK4Stepper,
            &Lorenz,
            &config,
            State::new(1.0, 1.0, 1.0),
            &LorenzParameters::classic(),
        )
        .unwrap();

        assert_eq!(trajectory.get_metadata("stepper"), Some("Runge Kutta (RK4)"));
        assert_eq!(trajectory.get_metadata("field"), Some("Lorenz"));
        assert_eq!(trajectory.get_metadata("time steps"), Some("100"));
        assert_eq!(trajectory.get_metadata("function evaluations"), Some("400"));

        let dt: f64 = trajectory.get_metadata("dt").unwrap().parse().unwrap();
        assert!((dt - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_integrate_with_euler() {
        let config = IntegrationConfig::new(0.0, 1.0, 0.25);
        let trajectory = integrate_with(&EulerStepper, &ConstantGrowth, &config, State::origin(), &4.0).unwrap();

        assert_eq!(trajectory.get_metadata("function evaluations"), Some("4"));
        assert!((trajectory.final_state().unwrap().z - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_bit_identical_reruns() {
        let p = LorenzParameters::classic();
        let y0 = State::new(1.0, 1.0, 1.0);

        let a = integrate(&Lorenz, 0.0, 20.0, 0.01, y0, &p).unwrap();
        let b = integrate(&Lorenz, 0.0, 20.0, 0.01, y0, &p).unwrap();

        assert_eq!(a.len(), b.len());
        for ((ta, ya), (tb, yb)) in a.iter().zip(b.iter()) {
            assert_eq!(ta.to_bits(), tb.to_bits());
            assert_eq!(ya.to_array().map(f64::to_bits), yb.to_array().map(f64::to_bits));
        }
    }
}
