//! Twin integrations from nearby initial states
//!
//! Runs the integrator twice with identical parameters and time grid, so
//! that the two trajectories can be compared sample by sample (sensitive
//! dependence on initial conditions). The driver computes no divergence
//! metric itself; see [`crate::analysis::divergence`] for that.
//!
//! With the `parallel` feature the two runs are dispatched with
//! `rayon::join`. Each run is sequential and shares nothing with the other,
//! so the results are bit-identical to the sequential path.

use crate::physics::{State, VectorField};
use crate::solver::{integrate_with, IntegrationConfig, RK4Stepper, SolverError, Stepper, Trajectory};

/// Two trajectories on the same time grid
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryPair {
    /// Run from the reference initial state
    pub reference: Trajectory,

    /// Run from the perturbed initial state
    pub perturbed: Trajectory,
}

impl TrajectoryPair {
    /// Number of samples (identical for both runs)
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    /// True when both runs are empty
    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    /// Shared time grid
    pub fn time_points(&self) -> &[f64] {
        &self.reference.time_points
    }

    /// Iterate over `(time, reference state, perturbed state)`
    pub fn iter(&self) -> impl Iterator<Item = (f64, &State, &State)> + '_ {
        self.reference
            .iter()
            .zip(self.perturbed.states.iter())
            .map(|((t, a), b)| (t, a, b))
    }
}

/// Integrate from `reference` and `perturbed` with RK4
///
/// # Errors
///
/// Any error of the underlying integration ([`SolverError`]). The
/// reference run's error is reported first when both fail.
///
/// # Example
///
/// ```rust
/// use lorenz_rs::models::{Lorenz, LorenzParameters};
/// use lorenz_rs::physics::State;
/// use lorenz_rs::solver::{compare, IntegrationConfig};
///
/// let pair = compare(
///     &Lorenz,
///     &IntegrationConfig::new(0.0, 1.0, 0.01),
///     State::new(1.0, 1.0, 1.0),
///     State::new(1.01, 1.0, 1.0),
///     &LorenzParameters::default(),
/// )?;
///
/// assert_eq!(pair.reference.len(), pair.perturbed.len());
/// # Ok::<(), lorenz_rs::solver::SolverError>(())
/// ```
pub fn compare<F: VectorField>(
    field: &F,
    config: &IntegrationConfig,
    reference: State,
    perturbed: State,
    parameters: &F::Parameters,
) -> Result<TrajectoryPair, SolverError> {
    compare_with(&RK4Stepper, field, config, reference, perturbed, parameters)
}

/// Same as [`compare`] with an explicit stepper
pub fn compare_with<S: Stepper, F: VectorField>(
    stepper: &S,
    field: &F,
    config: &IntegrationConfig,
    reference: State,
    perturbed: State,
    parameters: &F::Parameters,
) -> Result<TrajectoryPair, SolverError> {

    // Fail before spawning anything
    config.validate()?;

    log::debug!(
        "comparing {} from {} and {} (initial separation {:e})",
        field.name(),
        reference,
        perturbed,
        reference.distance(&perturbed)
    );

    let run = |y0: State| integrate_with(stepper, field, config, y0, parameters);

    #[cfg(feature = "parallel")]
    let (reference, perturbed) = rayon::join(|| run(reference), || run(perturbed));

    #[cfg(not(feature = "parallel"))]
    let (reference, perturbed) = (run(reference), run(perturbed));

    Ok(TrajectoryPair {
        reference: reference?,
        perturbed: perturbed?,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
