//! Separation of two trajectories on a shared time grid
//!
//! Companion of [`crate::solver::compare`]: the driver produces the two
//! runs, these functions measure how far apart they drift.

use crate::solver::{SolverError, Trajectory};

/// Euclidean distance between corresponding samples
///
/// # Errors
///
/// [`SolverError::GridMismatch`] when the trajectories differ in length or
/// in any sample time.
///
/// # Example
///
/// ```rust
/// use lorenz_rs::analysis::separation;
/// use lorenz_rs::models::{Lorenz, LorenzParameters};
/// use lorenz_rs::physics::State;
/// use lorenz_rs::solver::{compare, IntegrationConfig};
///
/// let pair = compare(
///     &Lorenz,
///     &IntegrationConfig::new(0.0, 1.0, 0.01),
///     State::new(1.0, 1.0, 1.0),
///     State::new(1.01, 1.0, 1.0),
///     &LorenzParameters::classic(),
/// )?;
///
/// let distances = separation(&pair.reference, &pair.perturbed)?;
/// assert!((distances[0] - 0.01).abs() < 1e-12);
/// # Ok::<(), lorenz_rs::solver::SolverError>(())
/// ```
pub fn separation(a: &Trajectory, b: &Trajectory) -> Result<Vec<f64>, SolverError> {
    check_same_grid(a, b)?;

    Ok(a.states
        .iter()
        .zip(b.states.iter())
        .map(|(sa, sb)| sa.distance(sb))
        .collect())
}

/// First sample time at which the separation exceeds `threshold`
///
/// `Ok(None)` when the trajectories stay within `threshold` for the whole
/// run (always the case for a NaN threshold).
pub fn divergence_time(a: &Trajectory, b: &Trajectory, threshold: f64) -> Result<Option<f64>, SolverError> {
    let distances = separation(a, b)?;

    let first = distances
        .iter()
        .zip(a.time_points.iter())
        .find(|(d, _)| **d > threshold)
        .map(|(_, t)| *t);

    if let Some(t) = first {
        log::debug!("separation exceeds {} at t = {}", threshold, t);
    }

    Ok(first)
}

fn check_same_grid(a: &Trajectory, b: &Trajectory) -> Result<(), SolverError> {
    if a.len() != b.len() {
        return Err(SolverError::GridMismatch {
            reason: format!("{} samples vs {} samples", a.len(), b.len()),
        });
    }

    if let Some(index) = a
        .time_points
        .iter()
        .zip(b.time_points.iter())
        .position(|(ta, tb)| ta.to_bits() != tb.to_bits())
    {
        return Err(SolverError::GridMismatch {
            reason: format!(
                "sample {} is at t = {} vs t = {}",
                index, a.time_points[index], b.time_points[index]
            ),
        });
    }

    Ok(())
}
