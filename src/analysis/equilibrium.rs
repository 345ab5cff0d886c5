//! Equilibrium points and linearisation of the Lorenz field
//!
//! Setting the right-hand side to zero gives `x = y` from the first
//! equation, then `x (rho - 1 - z) = 0` and `x² = beta z`. Either `x = 0`
//! (the origin) or `z = rho - 1`, `x = ±sqrt(beta (rho - 1))`, which is real
//! only for `rho > 1`. The points are closed-form; no root finding is done.

use crate::models::LorenzParameters;
use crate::physics::State;
use nalgebra::Matrix3;

/// Equilibrium points for the given coefficients
///
/// Returns `[origin]` when `rho <= 1` and `[origin, eq_plus, eq_minus]` when
/// `rho > 1`, with `eq_plus = (c, c, rho - 1)`, `c = sqrt(beta (rho - 1))`
/// and `eq_minus = (-c, -c, rho - 1)`.
///
/// The off-axis pair requires `beta (rho - 1) >= 0`; a negative `beta` with
/// `rho > 1` has no real off-axis equilibria and only the origin is returned.
/// A NaN `rho` also yields the origin alone.
///
/// # Example
///
/// ```rust
/// use lorenz_rs::analysis::equilibria;
/// use lorenz_rs::models::LorenzParameters;
///
/// assert_eq!(equilibria(&LorenzParameters::classic().with_rho(0.5)).len(), 1);
/// assert_eq!(equilibria(&LorenzParameters::classic()).len(), 3);
/// ```
pub fn equilibria(params: &LorenzParameters) -> Vec<State> {
    let origin = State::origin();

    if params.rho.is_nan() || params.rho <= 1.0 {
        return vec![origin];
    }

    let z = params.rho - 1.0;
    let squared = params.beta * z;

    if squared.is_nan() || squared < 0.0 {
        log::debug!("beta (rho - 1) = {} < 0: no real off-axis equilibria", squared);
        return vec![origin];
    }

    let c = squared.sqrt();

    vec![origin, State::new(c, c, z), State::new(-c, -c, z)]
}

/// Jacobian of the Lorenz field at `point`
///
/// ```text
/// | -sigma   sigma    0    |
/// | rho - z   -1     -x    |
/// |   y        x    -beta  |
/// ```
pub fn jacobian(point: &State, params: &LorenzParameters) -> Matrix3<f64> {
    let State { x, y, z } = *point;

    Matrix3::new(
        -params.sigma, params.sigma, 0.0,
        params.rho - z, -1.0, -x,
        y, x, -params.beta,
    )
}
