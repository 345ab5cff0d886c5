//! Linear stability of equilibrium points
//!
//! Each equilibrium is classified from the eigenvalues of the Jacobian at
//! that point: asymptotically stable iff every eigenvalue has a strictly
//! negative real part.
//!
//! The eigenvalue computation sits behind the [`EigenSolver`] trait. The
//! default [`SchurEigenSolver`] uses nalgebra's real Schur decomposition;
//! a decomposition that does not converge within its iteration budget is
//! reported as [`SolverError::EigenSolverFailure`] instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use lorenz_rs::analysis::{equilibria, stability, EquilibriumKind};
//! use lorenz_rs::models::LorenzParameters;
//!
//! let params = LorenzParameters::classic();
//! let reports = stability(&equilibria(&params), &params)?;
//!
//! assert_eq!(reports[0].kind(), EquilibriumKind::Saddle);
//! assert!(reports.iter().all(|r| !r.is_asymptotically_stable()));
//! # Ok::<(), lorenz_rs::solver::SolverError>(())
//! ```

use crate::analysis::jacobian;
use crate::models::LorenzParameters;
use crate::physics::State;
use crate::solver::SolverError;
use nalgebra::linalg::Schur;
use nalgebra::Matrix3;
use num_complex::Complex;
use std::fmt;

/// Real parts closer to zero than this are treated as zero
const REAL_PART_TOLERANCE: f64 = 1e-10;

/// Imaginary parts smaller than this are treated as real eigenvalues
const IMAGINARY_PART_TOLERANCE: f64 = 1e-8;

// =================================================================================================
// Eigenvalue solvers
// =================================================================================================

/// Dense eigenvalue routine for real 3×3 matrices
pub trait EigenSolver: Send + Sync {
    /// All eigenvalues of `matrix`, counted with multiplicity
    fn eigenvalues(&self, matrix: &Matrix3<f64>) -> Result<Vec<Complex<f64>>, SolverError>;

    /// Name of the routine (used for logging)
    fn name(&self) -> &str;
}

/// Eigenvalues from the real Schur form (Francis double-shift QR)
///
/// The eigenvalues are returned sorted by increasing real part, conjugate
/// pairs ordered by imaginary part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchurEigenSolver {
    /// Convergence threshold of the QR iteration
    pub tolerance: f64,

    /// Iteration budget; exceeding it is a failure
    pub max_iterations: usize,
}

impl SchurEigenSolver {
    /// Create a solver with an explicit threshold and budget
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self { tolerance, max_iterations }
    }
}

impl Default for SchurEigenSolver {
    fn default() -> Self {
        Self::new(f64::EPSILON, 500)
    }
}

impl EigenSolver for SchurEigenSolver {
    fn eigenvalues(&self, matrix: &Matrix3<f64>) -> Result<Vec<Complex<f64>>, SolverError> {
        if matrix.iter().any(|value| !value.is_finite()) {
            return Err(SolverError::EigenSolverFailure {
                reason: "matrix has non-finite entries".to_string(),
            });
        }

        let schur = Schur::try_new(*matrix, self.tolerance, self.max_iterations).ok_or_else(|| {
            SolverError::EigenSolverFailure {
                reason: format!(
                    "Schur decomposition did not converge within {} iterations",
                    self.max_iterations
                ),
            }
        })?;

        let mut values: Vec<Complex<f64>> = schur.complex_eigenvalues().iter().copied().collect();
        values.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));

        Ok(values)
    }

    fn name(&self) -> &str {
        "real Schur decomposition"
    }
}

// =================================================================================================
// Classification
// =================================================================================================

/// Local phase portrait of a hyperbolic equilibrium in three dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquilibriumKind {
    /// All eigenvalues real and negative
    StableNode,

    /// All real parts negative, with a complex pair
    StableFocus,

    /// Real eigenvalues of both signs
    Saddle,

    /// Real parts of both signs, with a complex pair
    SaddleFocus,

    /// All eigenvalues real and positive
    UnstableNode,

    /// All real parts positive, with a complex pair
    UnstableFocus,

    /// At least one eigenvalue on the imaginary axis
    NonHyperbolic,
}

impl EquilibriumKind {
    /// Classify from a set of eigenvalues
    pub fn from_eigenvalues(eigenvalues: &[Complex<f64>]) -> Self {
        if eigenvalues.iter().any(|l| l.re.abs() <= REAL_PART_TOLERANCE) {
            return Self::NonHyperbolic;
        }

        let oscillating = eigenvalues.iter().any(|l| l.im.abs() > IMAGINARY_PART_TOLERANCE);
        let unstable = eigenvalues.iter().filter(|l| l.re > 0.0).count();

        match (unstable, oscillating) {
            (0, false) => Self::StableNode,
            (0, true) => Self::StableFocus,
            (n, false) if n == eigenvalues.len() => Self::UnstableNode,
            (n, true) if n == eigenvalues.len() => Self::UnstableFocus,
            (_, false) => Self::Saddle,
            (_, true) => Self::SaddleFocus,
        }
    }
}

impl fmt::Display for EquilibriumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::StableNode => "stable node",
            Self::StableFocus => "stable focus",
            Self::Saddle => "saddle",
            Self::SaddleFocus => "saddle-focus",
            Self::UnstableNode => "unstable node",
            Self::UnstableFocus => "unstable focus",
            Self::NonHyperbolic => "non-hyperbolic",
        };
        f.write_str(label)
    }
}

// =================================================================================================
// Reports
// =================================================================================================

/// Linearisation of the field at one equilibrium
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityReport {
    /// Equilibrium point
    pub equilibrium: State,

    /// Jacobian of the field at the equilibrium
    pub jacobian: Matrix3<f64>,

    /// Eigenvalues of the Jacobian
    pub eigenvalues: Vec<Complex<f64>>,
}

impl StabilityReport {
    /// True iff every eigenvalue has a strictly negative real part
    pub fn is_asymptotically_stable(&self) -> bool {
        self.eigenvalues.iter().all(|l| l.re < 0.0)
    }

    /// Largest real part
    pub fn spectral_abscissa(&self) -> f64 {
        self.eigenvalues
            .iter()
            .map(|l| l.re)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Phase portrait classification
    pub fn kind(&self) -> EquilibriumKind {
        EquilibriumKind::from_eigenvalues(&self.eigenvalues)
    }
}

/// Stability reports for `equilibria`, in the same order
///
/// # Errors
///
/// - [`SolverError::InvalidParameters`] when a coefficient is not finite
/// - [`SolverError::EigenSolverFailure`] when an eigenvalue computation fails
pub fn stability(
    equilibria: &[State],
    params: &LorenzParameters,
) -> Result<Vec<StabilityReport>, SolverError> {
    stability_with(&SchurEigenSolver::default(), equilibria, params)
}

/// Same as [`stability`] with an explicit eigenvalue routine
pub fn stability_with<E: EigenSolver + ?Sized>(
    solver: &E,
    equilibria: &[State],
    params: &LorenzParameters,
) -> Result<Vec<StabilityReport>, SolverError> {
    params.validate()?;

    equilibria
        .iter()
        .map(|point| {
            let matrix = jacobian(point, params);

            let eigenvalues = solver.eigenvalues(&matrix).inspect_err(|e| {
                log::warn!("{} failed at equilibrium {}: {}", solver.name(), point, e);
            })?;

            let report = StabilityReport {
                equilibrium: *point,
                jacobian: matrix,
                eigenvalues,
            };

            log::debug!(
                "equilibrium {}: {} (spectral abscissa {:.6})",
                point,
                report.kind(),
                report.spectral_abscissa()
            );

            Ok(report)
        })
        .collect()
}

/// Equilibria of `params` together with their stability
pub fn analyze(params: &LorenzParameters) -> Result<Vec<StabilityReport>, SolverError> {
    stability(&crate::analysis::equilibria(params), params)
}

// =================================================================================================
// Hopf bifurcation of the off-axis pair
// =================================================================================================

/// Routh-Hurwitz margin of the off-axis equilibria
///
/// `beta (rho + sigma) (beta + sigma + 1) - 2 beta sigma (rho - 1)`.
/// For `rho > 1` (and positive coefficients) the off-axis pair is
/// asymptotically stable iff the value is positive; it changes sign at
/// [`critical_rho`].
pub fn hopf_discriminant(params: &LorenzParameters) -> f64 {
    let LorenzParameters { sigma, rho, beta } = *params;
    beta * (rho + sigma) * (beta + sigma + 1.0) - 2.0 * beta * sigma * (rho - 1.0)
}

/// Value of rho at which the off-axis equilibria lose stability
///
/// `sigma (sigma + beta + 3) / (sigma - beta - 1)`, about 24.74 for the
/// classic coefficients. `None` when `sigma <= beta + 1`: the pair then
/// stays stable for every `rho > 1`.
pub fn critical_rho(sigma: f64, beta: f64) -> Option<f64> {
    let denominator = sigma - beta - 1.0;
    if denominator > 0.0 {
        Some(sigma * (sigma + beta + 3.0) / denominator)
    } else {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================
