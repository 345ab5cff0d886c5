//! Qualitative analysis of the Lorenz system
//!
//! - **`equilibrium`**: closed-form equilibrium points and the Jacobian
//! - **`stability`**: eigenvalues at each equilibrium, classification,
//!   Hopf threshold of the off-axis pair
//! - **`divergence`**: distance between two runs on the same grid
//!
//! Every function takes the parameters explicitly and returns fresh values;
//! nothing is cached between calls.

pub mod divergence;
pub mod equilibrium;
pub mod stability;

pub use divergence::{divergence_time, separation};
pub use equilibrium::{equilibria, jacobian};
pub use stability::{
    analyze, critical_rho, hopf_discriminant, stability, stability_with, EigenSolver,
    EquilibriumKind, SchurEigenSolver, StabilityReport,
};
