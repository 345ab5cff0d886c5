//! Concrete vector fields
//!
//! All models implement the [`VectorField`](crate::physics::VectorField) trait.
//! The stepper calls `derivative` four times per RK4 step. Models own the
//! equations, steppers own the time integration.
//!
//! # Available Models
//!
//! ## [`Lorenz`] — Lorenz 1963 convection model
//!
//! Three coupled quadratic ODEs parameterised by [`LorenzParameters`]
//! (σ, ρ, β). The analytical equilibria and their linear stability live in
//! [`crate::analysis`].

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod lorenz;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use lorenz::{Lorenz, LorenzParameters};
