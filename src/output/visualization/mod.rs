//! Visualization of trajectories using the `plotters` library
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **phase**: Planar projections of the phase space
//! - **timeseries**: Components and separation versus time
//!
//! The backend is chosen from the file extension: `.svg` writes a vector
//! image, anything else a bitmap (PNG for `.png`).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lorenz_rs::output::visualization::{plot_projections, PlotConfig};
//!
//! plot_projections(&trajectory, "butterfly.png", None)?;
//!
//! let config = PlotConfig::projections("rho = 28");
//! plot_projections(&trajectory, "butterfly.svg", Some(&config))?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | Attractor shape | `phase` | `plot_projections` |
//! | Two nearby runs | `phase` | `plot_comparison` |
//! | x, y, z versus time | `timeseries` | `plot_components` |
//! | Divergence of two runs | `timeseries` | `plot_separation` |

pub mod config;
pub mod phase;
pub mod timeseries;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use phase::{plot_comparison, plot_projections, Plane};
pub use timeseries::{plot_components, plot_separation};
