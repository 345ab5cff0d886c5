//! Output of integration results
//!
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV files for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── phase.rs
//! │   └── timeseries.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! The numerical core never writes files; everything here consumes finished
//! [`Trajectory`](crate::solver::Trajectory) and
//! [`TrajectoryPair`](crate::solver::TrajectoryPair) values.

pub mod export;
pub mod visualization;

pub use visualization::{
    plot_comparison,
    plot_components,
    plot_projections,
    plot_separation,
    PlotConfig,
};

pub use export::{export_comparison_csv, export_trajectory_csv, CsvConfig, CsvMetadata};
