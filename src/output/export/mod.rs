//! Export of integration results
//!
//! # Available formats
//!
//! | Format  | Module   |
//! |---------|----------|
//! | CSV     | [`csv`]  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use lorenz_rs::output::export::{export_comparison_csv, export_trajectory_csv};
//!
//! export_trajectory_csv(&trajectory, "butterfly.csv", None)?;
//! export_comparison_csv(&pair, "sensitivity.csv", None)?;
//! ```

pub mod csv;

pub use csv::{export_comparison_csv, export_trajectory_csv, CsvConfig, CsvMetadata};
