//! Phase-space projections
//!
//! A 3-D trajectory is drawn as three planar projections side by side:
//! (x, y), (y, z) and (z, x).
//!
//! # Available functions
//!
//! - [`plot_projections`] — one trajectory
//! - [`plot_comparison`]  — two trajectories overlaid, with a legend
//!
//! # Usage
//!
//! ```rust,ignore
//! use lorenz_rs::output::visualization::{plot_comparison, plot_projections};
//!
//! plot_projections(&trajectory, "butterfly.png", None)?;
//! plot_comparison(&pair, "sensitivity.svg", None)?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use super::config::{PlotConfig, NO_TITLE};
use crate::physics::State;
use crate::solver::{Trajectory, TrajectoryPair};

// =================================================================================================
// Projection Planes
// =================================================================================================

/// Coordinate plane of a projection panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    XY,
    YZ,
    ZX,
}

impl Plane {
    /// Panels in drawing order
    pub const ALL: [Plane; 3] = [Plane::XY, Plane::YZ, Plane::ZX];

    /// Planar coordinates of `state`
    pub fn project(&self, state: &State) -> (f64, f64) {
        match self {
            Plane::XY => (state.x, state.y),
            Plane::YZ => (state.y, state.z),
            Plane::ZX => (state.z, state.x),
        }
    }

    /// Horizontal and vertical axis labels
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Plane::XY => ("x", "y"),
            Plane::YZ => ("y", "z"),
            Plane::ZX => ("z", "x"),
        }
    }

    /// Panel caption
    pub fn caption(&self) -> String {
        let (h, v) = self.labels();
        format!("Plane ({}, {})", h, v)
    }
}

/// Axis range covering `values` with a 5 % margin
///
/// Constant or empty input gets a unit margin so the axis is never empty.
pub(crate) fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return -1.0..1.0;
    }

    let margin = if max > min { 0.05 * (max - min) } else { 1.0 };
    (min - margin)..(max + margin)
}

fn check_not_empty(trajectory: &Trajectory, label: &str) -> Result<(), Box<dyn Error>> {
    if trajectory.is_empty() {
        return Err(format!("Empty data: {} trajectory has no samples", label).into());
    }
    Ok(())
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot the three planar projections of one trajectory
///
/// # Arguments
///
/// * `trajectory`  — Integrated trajectory
/// * `output_path` — Output file path (`.svg` → vector, anything else → bitmap)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the trajectory is empty or the backend cannot write to
/// `output_path`.
pub fn plot_projections(
    trajectory: &Trajectory,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    check_not_empty(trajectory, "the")?;

    let default_config = PlotConfig::projections(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let series = [("", trajectory.states.as_slice())];
    let path = output_path.as_ref();

    match path.extension().and_then(|s| s.to_str()) {
        Some("svg") => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            plot_planes_impl(backend, &series, config, false)
        }
        _ => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            plot_planes_impl(backend, &series, config, false)
        }
    }
}

/// Plot the projections of a reference and a perturbed run on shared axes
///
/// Legends show the initial state of each run, so nearby starting points
/// can be told apart once the runs separate.
///
/// # Errors
///
/// Returns `Err` if either trajectory is empty or the backend fails.
pub fn plot_comparison(
    pair: &TrajectoryPair,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    check_not_empty(&pair.reference, "reference")?;
    check_not_empty(&pair.perturbed, "perturbed")?;

    let default_config = PlotConfig::comparison(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let reference_label = format!("{}", pair.reference.states[0]);
    let perturbed_label = format!("{}", pair.perturbed.states[0]);

    let series = [
        (reference_label.as_str(), pair.reference.states.as_slice()),
        (perturbed_label.as_str(), pair.perturbed.states.as_slice()),
    ];
    let path = output_path.as_ref();

    match path.extension().and_then(|s| s.to_str()) {
        Some("svg") => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            plot_planes_impl(backend, &series, config, true)
        }
        _ => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            plot_planes_impl(backend, &series, config, true)
        }
    }
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Render one panel per plane, each overlaying every series
fn plot_planes_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[(&str, &[State])],
    config: &PlotConfig,
    with_legend: bool,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let root = root.titled(&config.title, ("sans-serif", 28).into_font())?;
    let panels = root.split_evenly((1, 3));

    for (plane, panel) in Plane::ALL.iter().zip(panels.iter()) {
        draw_plane(panel, *plane, series, config, with_legend)?;
    }

    root.present()?;
    Ok(())
}

fn draw_plane<DB: DrawingBackend>(
    panel: &DrawingArea<DB, Shift>,
    plane: Plane,
    series: &[(&str, &[State])],
    config: &PlotConfig,
    with_legend: bool,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let points = || series.iter().flat_map(|(_, states)| states.iter().map(|s| plane.project(s)));

    let h_range = padded_range(points().map(|(h, _)| h));
    let v_range = padded_range(points().map(|(_, v)| v));
    let (h_label, v_label) = plane.labels();

    let mut chart = ChartBuilder::on(panel)
        .caption(plane.caption(), ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(h_range, v_range)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(h_label).y_desc(v_label);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for (index, (label, states)) in series.iter().enumerate() {
        let color = if series.len() == 1 {
            config.line_color
        } else {
            config.get_series_color(index)
        };

        let drawn = chart.draw_series(LineSeries::new(
            states.iter().map(|s| plane.project(s)),
            ShapeStyle::from(&color).stroke_width(config.line_width),
        ))?;

        if with_legend {
            drawn
                .label(*label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
    }

    if with_legend {
        chart
            .configure_series_labels()
            .background_style(config.background.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
