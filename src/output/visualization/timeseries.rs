//! Time-series plots
//!
//! - [`plot_components`] — x(t), y(t), z(t) of one trajectory on shared axes
//! - [`plot_separation`] — distance between two runs, logarithmic scale
//!
//! For a chaotic run the separation grows roughly exponentially before it
//! saturates at the size of the attractor, so it reads as a straight line
//! on the log axis.

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::config::{PlotConfig, NO_TITLE};
use super::phase::padded_range;
use crate::solver::{Trajectory, TrajectoryPair};

/// Floor applied to distances before taking the logarithm
const MIN_SEPARATION: f64 = 1e-12;

/// Plot x, y and z versus time
///
/// # Errors
///
/// Returns `Err` if the trajectory is empty or the backend fails.
pub fn plot_components(
    trajectory: &Trajectory,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if trajectory.is_empty() {
        return Err("Empty data: trajectory has no samples".into());
    }

    let default_config = PlotConfig::components(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let components = [("x", trajectory.xs()), ("y", trajectory.ys()), ("z", trajectory.zs())];
    let path = output_path.as_ref();

    match path.extension().and_then(|s| s.to_str()) {
        Some("svg") => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            plot_components_impl(backend, &trajectory.time_points, &components, config)
        }
        _ => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            plot_components_impl(backend, &trajectory.time_points, &components, config)
        }
    }
}

/// Plot the Euclidean distance between the two runs of a comparison
///
/// # Errors
///
/// Returns `Err` if the runs are empty, not on the same time grid, or the
/// backend fails.
pub fn plot_separation(
    pair: &TrajectoryPair,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if pair.is_empty() {
        return Err("Empty data: comparison has no samples".into());
    }

    let distances: Vec<f64> = crate::analysis::separation(&pair.reference, &pair.perturbed)?
        .into_iter()
        .map(|d| d.max(MIN_SEPARATION))
        .collect();

    let default_config = PlotConfig::separation(NO_TITLE);
    let config = config.unwrap_or(&default_config);
    let path = output_path.as_ref();

    match path.extension().and_then(|s| s.to_str()) {
        Some("svg") => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            plot_separation_impl(backend, pair.time_points(), &distances, config)
        }
        _ => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            plot_separation_impl(backend, pair.time_points(), &distances, config)
        }
    }
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

fn plot_components_impl<DB: DrawingBackend>(
    backend: DB,
    time_points: &[f64],
    components: &[(&str, Vec<f64>)],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let t_range = padded_range(time_points.iter().copied());
    let v_range = padded_range(components.iter().flat_map(|(_, values)| values.iter().copied()));

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(t_range, v_range)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.xlabel.as_str()).y_desc(config.ylabel.as_str());
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for (index, (label, values)) in components.iter().enumerate() {
        let color = config.get_series_color(index);

        chart
            .draw_series(LineSeries::new(
                time_points.iter().copied().zip(values.iter().copied()),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn plot_separation_impl<DB: DrawingBackend>(
    backend: DB,
    time_points: &[f64],
    distances: &[f64],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let t_range = padded_range(time_points.iter().copied());
    let d_max = distances.iter().copied().fold(MIN_SEPARATION, f64::max);
    let d_min = distances.iter().copied().fold(d_max, f64::min);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(t_range, (d_min * 0.5..d_max * 2.0).log_scale())?;

    let exponent = |d: &f64| format!("{:.0e}", d);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.xlabel.as_str())
        .y_desc(config.ylabel.as_str())
        .y_label_formatter(&exponent);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    chart.draw_series(LineSeries::new(
        time_points.iter().copied().zip(distances.iter().copied()),
        ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
    ))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::State;

    fn short_pair() -> TrajectoryPair {
        use crate::models::{Lorenz, LorenzParameters};
        use crate::solver::{compare, IntegrationConfig};

        compare(
            &Lorenz,
            &IntegrationConfig::new(0.0, 5.0, 0.01),
            State::new(1.0, 1.0, 1.0),
            State::new(1.01, 1.0, 1.0),
            &LorenzParameters::classic(),
        )
        .unwrap()
    }

    #[test]
    fn test_components_render_png_and_svg() {
        let pair = short_pair();
        let tmp = tempfile::tempdir().unwrap();

        for name in ["components.png", "components.svg"] {
            let path = tmp.path().join(name);
            plot_components(&pair.reference, &path, None).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0, "{} is empty", name);
        }
    }

    #[test]
    fn test_separation_renders_png_and_svg() {
        let pair = short_pair();
        let tmp = tempfile::tempdir().unwrap();

        for name in ["separation.png", "separation.svg"] {
            let path = tmp.path().join(name);
            plot_separation(&pair, &path, Some(&PlotConfig::separation("Separation"))).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0, "{} is empty", name);
        }
    }

    #[test]
    fn test_empty_trajectory_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let empty = Trajectory::new(Vec::new(), Vec::new());

        assert!(plot_components(&empty, tmp.path().join("c.svg"), None).is_err());
    }

    #[test]
    fn test_mismatched_pair_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let pair = TrajectoryPair {
            reference: Trajectory::new(vec![0.0, 1.0], vec![State::origin(); 2]),
            perturbed: Trajectory::new(vec![0.0], vec![State::origin()]),
        };

        let error = plot_separation(&pair, tmp.path().join("s.png"), None).unwrap_err();
        assert!(error.to_string().contains("time grid"));
    }
}
