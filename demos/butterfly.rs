//! Example: The Lorenz Attractor
//!
//! Integrates one trajectory with RK4 and draws the "butterfly" as three
//! planar projections, plus the components versus time.
//!
//! ```bash
//! cargo run --example butterfly                      # σ = 10, ρ = 28, β = 8/3
//! cargo run --example butterfly -- demos/lorenz.yaml # run file
//! ```
//!
//! Files are written only when the run file names an `output_dir`.

use lorenz_rs::{
    config::{load_run_configuration, RunConfiguration},
    models::Lorenz,
    output::{export_trajectory_csv, plot_components, plot_projections, CsvConfig, CsvMetadata, PlotConfig},
    solver::integrate,
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Lorenz Attractor");
    println!("═══════════════════════════════════════════════════════\n");

    let run = match std::env::args().nth(1) {
        Some(path) => load_run_configuration(path)?,
        None => RunConfiguration::default(),
    };

    let params = run.parameters;
    let grid = run.integration;

    println!("Parameters:");
    println!("  σ (sigma) : {}", params.sigma);
    println!("  ρ (rho)   : {}", params.rho);
    println!("  β (beta)  : {:.6}\n", params.beta);

    println!("Integration:");
    println!("  Interval   : [{}, {}]", grid.t0, grid.t_end);
    println!("  dt         : {}", grid.step);
    println!("  Time steps : {}", grid.step_count()?);
    println!("  y0         : {}\n", run.reference);

    // ====== Integrate ======

    let start = Instant::now();
    let trajectory = integrate(&Lorenz, grid.t0, grid.t_end, grid.step, run.reference, &params)?;
    let elapsed = start.elapsed().as_secs_f64();

    println!("✓ {} samples in {:.3} s\n", trajectory.len(), elapsed);

    // ====== Summary ======

    let range = |values: Vec<f64>| {
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    };

    println!("{:<10} {:>12} {:>12}", "Component", "Min", "Max");
    println!("{:-<36}", "");
    for (name, values) in [("x", trajectory.xs()), ("y", trajectory.ys()), ("z", trajectory.zs())] {
        let (lo, hi) = range(values);
        println!("{:<10} {:>12.4} {:>12.4}", name, lo, hi);
    }

    if let Some((t, state)) = trajectory.last() {
        println!("\nFinal state at t = {:.2}: {}", t, state);
    }

    // ====== Files ======

    let Some(output_dir) = run.output_dir else {
        println!("\nNo output_dir in the run file: nothing written.");
        return Ok(());
    };
    std::fs::create_dir_all(&output_dir)?;

    let title = format!("σ = {}, ρ = {}, β = {:.4}", params.sigma, params.rho, params.beta);

    let projections = output_dir.join("butterfly.png");
    plot_projections(&trajectory, &projections, Some(&PlotConfig::projections(title.as_str())))?;

    let components = output_dir.join("components.svg");
    plot_components(&trajectory, &components, Some(&PlotConfig::components(title)))?;

    let csv = output_dir.join("trajectory.csv");
    let metadata = CsvMetadata::from_trajectory(&trajectory).with_parameters(params);
    export_trajectory_csv(&trajectory, &csv, Some(&CsvConfig::default().with_metadata(metadata)))?;

    println!("\nFiles:");
    for path in [&projections, &components, &csv] {
        println!("  {}", path.display());
    }

    Ok(())
}
