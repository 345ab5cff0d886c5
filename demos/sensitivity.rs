//! Example: Sensitivity to Initial Conditions
//!
//! Runs the reference and the perturbed initial states of a run file side by
//! side and reports when, and how fast, the two trajectories separate.
//!
//! ```bash
//! cargo run --example sensitivity
//! cargo run --example sensitivity --features parallel -- demos/lorenz.yaml
//! ```

use lorenz_rs::{
    analysis::{divergence_time, separation},
    config::{load_run_configuration, RunConfiguration},
    models::Lorenz,
    output::{export_comparison_csv, plot_comparison, plot_separation, PlotConfig},
    solver::compare,
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Sensitivity to Initial Conditions");
    println!("═══════════════════════════════════════════════════════\n");

    let run = match std::env::args().nth(1) {
        Some(path) => load_run_configuration(path)?,
        None => RunConfiguration::default(),
    };

    let params = run.parameters;

    println!("  ρ          : {}", params.rho);
    println!("  Reference  : {}", run.reference);
    println!("  Perturbed  : {}", run.perturbed);
    println!("  |Δ(t0)|    : {:e}\n", run.perturbation());

    // ====== Twin run ======

    let start = Instant::now();
    let pair = compare(&Lorenz, &run.integration, run.reference, run.perturbed, &params)?;
    println!("✓ 2 × {} samples in {:.3} s\n", pair.len(), start.elapsed().as_secs_f64());

    // ====== Separation over time ======

    let distances = separation(&pair.reference, &pair.perturbed)?;
    let every = (pair.len() / 10).max(1);

    println!("{:>10} {:>14}", "t", "|Δ(t)|");
    println!("{:-<26}", "");
    for (t, d) in pair.time_points().iter().zip(&distances).step_by(every) {
        println!("{:>10.2} {:>14.6e}", t, d);
    }

    // ====== Divergence thresholds ======

    println!("\n{:>10} {:>14}", "Threshold", "First t");
    println!("{:-<26}", "");
    for threshold in [0.1, 1.0, 10.0] {
        match divergence_time(&pair.reference, &pair.perturbed, threshold)? {
            Some(t) => println!("{:>10} {:>14.2}", threshold, t),
            None => println!("{:>10} {:>14}", threshold, "never"),
        }
    }

    // Growth rate between the initial offset and a separation of 1
    if let Some(t) = divergence_time(&pair.reference, &pair.perturbed, 1.0)?
        && t > run.integration.t0
        && run.perturbation() > 0.0
    {
        let rate = (1.0 / run.perturbation()).ln() / (t - run.integration.t0);
        println!("\nMean exponential growth rate up to |Δ| = 1: {:.3}", rate);
    }

    // ====== Files ======

    let Some(output_dir) = run.output_dir else {
        println!("\nNo output_dir in the run file: nothing written.");
        return Ok(());
    };
    std::fs::create_dir_all(&output_dir)?;

    let overlay = output_dir.join("sensitivity.png");
    plot_comparison(&pair, &overlay, None)?;

    let growth = output_dir.join("separation.svg");
    let title = format!("Separation, ρ = {}", params.rho);
    plot_separation(&pair, &growth, Some(&PlotConfig::separation(title)))?;

    let csv = output_dir.join("comparison.csv");
    export_comparison_csv(&pair, &csv, None)?;

    println!("\nFiles:");
    for path in [&overlay, &growth, &csv] {
        println!("  {}", path.display());
    }

    Ok(())
}
