//! Example: Equilibria and Their Stability
//!
//! Lists the equilibrium points of the Lorenz field, the eigenvalues of the
//! Jacobian at each one, and sweeps ρ across the pitchfork (ρ = 1) and the
//! Hopf bifurcation of the off-axis pair.
//!
//! ```bash
//! cargo run --example equilibria
//! cargo run --example equilibria -- demos/lorenz.yaml
//! ```

use lorenz_rs::{
    analysis::{analyze, critical_rho, hopf_discriminant, StabilityReport},
    config::{load_run_configuration, RunConfiguration},
    models::LorenzParameters,
};

fn print_report(report: &StabilityReport) {
    println!("  Equilibrium {}", report.equilibrium);
    for (i, lambda) in report.eigenvalues.iter().enumerate() {
        println!("    λ{} = {:>12.6} {:+.6}i", i + 1, lambda.re, lambda.im);
    }
    println!(
        "    → {} (spectral abscissa {:.6})\n",
        report.kind(),
        report.spectral_abscissa()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Lorenz Equilibria");
    println!("═══════════════════════════════════════════════════════\n");

    let run = match std::env::args().nth(1) {
        Some(path) => load_run_configuration(path)?,
        None => RunConfiguration::default(),
    };

    let params = run.parameters;

    // ====== Configured parameters ======

    println!("σ = {}, ρ = {}, β = {:.6}\n", params.sigma, params.rho, params.beta);

    for report in analyze(&params)? {
        print_report(&report);
    }

    match critical_rho(params.sigma, params.beta) {
        Some(rho_h) => println!("Hopf bifurcation of the off-axis pair at ρ_H = {:.6}", rho_h),
        None => println!("σ ≤ β + 1: the off-axis pair never loses stability"),
    }

    if params.rho > 1.0 {
        println!("Routh-Hurwitz margin at ρ = {}: {:.6}", params.rho, hopf_discriminant(&params));
    }

    // ====== Sweep over rho ======

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Sweep over ρ (σ and β fixed)");
    println!("═══════════════════════════════════════════════════════\n");

    println!("{:>8} {:>6}   {:<16} {:<16}", "ρ", "count", "origin", "off-axis");
    println!("{:-<52}", "");

    for rho in [0.5, 1.5, 10.0, 20.0, 24.0, 25.0, 28.0, 100.0] {
        let swept = LorenzParameters { rho, ..params };
        let reports = analyze(&swept)?;

        let kind_at = |index: usize| {
            reports
                .get(index)
                .map(|r| r.kind().to_string())
                .unwrap_or_else(|| "-".to_string())
        };

        println!(
            "{:>8} {:>6}   {:<16} {:<16}",
            rho,
            reports.len(),
            kind_at(0),
            kind_at(1)
        );
    }

    Ok(())
}
