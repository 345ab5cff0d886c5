//! Convergence tests for the fixed-step methods
//!
//! These tests verify that the steppers exhibit the expected
//! convergence rates when refining the time step.

use lorenz_rs::models::{Lorenz, LorenzParameters};
use lorenz_rs::physics::State;
use lorenz_rs::solver::{integrate, integrate_with, EulerStepper, IntegrationConfig, RK4Stepper};

mod common;
use common::{ExponentialDecay, HarmonicOscillator};

fn final_state(trajectory: &lorenz_rs::solver::Trajectory) -> State {
    *trajectory.final_state().unwrap()
}

#[test]
fn test_euler_first_order_convergence() {
    // Euler should have first-order convergence: error ~ O(dt)
    // When dt → dt/2, error should → error/2

    let decay_rate = 0.3;
    let total_time = 10.0;
    let y0 = State::new(1.0, 1.0, 1.0);
    let exact = ExponentialDecay.analytical_solution(total_time, y0, decay_rate);

    let steps_list = vec![100, 200, 400, 800];
    let mut errors = Vec::new();

    for &steps in &steps_list {
        let config = IntegrationConfig::new(0.0, total_time, total_time / steps as f64);
        let result = integrate_with(&EulerStepper, &ExponentialDecay, &config, y0, &decay_rate).unwrap();

        assert_eq!(result.len(), steps + 1);
        errors.push((final_state(&result).x - exact.x).abs());
    }

    // Check convergence ratios
    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("Euler convergence ratio {}->{}: {}", i, i + 1, ratio);

        // Should be close to 2 for first-order
        assert!(
            ratio > 1.8 && ratio < 2.2,
            "Convergence ratio {} not first-order",
            ratio
        );
    }
}

#[test]
fn test_rk4_fourth_order_convergence() {
    // RK4 should have fourth-order convergence: error ~ O(dt⁴)
    // When dt → dt/2, error should → error/16

    let decay_rate = 0.3;
    let total_time = 5.0;
    let y0 = State::new(1.0, 2.0, -1.0);
    let exact = ExponentialDecay.analytical_solution(total_time, y0, decay_rate);

    let steps_list = vec![10, 20, 40, 80];
    let mut errors = Vec::new();

    for &steps in &steps_list {
        let h = total_time / steps as f64;
        let result = integrate(&ExponentialDecay, 0.0, total_time, h, y0, &decay_rate).unwrap();

        errors.push(final_state(&result).distance(&exact));
    }

    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("RK4 convergence ratio {}->{}: {}", i, i + 1, ratio);

        // Should be close to 16 for fourth-order
        assert!(
            ratio > 12.0 && ratio < 20.0,
            "Convergence ratio {} not fourth-order",
            ratio
        );
    }
}

#[test]
fn test_rk4_fourth_order_on_lorenz_without_chaos() {
    // No exact solution: compare successive refinements instead.
    // With d(h) = |y(h) - y(h/2)| ≈ C h⁴, halving h divides d by 16.
    // ρ = 0.5 keeps the flow contracting so the differences stay smooth.

    let params = LorenzParameters::classic().with_rho(0.5);
    let y0 = State::new(1.0, 1.0, 1.0);
    let total_time = 2.0;

    let finals: Vec<State> = [0.02, 0.01, 0.005, 0.0025]
        .iter()
        .map(|&h| final_state(&integrate(&Lorenz, 0.0, total_time, h, y0, &params).unwrap()))
        .collect();

    let differences: Vec<f64> = finals.windows(2).map(|w| w[0].distance(&w[1])).collect();

    for i in 0..differences.len() - 1 {
        let ratio = differences[i] / differences[i + 1];
        println!("RK4 self-convergence ratio {}->{}: {}", i, i + 1, ratio);

        assert!(
            ratio > 12.0 && ratio < 20.0,
            "Self-convergence ratio {} not fourth-order",
            ratio
        );
    }
}

#[test]
fn test_rk4_oscillator_period() {
    // One full period brings the oscillator back to its initial state
    let omega = 2.0;
    let period = 2.0 * std::f64::consts::PI / omega;
    let y0 = State::new(1.0, 0.0, 3.0);

    let result = integrate(&HarmonicOscillator, 0.0, period, period / 4000.0, y0, &omega).unwrap();

    common::assert_states_close(&final_state(&result), &y0, 1e-9, "RK4 after one period");
    assert_eq!(final_state(&result).z, 3.0);
}

#[test]
fn test_rk4_oscillator_energy_drift_is_small() {
    let omega = 1.0;
    let y0 = State::new(0.0, 1.0, 0.0);
    let energy0 = HarmonicOscillator.energy(&y0, omega);

    let result = integrate(&HarmonicOscillator, 0.0, 50.0, 0.01, y0, &omega).unwrap();

    for (_, state) in result.iter() {
        let drift = common::relative_error(HarmonicOscillator.energy(state, omega), energy0);
        assert!(drift < 1e-8, "energy drifted by {}", drift);
    }
}

#[test]
fn test_euler_gains_energy_on_oscillator() {
    // Forward Euler multiplies the energy by (1 + h²ω²) every step
    let omega = 1.0;
    let h = 0.01;
    let y0 = State::new(1.0, 0.0, 0.0);
    let config = IntegrationConfig::new(0.0, 1.0, h);

    let result = integrate_with(&EulerStepper, &HarmonicOscillator, &config, y0, &omega).unwrap();

    let steps = (result.len() - 1) as i32;
    let expected = HarmonicOscillator.energy(&y0, omega) * (1.0 + h * h).powi(steps);
    let actual = HarmonicOscillator.energy(&final_state(&result), omega);

    assert!(common::relative_error(actual, expected) < 1e-12);
}

#[test]
fn test_rk4_matches_analytical_solution_over_time() {
    let omega = 3.0;
    let y0 = State::new(0.5, -1.0, 0.0);

    let result = integrate_with(
        &RK4Stepper,
        &HarmonicOscillator,
        &IntegrationConfig::new(0.0, 5.0, 0.001),
        y0,
        &omega,
    )
    .unwrap();

    for (t, state) in result.iter().step_by(500) {
        let exact = HarmonicOscillator.analytical_solution(t, y0, omega);
        common::assert_states_close(state, &exact, 1e-9, &format!("t = {}", t));
    }
}
