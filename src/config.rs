//! Run files
//!
//! A run file describes one comparison study in YAML. Every section is
//! optional; omitted values fall back to the classic setup (σ = 10, ρ = 28,
//! β = 8/3 on `[0, 50]` with `h = 0.01`, starting from `(1, 1, 1)` and
//! `(1.01, 1, 1)`).
//!
//! ```yaml
//! parameters:
//!   rho: 28.0
//! integration:
//!   t0: 0.0
//!   t_end: 40.0
//!   step: 0.01
//! reference: { x: 1.0, y: 1.0, z: 1.0 }
//! perturbed: { x: 1.01, y: 1.0, z: 1.0 }
//! output_dir: target/lorenz
//! ```

use crate::models::LorenzParameters;
use crate::physics::State;
use crate::solver::{IntegrationConfig, SolverError};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Contents of a run file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfiguration {
    /// Field coefficients
    pub parameters: LorenzParameters,

    /// Time grid shared by both runs
    pub integration: IntegrationConfig,

    /// Initial state of the reference run
    pub reference: State,

    /// Initial state of the perturbed run
    pub perturbed: State,

    /// Where plots and CSV files go; `None` disables file output
    pub output_dir: Option<PathBuf>,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            parameters: LorenzParameters::classic(),
            integration: IntegrationConfig::default(),
            reference: State::new(1.0, 1.0, 1.0),
            perturbed: State::new(1.01, 1.0, 1.0),
            output_dir: None,
        }
    }
}

impl RunConfiguration {
    /// Parse and validate a run file held in memory
    pub fn from_yaml_str(text: &str) -> Result<Self, SolverError> {
        let configuration: Self = serde_yaml::from_str(text).map_err(|e| {
            SolverError::InvalidConfiguration { reason: e.to_string() }
        })?;

        configuration.validate()?;
        Ok(configuration)
    }

    /// Check coefficients, time grid and initial states
    pub fn validate(&self) -> Result<(), SolverError> {
        self.parameters.validate()?;
        self.integration.validate()?;

        for (name, state) in [("reference", &self.reference), ("perturbed", &self.perturbed)] {
            if !state.is_finite() {
                return Err(SolverError::InvalidConfiguration {
                    reason: format!("{} initial state {} is not finite", name, state),
                });
            }
        }

        Ok(())
    }

    /// Distance between the two initial states
    pub fn perturbation(&self) -> f64 {
        self.reference.distance(&self.perturbed)
    }
}

/// Load and validate a run file
///
/// # Errors
///
/// [`SolverError::InvalidConfiguration`] when the file cannot be opened or
/// parsed; any validation error of [`RunConfiguration::validate`].
pub fn load_run_configuration(path: impl AsRef<Path>) -> Result<RunConfiguration, SolverError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| SolverError::InvalidConfiguration {
        reason: format!("cannot open {}: {}", path.display(), e),
    })?;

    let configuration: RunConfiguration = serde_yaml::from_reader(file).map_err(|e| {
        SolverError::InvalidConfiguration {
            reason: format!("{}: {}", path.display(), e),
        }
    })?;

    configuration.validate()?;

    log::debug!("loaded run configuration from {}", path.display());

    Ok(configuration)
}
