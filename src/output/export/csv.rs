//! CSV export of trajectories
//!
//! Plain CSV readable by pandas, gnuplot, MATLAB or a spreadsheet.
//!
//! # Features
//!
//! - **Single run**: `time, x, y, z`
//! - **Comparison**: both runs side by side plus their distance
//! - **Metadata header**: optional `#` comment lines (stepper, grid, parameters)
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Validation**: empty data and non-finite values are rejected
//!
//! # Example
//!
//! ```rust,ignore
//! use lorenz_rs::output::export::{export_trajectory_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_trajectory(&trajectory).with_parameters(params);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_trajectory_csv(&trajectory, "lorenz.csv", Some(&config))?;
//! ```
//!
//! **Output** (`lorenz.csv`):
//! ```csv
//! # Lorenz System Trajectory
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Field: Lorenz
//! # Stepper: Runge Kutta (RK4)
//! # Time Steps: 5000
//! # Step Size: 0.01
//! # sigma = 10, rho = 28, beta = 2.6666666666666665
//! #
//! t,x,y,z
//! 0.000000,1.000000,1.000000,1.000000
//! 0.010000,1.012567,1.259918,0.984891
//! ...
//! ```

use crate::models::LorenzParameters;
use crate::physics::State;
use crate::solver::{Trajectory, TrajectoryPair};
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the time column (default: "t")
    pub time_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            time_header: "t".to_string(),
        }
    }
}

impl CsvConfig {
    /// Semicolon delimiter and comma decimal separator
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// 12 decimal places
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.delimiter == self.decimal_separator {
            return Err(format!(
                "Invalid configuration: delimiter and decimal separator are both '{}'",
                self.delimiter
            )
            .into());
        }
        Ok(())
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Vector field name (e.g. "Lorenz")
    pub field_name: Option<String>,

    /// Stepper name (e.g. "Runge Kutta (RK4)")
    pub stepper_name: Option<String>,

    /// Number of time steps
    pub time_steps: Option<usize>,

    /// Step size h
    pub step_size: Option<f64>,

    /// Field coefficients
    pub parameters: Option<LorenzParameters>,

    /// Additional key/value lines
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Fill field, stepper, step count and step size from the run metadata
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        Self {
            field_name: trajectory.get_metadata("field").map(str::to_string),
            stepper_name: trajectory.get_metadata("stepper").map(str::to_string),
            time_steps: trajectory.get_metadata("time steps").and_then(|v| v.parse().ok()),
            step_size: trajectory.get_metadata("dt").and_then(|v| v.parse().ok()),
            ..Default::default()
        }
    }

    /// Builder pattern: record the coefficients of the run
    pub fn with_parameters(mut self, parameters: LorenzParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: &str, value: &str) {
        self.custom.push((key.to_string(), value.to_string()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(out: &mut W, title: &str, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(out, "# {}", title)?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(field) = &metadata.field_name {
        writeln!(out, "# Field: {}", field)?;
    }
    if let Some(stepper) = &metadata.stepper_name {
        writeln!(out, "# Stepper: {}", stepper)?;
    }
    if let Some(steps) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", steps)?;
    }
    if let Some(h) = metadata.step_size {
        writeln!(out, "# Step Size: {}", h)?;
    }
    if let Some(p) = &metadata.parameters {
        writeln!(out, "# sigma = {}, rho = {}, beta = {}", p.sigma, p.rho, p.beta)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;

    Ok(())
}

fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn validate_trajectory(trajectory: &Trajectory, label: &str) -> Result<(), Box<dyn Error>> {
    if trajectory.is_empty() {
        return Err(format!("Empty data: {} trajectory has no samples", label).into());
    }

    if trajectory.time_points.len() != trajectory.states.len() {
        return Err(format!(
            "Data length mismatch: {} times versus {} states in {} trajectory",
            trajectory.time_points.len(),
            trajectory.states.len(),
            label
        )
        .into());
    }

    if trajectory.time_points.iter().any(|t| !t.is_finite()) {
        return Err(format!("Invalid data: NaN or Inf detected in {} times", label).into());
    }

    if let Some(index) = trajectory.states.iter().position(|s| !s.is_finite()) {
        return Err(format!("Invalid data: non-finite {} state at sample {}", label, index).into());
    }

    Ok(())
}

fn write_state<W: Write>(out: &mut W, state: &State, config: &CsvConfig) -> std::io::Result<()> {
    for value in state.to_array() {
        write!(out, "{}{}", config.delimiter, format_number(value, config))?;
    }
    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export one trajectory as `t, x, y, z`
///
/// # Errors
///
/// - Empty trajectory or mismatched time/state lengths
/// - NaN or Inf values
/// - Delimiter equal to the decimal separator
/// - File creation or write errors
pub fn export_trajectory_csv(
    trajectory: &Trajectory,
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {

    // ============================= Validation =============================

    validate_trajectory(trajectory, "the")?;

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    configuration.validate()?;

    // ============================= Write ==================================

    let mut out = BufWriter::new(File::create(output_path.as_ref())?);

    if configuration.include_metadata
        && let Some(metadata) = &configuration.metadata
    {
        write_metadata_header(&mut out, "Lorenz System Trajectory", metadata)?;
    }

    let d = configuration.delimiter;
    writeln!(out, "{}{d}x{d}y{d}z", configuration.time_header)?;

    for (time, state) in trajectory.iter() {
        write!(out, "{}", format_number(time, configuration))?;
        write_state(&mut out, state, configuration)?;
        writeln!(out)?;
    }

    out.flush()?;

    log::debug!(
        "wrote {} samples to {}",
        trajectory.len(),
        output_path.as_ref().display()
    );

    Ok(())
}

/// Export a comparison as `t, x_ref, y_ref, z_ref, x_pert, y_pert, z_pert, distance`
///
/// # Errors
///
/// Same as [`export_trajectory_csv`], plus runs that are not on the same
/// time grid.
pub fn export_comparison_csv(
    pair: &TrajectoryPair,
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {

    // ============================= Validation =============================

    validate_trajectory(&pair.reference, "reference")?;
    validate_trajectory(&pair.perturbed, "perturbed")?;

    let distances = crate::analysis::separation(&pair.reference, &pair.perturbed)?;

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    configuration.validate()?;

    // ============================= Write ==================================

    let mut out = BufWriter::new(File::create(output_path.as_ref())?);

    if configuration.include_metadata
        && let Some(metadata) = &configuration.metadata
    {
        write_metadata_header(&mut out, "Lorenz System Comparison", metadata)?;
    }

    let d = configuration.delimiter;
    writeln!(
        out,
        "{}{d}x_ref{d}y_ref{d}z_ref{d}x_pert{d}y_pert{d}z_pert{d}distance",
        configuration.time_header
    )?;

    for ((time, reference, perturbed), distance) in pair.iter().zip(distances) {
        write!(out, "{}", format_number(time, configuration))?;
        write_state(&mut out, reference, configuration)?;
        write_state(&mut out, perturbed, configuration)?;
        writeln!(out, "{d}{}", format_number(distance, configuration))?;
    }

    out.flush()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lorenz, LorenzParameters};
    use crate::solver::{compare, integrate, IntegrationConfig};
    use std::fs;
    use tempfile::NamedTempFile;

    fn short_run() -> Trajectory {
        integrate(
            &Lorenz,
            0.0,
            0.05,
            0.01,
            State::new(1.0, 1.0, 1.0),
            &LorenzParameters::classic(),
        )
        .unwrap()
    }

    fn data_lines(content: &str) -> Vec<&str> {
        content.lines().filter(|l| !l.starts_with('#')).collect()
    }

    #[test]
    fn test_export_trajectory_basic() {
        let file = NamedTempFile::new().unwrap();
        export_trajectory_csv(&short_run(), file.path(), None).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines = data_lines(&content);

        assert_eq!(lines[0], "t,x,y,z");
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "0.000000,1.000000,1.000000,1.000000");
        assert!(lines[6].starts_with("0.050000,"));
    }

    #[test]
    fn test_export_with_metadata() {
        let file = NamedTempFile::new().unwrap();
        let trajectory = short_run();

        let mut metadata = CsvMetadata::from_trajectory(&trajectory).with_parameters(LorenzParameters::classic());
        metadata.add_custom("Initial State", "(1, 1, 1)");
        let config = CsvConfig::default().with_metadata(metadata);

        export_trajectory_csv(&trajectory, file.path(), Some(&config)).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("# Lorenz System Trajectory"));
        assert!(content.contains("# Generated: "));
        assert!(content.contains("# Field: Lorenz"));
        assert!(content.contains("# Stepper: Runge Kutta (RK4)"));
        assert!(content.contains("# Time Steps: 5"));
        assert!(content.contains("# Step Size: 0.01"));
        assert!(content.contains("# sigma = 10, rho = 28"));
        assert!(content.contains("# Initial State: (1, 1, 1)"));
        assert_eq!(data_lines(&content)[0], "t,x,y,z");
    }

    #[test]
    fn test_export_european_format() {
        let file = NamedTempFile::new().unwrap();
        let config = CsvConfig::european().precision(2);

        export_trajectory_csv(&short_run(), file.path(), Some(&config)).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines = data_lines(&content);
        assert_eq!(lines[0], "t;x;y;z");
        assert_eq!(lines[1], "0,00;1,00;1,00;1,00");
    }

    #[test]
    fn test_conflicting_separators_are_rejected() {
        let file = NamedTempFile::new().unwrap();
        let config = CsvConfig::european().delimiter(',');

        assert!(export_trajectory_csv(&short_run(), file.path(), Some(&config)).is_err());
    }

    #[test]
    fn test_empty_trajectory_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let empty = Trajectory::new(Vec::new(), Vec::new());

        let error = export_trajectory_csv(&empty, file.path(), None).unwrap_err();
        assert!(error.to_string().contains("Empty data"));
    }

    #[test]
    fn test_non_finite_state_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let trajectory = Trajectory::new(
            vec![0.0, 1.0],
            vec![State::origin(), State::new(f64::INFINITY, 0.0, 0.0)],
        );

        let error = export_trajectory_csv(&trajectory, file.path(), None).unwrap_err();
        assert!(error.to_string().contains("sample 1"));
    }

    #[test]
    fn test_export_comparison() {
        let file = NamedTempFile::new().unwrap();
        let pair = compare(
            &Lorenz,
            &IntegrationConfig::new(0.0, 0.1, 0.01),
            State::new(1.0, 1.0, 1.0),
            State::new(1.01, 1.0, 1.0),
            &LorenzParameters::classic(),
        )
        .unwrap();

        export_comparison_csv(&pair, file.path(), None).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines = data_lines(&content);

        assert_eq!(lines[0], "t,x_ref,y_ref,z_ref,x_pert,y_pert,z_pert,distance");
        assert_eq!(lines.len(), 12);
        assert_eq!(
            lines[1],
            "0.000000,1.000000,1.000000,1.000000,1.010000,1.000000,1.000000,0.010000"
        );
    }

    #[test]
    fn test_comparison_on_different_grids_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let reference = short_run();
        let perturbed = Trajectory::new(vec![0.0], vec![State::origin()]);
        let pair = TrajectoryPair { reference, perturbed };

        assert!(export_comparison_csv(&pair, file.path(), None).is_err());
    }
}
