use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LogmapError};

/// YAML-configurable parameters governing one sweep over the control parameter.
///
/// The defaults reproduce the reference operating point: 300 evenly spaced
/// r values in [1, 4], 1000 map applications per r with the first 500
/// discarded as transients, starting from x = 0.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Lower bound of the control parameter interval (inclusive).
    #[serde(default = "default_r_min")]
    pub r_min: f64,
    /// Upper bound of the control parameter interval (inclusive).
    #[serde(default = "default_r_max")]
    pub r_max: f64,
    /// Number of evenly spaced r samples, including both bounds.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Total map applications per r value.
    #[serde(default = "default_num_generations")]
    pub num_generations: usize,
    /// Leading applications discarded before recording orbit states.
    #[serde(default = "default_transients")]
    pub transients: usize,
    /// Initial orbit state shared by every r value.
    #[serde(default = "default_initial_x")]
    pub initial_x: f64,
}

fn default_r_min() -> f64 {
    1.0
}

fn default_r_max() -> f64 {
    4.0
}

fn default_samples() -> usize {
    300
}

fn default_num_generations() -> usize {
    1000
}

fn default_transients() -> usize {
    500
}

fn default_initial_x() -> f64 {
    0.5
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            r_min: default_r_min(),
            r_max: default_r_max(),
            samples: default_samples(),
            num_generations: default_num_generations(),
            transients: default_transients(),
            initial_x: default_initial_x(),
        }
    }
}

impl SweepConfig {
    /// Number of recorded iterates per r value.
    pub fn recorded_generations(&self) -> usize {
        self.num_generations.saturating_sub(self.transients)
    }

    /// Checks the configuration invariants, rejecting (never clamping)
    /// degenerate iteration counts and parameter intervals.
    ///
    /// r values outside the map's stable domain (0, 4] are deliberately not
    /// rejected: divergent orbits are observable output, not a failure.
    pub fn validate(&self) -> Result<(), LogmapError> {
        if self.samples < 2 {
            return Err(LogmapError::Config(
                ErrorInfo::new("degenerate-samples", "at least two r samples are required")
                    .with_context("samples", self.samples.to_string())
                    .with_hint("inclusive spacing needs samples >= 2"),
            ));
        }
        if self.num_generations <= self.transients {
            return Err(LogmapError::Config(
                ErrorInfo::new(
                    "empty-recording-phase",
                    "num_generations must exceed transients",
                )
                .with_context("num_generations", self.num_generations.to_string())
                .with_context("transients", self.transients.to_string()),
            ));
        }
        if !self.r_min.is_finite() || !self.r_max.is_finite() {
            return Err(LogmapError::Config(
                ErrorInfo::new("non-finite-bounds", "r interval bounds must be finite")
                    .with_context("r_min", self.r_min.to_string())
                    .with_context("r_max", self.r_max.to_string()),
            ));
        }
        Ok(())
    }
}
