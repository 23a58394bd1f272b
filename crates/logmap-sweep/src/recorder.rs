use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use indexmap::IndexSet;
use logmap_core::errors::ErrorInfo;
use logmap_core::{BifurcationRecord, LogmapError, LyapunovRecord, OrbitComputer, SweepConfig};
use serde::{Deserialize, Serialize};

/// Filenames of the two tables persisted for one computation path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TablePaths {
    /// Bifurcation table CSV, relative to the output directory.
    pub bifurcation: PathBuf,
    /// Lyapunov table CSV, relative to the output directory.
    pub lyapunov: PathBuf,
}

/// Aggregate statistics summarising one path's sweep output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepSummary {
    /// Total bifurcation rows across all r values.
    pub bifurcation_rows: usize,
    /// Total Lyapunov rows (one per r value).
    pub lyapunov_rows: usize,
    /// Number of distinct post-transient states over the whole sweep,
    /// counted by exact f64 bit pattern.
    pub distinct_states: usize,
    /// Mean exponent over the parameter sequence.
    pub mean_exponent: f64,
    /// Fraction of r values with a strictly positive exponent.
    pub chaotic_fraction: f64,
}

/// Collects both output tables for one computation path and exports them.
#[derive(Debug, Clone)]
pub struct SweepRecorder {
    label: String,
    bifurcation: Vec<BifurcationRecord>,
    lyapunov: Vec<LyapunovRecord>,
}

impl SweepRecorder {
    /// Runs the computer over the parameter sequence and records both tables.
    pub fn collect(
        computer: &dyn OrbitComputer,
        r_values: &[f64],
        config: &SweepConfig,
    ) -> Result<Self, LogmapError> {
        Ok(Self {
            label: computer.label().to_string(),
            bifurcation: computer.bifurcation(r_values, config)?,
            lyapunov: computer.lyapunov(r_values, config)?,
        })
    }

    /// Label of the computer the tables were recorded from.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Immutable view over the recorded bifurcation table.
    pub fn bifurcation(&self) -> &[BifurcationRecord] {
        &self.bifurcation
    }

    /// Immutable view over the recorded Lyapunov table.
    pub fn lyapunov(&self) -> &[LyapunovRecord] {
        &self.lyapunov
    }

    /// Computes aggregate statistics from the recorded tables.
    pub fn summary(&self) -> SweepSummary {
        let mut states = IndexSet::new();
        for record in &self.bifurcation {
            states.insert(record.x.to_bits());
        }
        let (mean_exponent, chaotic_fraction) = if self.lyapunov.is_empty() {
            (0.0, 0.0)
        } else {
            let sum: f64 = self.lyapunov.iter().map(|record| record.exponent).sum();
            let chaotic = self
                .lyapunov
                .iter()
                .filter(|record| record.exponent > 0.0)
                .count();
            (
                sum / self.lyapunov.len() as f64,
                chaotic as f64 / self.lyapunov.len() as f64,
            )
        };
        SweepSummary {
            bifurcation_rows: self.bifurcation.len(),
            lyapunov_rows: self.lyapunov.len(),
            distinct_states: states.len(),
            mean_exponent,
            chaotic_fraction,
        }
    }

    /// Writes both tables as CSV files into `dir`, suffixed with the path
    /// label (`bifurcation_reference.csv` and so on), and returns the
    /// filenames relative to `dir`.
    pub fn write_tables(&self, dir: &Path) -> Result<TablePaths, LogmapError> {
        fs::create_dir_all(dir).map_err(|err| {
            LogmapError::Serde(
                ErrorInfo::new("table-mkdir", err.to_string())
                    .with_context("path", dir.display().to_string()),
            )
        })?;
        let paths = TablePaths {
            bifurcation: PathBuf::from(format!("bifurcation_{}.csv", self.label)),
            lyapunov: PathBuf::from(format!("lyapunov_{}.csv", self.label)),
        };
        write_csv(&dir.join(&paths.bifurcation), &self.bifurcation)?;
        write_csv(&dir.join(&paths.lyapunov), &self.lyapunov)?;
        Ok(paths)
    }
}

/// Reads a persisted bifurcation table back into records.
pub fn read_bifurcation_table(path: &Path) -> Result<Vec<BifurcationRecord>, LogmapError> {
    read_csv(path)
}

/// Reads a persisted Lyapunov table back into records.
pub fn read_lyapunov_table(path: &Path) -> Result<Vec<LyapunovRecord>, LogmapError> {
    read_csv(path)
}

fn read_csv<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, LogmapError> {
    let table_error = |code: &str, err: &dyn ToString| {
        LogmapError::Serde(
            ErrorInfo::new(code, err.to_string())
                .with_context("path", path.display().to_string()),
        )
    };
    let mut reader =
        csv::Reader::from_path(path).map_err(|err| table_error("table-open", &err))?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record.map_err(|err| table_error("table-parse", &err))?);
    }
    Ok(records)
}

fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<(), LogmapError> {
    let table_error = |code: &str, err: &dyn ToString| {
        LogmapError::Serde(
            ErrorInfo::new(code, err.to_string())
                .with_context("path", path.display().to_string()),
        )
    };
    let file = File::create(path).map_err(|err| table_error("table-create", &err))?;
    let mut writer = WriterBuilder::new().from_writer(BufWriter::new(file));
    for record in records {
        writer
            .serialize(record)
            .map_err(|err| table_error("table-write", &err))?;
    }
    writer.flush().map_err(|err| table_error("table-flush", &err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceComputer;
    use logmap_core::parameter_space;

    fn recorded(config: &SweepConfig) -> SweepRecorder {
        let r_values = parameter_space(config.r_min, config.r_max, config.samples).unwrap();
        SweepRecorder::collect(&ReferenceComputer, &r_values, config).unwrap()
    }

    #[test]
    fn summary_counts_match_the_tables() {
        let config = SweepConfig {
            samples: 12,
            num_generations: 150,
            transients: 100,
            ..SweepConfig::default()
        };
        let recorder = recorded(&config);
        let summary = recorder.summary();
        assert_eq!(
            summary.bifurcation_rows,
            config.samples * config.recorded_generations()
        );
        assert_eq!(summary.lyapunov_rows, config.samples);
        assert!(summary.distinct_states > 0);
        assert!(summary.distinct_states <= summary.bifurcation_rows);
        assert!((0.0..=1.0).contains(&summary.chaotic_fraction));
    }

    #[test]
    fn chaotic_fraction_reflects_the_exponent_signs() {
        let config = SweepConfig {
            samples: 12,
            num_generations: 150,
            transients: 100,
            ..SweepConfig::default()
        };
        let recorder = recorded(&config);
        let summary = recorder.summary();
        let positive = recorder
            .lyapunov()
            .iter()
            .filter(|record| record.exponent > 0.0)
            .count();
        assert_eq!(
            summary.chaotic_fraction,
            positive as f64 / config.samples as f64
        );
    }
}
