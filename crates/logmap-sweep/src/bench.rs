use std::time::Instant;

use logmap_core::errors::ErrorInfo;
use logmap_core::{BifurcationRecord, LogmapError, LyapunovRecord, OrbitComputer, SweepConfig};
use serde::{Deserialize, Serialize};

/// Relative tolerance accepted between the two paths' outputs.
///
/// Covers floating accumulation order differences only; both shipped
/// computers use identical operation order and land well inside it.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

const MISMATCH_LIMIT: usize = 8;

/// Wall-clock durations measured for one computation path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathTiming {
    /// Label of the computer that was timed.
    pub label: String,
    /// Milliseconds spent producing the bifurcation table.
    pub bifurcation_ms: f64,
    /// Milliseconds spent producing the Lyapunov table.
    pub lyapunov_ms: f64,
}

impl PathTiming {
    /// Combined duration over both tables.
    pub fn total_ms(&self) -> f64 {
        self.bifurcation_ms + self.lyapunov_ms
    }
}

/// One row where the two paths disagreed beyond tolerance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowMismatch {
    /// Zero-based row index into the table.
    pub row: usize,
    /// Column the disagreement was observed in.
    pub column: String,
    /// Value produced by the reference path.
    pub reference: f64,
    /// Value produced by the optimized path.
    pub optimized: f64,
}

/// Elementwise comparison outcome for one output table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableComparison {
    /// Number of rows compared.
    pub rows: usize,
    /// Largest relative error observed across all cells.
    pub max_relative_error: f64,
    /// First few offending rows, empty when the table is equivalent.
    pub mismatches: Vec<RowMismatch>,
}

/// Equivalence outcome over both output tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquivalenceReport {
    /// Relative tolerance the comparison ran under.
    pub tolerance: f64,
    /// Comparison of the bifurcation tables.
    pub bifurcation: TableComparison,
    /// Comparison of the Lyapunov tables.
    pub lyapunov: TableComparison,
}

impl EquivalenceReport {
    /// True when no cell of either table disagreed beyond tolerance.
    pub fn within_tolerance(&self) -> bool {
        self.bifurcation.mismatches.is_empty() && self.lyapunov.mismatches.is_empty()
    }
}

/// Summary returned after benchmarking the two paths over identical inputs.
///
/// Timing and equivalence are reported side by side but are distinct
/// concerns: a slow optimized path is a performance observation, while a
/// non-equivalent one is a correctness defect surfaced through
/// [`BenchmarkReport::ensure_equivalent`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkReport {
    /// Timing of the reference path.
    pub reference: PathTiming,
    /// Timing of the optimized path.
    pub optimized: PathTiming,
    /// Reference total divided by optimized total.
    pub speedup: f64,
    /// Elementwise equivalence outcome.
    pub equivalence: EquivalenceReport,
}

impl BenchmarkReport {
    /// Maps an out-of-tolerance comparison to a `Bench` error.
    pub fn ensure_equivalent(&self) -> Result<(), LogmapError> {
        if self.equivalence.within_tolerance() {
            return Ok(());
        }
        Err(LogmapError::Bench(
            ErrorInfo::new(
                "equivalence-failure",
                "reference and optimized outputs disagree beyond tolerance",
            )
            .with_context(
                "bifurcation_max_error",
                self.equivalence.bifurcation.max_relative_error.to_string(),
            )
            .with_context(
                "lyapunov_max_error",
                self.equivalence.lyapunov.max_relative_error.to_string(),
            )
            .with_context("tolerance", self.equivalence.tolerance.to_string()),
        ))
    }
}

/// Runs a declared reference and optimized computer over identical inputs,
/// timing each and checking the outputs for elementwise equivalence.
///
/// The harness never mutates the inputs and shares no state between the two
/// runs; each computer receives the same borrowed parameter sequence and
/// configuration.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkHarness {
    tolerance: f64,
}

impl Default for BenchmarkHarness {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl BenchmarkHarness {
    /// Creates a harness with the default tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the relative tolerance used by the equivalence check.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Executes both computers over `r_values` and compares their outputs.
    ///
    /// Row-count disagreement is reported as a hard error immediately; the
    /// elementwise comparison is meaningless across tables of different
    /// shape.
    pub fn run(
        &self,
        reference: &dyn OrbitComputer,
        optimized: &dyn OrbitComputer,
        r_values: &[f64],
        config: &SweepConfig,
    ) -> Result<BenchmarkReport, LogmapError> {
        config.validate()?;

        let (bif_reference, bif_reference_ms) = timed(|| reference.bifurcation(r_values, config))?;
        let (lya_reference, lya_reference_ms) = timed(|| reference.lyapunov(r_values, config))?;
        let (bif_optimized, bif_optimized_ms) = timed(|| optimized.bifurcation(r_values, config))?;
        let (lya_optimized, lya_optimized_ms) = timed(|| optimized.lyapunov(r_values, config))?;

        let equivalence = EquivalenceReport {
            tolerance: self.tolerance,
            bifurcation: compare_bifurcation(&bif_reference, &bif_optimized, self.tolerance)?,
            lyapunov: compare_lyapunov(&lya_reference, &lya_optimized, self.tolerance)?,
        };

        let reference_timing = PathTiming {
            label: reference.label().to_string(),
            bifurcation_ms: bif_reference_ms,
            lyapunov_ms: lya_reference_ms,
        };
        let optimized_timing = PathTiming {
            label: optimized.label().to_string(),
            bifurcation_ms: bif_optimized_ms,
            lyapunov_ms: lya_optimized_ms,
        };
        let speedup = reference_timing.total_ms() / optimized_timing.total_ms().max(1e-9);

        Ok(BenchmarkReport {
            reference: reference_timing,
            optimized: optimized_timing,
            speedup,
            equivalence,
        })
    }
}

fn timed<T>(run: impl FnOnce() -> Result<T, LogmapError>) -> Result<(T, f64), LogmapError> {
    let start = Instant::now();
    let value = run()?;
    Ok((value, start.elapsed().as_secs_f64() * 1e3))
}

/// Relative disagreement between two cells.
///
/// Exact equality (including both-NaN, which divergent configurations can
/// legitimately produce in both paths) counts as zero error; disagreement
/// involving a non-finite value counts as infinite error so it can never
/// slip under a finite tolerance.
fn relative_error(reference: f64, optimized: f64) -> f64 {
    if reference == optimized || (reference.is_nan() && optimized.is_nan()) {
        return 0.0;
    }
    let denom = reference.abs().max(optimized.abs());
    if !denom.is_finite() || denom == 0.0 {
        return f64::INFINITY;
    }
    (reference - optimized).abs() / denom
}

struct CellComparer {
    tolerance: f64,
    max_relative_error: f64,
    mismatches: Vec<RowMismatch>,
}

impl CellComparer {
    fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            max_relative_error: 0.0,
            mismatches: Vec::new(),
        }
    }

    fn cell(&mut self, row: usize, column: &str, reference: f64, optimized: f64) {
        let error = relative_error(reference, optimized);
        self.max_relative_error = self.max_relative_error.max(error);
        if error > self.tolerance && self.mismatches.len() < MISMATCH_LIMIT {
            self.mismatches.push(RowMismatch {
                row,
                column: column.to_string(),
                reference,
                optimized,
            });
        }
    }

    fn finish(self, rows: usize) -> TableComparison {
        TableComparison {
            rows,
            max_relative_error: self.max_relative_error,
            mismatches: self.mismatches,
        }
    }
}

fn row_count_error(table: &str, reference: usize, optimized: usize) -> LogmapError {
    LogmapError::Bench(
        ErrorInfo::new("row-count-mismatch", "output tables differ in shape")
            .with_context("table", table)
            .with_context("reference_rows", reference.to_string())
            .with_context("optimized_rows", optimized.to_string()),
    )
}

/// Elementwise comparison of two bifurcation tables.
///
/// Public so the equivalence check can also run over tables read back from
/// persisted artifacts, not only over in-memory results.
pub fn compare_bifurcation(
    reference: &[BifurcationRecord],
    optimized: &[BifurcationRecord],
    tolerance: f64,
) -> Result<TableComparison, LogmapError> {
    if reference.len() != optimized.len() {
        return Err(row_count_error(
            "bifurcation",
            reference.len(),
            optimized.len(),
        ));
    }
    let mut comparer = CellComparer::new(tolerance);
    for (row, (a, b)) in reference.iter().zip(optimized.iter()).enumerate() {
        comparer.cell(row, "r", a.r, b.r);
        comparer.cell(row, "x", a.x, b.x);
    }
    Ok(comparer.finish(reference.len()))
}

/// Elementwise comparison of two Lyapunov tables.
pub fn compare_lyapunov(
    reference: &[LyapunovRecord],
    optimized: &[LyapunovRecord],
    tolerance: f64,
) -> Result<TableComparison, LogmapError> {
    if reference.len() != optimized.len() {
        return Err(row_count_error("lyapunov", reference.len(), optimized.len()));
    }
    let mut comparer = CellComparer::new(tolerance);
    for (row, (a, b)) in reference.iter().zip(optimized.iter()).enumerate() {
        comparer.cell(row, "r", a.r, b.r);
        comparer.cell(row, "exponent", a.exponent, b.exponent);
    }
    Ok(comparer.finish(reference.len()))
}
