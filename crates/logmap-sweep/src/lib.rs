#![deny(missing_docs)]

//! Bifurcation and Lyapunov sweep computations over the logistic map,
//! with a benchmark harness comparing the reference and optimized paths.

/// Benchmark harness timing both paths and checking output equivalence.
pub mod bench;
/// Post-transient orbit state collection.
pub mod bifurcation;
/// Canonical JSON and stable hashing helpers.
pub mod hash;
/// Full-history exponent accumulation.
pub mod lyapunov;
/// Sweep manifest serialization helpers.
pub mod manifest;
/// Allocation-conscious sweep path.
pub mod optimized;
/// Table recording, summary statistics and CSV export.
pub mod recorder;
/// Iterator-based sweep path.
pub mod reference;

pub use bench::{
    compare_bifurcation, compare_lyapunov, BenchmarkHarness, BenchmarkReport, EquivalenceReport,
    PathTiming, RowMismatch, TableComparison, DEFAULT_TOLERANCE,
};
pub use bifurcation::collect_bifurcation;
pub use hash::{from_json_slice, stable_hash_string, to_canonical_json_bytes};
pub use lyapunov::{accumulate_lyapunov, lyapunov_exponent};
pub use manifest::{provenance_for, SweepManifest};
pub use optimized::OptimizedComputer;
pub use recorder::{
    read_bifurcation_table, read_lyapunov_table, SweepRecorder, SweepSummary, TablePaths,
};
pub use reference::ReferenceComputer;
