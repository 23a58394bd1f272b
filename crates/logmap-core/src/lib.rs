#![deny(missing_docs)]
#![doc = "Core traits and data types for the logmap sweep engine."]

pub mod errors;
pub mod params;
pub mod provenance;
mod config;
mod orbit;
mod types;

pub use config::SweepConfig;
pub use errors::{ErrorInfo, LogmapError};
pub use orbit::{logistic_derivative, logistic_step, OrbitIterator};
pub use params::parameter_space;
pub use provenance::{RunProvenance, SchemaVersion};
pub use types::{BifurcationRecord, LyapunovRecord};

/// Capability contract shared by the reference and optimized sweep paths.
///
/// Both implementations must honour the same semantics over an identical
/// parameter sequence: per-r records in the order of `r_values`, temporal
/// order within one r, and the skip-as-zero singularity policy for the
/// exponent average. The benchmark harness compares implementations of this
/// trait structurally, so any divergence beyond floating accumulation noise
/// is a correctness defect of the implementation, not of the harness.
pub trait OrbitComputer: Send + Sync {
    /// Short stable label identifying the implementation in artifacts.
    fn label(&self) -> &'static str;

    /// Computes the bifurcation table: one record per post-transient iterate
    /// per r value, `num_generations - transients` records per r.
    fn bifurcation(
        &self,
        r_values: &[f64],
        config: &SweepConfig,
    ) -> Result<Vec<BifurcationRecord>, LogmapError>;

    /// Computes the Lyapunov table: exactly one averaged exponent per r
    /// value, accumulated over the full iteration history.
    fn lyapunov(
        &self,
        r_values: &[f64],
        config: &SweepConfig,
    ) -> Result<Vec<LyapunovRecord>, LogmapError>;
}
