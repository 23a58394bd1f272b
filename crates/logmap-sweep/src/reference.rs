use logmap_core::{
    BifurcationRecord, LogmapError, LyapunovRecord, OrbitComputer, SweepConfig,
};

use crate::bifurcation::collect_bifurcation;
use crate::lyapunov::accumulate_lyapunov;

/// Plain iterator-based sweep path.
///
/// This is the readable formulation of the contract: one [`OrbitIterator`]
/// per r value, records appended as they are yielded. It is the baseline the
/// optimized path is benchmarked and equivalence-checked against.
///
/// [`OrbitIterator`]: logmap_core::OrbitIterator
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceComputer;

impl OrbitComputer for ReferenceComputer {
    fn label(&self) -> &'static str {
        "reference"
    }

    fn bifurcation(
        &self,
        r_values: &[f64],
        config: &SweepConfig,
    ) -> Result<Vec<BifurcationRecord>, LogmapError> {
        config.validate()?;
        Ok(collect_bifurcation(r_values, config))
    }

    fn lyapunov(
        &self,
        r_values: &[f64],
        config: &SweepConfig,
    ) -> Result<Vec<LyapunovRecord>, LogmapError> {
        config.validate()?;
        Ok(accumulate_lyapunov(r_values, config))
    }
}
