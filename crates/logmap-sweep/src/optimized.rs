use logmap_core::{
    BifurcationRecord, LogmapError, LyapunovRecord, OrbitComputer, SweepConfig,
};

/// Allocation-conscious sweep path.
///
/// Performs the same arithmetic as [`ReferenceComputer`] in the same order,
/// so the outputs agree bitwise; the gains come from exact-capacity
/// preallocation and inlined stepping with no iterator adaptor in the hot
/// loop. Execution stays sequential over `r_values` so the output ordering
/// contract holds by construction.
///
/// [`ReferenceComputer`]: crate::ReferenceComputer
#[derive(Debug, Default, Clone, Copy)]
pub struct OptimizedComputer;

impl OrbitComputer for OptimizedComputer {
    fn label(&self) -> &'static str {
        "optimized"
    }

    fn bifurcation(
        &self,
        r_values: &[f64],
        config: &SweepConfig,
    ) -> Result<Vec<BifurcationRecord>, LogmapError> {
        config.validate()?;
        let recorded = config.recorded_generations();
        let mut data = Vec::with_capacity(r_values.len() * recorded);
        for &r in r_values {
            let mut x = config.initial_x;
            for _ in 0..config.transients {
                x = r * x * (1.0 - x);
            }
            for _ in 0..recorded {
                x = r * x * (1.0 - x);
                data.push(BifurcationRecord { r, x });
            }
        }
        Ok(data)
    }

    fn lyapunov(
        &self,
        r_values: &[f64],
        config: &SweepConfig,
    ) -> Result<Vec<LyapunovRecord>, LogmapError> {
        config.validate()?;
        let mut data = Vec::with_capacity(r_values.len());
        for &r in r_values {
            let mut x = config.initial_x;
            let mut sum = 0.0;
            for _ in 0..config.num_generations {
                x = r * x * (1.0 - x);
                let derivative = r * (1.0 - 2.0 * x);
                if derivative != 0.0 {
                    sum += derivative.abs().ln();
                }
            }
            data.push(LyapunovRecord {
                r,
                exponent: sum / config.num_generations as f64,
            });
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceComputer;
    use logmap_core::{parameter_space, OrbitComputer};

    #[test]
    fn agrees_bitwise_with_the_reference_path() {
        let config = SweepConfig {
            samples: 16,
            num_generations: 200,
            transients: 80,
            ..SweepConfig::default()
        };
        let r_values = parameter_space(config.r_min, config.r_max, config.samples).unwrap();
        let reference = ReferenceComputer;
        let optimized = OptimizedComputer;

        let bif_ref = reference.bifurcation(&r_values, &config).unwrap();
        let bif_opt = optimized.bifurcation(&r_values, &config).unwrap();
        assert_eq!(bif_ref, bif_opt);

        let lya_ref = reference.lyapunov(&r_values, &config).unwrap();
        let lya_opt = optimized.lyapunov(&r_values, &config).unwrap();
        assert_eq!(lya_ref, lya_opt);
    }

    #[test]
    fn invalid_config_is_rejected_before_computing() {
        let config = SweepConfig {
            num_generations: 10,
            transients: 10,
            ..SweepConfig::default()
        };
        let err = OptimizedComputer.bifurcation(&[2.0], &config).unwrap_err();
        assert_eq!(err.info().code, "empty-recording-phase");
    }
}
