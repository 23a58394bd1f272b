use logmap_core::{BifurcationRecord, OrbitIterator, SweepConfig};

/// Collects the post-transient orbit states for every r value in sequence
/// order.
///
/// One record is appended per recorded iterate, so each r contributes
/// exactly `num_generations - transients` rows, in temporal order. The
/// overall table follows the order of `r_values` regardless of how the
/// caller produced that sequence.
pub fn collect_bifurcation(r_values: &[f64], config: &SweepConfig) -> Vec<BifurcationRecord> {
    let mut data = Vec::new();
    for &r in r_values {
        let orbit = OrbitIterator::recording(
            r,
            config.initial_x,
            config.transients,
            config.num_generations,
        );
        for x in orbit {
            data.push(BifurcationRecord { r, x });
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use logmap_core::parameter_space;

    fn small_config() -> SweepConfig {
        SweepConfig {
            samples: 8,
            num_generations: 60,
            transients: 20,
            ..SweepConfig::default()
        }
    }

    #[test]
    fn each_parameter_contributes_exactly_the_recorded_count() {
        let config = small_config();
        let r_values = parameter_space(config.r_min, config.r_max, config.samples).unwrap();
        let data = collect_bifurcation(&r_values, &config);
        assert_eq!(data.len(), r_values.len() * config.recorded_generations());
        for (idx, &r) in r_values.iter().enumerate() {
            let count = data.iter().filter(|record| record.r == r).count();
            assert_eq!(count, config.recorded_generations(), "r index {idx}");
        }
    }

    #[test]
    fn rows_follow_the_parameter_sequence_order() {
        let config = small_config();
        let r_values = parameter_space(config.r_min, config.r_max, config.samples).unwrap();
        let data = collect_bifurcation(&r_values, &config);
        let recorded = config.recorded_generations();
        for (idx, record) in data.iter().enumerate() {
            assert_eq!(record.r, r_values[idx / recorded]);
        }
    }

    #[test]
    fn period_two_attractor_alternates() {
        // r = 3.2 sits inside the first period-doubling window.
        let config = SweepConfig {
            num_generations: 600,
            transients: 500,
            ..SweepConfig::default()
        };
        let data = collect_bifurcation(&[3.2], &config);
        let distinct: Vec<f64> = {
            let mut seen = Vec::new();
            for record in &data {
                if !seen.iter().any(|&x: &f64| (x - record.x).abs() < 1e-9) {
                    seen.push(record.x);
                }
            }
            seen
        };
        assert_eq!(distinct.len(), 2);
    }
}
