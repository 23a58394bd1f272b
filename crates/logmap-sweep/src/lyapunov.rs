use logmap_core::{logistic_derivative, LyapunovRecord, OrbitIterator, SweepConfig};

/// Averages `ln|f'(x)|` over the full iteration history of one r value.
///
/// The derivative is evaluated at every post-update iterate, transients
/// included. Iterates whose derivative is exactly zero are skipped so the
/// log of zero never enters the sum; the averaging denominator stays
/// `num_generations`, treating skipped terms as zero contribution rather
/// than removing them from the count. Output compatibility depends on this
/// denominator, so it must never be renormalized to the non-skipped count.
pub fn lyapunov_exponent(r: f64, x0: f64, num_generations: usize) -> f64 {
    let mut sum = 0.0;
    for x in OrbitIterator::full(r, x0, num_generations) {
        let derivative = logistic_derivative(x, r);
        if derivative != 0.0 {
            sum += derivative.abs().ln();
        }
    }
    sum / num_generations as f64
}

/// Computes one averaged exponent per r value, in sequence order.
pub fn accumulate_lyapunov(r_values: &[f64], config: &SweepConfig) -> Vec<LyapunovRecord> {
    let mut data = Vec::new();
    for &r in r_values {
        data.push(LyapunovRecord {
            r,
            exponent: lyapunov_exponent(r, config.initial_x, config.num_generations),
        });
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_record_per_parameter() {
        let config = SweepConfig {
            num_generations: 100,
            transients: 50,
            ..SweepConfig::default()
        };
        let r_values = [1.0, 2.5, 3.7];
        let data = accumulate_lyapunov(&r_values, &config);
        assert_eq!(data.len(), 3);
        for (record, &r) in data.iter().zip(r_values.iter()) {
            assert_eq!(record.r, r);
        }
    }

    #[test]
    fn zero_derivative_terms_contribute_nothing() {
        // At r = 2 the orbit started from x = 0.5 sits on the superstable
        // fixed point: every iterate is exactly 0.5 and every derivative is
        // exactly zero. All terms are skipped, so the sum stays 0 while the
        // denominator stays num_generations, giving exactly 0.0 (a
        // renormalized denominator would divide zero by zero here).
        let exponent = lyapunov_exponent(2.0, 0.5, 1000);
        assert!(exponent.is_finite());
        assert_eq!(exponent, 0.0);
    }

    #[test]
    fn stable_regime_is_negative_off_the_superstable_orbit() {
        // Same r = 2 regime, but approached from a generic state: the finite
        // approach to the fixed point contributes strictly negative terms.
        let exponent = lyapunov_exponent(2.0, 0.3, 1000);
        assert!(exponent < 0.0);
    }

    #[test]
    fn skipped_terms_keep_the_denominator_fixed() {
        // One generation at r = 2 from x = 0.5: the single term is skipped
        // and the average is 0 / 1, not a division by an empty count.
        let exponent = lyapunov_exponent(2.0, 0.5, 1);
        assert_eq!(exponent, 0.0);
    }

    #[test]
    fn matches_manual_accumulation() {
        let r = 3.9;
        let x0 = 0.5;
        let generations = 200;
        let mut x = x0;
        let mut sum = 0.0;
        for _ in 0..generations {
            x = logmap_core::logistic_step(x, r);
            let derivative = logistic_derivative(x, r);
            if derivative != 0.0 {
                sum += derivative.abs().ln();
            }
        }
        let expected = sum / generations as f64;
        assert_eq!(lyapunov_exponent(r, x0, generations), expected);
    }
}
