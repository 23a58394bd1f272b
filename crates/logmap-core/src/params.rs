//! Deterministic construction of the control-parameter sequence.

use crate::errors::{ErrorInfo, LogmapError};

/// Produces `samples` evenly spaced values covering `[min, max]` inclusive of
/// both bounds, ordered as generated.
///
/// The i-th value is `min + i * (max - min) / (samples - 1)`. Fewer than two
/// samples would make the spacing degenerate and is rejected.
pub fn parameter_space(min: f64, max: f64, samples: usize) -> Result<Vec<f64>, LogmapError> {
    if samples < 2 {
        return Err(LogmapError::Params(
            ErrorInfo::new("degenerate-spacing", "at least two samples are required")
                .with_context("samples", samples.to_string()),
        ));
    }
    let span = max - min;
    let step = span / (samples - 1) as f64;
    let values = (0..samples).map(|i| min + i as f64 * step).collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_both_bounds() {
        let values = parameter_space(1.0, 4.0, 300).unwrap();
        assert_eq!(values.len(), 300);
        assert_eq!(values[0], 1.0);
        assert!((values[299] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn spacing_is_uniform() {
        let values = parameter_space(0.0, 1.0, 5).unwrap();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn ascending_order_is_preserved() {
        let values = parameter_space(1.0, 4.0, 64).unwrap();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn rejects_fewer_than_two_samples() {
        let err = parameter_space(1.0, 4.0, 1).unwrap_err();
        assert_eq!(err.info().code, "degenerate-spacing");
    }
}
