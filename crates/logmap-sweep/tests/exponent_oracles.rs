use logmap_sweep::lyapunov_exponent;

// The analytic exponent at r = 4 is ln 2; a generic initial state keeps the
// orbit on the chaotic attractor. x = 0.5 is excluded here on purpose: it is
// the preimage of the unstable fixed point at 0, so its orbit leaves the
// attractor after two steps.
#[test]
fn fully_chaotic_regime_matches_the_analytic_value() {
    let exponent = lyapunov_exponent(4.0, 0.1, 10_000);
    assert!(
        (exponent - std::f64::consts::LN_2).abs() < 1e-2,
        "exponent {exponent} not within 1e-2 of ln 2"
    );
}

#[test]
fn stable_fixed_point_regime_is_negative() {
    // r = 2 sits below the first bifurcation; from a generic state the
    // orbit converges to the fixed point and the exponent is negative.
    let exponent = lyapunov_exponent(2.0, 0.3, 1000);
    assert!(exponent < 0.0, "exponent {exponent} should be negative");
}

#[test]
fn period_two_window_is_negative() {
    let exponent = lyapunov_exponent(3.2, 0.5, 1000);
    assert!(exponent < 0.0);
}

#[test]
fn chaotic_window_is_positive() {
    // r = 3.9 lies inside the chaotic band beyond the accumulation point.
    let exponent = lyapunov_exponent(3.9, 0.5, 10_000);
    assert!(exponent > 0.0);
}

#[test]
fn exponent_is_finite_across_the_sweep_domain() {
    for i in 0..=30 {
        let r = 1.0 + 3.0 * i as f64 / 30.0;
        let exponent = lyapunov_exponent(r, 0.5, 1000);
        assert!(exponent.is_finite(), "non-finite exponent at r = {r}");
    }
}
