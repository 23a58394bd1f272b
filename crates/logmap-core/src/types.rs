use serde::{Deserialize, Serialize};

/// One recorded post-transient orbit state, tagged with its control parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BifurcationRecord {
    /// Control parameter the orbit was iterated under.
    pub r: f64,
    /// Orbit state visited during the recording phase.
    pub x: f64,
}

/// Averaged Lyapunov exponent for one control parameter.
///
/// Positive exponents indicate chaos, negative exponents a stable or
/// periodic regime, and values near zero mark bifurcation points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LyapunovRecord {
    /// Control parameter the exponent was averaged over.
    pub r: f64,
    /// Arithmetic mean of `ln|f'(x)|` over the full iteration history.
    pub exponent: f64,
}
