//! Numerically stable scalar helpers shared by scoring and reporting.

/// Logistic sigmoid 1 / (1 + e^-z), stable for large |z|.
///
/// The naive form overflows e^-z for very negative z; branching on the
/// sign keeps the exponent non-positive in both cases.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Round to `places` decimal places.
///
/// Wire payloads report probabilities rounded to 4 places and percentages
/// to 1 or 2, matching the documented response shapes.
pub fn round_dp(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Clamp a value into [lo, hi].
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}
