//! Summary statistics over per-trial samples.
//!
//! Both functions return NaN on empty input; callers treat that as
//! "insufficient data" rather than an error.

/// Arithmetic mean. NaN on empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Linear-interpolation percentile on a copied, sorted sequence.
/// `p` is in [0, 100]; index = p/100 * (n-1), interpolating between ranks.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let p = p.clamp(0.0, 100.0);
    let idx = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let w = idx - lo as f64;
    sorted[lo] * (1.0 - w) + sorted[hi] * w
}
