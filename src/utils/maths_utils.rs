use argminmax::ArgMinMax;

use crate::domain::Bar;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// Arithmetic mean. 0.0 for an empty slice.
pub fn mean(vec: &[f64]) -> f64 {
    if vec.is_empty() {
        return 0.0;
    }
    vec.iter().sum::<f64>() / vec.len() as f64
}

/// Highest high and lowest low over a (non-empty) window of bars.
/// Returns `(lowest_low, highest_high)`.
pub fn window_low_high(window: &[Bar]) -> (f64, f64) {
    debug_assert!(!window.is_empty());
    let highs: Vec<f64> = window.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = window.iter().map(|b| b.low).collect();
    (get_min(&lows), get_max(&highs))
}

/// Replace an exactly-zero (or undefined) divisor with `epsilon`
#[inline]
pub fn nonzero_or(value: f64, epsilon: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        epsilon
    } else {
        value
    }
}
