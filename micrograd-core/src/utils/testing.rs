use crate::valuation::Valuation;

/// Checks that a valuation's value and gradient are both within `tolerance`
/// of the expected numbers.
/// Panics with the offending field otherwise.
pub fn check_valuation_near(actual: &Valuation, expected_value: f64, expected_gradient: f64, tolerance: f64) {
    let value_diff = (actual.value - expected_value).abs();
    if value_diff.is_nan() || value_diff > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.value, expected_value, value_diff, tolerance
        );
    }

    let gradient_diff = (actual.gradient - expected_gradient).abs();
    if gradient_diff.is_nan() || gradient_diff > tolerance {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.gradient, expected_gradient, gradient_diff, tolerance
        );
    }
}
