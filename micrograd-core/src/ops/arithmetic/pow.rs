// micrograd-core/src/ops/arithmetic/pow.rs

use crate::valuation::Valuation;

/// Raises the single operand to a fixed exponent.
pub fn pow_forward(exponent: f64, operand: &Valuation) -> Valuation {
    Valuation::new(operand.value.powf(exponent))
}

/// For \( x^q \) the derivative is \( q x^{q-1} \).
///
/// A zero exponent makes the result constant, so nothing is propagated.
pub fn pow_backward(exponent: f64, result: &Valuation, operand: &mut Valuation) {
    if exponent == 0.0 {
        return;
    }
    operand.gradient += result.gradient * exponent * operand.value.powf(exponent - 1.0);
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
