// micrograd-core/src/ops/arithmetic/prod.rs

use crate::valuation::Valuation;

/// Computes \( c \prod_k x_k \). With no operands the result is `c`.
pub fn prod_forward(coefficient: f64, operands: &[Valuation]) -> Valuation {
    Valuation::new(coefficient * operands.iter().map(|v| v.value).product::<f64>())
}

/// Backward rule for \( f = c \prod_j x_j \).
///
/// The partial derivative with respect to \( x_k \) is
/// \\[ \frac{\partial f}{\partial x_k} = c \prod_{j \ne k} x_j \\]
/// which is read off the forward result as \( f / x_k \) when \( x_k \ne 0 \).
/// A zero operand falls back to multiplying the other operands, chosen by
/// position so that repeated operands are handled like any other.
pub fn prod_backward(coefficient: f64, result: &Valuation, operands: &mut [Valuation]) {
    let values: Vec<f64> = operands.iter().map(|v| v.value).collect();
    for (k, operand) in operands.iter_mut().enumerate() {
        let partial = if operand.value != 0.0 {
            result.value / operand.value
        } else {
            coefficient
                * values
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != k)
                    .map(|(_, v)| *v)
                    .product::<f64>()
        };
        operand.gradient += result.gradient * partial;
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "prod_test.rs"]
mod tests;
