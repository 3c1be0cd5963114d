// micrograd-core/src/ops/arithmetic/sum.rs

use crate::valuation::Valuation;

/// Computes \( b + \sum_k x_k \) over any number of operands.
pub fn sum_forward(bias: f64, operands: &[Valuation]) -> Valuation {
    Valuation::new(bias + operands.iter().map(|v| v.value).sum::<f64>())
}

/// For \( f = b + \sum_k x_k \) every partial derivative is 1, so each
/// operand receives the upstream gradient unchanged.
pub fn sum_backward(result: &Valuation, operands: &mut [Valuation]) {
    for operand in operands.iter_mut() {
        operand.gradient += result.gradient;
    }
}
