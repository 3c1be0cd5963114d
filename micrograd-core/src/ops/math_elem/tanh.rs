// micrograd-core/src/ops/math_elem/tanh.rs

use crate::valuation::Valuation;

/// Hyperbolic tangent \( (e^{2x} - 1) / (e^{2x} + 1) \).
///
/// `f64::tanh` evaluates the same function without overflowing \( e^{2x} \)
/// for large inputs.
pub fn tanh_forward(operand: &Valuation) -> Valuation {
    Valuation::new(operand.value.tanh())
}

/// \( \frac{d}{dx} \tanh x = 1 - \tanh^2 x \), taken from the forward result.
pub fn tanh_backward(result: &Valuation, operand: &mut Valuation) {
    operand.gradient += result.gradient * (1.0 - result.value * result.value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_forward_matches_exponential_form() {
        for x in [-3.0_f64, -0.5, 0.0, 0.8814, 2.0] {
            let p = (2.0 * x).exp();
            assert_relative_eq!(tanh_forward(&Valuation::new(x)).value, (p - 1.0) / (p + 1.0), epsilon = 1e-12);
        }
        // No overflow for large inputs
        assert_eq!(tanh_forward(&Valuation::new(1000.0)).value, 1.0);
    }

    #[test]
    fn test_tanh_backward_uses_output() {
        let mut operand = Valuation::new(0.8814);
        let mut result = tanh_forward(&operand);
        result.gradient = 1.0;
        tanh_backward(&result, &mut operand);
        assert_relative_eq!(operand.gradient, 1.0 - result.value.powi(2));
        assert_relative_eq!(operand.gradient, 0.5, epsilon = 1e-4);
    }
}
