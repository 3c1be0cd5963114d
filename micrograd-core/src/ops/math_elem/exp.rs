// micrograd-core/src/ops/math_elem/exp.rs

use crate::valuation::Valuation;

pub fn exp_forward(operand: &Valuation) -> Valuation {
    Valuation::new(operand.value.exp())
}

/// The derivative of \( e^x \) is the forward result itself.
pub fn exp_backward(result: &Valuation, operand: &mut Valuation) {
    operand.gradient += result.gradient * result.value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_forward_backward() {
        let mut operand = Valuation::new(1.0);
        let mut result = exp_forward(&operand);
        assert_relative_eq!(result.value, std::f64::consts::E);

        result.gradient = 2.0;
        exp_backward(&result, &mut operand);
        assert_relative_eq!(operand.gradient, 2.0 * std::f64::consts::E);
    }
}
