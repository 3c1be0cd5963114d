// micrograd-core/src/ops/mod.rs

pub mod arithmetic;
pub mod math_elem;

use crate::error::MicrogradError;
use crate::valuation::Valuation;
use arithmetic::{pow_backward, pow_forward, prod_backward, prod_forward, sum_backward, sum_forward};
use math_elem::{exp_backward, exp_forward, tanh_backward, tanh_forward};
use std::fmt;

/// Payload of a value graph node: a free input or an operator over the
/// node's predecessors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueType {
    Variable,
    Operator(Operator),
}

impl ValueType {
    pub fn is_variable(&self) -> bool {
        matches!(self, ValueType::Variable)
    }

    pub fn as_operator(&self) -> Option<&Operator> {
        match self {
            ValueType::Operator(op) => Some(op),
            ValueType::Variable => None,
        }
    }
}

impl From<Operator> for ValueType {
    fn from(op: Operator) -> Self {
        ValueType::Operator(op)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Variable => write!(f, "var"),
            ValueType::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// The closed set of differentiable operators.
///
/// `Sum` and `Prod` take any number of operands; the others take exactly one.
/// Operand order follows the node's predecessor order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Sum { bias: f64 },
    Prod { coefficient: f64 },
    Pow { exponent: f64 },
    Tanh,
    Exp,
}

impl Operator {
    /// `Sum` with no bias.
    pub fn sum() -> Self {
        Operator::Sum { bias: 0.0 }
    }

    /// `Prod` with unit coefficient.
    pub fn prod() -> Self {
        Operator::Prod { coefficient: 1.0 }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Operator::Sum { .. } => "+",
            Operator::Prod { .. } => "×",
            Operator::Pow { .. } => "^",
            Operator::Tanh => "tanh",
            Operator::Exp => "exp",
        }
    }

    /// Required operand count, `None` when any count is accepted.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Operator::Sum { .. } | Operator::Prod { .. } => None,
            Operator::Pow { .. } | Operator::Tanh | Operator::Exp => Some(1),
        }
    }

    pub fn check_arity(&self, actual: usize) -> Result<(), MicrogradError> {
        match self.arity() {
            Some(expected) if expected != actual => Err(MicrogradError::ArityMismatch {
                operator: self.to_string(),
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }

    /// Computes this operator's result with a zero gradient.
    ///
    /// # Errors
    /// `ArityMismatch` when a unary operator gets other than one operand.
    pub fn try_forward(&self, operands: &[Valuation]) -> Result<Valuation, MicrogradError> {
        self.check_arity(operands.len())?;
        let result = match *self {
            Operator::Sum { bias } => sum_forward(bias, operands),
            Operator::Prod { coefficient } => prod_forward(coefficient, operands),
            Operator::Pow { exponent } => pow_forward(exponent, &operands[0]),
            Operator::Tanh => tanh_forward(&operands[0]),
            Operator::Exp => exp_forward(&operands[0]),
        };
        Ok(result)
    }

    /// Panicking form of [`Operator::try_forward`].
    pub fn forward(&self, operands: &[Valuation]) -> Valuation {
        self.try_forward(operands)
            .unwrap_or_else(|e| panic!("Operator forward failed: {}", e))
    }

    /// Adds `result.gradient` times the local partial derivative into each
    /// operand's gradient. Existing gradients are accumulated into, never
    /// replaced.
    ///
    /// Mathematically, for \( f(x_1, \dots, x_n) \) and a downstream quantity
    /// \( L \), operand \( k \) receives
    /// \\[ \frac{\partial L}{\partial f} \cdot \frac{\partial f}{\partial x_k} \\]
    pub fn try_backward(&self, result: &Valuation, operands: &mut [Valuation]) -> Result<(), MicrogradError> {
        self.check_arity(operands.len())?;
        match *self {
            Operator::Sum { .. } => sum_backward(result, operands),
            Operator::Prod { coefficient } => prod_backward(coefficient, result, operands),
            Operator::Pow { exponent } => pow_backward(exponent, result, &mut operands[0]),
            Operator::Tanh => tanh_backward(result, &mut operands[0]),
            Operator::Exp => exp_backward(result, &mut operands[0]),
        }
        Ok(())
    }

    /// Panicking form of [`Operator::try_backward`].
    pub fn backward(&self, result: &Valuation, operands: &mut [Valuation]) {
        self.try_backward(result, operands)
            .unwrap_or_else(|e| panic!("Operator backward failed: {}", e))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = self.glyph();
        match *self {
            Operator::Sum { bias } if bias != 0.0 => write!(f, "{} {}", glyph, bias),
            Operator::Prod { coefficient } if coefficient != 1.0 => write!(f, "{}{}", coefficient, glyph),
            Operator::Pow { exponent } => write!(f, "{}{}", glyph, exponent),
            _ => write!(f, "{}", glyph),
        }
    }
}
