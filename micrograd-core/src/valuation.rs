use std::fmt;

/// The value computed for a node during one evaluation, and the gradient
/// accumulated into it by the backward pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Valuation {
    pub value: f64,
    pub gradient: f64,
}

impl Valuation {
    /// A valuation with zero gradient.
    pub fn new(value: f64) -> Self {
        Valuation {
            value,
            gradient: 0.0,
        }
    }

    pub fn with_gradient(value: f64, gradient: f64) -> Self {
        Valuation { value, gradient }
    }
}

impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value = {}, grad = {}", self.value, self.gradient)
    }
}
