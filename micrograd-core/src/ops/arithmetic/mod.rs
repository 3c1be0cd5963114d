// Operators whose parameter folds in a scalar operand
pub mod pow;
pub mod prod;
pub mod sum;

pub use pow::{pow_backward, pow_forward};
pub use prod::{prod_backward, prod_forward};
pub use sum::{sum_backward, sum_forward};
