// Elementary unary functions
pub mod exp;
pub mod tanh;

pub use exp::{exp_backward, exp_forward};
pub use tanh::{tanh_backward, tanh_forward};
