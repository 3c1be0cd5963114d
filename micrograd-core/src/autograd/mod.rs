// Forward evaluation and reverse-mode differentiation of value graphs
pub mod config;
pub mod grad_check;
pub mod graph_valuation;

pub use config::{Completeness, EvaluationConfig};
pub use grad_check::{check_gradients, GradCheckConfig, GradCheckError};
pub use graph_valuation::GraphValuation;
