//! Scalar automatic differentiation over an append-only computation graph.
//!
//! Graphs are built through [`ValueGraph`] and [`Value`], bound to concrete
//! inputs with an [`Assignment`], then evaluated forward and differentiated in
//! reverse by [`GraphValuation`].

pub mod assignment;
pub mod autograd;
pub mod error;
pub mod graph;
pub mod ident;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod valuation;
pub mod value;

// Re-export the types most callers need directly from the crate root
pub use assignment::Assignment;
pub use autograd::{Completeness, EvaluationConfig, GraphValuation};
pub use error::MicrogradError;
pub use graph::{Dag, DagNode};
pub use ident::{IdentManager, NodeId};
pub use ops::{Operator, ValueType};
pub use valuation::Valuation;
pub use value::{Value, ValueDag, ValueGraph};
