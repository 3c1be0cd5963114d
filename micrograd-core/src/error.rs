use crate::ident::NodeId;
use thiserror::Error;

/// Custom error type for graph construction, binding and evaluation.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicrogradError {
    #[error("Node {ident} does not exist in this graph")]
    UnknownNode { ident: NodeId },

    #[error("Only Variable nodes can be bound in an assignment, but node {ident} is an operator")]
    NotAVariable { ident: NodeId },

    #[error("Operation '{operation}' mixes values from different graphs")]
    GraphMismatch { operation: String },

    #[error("Operation '{operation}' cannot modify the graph while it is being read")]
    GraphBorrowed { operation: String },

    #[error("Operator {operator} expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        actual: usize,
    },

    #[error("Assignment leaves entry nodes {missing:?} unbound")]
    IncompleteAssignment { missing: Vec<NodeId> },

    #[error("Expected {expected} weights, got {actual}")]
    WeightCountMismatch { expected: usize, actual: usize },
}
