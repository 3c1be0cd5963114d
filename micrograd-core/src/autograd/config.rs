/// How an evaluation treats entry nodes that the assignment leaves unbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completeness {
    /// Unbound entries evaluate as 0. A warning is logged.
    #[default]
    Permissive,
    /// Unbound entries are reported as `IncompleteAssignment` before any
    /// evaluation takes place.
    Strict,
}

/// Options for [`GraphValuation::run_with`](super::GraphValuation::run_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluationConfig {
    pub completeness: Completeness,
}

impl EvaluationConfig {
    pub fn permissive() -> Self {
        EvaluationConfig {
            completeness: Completeness::Permissive,
        }
    }

    pub fn strict() -> Self {
        EvaluationConfig {
            completeness: Completeness::Strict,
        }
    }
}
