// micrograd-core/src/autograd/graph_valuation.rs

use crate::assignment::Assignment;
use crate::autograd::config::{Completeness, EvaluationConfig};
use crate::error::MicrogradError;
use crate::ident::NodeId;
use crate::valuation::Valuation;
use crate::value::Value;
use std::collections::BTreeSet;

/// Values and gradients of every node of a graph for one assignment.
///
/// The valuations live in a side table indexed by node identifier, so the
/// graph itself is never modified by an evaluation. The table covers the
/// nodes that existed when [`GraphValuation::initialize`] was called; nodes
/// appended to the graph afterwards are ignored by this run.
#[derive(Debug, Clone)]
pub struct GraphValuation {
    assignment: Assignment,
    assigned: Vec<Valuation>,
    roots: BTreeSet<NodeId>,
}

impl GraphValuation {
    /// Seeds one valuation per node: bound entries take their assigned
    /// input, everything else starts at 0. Gradients start at 0.
    ///
    /// The assignment does not have to be complete. Unbound entries simply
    /// evaluate as 0, so callers that care should check
    /// [`Assignment::is_complete`] first or use [`GraphValuation::run_with`]
    /// in strict mode.
    pub fn initialize(assignment: &Assignment) -> Self {
        let dag = assignment.graph().dag();
        if !assignment.is_complete() {
            log::warn!(
                "GraphValuation: entries {:?} are unbound and will evaluate as 0",
                assignment.missing()
            );
        }
        let assigned: Vec<Valuation> = dag
            .nodes()
            .map(|node| Valuation::new(assignment.get(node.ident()).unwrap_or(0.0)))
            .collect();
        let roots: BTreeSet<NodeId> = dag.roots().map(|node| node.ident()).collect();
        log::debug!(
            "GraphValuation: initialized {} node(s), {} root(s)",
            assigned.len(),
            roots.len()
        );
        drop(dag);

        GraphValuation {
            assignment: assignment.clone(),
            assigned,
            roots,
        }
    }

    /// Recomputes every operator node in creation order. Variable nodes keep
    /// their seeded value.
    ///
    /// # Errors
    /// `ArityMismatch` if an operator node has the wrong number of operands.
    pub fn try_forward(&mut self) -> Result<(), MicrogradError> {
        let dag = self.assignment.graph().dag();
        let covered = self.assigned.len();
        for node in dag.topological(false).take(covered) {
            if let Some(op) = node.data().as_operator() {
                let operands: Vec<Valuation> = node.pred().iter().map(|p| self.assigned[p.index()]).collect();
                self.assigned[node.ident().index()] = op.try_forward(&operands)?;
            }
        }
        log::debug!("GraphValuation: forward pass over {} node(s) complete", covered);
        Ok(())
    }

    pub fn forward(&mut self) {
        self.try_forward()
            .unwrap_or_else(|e| panic!("Forward pass failed: {}", e))
    }

    /// Propagates gradients from the roots back to the entries.
    ///
    /// Nodes are visited in reverse creation order. Each root has its
    /// gradient set to 1, then every operator node adds its contribution to
    /// the gradients of its predecessors. A predecessor used several times
    /// (`x + x`, or by several consumers) receives the sum of all
    /// contributions.
    ///
    /// # Errors
    /// `ArityMismatch` if an operator node has the wrong number of operands.
    pub fn try_backward(&mut self) -> Result<(), MicrogradError> {
        let dag = self.assignment.graph().dag();
        let covered = self.assigned.len();
        let skipped = dag.len() - covered;
        for node in dag.topological(true).skip(skipped) {
            let idx = node.ident().index();
            if self.roots.contains(&node.ident()) {
                self.assigned[idx].gradient = 1.0;
            }
            if let Some(op) = node.data().as_operator() {
                let result = self.assigned[idx];
                // Contributions are collected on zeroed copies, then added in,
                // so repeated predecessors accumulate correctly.
                let mut operands: Vec<Valuation> = node
                    .pred()
                    .iter()
                    .map(|p| Valuation::new(self.assigned[p.index()].value))
                    .collect();
                op.try_backward(&result, &mut operands)?;
                for (p, contribution) in node.pred().iter().zip(operands) {
                    self.assigned[p.index()].gradient += contribution.gradient;
                }
            }
        }
        log::debug!("GraphValuation: backward pass from {} root(s) complete", self.roots.len());
        Ok(())
    }

    pub fn backward(&mut self) {
        self.try_backward()
            .unwrap_or_else(|e| panic!("Backward pass failed: {}", e))
    }

    /// `initialize`, `forward` and `backward` in one go, with permissive
    /// handling of unbound entries.
    pub fn try_run(assignment: &Assignment) -> Result<Self, MicrogradError> {
        let mut gv = Self::initialize(assignment);
        gv.try_forward()?;
        gv.try_backward()?;
        Ok(gv)
    }

    pub fn run(assignment: &Assignment) -> Self {
        Self::try_run(assignment).unwrap_or_else(|e| panic!("Graph evaluation failed: {}", e))
    }

    /// Like [`GraphValuation::try_run`], honouring `config`.
    ///
    /// # Errors
    /// * `IncompleteAssignment` in strict mode when entries are unbound.
    /// * `ArityMismatch` from a malformed operator node.
    pub fn run_with(assignment: &Assignment, config: &EvaluationConfig) -> Result<Self, MicrogradError> {
        if config.completeness == Completeness::Strict && !assignment.is_complete() {
            return Err(MicrogradError::IncompleteAssignment {
                missing: assignment.missing(),
            });
        }
        Self::try_run(assignment)
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn get(&self, ident: NodeId) -> Option<&Valuation> {
        self.assigned.get(ident.index())
    }

    /// Valuation of `value`, if it belongs to the evaluated graph and
    /// existed when this run was initialized.
    pub fn valuation(&self, value: &Value) -> Option<&Valuation> {
        if value.graph() != self.assignment.graph() {
            return None;
        }
        self.get(value.ident())
    }

    pub fn value_of(&self, value: &Value) -> Option<f64> {
        self.valuation(value).map(|v| v.value)
    }

    pub fn gradient_of(&self, value: &Value) -> Option<f64> {
        self.valuation(value).map(|v| v.gradient)
    }

    /// Roots seeded by the backward pass.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.roots.iter().copied()
    }

    /// All valuations in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Valuation)> + '_ {
        self.assigned.iter().enumerate().map(|(i, v)| (NodeId::new(i), v))
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "graph_valuation_test.rs"]
mod tests;
