// micrograd-core/src/assignment.rs

use crate::error::MicrogradError;
use crate::ident::NodeId;
use crate::value::{Value, ValueGraph};
use std::collections::{HashMap, HashSet};

/// Binds entry nodes of one graph to concrete inputs.
///
/// Only `Variable` nodes can be bound. An assignment does not have to cover
/// every entry; see [`Assignment::is_complete`].
#[derive(Debug, Clone)]
pub struct Assignment {
    graph: ValueGraph,
    assigned: HashMap<NodeId, f64>,
}

impl Assignment {
    /// Binds each value to its input.
    ///
    /// # Errors
    /// * `GraphMismatch` if a value belongs to another graph.
    /// * `NotAVariable` if a value is an operator node.
    pub fn try_create<'a>(
        graph: &ValueGraph,
        assign: impl IntoIterator<Item = (&'a Value, f64)>,
    ) -> Result<Self, MicrogradError> {
        let mut assigned = HashMap::new();
        for (value_node, value) in assign {
            if value_node.graph() != graph {
                return Err(MicrogradError::GraphMismatch {
                    operation: "assignment".to_string(),
                });
            }
            if !value_node.value_type().is_variable() {
                return Err(MicrogradError::NotAVariable {
                    ident: value_node.ident(),
                });
            }
            assigned.insert(value_node.ident(), value);
        }
        log::debug!("Assignment: bound {} of {} entries", assigned.len(), graph.dag().entry_idents().len());
        Ok(Assignment {
            graph: graph.clone(),
            assigned,
        })
    }

    /// Panicking form of [`Assignment::try_create`]; binding a node that is
    /// not a free input is a caller bug.
    pub fn create<'a>(graph: &ValueGraph, assign: impl IntoIterator<Item = (&'a Value, f64)>) -> Self {
        Self::try_create(graph, assign).unwrap_or_else(|e| panic!("Assignment creation failed: {}", e))
    }

    /// True when exactly the graph's entry nodes are bound.
    pub fn is_complete(&self) -> bool {
        let dag = self.graph.dag();
        let bound: HashSet<&NodeId> = self.assigned.keys().collect();
        let entries: HashSet<&NodeId> = dag.entry_idents().iter().collect();
        bound == entries
    }

    /// Entry nodes of the graph that this assignment leaves unbound,
    /// in creation order.
    pub fn missing(&self) -> Vec<NodeId> {
        self.graph
            .dag()
            .entry_idents()
            .iter()
            .filter(|id| !self.assigned.contains_key(*id))
            .copied()
            .collect()
    }

    /// Union of two assignments over the same graph. Bindings from `other`
    /// win where both bind the same node.
    pub fn try_merge(&self, other: &Assignment) -> Result<Assignment, MicrogradError> {
        if self.graph != other.graph {
            return Err(MicrogradError::GraphMismatch {
                operation: "assignment merge".to_string(),
            });
        }
        let mut assigned = self.assigned.clone();
        assigned.extend(other.assigned.iter().map(|(k, v)| (*k, *v)));
        log::debug!("Assignment: merged {} + {} bindings into {}", self.len(), other.len(), assigned.len());
        Ok(Assignment {
            graph: self.graph.clone(),
            assigned,
        })
    }

    pub fn merge(&self, other: &Assignment) -> Assignment {
        self.try_merge(other)
            .unwrap_or_else(|e| panic!("Assignment merge failed: {}", e))
    }

    /// Copy with one already-bound entry rebound to `value`.
    pub(crate) fn rebind(&self, ident: NodeId, value: f64) -> Assignment {
        let mut assigned = self.assigned.clone();
        assigned.insert(ident, value);
        Assignment {
            graph: self.graph.clone(),
            assigned,
        }
    }

    pub fn graph(&self) -> &ValueGraph {
        &self.graph
    }

    pub fn get(&self, ident: NodeId) -> Option<f64> {
        self.assigned.get(&ident).copied()
    }

    pub fn value(&self, value: &Value) -> Option<f64> {
        if value.graph() != &self.graph {
            return None;
        }
        self.get(value.ident())
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.assigned.iter().map(|(k, v)| (*k, *v))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "assignment_test.rs"]
mod tests;
