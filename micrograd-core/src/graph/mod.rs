// micrograd-core/src/graph/mod.rs

use crate::error::MicrogradError;
use crate::ident::{IdentManager, NodeId};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::ops::Index;

/// A node of a [`Dag`].
///
/// Nodes are only created through [`Dag::node`], which assigns the identifier.
/// `pred` may repeat an identifier (`y = x + x`) and its order is the operand
/// order seen by the node's data.
#[derive(Debug, Clone, PartialEq)]
pub struct DagNode<D> {
    ident: NodeId,
    data: D,
    pred: Vec<NodeId>,
}

impl<D> DagNode<D> {
    pub fn ident(&self) -> NodeId {
        self.ident
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn pred(&self) -> &[NodeId] {
        &self.pred
    }

    pub fn is_entry(&self) -> bool {
        self.pred.is_empty()
    }
}

impl<D: fmt::Display> fmt::Display for DagNode<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({}, {})", self.ident, self.data)
    }
}

/// An append-only directed acyclic graph.
///
/// Every predecessor must already exist when a node is created, so the
/// creation order is a topological order and no cycle can be formed.
/// Node identifiers are indices into `node_table`.
#[derive(Debug, Clone)]
pub struct Dag<D> {
    node_table: Vec<DagNode<D>>,
    identities: IdentManager,
    // Maintained as the graph grows
    roots: BTreeSet<NodeId>,
    entries: BTreeSet<NodeId>,
}

impl<D> Default for Dag<D> {
    fn default() -> Self {
        Dag {
            node_table: Vec::new(),
            identities: IdentManager::new(),
            roots: BTreeSet::new(),
            entries: BTreeSet::new(),
        }
    }
}

impl<D> Dag<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers a node, returning its identifier.
    ///
    /// The new node becomes a root; its predecessors stop being roots. A node
    /// without predecessors is also recorded as an entry.
    ///
    /// # Errors
    /// `UnknownNode` if a predecessor has not been created in this graph yet.
    pub fn try_node(
        &mut self,
        data: D,
        pred: &[NodeId],
        label: Option<&str>,
    ) -> Result<NodeId, MicrogradError> {
        if let Some(&missing) = pred.iter().find(|p| !self.contains(**p)) {
            return Err(MicrogradError::UnknownNode { ident: missing });
        }

        let ident = self.identities.use_ident();
        debug_assert_eq!(ident.index(), self.node_table.len());
        self.node_table.push(DagNode {
            ident,
            data,
            pred: pred.to_vec(),
        });

        if let Some(label) = label {
            self.identities.set_label(ident, label);
        }

        if pred.is_empty() {
            self.entries.insert(ident);
        }

        // Not referenced by anything yet
        self.roots.insert(ident);
        for p in pred {
            self.roots.remove(p);
        }

        log::trace!("Dag: created node {} with {} predecessor(s)", ident, pred.len());
        Ok(ident)
    }

    /// Same as [`Dag::try_node`] but panics when a predecessor is unknown.
    pub fn node(&mut self, data: D, pred: &[NodeId], label: Option<&str>) -> NodeId {
        self.try_node(data, pred, label)
            .unwrap_or_else(|e| panic!("Graph node creation failed: {}", e))
    }

    pub fn get(&self, ident: NodeId) -> Option<&DagNode<D>> {
        self.node_table.get(ident.index())
    }

    pub fn contains(&self, ident: NodeId) -> bool {
        ident.index() < self.node_table.len()
    }

    pub fn len(&self) -> usize {
        self.node_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_table.is_empty()
    }

    pub fn set_label(&mut self, ident: NodeId, label: impl Into<String>) {
        self.identities.set_label(ident, label);
    }

    pub fn label(&self, ident: NodeId) -> Option<&str> {
        self.identities.label(ident)
    }

    pub fn labels(&self) -> HashSet<&str> {
        self.identities.labels()
    }

    pub fn identities(&self) -> &IdentManager {
        &self.identities
    }

    /// Nodes with no predecessors, in creation order.
    pub fn entries(&self) -> impl Iterator<Item = &DagNode<D>> + '_ {
        self.entries.iter().map(move |id| &self.node_table[id.index()])
    }

    /// Nodes that no other node uses as a predecessor, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = &DagNode<D>> + '_ {
        self.roots.iter().map(move |id| &self.node_table[id.index()])
    }

    pub fn entry_idents(&self) -> &BTreeSet<NodeId> {
        &self.entries
    }

    pub fn is_root(&self, ident: NodeId) -> bool {
        self.roots.contains(&ident)
    }

    pub fn is_entry(&self, ident: NodeId) -> bool {
        self.entries.contains(&ident)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> std::slice::Iter<'_, DagNode<D>> {
        self.node_table.iter()
    }

    /// Creation order, which is already topological: every predecessor comes
    /// before the nodes that use it. `reverse` puts consumers first.
    pub fn topological(&self, reverse: bool) -> Topological<'_, D> {
        Topological {
            inner: self.node_table.iter(),
            reverse,
        }
    }
}

impl<D> Index<NodeId> for Dag<D> {
    type Output = DagNode<D>;

    fn index(&self, ident: NodeId) -> &Self::Output {
        &self.node_table[ident.index()]
    }
}

/// Iterator returned by [`Dag::topological`].
pub struct Topological<'a, D> {
    inner: std::slice::Iter<'a, DagNode<D>>,
    reverse: bool,
}

impl<'a, D> Iterator for Topological<'a, D> {
    type Item = &'a DagNode<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reverse {
            self.inner.next_back()
        } else {
            self.inner.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<D> ExactSizeIterator for Topological<'_, D> {}

// --- Tests ---
#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
