use std::collections::{HashMap, HashSet};
use std::fmt;

/// Identifier of a node inside one computation graph.
///
/// Identifiers are handed out by an [`IdentManager`] in strictly increasing
/// order starting at 0, so they double as arena indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues identifiers and keeps an optional label for each of them.
///
/// The manager does not know which identifiers belong to live nodes;
/// labelling an identifier it never issued is accepted.
#[derive(Debug, Default, Clone)]
pub struct IdentManager {
    ident_source: usize,
    label_table: HashMap<NodeId, String>,
}

impl IdentManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh identifier, one greater than the previous one.
    pub fn use_ident(&mut self) -> NodeId {
        let new_ident = NodeId(self.ident_source);
        self.ident_source += 1;
        new_ident
    }

    /// Records a label for `ident`, replacing any previous one.
    pub fn set_label(&mut self, ident: NodeId, label: impl Into<String>) {
        let label = label.into();
        log::trace!("IdentManager: label {} -> {:?}", ident, label);
        self.label_table.insert(ident, label);
    }

    pub fn label(&self, ident: NodeId) -> Option<&str> {
        self.label_table.get(&ident).map(String::as_str)
    }

    /// All distinct labels currently assigned.
    pub fn labels(&self) -> HashSet<&str> {
        self.label_table.values().map(String::as_str).collect()
    }

    /// Number of identifiers issued so far.
    pub fn issued(&self) -> usize {
        self.ident_source
    }
}

impl fmt::Display for IdentManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentManager({})", self.ident_source)
    }
}
