use std::collections::HashMap;

use crate::tree::NodeId;

/// Identifier → node map for one session.
///
/// Registering an id that is already present replaces the entry; the old
/// node stays in the tree but can no longer be found by id.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    map: HashMap<String, NodeId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node previously registered under `id`, if any.
    pub fn insert(&mut self, id: impl Into<String>, node: NodeId) -> Option<NodeId> {
        self.map.insert(id.into(), node)
    }

    pub fn get(&self, id: &str) -> Option<NodeId> {
        self.map.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
