use crate::tree::NodeId;

/// Containers that new components attach to.
///
/// The language has no statement that closes a group, so the stack only
/// grows: once a group box is opened every later component lands in the
/// most recently opened group, even across a later window statement. There
/// is no `pop`.
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    stack: Vec<NodeId>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap the bottom entry for a new root surface. Open groups stay on
    /// top of it.
    pub fn replace_root(&mut self, root: NodeId) {
        match self.stack.first_mut() {
            Some(bottom) => *bottom = root,
            None => self.stack.push(root),
        }
    }

    pub fn push(&mut self, container: NodeId) {
        self.stack.push(container);
    }

    /// Container that receives the next component.
    pub fn top(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.stack.first().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.stack
    }
}
