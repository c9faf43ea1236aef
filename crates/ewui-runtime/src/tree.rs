//! Arena-backed document tree.
//!
//! Every component ever built lives in the arena, including components that
//! are no longer reachable by id and windows that have been replaced. Audio
//! players and timers are stored as detached nodes (no parent, no slot).

use crate::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub component: Component,
    pub parent: Option<NodeId>,
    /// Attached components in insertion order.
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, appending it to `parent`'s children when given.
    pub fn insert(&mut self, component: Component, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { component, parent, children: Vec::new() });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn component(&self, id: NodeId) -> Option<&Component> {
        self.nodes.get(id.0).map(|n| &n.component)
    }

    pub fn component_mut(&mut self, id: NodeId) -> Option<&mut Component> {
        self.nodes.get_mut(id.0).map(|n| &mut n.component)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first walk from `root`, yielding `(depth, node)`.
    pub fn walk(&self, root: NodeId) -> Vec<(usize, NodeId)> {
        let mut out = Vec::new();
        let mut stack = vec![(0, root)];
        while let Some((depth, id)) = stack.pop() {
            out.push((depth, id));
            for &child in self.children(id).iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;

    fn c(kind: ComponentKind, id: &str) -> Component {
        Component::new(kind, Some(id.to_string()))
    }

    #[test]
    fn insert_links_parent_and_children() {
        let mut t = Tree::new();
        let root = t.insert(Component::new(ComponentKind::Window, None), None);
        let a = t.insert(c(ComponentKind::Label, "a"), Some(root));
        let b = t.insert(c(ComponentKind::Label, "b"), Some(root));
        assert_eq!(t.children(root), &[a, b]);
        assert_eq!(t.parent(b), Some(root));
    }

    #[test]
    fn detached_nodes_have_no_parent() {
        let mut t = Tree::new();
        let timer = t.insert(c(ComponentKind::Timer, "t"), None);
        assert_eq!(t.parent(timer), None);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn walk_is_preorder() {
        let mut t = Tree::new();
        let root = t.insert(Component::new(ComponentKind::Window, None), None);
        let g = t.insert(c(ComponentKind::GroupBox, "g"), Some(root));
        let x = t.insert(c(ComponentKind::Label, "x"), Some(g));
        let y = t.insert(c(ComponentKind::Label, "y"), Some(root));
        assert_eq!(t.walk(root), vec![(0, root), (1, g), (2, x), (1, y)]);
    }
}
