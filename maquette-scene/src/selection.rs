//! Node selection over a scene subtree
//!
//! Mirrors the mesh-side selections: modifiers gather the nodes they care
//! about, then iterate the selection while mutating each node in place.

use crate::node::Node;

/// An ordered, de-duplicated set of scene nodes
#[derive(Debug, Clone, Default)]
pub struct NodeSelection {
    nodes: Vec<Node>,
}

impl NodeSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Gather every node in `root`'s subtree (including `root`) matching
    /// the filter, in traversal order.
    pub fn collect(root: &Node, mut filter: impl FnMut(&Node) -> bool) -> Self {
        let mut selection = Self::new();
        let mut stack = vec![root.clone()];
        while let Some(node) = stack.pop() {
            if filter(&node) {
                selection.insert(&node);
            }
            let mut children = node.children();
            children.reverse();
            stack.extend(children);
        }
        selection
    }

    /// Add a node unless already selected; returns whether it was added
    pub fn insert(&mut self, node: &Node) -> bool {
        if self.contains(node) {
            return false;
        }
        self.nodes.push(node.clone());
        true
    }

    /// Check whether a node is in the selection
    pub fn contains(&self, node: &Node) -> bool {
        self.nodes.iter().any(|n| n == node)
    }

    /// Number of selected nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the selection is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the selected nodes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderable::BoxRenderable;
    use maquette_core::Vector3f;
    use std::rc::Rc;

    #[test]
    fn test_collect_by_predicate() {
        let root = Node::new();
        let a = Node::new();
        let b = Node::new();
        root.add_child(&a).unwrap();
        root.add_child(&b).unwrap();
        a.set_renderable(Rc::new(BoxRenderable::new(1.0, 1.0, 1.0)));

        let with_renderable = NodeSelection::collect(&root, |n| n.renderable().is_some());
        assert_eq!(with_renderable.len(), 1);
        assert!(with_renderable.contains(&a));
        assert!(!with_renderable.contains(&b));

        let all = NodeSelection::collect(&root, |_| true);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_insert_deduplicates() {
        let node = Node::new();
        let mut selection = NodeSelection::new();
        assert!(selection.insert(&node));
        assert!(!selection.insert(&node));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_modifier_moves_selected_nodes() {
        let root = Node::new();
        let a = Node::new();
        let b = Node::new();
        root.add_child(&a).unwrap();
        root.add_child(&b).unwrap();

        let selection = NodeSelection::collect(&root, |n| n.parent().is_some());
        for node in selection.iter() {
            node.set_position(node.position() + Vector3f::new(0.0, 1.0, 0.0));
        }
        assert_eq!(a.position(), Vector3f::new(0.0, 1.0, 0.0));
        assert_eq!(b.position(), Vector3f::new(0.0, 1.0, 0.0));
        assert_eq!(root.position(), Vector3f::zeros());
    }
}
