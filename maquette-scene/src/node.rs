//! Scene graph nodes

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use maquette_core::{
    Error, Extents3, Renderable, Result, RigidTransform, UnitQuaternionf, Vector3f,
};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of a scene node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

struct NodeState {
    id: NodeId,
    position: Vector3f,
    orientation: UnitQuaternionf,
    renderable: Option<Rc<dyn Renderable>>,
    // Non-owning back-link; ownership of a child flows through the parent's
    // child list.
    parent: Weak<RefCell<NodeState>>,
    children: Vec<Node>,
}

/// A handle to a scene graph node.
///
/// Cloning the handle clones the reference, not the node; two clones compare
/// equal. A node starts detached (no parent, no children) and is attached
/// and detached through [`Node::add_child`] and [`Node::remove_child`]. The
/// node is released once no handle and no parent child-list refers to it.
///
/// Handles are `Rc`-based and must stay on one thread.
#[derive(Clone)]
pub struct Node(Rc<RefCell<NodeState>>);

impl Node {
    /// Create a detached node with an identity transform and no renderable
    pub fn new() -> Self {
        let id = NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed));
        Node(Rc::new(RefCell::new(NodeState {
            id,
            position: Vector3f::zeros(),
            orientation: UnitQuaternionf::identity(),
            renderable: None,
            parent: Weak::new(),
            children: Vec::new(),
        })))
    }

    /// The node's unique id
    pub fn id(&self) -> NodeId {
        self.0.borrow().id
    }

    /// The node's local position
    pub fn position(&self) -> Vector3f {
        self.0.borrow().position
    }

    /// Set the node's local position
    pub fn set_position(&self, position: Vector3f) {
        self.0.borrow_mut().position = position;
    }

    /// The node's local orientation
    pub fn orientation(&self) -> UnitQuaternionf {
        self.0.borrow().orientation
    }

    /// Set the node's local orientation
    pub fn set_orientation(&self, orientation: UnitQuaternionf) {
        self.0.borrow_mut().orientation = orientation;
    }

    /// The node's local transform, relative to its parent
    pub fn local_transform(&self) -> RigidTransform {
        let state = self.0.borrow();
        RigidTransform::from_parts(state.position, state.orientation)
    }

    /// The renderable attached to this node, if any
    pub fn renderable(&self) -> Option<Rc<dyn Renderable>> {
        self.0.borrow().renderable.clone()
    }

    /// Attach a renderable to this node, replacing any current one
    pub fn set_renderable(&self, renderable: Rc<dyn Renderable>) {
        self.0.borrow_mut().renderable = Some(renderable);
    }

    /// Detach this node's renderable
    pub fn clear_renderable(&self) {
        self.0.borrow_mut().renderable = None;
    }

    /// The node's current parent, if attached
    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    /// Handles to the node's direct children, in order
    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    /// Attach `child` as the last of this node's children.
    ///
    /// A child attached elsewhere is atomically detached from its current
    /// parent first. Fails with [`Error::CycleViolation`] when `child` is
    /// this node itself or one of its ancestors, leaving the tree unchanged.
    pub fn add_child(&self, child: &Node) -> Result<()> {
        if Rc::ptr_eq(&self.0, &child.0) {
            return Err(Error::CycleViolation(
                "a node cannot be added as its own child".to_string(),
            ));
        }
        if self.has_ancestor(child) {
            return Err(Error::CycleViolation(
                "adding an ancestor as a child would create a cycle".to_string(),
            ));
        }
        if let Some(old_parent) = child.parent() {
            old_parent.remove_child(child);
        }
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    /// Detach `child` from this node's children if present.
    ///
    /// Returns whether a removal happened; removing a node that is not a
    /// child returns `false` and changes nothing. The child's parent
    /// back-link is cleared only when it still points at this node.
    pub fn remove_child(&self, child: &Node) -> bool {
        let removed = {
            let mut state = self.0.borrow_mut();
            let before = state.children.len();
            state.children.retain(|c| !Rc::ptr_eq(&c.0, &child.0));
            state.children.len() != before
        };
        if removed {
            let mut child_state = child.0.borrow_mut();
            let still_parent = child_state
                .parent
                .upgrade()
                .is_some_and(|p| Rc::ptr_eq(&p, &self.0));
            if still_parent {
                child_state.parent = Weak::new();
            }
        }
        removed
    }

    /// Check whether `node` is a direct child of this node
    pub fn contains(&self, node: &Node) -> bool {
        self.0
            .borrow()
            .children
            .iter()
            .any(|c| Rc::ptr_eq(&c.0, &node.0))
    }

    /// Check whether `node` is a descendant of this node at any depth
    pub fn contains_deep(&self, node: &Node) -> bool {
        let mut stack = self.children();
        while let Some(current) = stack.pop() {
            if Rc::ptr_eq(&current.0, &node.0) {
                return true;
            }
            stack.extend(current.children());
        }
        false
    }

    /// The extents contributed by this node alone: its renderable's local
    /// extents under the node's own transform, or empty extents without a
    /// renderable. Children are not included.
    pub fn extents(&self) -> Extents3 {
        let state = self.0.borrow();
        match &state.renderable {
            Some(renderable) => {
                let local = RigidTransform::from_parts(state.position, state.orientation);
                renderable.local_extents().transformed_by(&local)
            }
            None => Extents3::empty(),
        }
    }

    /// The union of extents over this node and every descendant, each under
    /// the transforms composed from this node down to it.
    ///
    /// Walks the subtree with an explicit stack carrying the accumulated
    /// transform, so deep trees cannot exhaust the call stack. O(nodes) per
    /// call; always reflects the current transform state.
    pub fn graph_extents(&self) -> Extents3 {
        let mut total = Extents3::empty();
        let mut stack = vec![(self.clone(), RigidTransform::identity())];
        while let Some((node, parent_frame)) = stack.pop() {
            let state = node.0.borrow();
            let frame =
                parent_frame.compose(RigidTransform::from_parts(state.position, state.orientation));
            if let Some(renderable) = &state.renderable {
                total = total.union(&renderable.local_extents().transformed_by(&frame));
            }
            for child in &state.children {
                stack.push((child.clone(), frame));
            }
        }
        total
    }

    // Walks this node's ancestor chain looking for `candidate`. O(depth).
    fn has_ancestor(&self, candidate: &Node) -> bool {
        let mut current = self.parent();
        while let Some(node) = current {
            if Rc::ptr_eq(&node.0, &candidate.0) {
                return true;
            }
            current = node.parent();
        }
        false
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0.borrow();
        f.debug_struct("Node")
            .field("id", &state.id)
            .field("position", &state.position)
            .field("children", &state.children.len())
            .field("has_renderable", &state.renderable.is_some())
            .finish()
    }
}
