use crate::search::node::{Node, State};

/// Handle to a node owned by a [`NodeArena`].
///
/// Handles are only meaningful for the arena that issued them; they exist so
/// parent chains are plain indices instead of an owning reference graph,
/// which rules out cycles by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    internal: usize,
}

/// Append-only store for every node a search has expanded.
///
/// Frontiers hold by-value [`Node`] records; once a node is popped for
/// expansion it is pushed here, and its children refer back to it through the
/// returned [`NodeId`]. Walking a parent chain therefore always terminates at
/// a root node within `len()` hops.
///
/// # Examples
/// ```
/// use wayfind::search::{Node, NodeArena};
///
/// let mut arena: NodeArena<(i32, i32)> = NodeArena::new();
/// let root = arena.push(Node::root((0, 0)));
/// let mid = arena.push(Node::new((0, 1), 1, Some(root)));
/// let tip = Node::new((0, 2), 2, Some(mid));
///
/// assert_eq!(arena.path_to(&tip), vec![(0, 0), (0, 1), (0, 2)]);
/// ```
#[derive(Debug)]
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S: State> NodeArena<S> {
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    /// Takes ownership of `node` and returns its handle.
    pub fn push(&mut self, node: Node<S>) -> NodeId {
        let id = NodeId {
            internal: self.nodes.len(),
        };
        self.nodes.push(node);
        id
    }

    /// # Panics
    /// Panics if `id` was issued by a different arena.
    pub fn get(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.internal]
    }

    /// Reconstructs the start-to-`tip` state sequence by following parent
    /// handles back to the root, then reversing.
    ///
    /// `tip` itself need not be stored in the arena (the goal node usually
    /// is not: it is popped and consumed before ever being expanded).
    pub fn path_to(&self, tip: &Node<S>) -> Vec<S> {
        let mut path = vec![tip.state];
        let mut current = tip.parent;
        while let Some(id) = current {
            let node = self.get(id);
            path.push(node.state);
            current = node.parent;
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: State> Default for NodeArena<S> {
    fn default() -> Self {
        NodeArena::new()
    }
}
