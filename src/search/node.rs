use std::fmt::Debug;
use std::hash::Hash;

use crate::search::NodeId;

/// What the engine requires of a state coordinate.
///
/// Blanket-implemented, so any cheap hashable value type works: `grid::Cell`
/// for maze searches, plain integers or tuples for custom state spaces.
pub trait State: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> State for T {}

/// A single explored state: where we are, what it cost to get here, and a
/// handle to the node we came from.
///
/// Two equality notions coexist on purpose. `PartialEq` is *exact* equality
/// (same state AND same cost) and identifies a heap entry, e.g. for
/// tombstoning. *State* equality (same position, any cost) is what duplicate
/// and dominance checks care about; see [`Node::worse_than`].
///
/// The ordering is ascending by cost alone — deliberately narrower than
/// equality, since only the cost-aware frontiers consume it.
///
/// # Examples
/// ```
/// use wayfind::search::Node;
///
/// let a: Node<(i32, i32)> = Node::new((2, 3), 5, None);
/// let b = Node::new((2, 3), 7, None);
///
/// assert!(b.worse_than(&a)); // same state, strictly higher cost
/// assert!(!a.worse_than(&b));
/// assert!(a < b);
/// assert_ne!(a, b); // exact equality includes cost
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Node<S> {
    pub state: S,
    pub cost: u32,
    pub parent: Option<NodeId>,
}

impl<S: State> Node<S> {
    pub fn new(state: S, cost: u32, parent: Option<NodeId>) -> Self {
        Node {
            state,
            cost,
            parent,
        }
    }

    /// The start node of a search: cost zero, no predecessor.
    pub fn root(state: S) -> Self {
        Node {
            state,
            cost: 0,
            parent: None,
        }
    }

    /// The asymmetric supersession test: `self` is worse than `other` iff
    /// both share a state and `self` costs strictly more.
    pub fn worse_than(&self, other: &Node<S>) -> bool {
        self.state == other.state && self.cost > other.cost
    }
}

impl<S: State> PartialEq for Node<S> {
    fn eq(&self, other: &Self) -> bool {
        // exact equality: parent handles are bookkeeping, not identity
        self.state == other.state && self.cost == other.cost
    }
}

impl<S: State> Eq for Node<S> {}

impl<S: State> PartialOrd for Node<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: State> Ord for Node<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost.cmp(&other.cost)
    }
}
