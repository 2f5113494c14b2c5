use std::collections::VecDeque;

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::search::{Node, State};

/// FIFO frontier backing breadth-first search.
///
/// `add` appends at the back and `pop` removes from the front, both O(1), so
/// nodes surface in non-decreasing expansion depth when every edge has
/// uniform cost. Node costs are carried but never consulted.
///
/// # Examples
/// ```
/// use wayfind::frontier::{Frontier, QueueFrontier};
/// use wayfind::search::Node;
///
/// let mut frontier = QueueFrontier::new();
/// frontier.add(Node::root('a'));
/// frontier.add(Node::new('b', 1, None));
///
/// assert_eq!(frontier.pop().unwrap().state, 'a');
/// assert_eq!(frontier.pop().unwrap().state, 'b');
/// assert!(frontier.is_empty());
/// ```
#[derive(Debug)]
pub struct QueueFrontier<S> {
    nodes: VecDeque<Node<S>>,
}

impl<S: State> QueueFrontier<S> {
    pub fn new() -> Self {
        QueueFrontier {
            nodes: VecDeque::new(),
        }
    }
}

impl<S: State> Default for QueueFrontier<S> {
    fn default() -> Self {
        QueueFrontier::new()
    }
}

impl<S: State> Frontier<S> for QueueFrontier<S> {
    fn add(&mut self, node: Node<S>) {
        self.nodes.push_back(node);
    }

    fn pop(&mut self) -> Result<Node<S>, SearchError> {
        self.nodes.pop_front().ok_or(SearchError::EmptyFrontierPop)
    }

    fn contains_state(&self, state: &S) -> bool {
        self.nodes.iter().any(|resident| resident.state == *state)
    }

    fn contains_node(&self, node: &Node<S>) -> bool {
        self.nodes.iter().any(|resident| resident == node)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_insertion_order() {
        let mut frontier = QueueFrontier::new();
        for i in 0..5u32 {
            frontier.add(Node::new(i, 0, None));
        }
        for i in 0..5u32 {
            assert_eq!(frontier.pop().unwrap().state, i);
        }
    }

    #[test]
    fn pop_on_empty_is_a_contract_violation() {
        let mut frontier: QueueFrontier<u8> = QueueFrontier::new();
        assert_eq!(frontier.pop(), Err(SearchError::EmptyFrontierPop));
    }

    #[test]
    fn membership_by_state_and_by_node() {
        let mut frontier = QueueFrontier::new();
        frontier.add(Node::new('a', 3, None));

        assert!(frontier.contains_state(&'a'));
        assert!(!frontier.contains_state(&'b'));
        // exact membership needs the cost to match too
        assert!(frontier.contains_node(&Node::new('a', 3, None)));
        assert!(!frontier.contains_node(&Node::new('a', 4, None)));
    }

    #[test]
    fn len_tracks_adds_and_pops() {
        let mut frontier = QueueFrontier::new();
        assert!(frontier.is_empty());
        frontier.add(Node::root(1u8));
        frontier.add(Node::new(2u8, 1, None));
        assert_eq!(frontier.len(), 2);
        frontier.pop().unwrap();
        assert_eq!(frontier.len(), 1);
    }
}
