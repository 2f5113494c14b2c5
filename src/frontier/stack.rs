use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::search::{Node, State};

/// LIFO frontier backing depth-first search.
///
/// Same contract as [`QueueFrontier`](crate::frontier::QueueFrontier) except
/// `pop` removes the most recently added entry, so the search commits to one
/// branch until it dead-ends. The first-found path is returned, not
/// necessarily a shortest one.
#[derive(Debug)]
pub struct StackFrontier<S> {
    nodes: Vec<Node<S>>,
}

impl<S: State> StackFrontier<S> {
    pub fn new() -> Self {
        StackFrontier { nodes: Vec::new() }
    }
}

impl<S: State> Default for StackFrontier<S> {
    fn default() -> Self {
        StackFrontier::new()
    }
}

impl<S: State> Frontier<S> for StackFrontier<S> {
    fn add(&mut self, node: Node<S>) {
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Result<Node<S>, SearchError> {
        self.nodes.pop().ok_or(SearchError::EmptyFrontierPop)
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
    fn pops_most_recent_first() {
        let mut frontier = StackFrontier::new();
        for i in 0..5u32 {
            frontier.add(Node::new(i, 0, None));
        }
        for i in (0..5u32).rev() {
            assert_eq!(frontier.pop().unwrap().state, i);
        }
    }

    #[test]
    fn pop_on_empty_is_a_contract_violation() {
        let mut frontier: StackFrontier<u8> = StackFrontier::new();
        assert_eq!(frontier.pop(), Err(SearchError::EmptyFrontierPop));
    }

    #[test]
    fn membership_by_state_and_by_node() {
        let mut frontier = StackFrontier::new();
        frontier.add(Node::new('z', 2, None));

        assert!(frontier.contains_state(&'z'));
        assert!(frontier.contains_node(&Node::new('z', 2, None)));
        assert!(!frontier.contains_node(&Node::new('z', 9, None)));
    }

    #[test]
    fn interleaved_adds_and_pops_stay_lifo() {
        let mut frontier = StackFrontier::new();
        frontier.add(Node::root(1u8));
        frontier.add(Node::new(2u8, 1, None));
        assert_eq!(frontier.pop().unwrap().state, 2);
        frontier.add(Node::new(3u8, 1, None));
        assert_eq!(frontier.pop().unwrap().state, 3);
        assert_eq!(frontier.pop().unwrap().state, 1);
        assert!(frontier.is_empty());
    }
}
