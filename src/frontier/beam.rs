use crate::error::SearchError;
use crate::frontier::{Frontier, PriorityFrontier};
use crate::search::{Node, State};

/// Width-bounded cost-ordered frontier backing beam search.
///
/// At most `width` live entries are retained. [`update`](BeamFrontier::update)
/// merges the current residents with a full layer of candidate nodes, applies
/// the same per-state dominance and tombstone rules as
/// [`PriorityFrontier`](crate::frontier::PriorityFrontier), and only then
/// truncates to the `width` lowest-cost entries (ties keep the earlier
/// insertion). Pruning after the whole batch is known is what makes beam
/// search proceed in synchronized layers.
///
/// Bounding the frontier bounds memory but sacrifices completeness: a
/// reachable goal is missed whenever a necessary intermediate state is pruned
/// for being locally non-optimal. That is documented behavior, not a defect.
#[derive(Debug)]
pub struct BeamFrontier<S> {
    inner: PriorityFrontier<S>,
    width: usize,
}

impl<S: State> BeamFrontier<S> {
    /// # Errors
    /// [`SearchError::InvalidWidth`] if `width` is zero.
    pub fn new(width: usize) -> Result<Self, SearchError> {
        if width == 0 {
            return Err(SearchError::InvalidWidth { width });
        }
        Ok(BeamFrontier {
            inner: PriorityFrontier::new(),
            width,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Merges a full same-layer candidate batch into the frontier, then
    /// prunes to the `width` lowest-cost live entries.
    pub fn update(&mut self, candidates: &[Node<S>]) {
        for &candidate in candidates {
            self.inner.add(candidate);
        }
        self.inner.truncate_to(self.width);
    }
}

impl<S: State> Frontier<S> for BeamFrontier<S> {
    /// Single-node admission, used to seed the search; the width bound is
    /// re-established immediately.
    fn add(&mut self, node: Node<S>) {
        self.inner.add(node);
        self.inner.truncate_to(self.width);
    }

    fn pop(&mut self) -> Result<Node<S>, SearchError> {
        self.inner.pop()
    }

    fn contains_state(&self, state: &S) -> bool {
        self.inner.contains_state(state)
    }

    fn contains_node(&self, node: &Node<S>) -> bool {
        self.inner.contains_node(node)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
