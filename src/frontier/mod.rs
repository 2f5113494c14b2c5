//! Interchangeable open-set structures driving the search strategies.
//!
//! Each variant backs one strategy: [`QueueFrontier`] (FIFO, breadth-first),
//! [`StackFrontier`] (LIFO, depth-first), [`PriorityFrontier`] (cost-ordered
//! with lazy tombstone deletion, uniform-cost), and [`BeamFrontier`]
//! (width-bounded cost-ordered, beam search). All satisfy the same
//! [`Frontier`] capability set, so callers needing a custom loop can drive
//! any of them directly.

mod beam;
mod priority;
mod queue;
mod stack;

pub use beam::*;
pub use priority::*;
pub use queue::*;
pub use stack::*;

use crate::error::SearchError;
use crate::search::{Node, State};

/// The capability set shared by every frontier variant.
///
/// Membership is split into two explicitly named operations instead of one
/// overloaded `contains`: [`contains_state`](Frontier::contains_state)
/// answers "is this position under consideration" (any cost), while
/// [`contains_node`](Frontier::contains_node) answers exact (state, cost)
/// membership.
pub trait Frontier<S: State> {
    /// Admits `node`, subject to the variant's ordering and dominance rules.
    fn add(&mut self, node: Node<S>);

    /// Removes and returns the best resident per the variant's ordering.
    ///
    /// # Errors
    /// [`SearchError::EmptyFrontierPop`] when no live entry remains. This is
    /// a caller contract violation; check [`is_empty`](Frontier::is_empty)
    /// first.
    fn pop(&mut self) -> Result<Node<S>, SearchError>;

    /// Whether any live resident occupies `state`, at any cost.
    fn contains_state(&self, state: &S) -> bool;

    /// Whether a live resident matches `node` exactly (state and cost).
    fn contains_node(&self, node: &Node<S>) -> bool;

    /// Number of live residents.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
