//! The search engine: nodes, the parent-chain arena, and the shared
//! expansion loop that drives every strategy.
//!
//! The engine is generic over the state type; the [`crate::grid`] module is
//! merely its best-known customer. Callers wanting a custom loop can skip
//! [`search()`] entirely and drive a [`crate::frontier::Frontier`] by hand.

mod arena;
mod engine;
mod node;

pub use arena::*;
pub use engine::*;
pub use node::*;
