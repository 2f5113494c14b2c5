//! wayfind — a grid path-search engine with interchangeable frontiers.
//!
//! Four open-set structures (FIFO, LIFO, cost-ordered with lazy tombstone
//! deletion, width-bounded beam) sit behind one [`frontier::Frontier`]
//! trait; a single generic loop in [`search`] drives whichever one the
//! caller picks and reconstructs the solution path from arena-indexed
//! parent links. The [`grid`] module supplies the maze side: text parsing,
//! rendering, JSON persistence, and rejection-sampled random generation.

pub mod error;
pub mod frontier;
pub mod grid;
pub mod search;
pub mod statistics;
