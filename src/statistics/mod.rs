//! Counters describing search effort.
//!
//! Each search accumulates into a caller-supplied [`SearchStats`]; sweeps
//! over many grids or strategies aggregate with [`SearchStats::merge`].

mod stats;

pub use stats::*;
