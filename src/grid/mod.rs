//! The grid collaborator: wall-map parsing, rendering, persistence, and
//! random generation.
//!
//! This module owns everything the engine deliberately does not: the text
//! format (`#` wall, space open, `A` start, `B` goal), the `*` solution
//! overlay, JSON persistence, and rejection-sampled random grids. It feeds
//! the engine nothing but an adjacency function and a goal test.

mod cell;
mod generate;
mod io;
mod layout;

pub use cell::*;
pub use generate::*;
pub use io::*;
pub use layout::*;
