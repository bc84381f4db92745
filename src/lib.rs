//! Maze solving with pluggable frontier disciplines.
//!
//! The core is [`search`]: an uninformed search over a read-only [`Grid`]
//! whose expansion order is decided by a [`Discipline`] (depth-first or
//! breadth-first). Everything else — text and image ingestion, rendering,
//! random generation — only talks to the core through `Grid` and
//! [`SearchResult`].

pub mod config;
pub mod frontier;
pub mod generate;
pub mod grid;
pub mod image_maze;
pub mod parse;
pub mod render;
pub mod search;

pub use frontier::{Discipline, Frontier};
pub use grid::{Action, Grid, MalformedGridError, Position};
pub use search::{search, NoSolutionError, SearchResult};
