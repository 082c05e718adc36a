//! Weighted shortest paths on an 8-connected grid.
//!
//! A [`Grid`] of [`Cell`]s is painted by the caller (directly or through the
//! [`editor::Editor`]); [`find_path`] then runs Dijkstra's algorithm with
//! orthogonal moves costing 1 and diagonal moves costing 2, and rebuilds the
//! cheapest route as a [`Path`].

pub mod algorithms;
pub mod config;
pub mod cost;
pub mod editor;
pub mod error;
pub mod grid;
pub mod pathfinder;
pub mod render;
pub mod scenario;
pub mod session;
pub mod statistics;

pub use algorithms::{Algorithm, Path, PathOutcome};
pub use error::{PathError, PathResult};
pub use grid::{Cell, Coord, Grid};
pub use pathfinder::{configure_grid, find_path, set_cell};
