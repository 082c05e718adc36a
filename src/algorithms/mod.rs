pub mod common;
pub mod dijkstra;
pub mod reconstruct;
pub mod reference;

pub use common::{Path, PathOutcome, PathfindingAlgorithm};
pub use dijkstra::{search, Dijkstra, DistanceMap, PredecessorMap, SearchOutcome};
pub use reconstruct::reconstruct;
pub use reference::ReferenceDijkstra;

use clap::ValueEnum;
use std::fmt;

/// Algorithm selection for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Dijkstra,
    Reference,
    /// Run every algorithm on the same grid and compare.
    All,
}

impl Algorithm {
    /// Builds the selected solver. `All` has no single solver.
    pub fn create(self) -> Option<Box<dyn PathfindingAlgorithm>> {
        match self {
            Algorithm::Dijkstra => Some(Box::new(Dijkstra::new())),
            Algorithm::Reference => Some(Box::new(ReferenceDijkstra::new())),
            Algorithm::All => None,
        }
    }

    pub fn solvers() -> [Algorithm; 2] {
        [Algorithm::Dijkstra, Algorithm::Reference]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Reference => "reference",
            Algorithm::All => "all",
        };
        f.write_str(name)
    }
}
