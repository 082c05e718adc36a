use crate::cost::{self, step_cost};
use crate::error::PathResult;
use crate::grid::{Coord, Grid};

pub trait PathfindingAlgorithm {
    fn name(&self) -> &'static str;

    fn find_path(&mut self, grid: &Grid, start: Coord, end: Coord) -> PathResult<PathOutcome>;

    /// Cells finalized by the most recent `find_path` call.
    fn cells_expanded(&self) -> usize {
        0 // Default: not tracked
    }
}

/// Result of a search that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    Found(Path),
    NoPathFound,
}

impl PathOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NoPathFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NoPathFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}

/// An ordered, start-to-end inclusive walk through the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    coords: Vec<Coord>,
    cost: u32,
}

impl Path {
    /// Builds a path from contiguous neighbor steps, computing its cost.
    /// Returns `None` for an empty list or when two consecutive coordinates
    /// are not neighbors.
    pub fn from_coords(coords: Vec<Coord>) -> Option<Path> {
        if coords.is_empty() {
            return None;
        }
        let cost = cost::path_cost(&coords)?;
        Some(Path { coords, cost })
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of coordinates, endpoints included.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of moves, one less than `len`.
    pub fn steps(&self) -> usize {
        self.coords.len() - 1
    }

    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    pub fn end(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// `(orthogonal, diagonal)` move counts.
    pub fn move_counts(&self) -> (usize, usize) {
        self.coords
            .windows(2)
            .fold((0, 0), |(ortho, diag), w| match step_cost(w[0], w[1]) {
                Some(cost::DIAGONAL_COST) => (ortho, diag + 1),
                _ => (ortho + 1, diag),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.coords.iter()
    }

    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_tracks_cost_and_moves() {
        let path = Path::from_coords(vec![
            Coord::new(0, 0),
            Coord::new(1, 1),
            Coord::new(2, 1),
            Coord::new(3, 2),
        ])
        .unwrap();
        assert_eq!(path.cost(), 5);
        assert_eq!(path.len(), 4);
        assert_eq!(path.steps(), 3);
        assert_eq!(path.move_counts(), (1, 2));
        assert_eq!(path.start(), Coord::new(0, 0));
        assert_eq!(path.end(), Coord::new(3, 2));
    }

    #[test]
    fn non_contiguous_coords_are_not_a_path() {
        assert!(Path::from_coords(vec![]).is_none());
        assert!(Path::from_coords(vec![Coord::new(0, 0), Coord::new(3, 3)]).is_none());
    }

    #[test]
    fn outcome_accessors() {
        let single = Path::from_coords(vec![Coord::new(1, 1)]).unwrap();
        let found = PathOutcome::Found(single.clone());
        assert!(found.is_found());
        assert_eq!(found.path(), Some(&single));
        assert!(!PathOutcome::NoPathFound.is_found());
        assert_eq!(PathOutcome::NoPathFound.into_path(), None);
    }
}
