use crate::algorithms::common::{Path, PathOutcome, PathfindingAlgorithm};
use crate::cost::NEIGHBOR_OFFSETS;
use crate::error::{PathError, PathResult};
use crate::grid::{Coord, Grid};
use pathfinding::prelude::dijkstra;

/// Solves the same 8-connected weighted problem with the `pathfinding` crate.
///
/// Used to cross-check the engine: on ties the path may differ, but the cost
/// must not.
#[derive(Default)]
pub struct ReferenceDijkstra;

impl ReferenceDijkstra {
    pub fn new() -> Self {
        ReferenceDijkstra
    }
}

impl PathfindingAlgorithm for ReferenceDijkstra {
    fn name(&self) -> &'static str {
        "reference"
    }

    /// # Arguments
    ///
    /// * `grid` - The grid to search.
    /// * `start` - The starting coordinate, entered even when it is a wall.
    /// * `end` - The target coordinate.
    fn find_path(&mut self, grid: &Grid, start: Coord, end: Coord) -> PathResult<PathOutcome> {
        for coord in [start, end] {
            if !grid.contains(coord) {
                return Err(PathError::OutOfBounds {
                    coord,
                    rows: grid.rows(),
                    cols: grid.cols(),
                });
            }
        }

        let result = dijkstra(
            &start,
            |&p| {
                // Successors are in-bounds neighbors that are not walls.
                NEIGHBOR_OFFSETS
                    .iter()
                    .map(move |o| (o.apply(p), o.cost))
                    .filter(|&(n, _)| matches!(grid.is_passable(n), Ok(true)))
                    .collect::<Vec<_>>()
            },
            |p| *p == end,
        );

        // `dijkstra` returns `(path, cost)`; the cost is recomputed by `Path`.
        match result {
            Some((coords, _)) => Path::from_coords(coords)
                .map(PathOutcome::Found)
                .ok_or_else(|| {
                    PathError::InternalInconsistency("reference solver returned a broken walk".into())
                }),
            None => Ok(PathOutcome::NoPathFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn finds_same_cost_as_hand_calculation() {
        let grid = Grid::new(5, 5).unwrap();
        let mut reference = ReferenceDijkstra::new();
        let outcome = reference
            .find_path(&grid, Coord::new(0, 0), Coord::new(4, 4))
            .unwrap();
        assert_eq!(outcome.path().unwrap().cost(), 8);
    }

    #[test]
    fn reports_unreachable_end() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(Coord::new(2, 2), Cell::Wall).unwrap();
        let mut reference = ReferenceDijkstra::new();
        let outcome = reference
            .find_path(&grid, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap();
        assert_eq!(outcome, PathOutcome::NoPathFound);
    }

    #[test]
    fn same_start_and_end() {
        let grid = Grid::new(2, 2).unwrap();
        let outcome = ReferenceDijkstra::new()
            .find_path(&grid, Coord::new(1, 1), Coord::new(1, 1))
            .unwrap();
        assert_eq!(outcome.path().unwrap().coords(), &[Coord::new(1, 1)]);
    }
}
