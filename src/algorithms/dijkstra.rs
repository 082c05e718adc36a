use crate::algorithms::common::{PathOutcome, PathfindingAlgorithm};
use crate::algorithms::reconstruct::reconstruct;
use crate::cost::NEIGHBOR_OFFSETS;
use crate::error::{PathError, PathResult};
use crate::grid::{Coord, Grid};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// Priority queue entry. `BinaryHeap` is a max-heap, so `Ord` is reversed:
/// lowest cost first, and among equal costs the earliest push first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    cost: u32,
    seq: u64,
    index: usize,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            other => other,
        }
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best known cost per cell; `None` means unreached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    rows: usize,
    cols: usize,
    costs: Vec<Option<u32>>,
}

impl DistanceMap {
    fn new(grid: &Grid) -> Self {
        DistanceMap {
            rows: grid.rows(),
            cols: grid.cols(),
            costs: vec![None; grid.len()],
        }
    }

    pub fn get(&self, coord: Coord) -> Option<u32> {
        index_of(self.rows, self.cols, coord).and_then(|i| self.costs[i])
    }

    /// Number of cells with a known cost.
    pub fn reached(&self) -> usize {
        self.costs.iter().filter(|c| c.is_some()).count()
    }
}

/// Back-pointer per cell to the cell it was reached from. The start and
/// unreached cells have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    rows: usize,
    cols: usize,
    links: Vec<Option<Coord>>,
}

impl PredecessorMap {
    pub fn new(rows: usize, cols: usize) -> Self {
        PredecessorMap {
            rows,
            cols,
            links: vec![None; rows * cols],
        }
    }

    pub fn get(&self, coord: Coord) -> Option<Coord> {
        index_of(self.rows, self.cols, coord).and_then(|i| self.links[i])
    }

    pub(crate) fn insert(&mut self, coord: Coord, from: Coord) {
        if let Some(i) = index_of(self.rows, self.cols, coord) {
            self.links[i] = Some(from);
        }
    }

    /// Upper bound on the length of any simple walk through the map.
    pub fn capacity(&self) -> usize {
        self.links.len()
    }
}

fn index_of(rows: usize, cols: usize, coord: Coord) -> Option<usize> {
    let row = usize::try_from(coord.row).ok()?;
    let col = usize::try_from(coord.col).ok()?;
    (row < rows && col < cols).then_some(row * cols + col)
}

/// Everything one search produces.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub distances: DistanceMap,
    pub predecessors: PredecessorMap,
    /// Cells popped and finalized before the search stopped.
    pub expanded: usize,
}

/// Runs Dijkstra's algorithm from `start` until `end` is finalized or the
/// frontier is exhausted.
///
/// Walls are never entered, but a wall at `start` does not stop the search.
/// Relaxation only applies strictly cheaper costs, so on ties the first
/// predecessor found is kept. An unreachable `end` is absent from both maps.
pub fn search(grid: &Grid, start: Coord, end: Coord) -> PathResult<SearchOutcome> {
    let start_index = in_bounds(grid, start)?;
    let end_index = in_bounds(grid, end)?;

    let mut distances = DistanceMap::new(grid);
    let mut predecessors = PredecessorMap::new(grid.rows(), grid.cols());
    let mut finalized = vec![false; grid.len()];
    let mut queue = BinaryHeap::new();
    let mut seq = 0u64;
    let mut expanded = 0;

    distances.costs[start_index] = Some(0);
    queue.push(QueueEntry {
        cost: 0,
        seq,
        index: start_index,
    });

    while let Some(QueueEntry { cost, index, .. }) = queue.pop() {
        if finalized[index] {
            continue;
        }
        finalized[index] = true;
        expanded += 1;

        if index == end_index {
            break;
        }

        let current = grid.coord_at(index);
        for offset in NEIGHBOR_OFFSETS {
            let neighbor = offset.apply(current);
            let Some(n) = grid.index(neighbor) else {
                continue;
            };
            if finalized[n] || !grid.is_passable(neighbor)? {
                continue;
            }

            let candidate = cost + offset.cost;
            if distances.costs[n].map_or(true, |known| candidate < known) {
                distances.costs[n] = Some(candidate);
                predecessors.insert(neighbor, current);
                seq += 1;
                queue.push(QueueEntry {
                    cost: candidate,
                    seq,
                    index: n,
                });
            }
        }
    }

    debug!(
        %start,
        %end,
        expanded,
        reached = distances.get(end).is_some(),
        "search finished"
    );

    Ok(SearchOutcome {
        distances,
        predecessors,
        expanded,
    })
}

fn in_bounds(grid: &Grid, coord: Coord) -> PathResult<usize> {
    grid.index(coord).ok_or(PathError::OutOfBounds {
        coord,
        rows: grid.rows(),
        cols: grid.cols(),
    })
}

/// The 8-connected weighted search engine behind [`crate::find_path`].
#[derive(Debug, Default)]
pub struct Dijkstra {
    last_expanded: usize,
}

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra::default()
    }
}

impl PathfindingAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn find_path(&mut self, grid: &Grid, start: Coord, end: Coord) -> PathResult<PathOutcome> {
        let outcome = search(grid, start, end)?;
        self.last_expanded = outcome.expanded;
        reconstruct(&outcome.predecessors, start, end)
    }

    fn cells_expanded(&self) -> usize {
        self.last_expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn open(rows: usize, cols: usize) -> Grid {
        Grid::new(rows, cols).unwrap()
    }

    #[test]
    fn queue_pops_lowest_cost_then_oldest() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry { cost: 3, seq: 0, index: 0 });
        queue.push(QueueEntry { cost: 1, seq: 2, index: 1 });
        queue.push(QueueEntry { cost: 1, seq: 1, index: 2 });
        let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|e| e.index)).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn distances_on_open_grid_match_octile_costs() {
        let grid = open(5, 5);
        let start = Coord::new(0, 0);
        // Unreachable end forces a full sweep.
        let mut walled = grid.clone();
        walled.set(Coord::new(4, 4), Cell::Wall).unwrap();
        let outcome = search(&walled, start, Coord::new(4, 4)).unwrap();

        assert_eq!(outcome.distances.get(start), Some(0));
        assert_eq!(outcome.distances.get(Coord::new(0, 3)), Some(3));
        assert_eq!(outcome.distances.get(Coord::new(2, 2)), Some(4));
        assert_eq!(outcome.distances.get(Coord::new(3, 1)), Some(4));
        assert_eq!(outcome.distances.get(Coord::new(4, 4)), None);
        assert_eq!(outcome.predecessors.get(Coord::new(4, 4)), None);
        assert_eq!(outcome.expanded, 24);
    }

    #[test]
    fn stops_once_end_is_finalized() {
        let grid = open(10, 10);
        let outcome = search(&grid, Coord::new(0, 0), Coord::new(0, 1)).unwrap();
        assert_eq!(outcome.distances.get(Coord::new(0, 1)), Some(1));
        assert!(outcome.expanded < grid.len());
    }

    #[test]
    fn start_has_no_predecessor() {
        let grid = open(3, 3);
        let outcome = search(&grid, Coord::new(1, 1), Coord::new(0, 0)).unwrap();
        assert_eq!(outcome.predecessors.get(Coord::new(1, 1)), None);
        assert_eq!(outcome.predecessors.get(Coord::new(0, 0)), Some(Coord::new(1, 1)));
    }

    #[test]
    fn wall_at_start_still_searches() {
        let mut grid = open(3, 3);
        grid.set(Coord::new(0, 0), Cell::Wall).unwrap();
        let outcome = search(&grid, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert_eq!(outcome.distances.get(Coord::new(2, 2)), Some(4));
    }

    #[test]
    fn walls_are_never_entered() {
        let mut grid = open(3, 3);
        grid.set(Coord::new(1, 1), Cell::Wall).unwrap();
        let outcome = search(&grid, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert_eq!(outcome.distances.get(Coord::new(1, 1)), None);
        assert_eq!(outcome.distances.get(Coord::new(2, 2)), Some(4));
    }

    #[test]
    fn equal_cost_relaxation_keeps_first_predecessor() {
        // (1,1) is reached from (0,0) diagonally at cost 2 before (1,0) or
        // (0,1) could offer the same cost.
        let grid = open(3, 3);
        let outcome = search(&grid, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert_eq!(outcome.predecessors.get(Coord::new(1, 1)), Some(Coord::new(0, 0)));
        assert_eq!(outcome.predecessors.get(Coord::new(2, 2)), Some(Coord::new(1, 1)));
    }

    #[test]
    fn every_reached_cell_but_start_has_a_predecessor() {
        let mut grid = open(4, 4);
        grid.set(Coord::new(1, 1), Cell::Wall).unwrap();
        grid.set(Coord::new(3, 3), Cell::Wall).unwrap();
        let outcome = search(&grid, Coord::new(0, 0), Coord::new(3, 3)).unwrap();
        for (coord, _) in grid.iter() {
            let reached = outcome.distances.get(coord).is_some();
            let linked = outcome.predecessors.get(coord).is_some();
            assert_eq!(reached && coord != Coord::new(0, 0), linked, "{coord}");
        }
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let grid = open(3, 3);
        let err = search(&grid, Coord::new(-1, 0), Coord::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            PathError::OutOfBounds { coord: Coord::new(-1, 0), rows: 3, cols: 3 }
        );
        assert!(search(&grid, Coord::new(0, 0), Coord::new(3, 0)).is_err());
    }

    #[test]
    fn dijkstra_reports_expanded_cells() {
        let grid = open(4, 4);
        let mut dijkstra = Dijkstra::new();
        let outcome = dijkstra.find_path(&grid, Coord::new(0, 0), Coord::new(3, 3)).unwrap();
        assert_eq!(outcome.path().map(|p| p.cost()), Some(6));
        assert!(dijkstra.cells_expanded() > 0);
        assert_eq!(dijkstra.name(), "dijkstra");
    }
}
