//! Entry points used by the editing and rendering layers.

use crate::algorithms::{Dijkstra, PathOutcome, PathfindingAlgorithm};
use crate::error::{PathError, PathResult};
use crate::grid::{Cell, Coord, Grid};

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 20;

/// Creates an all-empty `rows` x `cols` grid.
pub fn configure_grid(rows: usize, cols: usize) -> PathResult<Grid> {
    Grid::new(rows, cols)
}

/// Sets one cell. Marker uniqueness is not enforced here; `find_path`
/// checks it before searching.
pub fn set_cell(grid: &mut Grid, coord: Coord, cell: Cell) -> PathResult<()> {
    grid.set(coord, cell)
}

/// Searches for the cheapest 8-connected path from `start` to `end`.
///
/// `start` and `end` are taken as given rather than scanned from the grid.
/// Any `Start`/`End` markers on the grid must be unique and sit on the
/// requested coordinates.
pub fn find_path(grid: &Grid, start: Coord, end: Coord) -> PathResult<PathOutcome> {
    validate(grid, start, end)?;
    Dijkstra::new().find_path(grid, start, end)
}

/// Precondition checks run once before a search.
pub fn validate(grid: &Grid, start: Coord, end: Coord) -> PathResult<()> {
    for coord in [start, end] {
        grid.get(coord)?;
    }
    check_marker(grid, Cell::Start, start)?;
    check_marker(grid, Cell::End, end)
}

fn check_marker(grid: &Grid, cell: Cell, expected: Coord) -> PathResult<()> {
    match grid.find(cell).as_slice() {
        [] => Ok(()),
        [found] if *found == expected => Ok(()),
        [found] => Err(PathError::MarkerMismatch {
            cell,
            expected,
            found: *found,
        }),
        many => Err(PathError::DuplicateMarker {
            cell,
            count: many.len(),
        }),
    }
}
