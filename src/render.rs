use crate::algorithms::Path;
use crate::grid::{Cell, Coord, Grid};
use std::fmt::Write;

pub const PATH_SYMBOL: char = '*';

/// Draws the grid as text with row/column numbers. Cells on `path` other
/// than its endpoints are drawn as [`PATH_SYMBOL`].
pub fn render(grid: &Grid, path: Option<&Path>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Legend: S=Start, E=End, #=Wall, {PATH_SYMBOL}=Path, .=Empty"
    );

    out.push_str("   ");
    for col in 0..grid.cols() {
        let _ = write!(out, "{:2}", col % 10);
    }
    out.push('\n');

    let mut row = None;
    for (coord, cell) in grid.iter() {
        if row != Some(coord.row) {
            if row.is_some() {
                out.push('\n');
            }
            let _ = write!(out, "{:2} ", coord.row);
            row = Some(coord.row);
        }
        let symbol = match cell {
            Cell::Empty if path.is_some_and(|p| is_interior(p, coord)) => PATH_SYMBOL,
            other => other.symbol(),
        };
        let _ = write!(out, " {symbol}");
    }
    out.push('\n');
    out
}

fn is_interior(path: &Path, coord: Coord) -> bool {
    coord != path.start() && coord != path.end() && path.contains(coord)
}
