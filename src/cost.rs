use crate::grid::Coord;

pub const ORTHOGONAL_COST: u32 = 1;
/// Integer stand-in for sqrt(2).
pub const DIAGONAL_COST: u32 = 2;

/// A single move: row/column delta and what it costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub d_row: i32,
    pub d_col: i32,
    pub cost: u32,
}

impl Offset {
    const fn new(d_row: i32, d_col: i32, cost: u32) -> Self {
        Offset { d_row, d_col, cost }
    }

    pub fn is_diagonal(&self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }

    pub fn apply(&self, coord: Coord) -> Coord {
        coord.offset(self.d_row, self.d_col)
    }
}

/// The 8 neighbor moves. Search output depends on this order:
/// up, down, left, right, then up-left, up-right, down-left, down-right.
pub const NEIGHBOR_OFFSETS: [Offset; 8] = [
    Offset::new(-1, 0, ORTHOGONAL_COST),
    Offset::new(1, 0, ORTHOGONAL_COST),
    Offset::new(0, -1, ORTHOGONAL_COST),
    Offset::new(0, 1, ORTHOGONAL_COST),
    Offset::new(-1, -1, DIAGONAL_COST),
    Offset::new(-1, 1, DIAGONAL_COST),
    Offset::new(1, -1, DIAGONAL_COST),
    Offset::new(1, 1, DIAGONAL_COST),
];

/// Cost of moving between two adjacent coordinates, or `None` if they are not
/// 8-connected neighbors.
pub fn step_cost(from: Coord, to: Coord) -> Option<u32> {
    NEIGHBOR_OFFSETS
        .iter()
        .find(|o| o.apply(from) == to)
        .map(|o| o.cost)
}

/// Total cost of walking `path` step by step. `None` if any two consecutive
/// coordinates are not neighbors.
pub fn path_cost(path: &[Coord]) -> Option<u32> {
    path.windows(2)
        .map(|w| step_cost(w[0], w[1]))
        .sum()
}

/// Cheapest possible cost between `a` and `b` on a grid without walls.
pub fn octile_estimate(a: Coord, b: Coord) -> u32 {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    let diagonal = dr.min(dc);
    let straight = dr.max(dc) - diagonal;
    diagonal * DIAGONAL_COST + straight * ORTHOGONAL_COST
}
