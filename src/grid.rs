use crate::error::{PathError, PathResult};
use std::fmt;
use std::str::FromStr;

/// A (row, col) position. Signed so that positions just off the grid can be
/// expressed and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// Returns the coordinate shifted by the given deltas.
    pub fn offset(self, d_row: i32, d_col: i32) -> Coord {
        Coord {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Start,
    End,
    Wall,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Start => 'S',
            Cell::End => 'E',
            Cell::Wall => '#',
        }
    }

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            '#' => Some(Cell::Wall),
            _ => None,
        }
    }
}

/// Fixed-size grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid.
    ///
    /// Both dimensions must be non-zero and fit in an `i32`.
    pub fn new(rows: usize, cols: usize) -> PathResult<Self> {
        let invalid = PathError::InvalidDimensions { rows, cols };
        if rows == 0 || cols == 0 || rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(invalid);
        }
        let len = rows.checked_mul(cols).ok_or(invalid)?;

        Ok(Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, `rows * cols`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Flat row-major index of `coord`, or `None` when it lies off the grid.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Inverse of [`Grid::index`].
    pub fn coord_at(&self, index: usize) -> Coord {
        Coord::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    fn checked_index(&self, coord: Coord) -> PathResult<usize> {
        self.index(coord).ok_or(PathError::OutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn get(&self, coord: Coord) -> PathResult<Cell> {
        self.checked_index(coord).map(|i| self.cells[i])
    }

    pub fn is_passable(&self, coord: Coord) -> PathResult<bool> {
        self.get(coord).map(|cell| cell != Cell::Wall)
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) -> PathResult<()> {
        let i = self.checked_index(coord)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Resets every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// All coordinates holding `cell`, in row-major order.
    pub fn find(&self, cell: Cell) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| self.coord_at(i))
            .collect()
    }

    /// Iterates `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.coord_at(i), cell))
    }
}

impl FromStr for Grid {
    type Err = PathError;

    /// Parses the ASCII map format: `.` empty, `#` wall, `S` start, `E` end.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();

        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for (col_no, ch) in line.chars().enumerate() {
                let cell = Cell::from_symbol(ch).ok_or(PathError::MapParse {
                    line: line_no + 1,
                    column: col_no + 1,
                    found: ch,
                })?;
                row.push(cell);
            }
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(PathError::RaggedMap {
                        line: line_no + 1,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        let cols = rows.first().map(Vec::len).ok_or(PathError::EmptyMap)?;
        let mut grid = Grid::new(rows.len(), cols)?;
        grid.cells = rows.into_iter().flatten().collect();
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.count(Cell::Empty), 12);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(PathError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn get_rejects_coordinates_off_the_grid() {
        let grid = Grid::new(4, 4).unwrap();
        for coord in [Coord::new(-1, 0), Coord::new(4, 0), Coord::new(0, -1), Coord::new(0, 4)] {
            assert_eq!(
                grid.get(coord),
                Err(PathError::OutOfBounds { coord, rows: 4, cols: 4 })
            );
            assert!(grid.is_passable(coord).is_err());
        }
    }

    #[test]
    fn walls_are_not_passable() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(Coord::new(1, 1), Cell::Wall).unwrap();
        grid.set(Coord::new(0, 0), Cell::Start).unwrap();
        assert!(!grid.is_passable(Coord::new(1, 1)).unwrap());
        assert!(grid.is_passable(Coord::new(0, 0)).unwrap());
        assert!(grid.is_passable(Coord::new(0, 1)).unwrap());
    }

    #[test]
    fn index_round_trips_through_coord_at() {
        let grid = Grid::new(3, 5).unwrap();
        let c = Coord::new(2, 3);
        let i = grid.index(c).unwrap();
        assert_eq!(i, 13);
        assert_eq!(grid.coord_at(i), c);
    }

    #[test]
    fn parses_ascii_map() {
        let grid: Grid = "
            S..#
            .#..
            ...E
        "
        .parse()
        .unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 4));
        assert_eq!(grid.find(Cell::Start), vec![Coord::new(0, 0)]);
        assert_eq!(grid.find(Cell::End), vec![Coord::new(2, 3)]);
        assert_eq!(grid.find(Cell::Wall), vec![Coord::new(0, 3), Coord::new(1, 1)]);
        assert_eq!(grid.to_string(), "S..#\n.#..\n...E\n");
    }

    #[test]
    fn parse_reports_bad_characters_and_ragged_rows() {
        assert_eq!(
            "..\n.x".parse::<Grid>(),
            Err(PathError::MapParse { line: 2, column: 2, found: 'x' })
        );
        assert_eq!(
            "...\n..".parse::<Grid>(),
            Err(PathError::RaggedMap { line: 2, expected: 3, found: 2 })
        );
        assert_eq!("\n  \n".parse::<Grid>(), Err(PathError::EmptyMap));
    }
}
