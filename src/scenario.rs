use crate::error::PathResult;
use crate::grid::{Cell, Coord, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::info;

/// A random layout: endpoints plus a set of walls.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub rows: usize,
    pub cols: usize,
    pub start: Coord,
    pub end: Coord,
    pub walls: FxHashSet<Coord>,
    pub seed: u64,
}

impl Scenario {
    /// Generates a layout. The same seed always yields the same layout; with
    /// no seed one is drawn at random and recorded in `seed`.
    ///
    /// Start lands in the top-left quadrant and end in the bottom-right one.
    /// Walls never cover either endpoint. Requests beyond the free cells are
    /// capped, and placement gives up after three attempts per wall, so dense
    /// requests may place fewer.
    pub fn generate(rows: usize, cols: usize, num_walls: usize, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let (rows, cols) = (rows.max(1), cols.max(1));
        let start = Coord::new(
            rng.gen_range(0..(rows / 2).max(1)) as i32,
            rng.gen_range(0..(cols / 2).max(1)) as i32,
        );
        let end = Coord::new(
            rng.gen_range(rows / 2..rows) as i32,
            rng.gen_range(cols / 2..cols) as i32,
        );

        let free = rows * cols - if start == end { 1 } else { 2 };
        let target = num_walls.min(free);
        let mut walls = FxHashSet::default();
        let mut attempts = 0;
        while walls.len() < target && attempts < target.saturating_mul(3) {
            let pos = Coord::new(rng.gen_range(0..rows) as i32, rng.gen_range(0..cols) as i32);
            if pos != start && pos != end {
                walls.insert(pos);
            }
            attempts += 1;
        }

        info!(
            seed,
            %start,
            %end,
            walls = walls.len(),
            "generated scenario"
        );

        Scenario {
            rows,
            cols,
            start,
            end,
            walls,
            seed,
        }
    }

    /// Paints the layout onto a fresh grid.
    pub fn create_grid(&self) -> PathResult<Grid> {
        let mut grid = Grid::new(self.rows, self.cols)?;
        for &wall in &self.walls {
            grid.set(wall, Cell::Wall)?;
        }
        grid.set(self.start, Cell::Start)?;
        grid.set(self.end, Cell::End)?;
        Ok(grid)
    }
}
