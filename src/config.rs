use crate::algorithms::Algorithm;
use crate::pathfinder::{DEFAULT_COLS, DEFAULT_ROWS};
use anyhow::{ensure, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Cheapest 8-connected paths on a painted grid", long_about = None)]
pub struct Config {
    /// ASCII map to load (`.` empty, `#` wall, `S` start, `E` end).
    /// When omitted a random layout is generated.
    #[arg(long)]
    pub map: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    #[arg(long, default_value_t = 50)]
    pub num_walls: usize,

    /// Seed for the random layout.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Algorithm::Dijkstra)]
    pub algorithm: Algorithm,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Only log warnings and errors.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    /// Checks the generated-layout settings. Ignored when a map is given.
    pub fn validate(&self) -> Result<()> {
        if self.map.is_some() {
            return Ok(());
        }
        ensure!(
            self.rows > 0 && self.cols > 0,
            "grid must be at least 1x1, got {}x{}",
            self.rows,
            self.cols
        );
        let free = self.rows.saturating_mul(self.cols).saturating_sub(2);
        ensure!(
            self.num_walls <= free,
            "{} walls do not fit a {}x{} grid (at most {})",
            self.num_walls,
            self.rows,
            self.cols,
            free
        );
        Ok(())
    }
}
