use crate::algorithms::{Algorithm, PathOutcome, PathfindingAlgorithm};
use crate::error::PathResult;
use crate::grid::{Coord, Grid};
use crate::pathfinder;
use crate::statistics::PathStatistics;
use std::fmt::Write;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub outcome: PathOutcome,
    pub statistics: PathStatistics,
}

/// One grid plus the endpoints to search between.
pub struct Session {
    grid: Grid,
    start: Coord,
    end: Coord,
}

impl Session {
    /// Validates the endpoints against the grid once up front.
    pub fn new(grid: Grid, start: Coord, end: Coord) -> PathResult<Self> {
        pathfinder::validate(&grid, start, end)?;
        Ok(Session { grid, start, end })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Runs the selected algorithm, or every algorithm for [`Algorithm::All`].
    pub fn run(&self, algorithm: Algorithm) -> PathResult<Vec<AlgorithmResult>> {
        match algorithm.create() {
            Some(mut solver) => Ok(vec![self.run_solver(solver.as_mut())?]),
            None => self.run_all_algorithms(),
        }
    }

    /// Runs every solver on the same grid and warns if their costs differ.
    pub fn run_all_algorithms(&self) -> PathResult<Vec<AlgorithmResult>> {
        let solvers = Algorithm::solvers();
        info!("Running comparison of {} algorithms", solvers.len());

        let mut results = Vec::with_capacity(solvers.len());
        for mut solver in solvers.into_iter().filter_map(Algorithm::create) {
            results.push(self.run_solver(solver.as_mut())?);
        }

        if !costs_agree(&results) {
            warn!("algorithms disagree on the cheapest cost");
        }
        Ok(results)
    }

    fn run_solver(&self, solver: &mut dyn PathfindingAlgorithm) -> PathResult<AlgorithmResult> {
        let started = Instant::now();
        let outcome = solver.find_path(&self.grid, self.start, self.end)?;
        let elapsed = started.elapsed();

        let statistics =
            PathStatistics::new(solver.name(), &outcome, solver.cells_expanded(), elapsed);
        info!(
            algorithm = solver.name(),
            found = statistics.found,
            cost = ?statistics.cost,
            elapsed = ?elapsed,
            "search complete"
        );
        Ok(AlgorithmResult {
            outcome,
            statistics,
        })
    }
}

/// True when every result found a path of the same cost, or none found one.
pub fn costs_agree(results: &[AlgorithmResult]) -> bool {
    results
        .windows(2)
        .all(|w| w[0].statistics.cost == w[1].statistics.cost)
}

/// Formats results side by side.
pub fn comparison_table(results: &[AlgorithmResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<8} {:<8} {:<8} {:<10} {:<10} {:<12}",
        "Algorithm", "Found", "Cost", "Steps", "Diagonal", "Expanded", "Time"
    );
    let _ = writeln!(out, "{}", "-".repeat(72));

    for result in results {
        let s = &result.statistics;
        let found = if s.found { "yes" } else { "no" };
        let cost = s.cost.map_or_else(|| "-".to_string(), |c| c.to_string());
        let expanded = if s.cells_expanded > 0 {
            s.cells_expanded.to_string()
        } else {
            "-".to_string()
        };
        let _ = writeln!(
            out,
            "{:<12} {:<8} {:<8} {:<8} {:<10} {:<10} {:<12}",
            s.algorithm,
            found,
            cost,
            s.steps,
            s.diagonal_moves,
            expanded,
            format!("{:.2?}", s.elapsed)
        );
    }

    if results.len() > 1 {
        let verdict = if costs_agree(results) {
            "All algorithms agree on the cheapest cost."
        } else {
            "Algorithms DISAGREE on the cheapest cost."
        };
        let _ = writeln!(out, "\n{verdict}");
    }
    out
}
