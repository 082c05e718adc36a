use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use grid_pathfinder::config::Config;
use grid_pathfinder::editor::Editor;
use grid_pathfinder::render::render;
use grid_pathfinder::scenario::Scenario;
use grid_pathfinder::session::{comparison_table, Session};
use grid_pathfinder::{Algorithm, Cell, Coord, Grid};

fn main() -> ExitCode {
    let config = Config::parse();

    let default_level = if config.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a path was found.
fn run(config: &Config) -> Result<bool> {
    config.validate()?;

    let (grid, start, end) = load_grid(config)?;
    info!(
        "Grid size: {}x{}, walls: {}",
        grid.rows(),
        grid.cols(),
        grid.count(Cell::Wall)
    );
    info!("Algorithm: {}", config.algorithm);

    let session = Session::new(grid, start, end).context("invalid grid")?;
    let results = session.run(config.algorithm).context("search failed")?;

    let found = results.iter().any(|r| r.outcome.is_found());

    if !config.no_visualization {
        let path = results.first().and_then(|r| r.outcome.path());
        println!("{}", render(session.grid(), path));
    }

    if config.algorithm == Algorithm::All {
        println!("=== ALGORITHM COMPARISON RESULTS ===");
        println!("{}", comparison_table(&results));
    } else {
        for result in &results {
            println!("=== FINAL RESULTS ===");
            println!("{}", result.statistics);
            if let Some(path) = result.outcome.path() {
                let coords: Vec<String> = path.iter().map(Coord::to_string).collect();
                println!("Path: {}", coords.join(" -> "));
            }
        }
    }

    if !found {
        println!("No path exists between {start} and {end}");
        println!("Try reducing --num-walls or increasing the grid size");
    }
    Ok(found)
}

/// Loads the map file or generates a scenario, returning the grid and its
/// start/end coordinates.
fn load_grid(config: &Config) -> Result<(Grid, Coord, Coord)> {
    let Some(path) = &config.map else {
        let scenario = Scenario::generate(config.rows, config.cols, config.num_walls, config.seed);
        info!("Scenario seed: {} (for reproducibility)", scenario.seed);
        return Ok((scenario.create_grid()?, scenario.start, scenario.end));
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read map {}", path.display()))?;
    let grid = text
        .parse::<Grid>()
        .with_context(|| format!("failed to parse map {}", path.display()))?;

    let editor = Editor::from_grid(grid);
    let start = editor.start().context("map has no start cell (S)")?;
    let end = editor.end().context("map has no end cell (E)")?;
    Ok((editor.into_grid(), start, end))
}
