use crate::algorithms::PathOutcome;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct PathStatistics {
    pub algorithm: String,
    pub found: bool,
    pub cost: Option<u32>,
    pub steps: usize,
    pub orthogonal_moves: usize,
    pub diagonal_moves: usize,
    pub cells_expanded: usize,
    pub elapsed: Duration,
}

impl PathStatistics {
    pub fn new(
        algorithm: &str,
        outcome: &PathOutcome,
        cells_expanded: usize,
        elapsed: Duration,
    ) -> Self {
        let path = outcome.path();
        let (orthogonal_moves, diagonal_moves) = path.map(|p| p.move_counts()).unwrap_or((0, 0));
        PathStatistics {
            algorithm: algorithm.to_string(),
            found: path.is_some(),
            cost: path.map(|p| p.cost()),
            steps: path.map_or(0, |p| p.steps()),
            orthogonal_moves,
            diagonal_moves,
            cells_expanded,
            elapsed,
        }
    }

    /// Share of path moves that were diagonal, 0.0 when there were none.
    pub fn diagonal_ratio(&self) -> f64 {
        if self.steps > 0 {
            self.diagonal_moves as f64 / self.steps as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for PathStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        match self.cost {
            Some(cost) => {
                writeln!(f, "Path Cost: {}", cost)?;
                writeln!(f, "Steps: {}", self.steps)?;
                writeln!(
                    f,
                    "Moves: {} orthogonal, {} diagonal ({:.1}% diagonal)",
                    self.orthogonal_moves,
                    self.diagonal_moves,
                    self.diagonal_ratio() * 100.0
                )?;
            }
            None => writeln!(f, "No path found")?,
        }
        if self.cells_expanded > 0 {
            writeln!(f, "Cells Expanded: {}", self.cells_expanded)?;
        }
        writeln!(f, "Search Time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Path;
    use crate::grid::Coord;

    #[test]
    fn summarizes_found_path() {
        let path = Path::from_coords(vec![
            Coord::new(0, 0),
            Coord::new(1, 1),
            Coord::new(1, 2),
        ])
        .unwrap();
        let stats = PathStatistics::new(
            "dijkstra",
            &PathOutcome::Found(path),
            7,
            Duration::from_micros(5),
        );
        assert!(stats.found);
        assert_eq!(stats.cost, Some(3));
        assert_eq!(stats.steps, 2);
        assert_eq!((stats.orthogonal_moves, stats.diagonal_moves), (1, 1));
        assert_eq!(stats.diagonal_ratio(), 0.5);
        let text = stats.to_string();
        assert!(text.contains("Path Cost: 3"));
        assert!(text.contains("Cells Expanded: 7"));
    }

    #[test]
    fn summarizes_missing_path() {
        let stats = PathStatistics::new("reference", &PathOutcome::NoPathFound, 0, Duration::ZERO);
        assert!(!stats.found);
        assert_eq!(stats.cost, None);
        assert_eq!(stats.diagonal_ratio(), 0.0);
        assert!(stats.to_string().contains("No path found"));
    }
}
