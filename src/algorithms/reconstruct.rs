use crate::algorithms::common::{Path, PathOutcome};
use crate::algorithms::dijkstra::PredecessorMap;
use crate::error::{PathError, PathResult};
use crate::grid::Coord;

/// Walks `predecessors` back from `end` to `start` and returns the path in
/// start-to-end order.
///
/// A walk longer than the number of cells, or one that dead-ends before
/// reaching `start`, means the map is corrupted and is reported as
/// [`PathError::InternalInconsistency`].
pub fn reconstruct(
    predecessors: &PredecessorMap,
    start: Coord,
    end: Coord,
) -> PathResult<PathOutcome> {
    if start == end {
        return single(start);
    }
    if predecessors.get(end).is_none() {
        return Ok(PathOutcome::NoPathFound);
    }

    let limit = predecessors.capacity();
    let mut coords = vec![end];
    let mut current = end;

    while current != start {
        if coords.len() > limit {
            return Err(PathError::InternalInconsistency(format!(
                "walk from {end} exceeded {limit} steps without reaching {start}"
            )));
        }
        current = predecessors.get(current).ok_or_else(|| {
            PathError::InternalInconsistency(format!(
                "{current} has no predecessor but is not the start {start}"
            ))
        })?;
        coords.push(current);
    }

    coords.reverse();
    Path::from_coords(coords)
        .map(PathOutcome::Found)
        .ok_or_else(|| {
            PathError::InternalInconsistency("predecessor links are not neighbor steps".into())
        })
}

fn single(coord: Coord) -> PathResult<PathOutcome> {
    Path::from_coords(vec![coord])
        .map(PathOutcome::Found)
        .ok_or_else(|| PathError::InternalInconsistency("empty path".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn walks_back_and_reverses() {
        let mut preds = PredecessorMap::new(3, 3);
        preds.insert(c(1, 1), c(0, 0));
        preds.insert(c(2, 1), c(1, 1));
        let outcome = reconstruct(&preds, c(0, 0), c(2, 1)).unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(path.coords(), &[c(0, 0), c(1, 1), c(2, 1)]);
        assert_eq!(path.cost(), 3);
    }

    #[test]
    fn same_start_and_end_is_single_coordinate() {
        let preds = PredecessorMap::new(2, 2);
        let outcome = reconstruct(&preds, c(1, 0), c(1, 0)).unwrap();
        assert_eq!(outcome.path().unwrap().coords(), &[c(1, 0)]);
    }

    #[test]
    fn missing_end_link_is_no_path() {
        let mut preds = PredecessorMap::new(3, 3);
        preds.insert(c(0, 1), c(0, 0));
        assert_eq!(
            reconstruct(&preds, c(0, 0), c(2, 2)).unwrap(),
            PathOutcome::NoPathFound
        );
    }

    #[test]
    fn cycle_is_an_internal_inconsistency() {
        let mut preds = PredecessorMap::new(2, 2);
        preds.insert(c(0, 1), c(1, 1));
        preds.insert(c(1, 1), c(0, 1));
        let err = reconstruct(&preds, c(0, 0), c(0, 1)).unwrap_err();
        assert!(matches!(err, PathError::InternalInconsistency(_)));
    }

    #[test]
    fn dead_end_before_start_is_an_internal_inconsistency() {
        let mut preds = PredecessorMap::new(3, 3);
        preds.insert(c(2, 2), c(1, 1));
        let err = reconstruct(&preds, c(0, 0), c(2, 2)).unwrap_err();
        assert!(matches!(err, PathError::InternalInconsistency(_)));
    }
}
