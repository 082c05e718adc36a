use crate::grid::{Cell, Coord};
use thiserror::Error;

/// Errors raised by the grid and the path search core.
///
/// An unreachable end is not an error; it is reported as
/// [`PathOutcome::NoPathFound`](crate::algorithms::PathOutcome::NoPathFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("coordinate {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },

    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("grid holds {count} {cell:?} cells, at most one is allowed")]
    DuplicateMarker { cell: Cell, count: usize },

    #[error("{cell:?} marker is at {found} but the search was asked to use {expected}")]
    MarkerMismatch {
        cell: Cell,
        expected: Coord,
        found: Coord,
    },

    #[error("corrupted predecessor map: {0}")]
    InternalInconsistency(String),

    #[error("unexpected character {found:?} at line {line}, column {column}")]
    MapParse {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedMap {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("map contains no rows")]
    EmptyMap,
}

pub type PathResult<T> = Result<T, PathError>;
