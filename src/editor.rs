use crate::algorithms::PathOutcome;
use crate::error::PathResult;
use crate::grid::{Cell, Coord, Grid};
use crate::pathfinder;
use tracing::debug;

/// Which cell type a pointer gesture paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    #[default]
    Start,
    End,
    Wall,
}

impl PaintMode {
    fn cell(self) -> Cell {
        match self {
            PaintMode::Start => Cell::Start,
            PaintMode::End => Cell::End,
            PaintMode::Wall => Cell::Wall,
        }
    }
}

/// A key binding's meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    SetMode(PaintMode),
    FindPath,
}

impl EditorCommand {
    /// `s`, `e` and `w` switch paint mode, `d` asks for a path.
    pub fn from_key(key: char) -> Option<EditorCommand> {
        match key.to_ascii_lowercase() {
            's' => Some(EditorCommand::SetMode(PaintMode::Start)),
            'e' => Some(EditorCommand::SetMode(PaintMode::End)),
            'w' => Some(EditorCommand::SetMode(PaintMode::Wall)),
            'd' => Some(EditorCommand::FindPath),
            _ => None,
        }
    }
}

/// The grid editing collaborator: tracks paint mode, pointer state and the
/// placed markers, and only hands a grid to the core once both ends exist.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    mode: PaintMode,
    start: Option<Coord>,
    end: Option<Coord>,
    pointer_down: bool,
}

impl Editor {
    pub fn new(grid: Grid) -> Self {
        Editor {
            grid,
            mode: PaintMode::default(),
            start: None,
            end: None,
            pointer_down: false,
        }
    }

    /// Wraps an already painted grid, picking up its first `Start` and `End`.
    pub fn from_grid(grid: Grid) -> Self {
        let start = grid.find(Cell::Start).first().copied();
        let end = grid.find(Cell::End).first().copied();
        Editor {
            start,
            end,
            ..Editor::new(grid)
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PaintMode) {
        self.mode = mode;
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Applies a key press. Returns the path outcome when the key asked for
    /// one and both markers are placed.
    pub fn key(&mut self, key: char) -> PathResult<Option<PathOutcome>> {
        match EditorCommand::from_key(key) {
            Some(EditorCommand::SetMode(mode)) => {
                self.set_mode(mode);
                Ok(None)
            }
            Some(EditorCommand::FindPath) => self.find_path(),
            None => Ok(None),
        }
    }

    /// Pointer pressed over `coord`.
    pub fn press(&mut self, coord: Coord) -> bool {
        self.pointer_down = true;
        self.paint(coord)
    }

    /// Pointer moved over `coord`; paints only while pressed.
    pub fn drag(&mut self, coord: Coord) -> bool {
        self.pointer_down && self.paint(coord)
    }

    pub fn release(&mut self) {
        self.pointer_down = false;
    }

    /// Paints `coord` with the current mode if the paint rules allow it.
    /// Returns whether the cell changed.
    pub fn paint(&mut self, coord: Coord) -> bool {
        let Ok(current) = self.grid.get(coord) else {
            return false;
        };

        let allowed = match self.mode {
            PaintMode::Start => self.start.is_none() && !matches!(current, Cell::End | Cell::Wall),
            PaintMode::End => self.end.is_none() && !matches!(current, Cell::Start | Cell::Wall),
            PaintMode::Wall => !matches!(current, Cell::Start | Cell::End | Cell::Wall),
        };
        if !allowed {
            return false;
        }

        let cell = self.mode.cell();
        if self.grid.set(coord, cell).is_err() {
            return false;
        }
        match self.mode {
            PaintMode::Start => self.start = Some(coord),
            PaintMode::End => self.end = Some(coord),
            PaintMode::Wall => {}
        }
        debug!(%coord, ?cell, "painted");
        true
    }

    /// Resets the grid and forgets the placed markers.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.start = None;
        self.end = None;
        self.pointer_down = false;
    }

    /// Runs the core search between the placed markers. `None` until both
    /// a start and an end have been painted.
    pub fn find_path(&self) -> PathResult<Option<PathOutcome>> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => pathfinder::find_path(&self.grid, start, end).map(Some),
            _ => Ok(None),
        }
    }
}
