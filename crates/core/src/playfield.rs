//! Playfield module - the grid, collision testing and row clearing
//!
//! The playfield is a 10x20 grid stored as a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..19
//! (top to bottom). Rows above the grid (y < 0) are valid spawn space: they
//! never collide, but nothing can be locked there.
//!
//! Completed rows are not removed right away. `validate_field` collects them
//! and arms a highlight timer; the rows collapse once `update` runs the timer
//! out, which is when the clear notification is produced.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, COLUMNS, HIGHLIGHT_TIME, LINES};

/// Total number of cells on the playfield
const FIELD_SIZE: usize = COLUMNS * LINES;

/// Notification raised when a row-clear animation has fully resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinesCleared {
    pub count: u32,
}

/// The playfield - 10 columns x 20 lines using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    /// Flat array of cells, row-major order (y * COLUMNS + x)
    cells: [Cell; FIELD_SIZE],
    /// Rows found complete by the last validation, ascending
    completed: ArrayVec<usize, LINES>,
    /// Seconds left on the completed-row highlight
    clear_timer: f64,
}

impl Playfield {
    /// Create an empty playfield
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; FIELD_SIZE],
            completed: ArrayVec::new(),
            clear_timer: 0.0,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= COLUMNS as i32 || y < 0 || y >= LINES as i32 {
            return None;
        }
        Some((y as usize) * COLUMNS + (x as usize))
    }

    pub fn columns(&self) -> usize {
        COLUMNS
    }

    pub fn lines(&self) -> usize {
        LINES
    }

    /// Get cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) is inside the grid and occupied
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell { occupied: true, .. }))
    }

    /// Check whether `piece` in its current orientation fits with its mask
    /// origin at (`left`, `top`)
    ///
    /// A filled cell is rejected below the floor, past either wall, or on an
    /// occupied cell. Cells above the grid always pass.
    pub fn does_shape_fit_here(&self, piece: &Piece, left: i32, top: i32) -> bool {
        piece.current_shape().filled_cells().all(|(dx, dy)| {
            let x = left + dx;
            let y = top + dy;

            if y >= LINES as i32 || x < 0 || x >= COLUMNS as i32 {
                return false;
            }
            if y < 0 {
                return true;
            }
            !self.is_occupied(x, y)
        })
    }

    /// Write `piece` into the grid with its mask origin at (`left`, `top`)
    ///
    /// Returns false, leaving the grid untouched, if `top` is above the grid:
    /// that is the top-out signal. Overlap is not checked; callers validate
    /// with [`Playfield::does_shape_fit_here`] first.
    pub fn lock_in_place(&mut self, piece: &Piece, left: i32, top: i32) -> bool {
        if top < 0 {
            return false;
        }

        let filled = Cell::filled(piece.color());
        for (dx, dy) in piece.current_shape().filled_cells() {
            self.set(left + dx, top + dy, filled);
        }

        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= LINES {
            return false;
        }
        let start = y * COLUMNS;
        self.cells[start..start + COLUMNS]
            .iter()
            .all(|cell| cell.occupied)
    }

    /// Collect completed rows and arm the highlight timer
    ///
    /// Returns the number of completed rows. The previous collection is
    /// discarded first.
    pub fn validate_field(&mut self) -> usize {
        self.completed.clear();

        for y in 0..LINES {
            if self.is_row_full(y) {
                self.completed.push(y);
            }
        }

        if !self.completed.is_empty() {
            self.clear_timer = HIGHLIGHT_TIME;
        }

        self.completed.len()
    }

    /// Advance the highlight timer by `elapsed` seconds
    ///
    /// When the timer runs out the completed rows collapse and the
    /// notification is returned; this happens exactly once per validation.
    pub fn update(&mut self, elapsed: f64) -> Option<LinesCleared> {
        if self.clear_timer <= 0.0 {
            return None;
        }

        self.clear_timer -= elapsed;
        if self.clear_timer <= 0.0 {
            self.clear_timer = 0.0;
            return Some(self.clear_lines());
        }

        None
    }

    /// Remove the collected rows, shifting everything above them down
    ///
    /// A single bottom-up pass copies every surviving row to its final slot,
    /// so any number of collected rows collapse without skipping or
    /// duplicating a row. Rows freed at the top become cleared cells.
    pub fn clear_lines(&mut self) -> LinesCleared {
        let count = self.completed.len();
        let mut write_y = LINES;

        for read_y in (0..LINES).rev() {
            if self.completed.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * COLUMNS;
                self.cells.copy_within(src..src + COLUMNS, write_y * COLUMNS);
            }
        }

        for cell in &mut self.cells[..write_y * COLUMNS] {
            *cell = Cell::CLEARED;
        }

        self.completed.clear();
        self.clear_timer = 0.0;

        LinesCleared {
            count: count as u32,
        }
    }

    /// Rows currently highlighted for clearing (empty when idle)
    pub fn completed_lines(&self) -> &[usize] {
        &self.completed
    }

    /// Whether a clear animation is in progress
    pub fn is_clearing(&self) -> bool {
        self.clear_timer > 0.0
    }

    /// Remaining fraction of the highlight animation, 1.0 down to 0.0
    pub fn highlight_fraction(&self) -> f32 {
        if self.clear_timer <= 0.0 {
            return 0.0;
        }
        (self.clear_timer / HIGHLIGHT_TIME).clamp(0.0, 1.0) as f32
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * COLUMNS;
        &self.cells[start..start + COLUMNS]
    }

    /// Copy the grid into a 2D array
    pub fn write_grid(&self, out: &mut [[Cell; COLUMNS]; LINES]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
