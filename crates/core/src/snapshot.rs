//! Snapshot module - a render-ready copy of the game
//!
//! Front ends draw from a [`GameSnapshot`] and never touch the playfield or
//! player directly.

use arrayvec::ArrayVec;

use crate::player::Player;
use crate::playfield::Playfield;
use crate::types::{Cell, PieceKind, Rgba, COLUMNS, LINES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub orientation: usize,
    pub x: i32,
    pub y: i32,
    pub ghost_y: i32,
    pub color: Rgba,
    /// Filled mask cells as (dx, dy) from the origin
    pub offsets: [(i32, i32); 4],
}

impl ActiveSnapshot {
    /// Grid cells covered by the piece
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.offsets
            .iter()
            .map(move |&(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Grid cells covered by the ghost
    pub fn ghost_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.offsets
            .iter()
            .map(move |&(dx, dy)| (self.x + dx, self.ghost_y + dy))
    }
}

/// Render-ready copy of a marathon game
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub grid: [[Cell; COLUMNS]; LINES],
    /// Absent while rows are clearing and after game over
    pub active: Option<ActiveSnapshot>,
    /// Rows being highlighted before they collapse
    pub clearing: ArrayVec<usize, LINES>,
    pub highlight_fraction: f32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Capture `player` on `playfield`, reusing this snapshot's storage
    pub fn capture(&mut self, playfield: &Playfield, player: &Player) {
        playfield.write_grid(&mut self.grid);

        self.active = if player.is_playing() {
            let piece = player.piece();
            let (x, y) = player.position();
            let (_, ghost_y) = player.ghost_position();

            let mut offsets = [(0, 0); 4];
            for (slot, cell) in offsets
                .iter_mut()
                .zip(piece.current_shape().filled_cells())
            {
                *slot = cell;
            }

            Some(ActiveSnapshot {
                kind: piece.kind(),
                orientation: piece.orientation(),
                x,
                y,
                ghost_y,
                color: piece.color(),
                offsets,
            })
        } else {
            None
        };

        self.clearing.clear();
        self.clearing.extend(playfield.completed_lines().iter().copied());
        self.highlight_fraction = playfield.highlight_fraction();

        self.score = player.score();
        self.level = player.level();
        self.lines = player.lines();
        self.game_over = player.is_game_over();
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[Cell::EMPTY; COLUMNS]; LINES],
            active: None,
            clearing: ArrayVec::new(),
            highlight_fraction: 0.0,
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
        }
    }
}
