//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the simulation core, the input
//! layer and the terminal front end. Everything here is plain data with no
//! external dependencies.
//!
//! # Playfield Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Lines**: 20 (indexed 0-19, row 0 is the visual top)
//! - **Spawn position**: column 4, row -2 (above the visible grid)
//!
//! # Timing Constants
//!
//! All timers are plain counters in seconds, advanced by the caller:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `HIGHLIGHT_TIME` | 0.5 | Completed-row highlight before the rows collapse |
//! | `LOCK_DELAY_TIME` | 0.5 | Grace period once a piece touches down |
//! | `LOCK_RESETS` | 15 | Moves/rotations allowed while grounded |
//! | `SOFT_DROP_FACTOR` | 6 | Extra gravity multiplier while soft dropping |
//!
//! # Examples
//!
//! ```
//! use marathon_types::{Control, PieceKind, COLUMNS, LINES};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Control::from_str("hardDrop"), Some(Control::HardDrop));
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(LINES, 20);
//! ```

/// Playfield width in cells
pub const COLUMNS: usize = 10;

/// Playfield height in cells
pub const LINES: usize = 20;

/// Duration of the completed-row highlight, in seconds
pub const HIGHLIGHT_TIME: f64 = 0.5;

/// Lock delay once a piece is grounded, in seconds
pub const LOCK_DELAY_TIME: f64 = 0.5;

/// Maximum number of lock-delay resets per piece
pub const LOCK_RESETS: u8 = 15;

/// Soft drop accelerates gravity by this factor
pub const SOFT_DROP_FACTOR: f64 = 6.0;

/// Column of the spawn offset (left edge of the shape mask)
pub const SPAWN_COLUMN: i32 = 4;

/// Row of the spawn offset; negative, pieces enter from above the grid
pub const SPAWN_ROW: i32 = -2;

/// First level of a marathon game (there is no level 0)
pub const MIN_LEVEL: u32 = 1;

/// Gravity stops speeding up past this level
pub const MAX_SPEED_LEVEL: u32 = 20;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear base scores, multiplied by the level before the clear
///
/// Index is the number of rows cleared at once (0-4).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Straight-alpha RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
    pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);
    pub const DEEP_PINK: Rgba = Rgba::rgb(255, 20, 147);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    pub const ORANGE: Rgba = Rgba::rgb(255, 165, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 128, 0);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// A single playfield cell
///
/// Fresh cells are unoccupied and black; cells vacated by a row shift are
/// unoccupied and transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub occupied: bool,
    pub color: Rgba,
}

impl Cell {
    /// An unoccupied cell as created with the playfield
    pub const EMPTY: Cell = Cell {
        occupied: false,
        color: Rgba::BLACK,
    };

    /// An unoccupied cell left behind by a row shift
    pub const CLEARED: Cell = Cell {
        occupied: false,
        color: Rgba::TRANSPARENT,
    };

    pub const fn filled(color: Rgba) -> Self {
        Self {
            occupied: true,
            color,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The seven tetrimino types
///
/// Each type has a fixed display color:
/// - **I**: Cyan
/// - **O**: Yellow
/// - **T**: Pink
/// - **J**: Blue
/// - **L**: Orange
/// - **S**: Green
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in bag-refill order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use marathon_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Display color of this piece type
    pub fn color(&self) -> Rgba {
        match self {
            PieceKind::I => Rgba::CYAN,
            PieceKind::O => Rgba::YELLOW,
            PieceKind::T => Rgba::DEEP_PINK,
            PieceKind::J => Rgba::BLUE,
            PieceKind::L => Rgba::ORANGE,
            PieceKind::S => Rgba::GREEN,
            PieceKind::Z => Rgba::RED,
        }
    }
}

/// Player controls
///
/// A closed set: every control has exactly one slot in a control table, so a
/// lookup for an unmapped control cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Shift the piece one column left (edge-triggered)
    MoveLeft,
    /// Shift the piece one column right (edge-triggered)
    MoveRight,
    /// Accelerate gravity while held (level-triggered)
    SoftDrop,
    /// Lock the piece at the ghost position (edge-triggered)
    HardDrop,
    /// Rotate clockwise (edge-triggered)
    RotateCw,
    /// Rotate counter-clockwise (edge-triggered)
    RotateCcw,
}

impl Control {
    pub const COUNT: usize = 6;

    pub const ALL: [Control; Control::COUNT] = [
        Control::MoveLeft,
        Control::MoveRight,
        Control::SoftDrop,
        Control::HardDrop,
        Control::RotateCw,
        Control::RotateCcw,
    ];

    /// Slot of this control in a `[_; Control::COUNT]` table
    pub const fn index(self) -> usize {
        match self {
            Control::MoveLeft => 0,
            Control::MoveRight => 1,
            Control::SoftDrop => 2,
            Control::HardDrop => 3,
            Control::RotateCw => 4,
            Control::RotateCcw => 5,
        }
    }

    /// Parse from a camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Control::MoveLeft),
            "moveright" => Some(Control::MoveRight),
            "softdrop" => Some(Control::SoftDrop),
            "harddrop" => Some(Control::HardDrop),
            "rotatecw" => Some(Control::RotateCw),
            "rotateccw" => Some(Control::RotateCcw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Control::MoveLeft => "moveLeft",
            Control::MoveRight => "moveRight",
            Control::SoftDrop => "softDrop",
            Control::HardDrop => "hardDrop",
            Control::RotateCw => "rotateCw",
            Control::RotateCcw => "rotateCcw",
        }
    }
}

/// Resolved controls for a single simulation tick
///
/// Edge-triggered fields are true for exactly one tick per physical press;
/// `soft_drop` reflects "currently held".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub hard_drop: bool,
    pub soft_drop: bool,
}

impl TickInput {
    /// No input at all
    pub const fn idle() -> Self {
        Self {
            move_left: false,
            move_right: false,
            rotate_cw: false,
            rotate_ccw: false,
            hard_drop: false,
            soft_drop: false,
        }
    }

    /// Input with a single control active
    pub fn pressed(control: Control) -> Self {
        Self::idle().with(control)
    }

    /// Builder-style: also activate `control`
    pub fn with(mut self, control: Control) -> Self {
        self.set(control, true);
        self
    }

    pub fn set(&mut self, control: Control, active: bool) {
        match control {
            Control::MoveLeft => self.move_left = active,
            Control::MoveRight => self.move_right = active,
            Control::SoftDrop => self.soft_drop = active,
            Control::HardDrop => self.hard_drop = active,
            Control::RotateCw => self.rotate_cw = active,
            Control::RotateCcw => self.rotate_ccw = active,
        }
    }

    pub fn get(&self, control: Control) -> bool {
        match control {
            Control::MoveLeft => self.move_left,
            Control::MoveRight => self.move_right,
            Control::SoftDrop => self.soft_drop,
            Control::HardDrop => self.hard_drop,
            Control::RotateCw => self.rotate_cw,
            Control::RotateCcw => self.rotate_ccw,
        }
    }
}

/// Domain event produced by a simulation tick
///
/// Events are appended in the order they happen and drained by the caller
/// after each update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The clear animation finished and `count` rows collapsed
    LinesCleared { count: u32 },
    /// The level went up
    LevelUp { level: u32 },
    /// Points were added; `total` is the new score
    ScoreAwarded { total: u32, delta: u32 },
    /// Top-out; the final tallies
    GameOver { level: u32, score: u32, lines: u32 },
}
