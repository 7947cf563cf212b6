//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the marathon rules: piece tables, the seven-bag
//! randomizer, the playfield and the player state machine. It has **no
//! dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Fast**: No allocation on the tick path
//!
//! # Module Structure
//!
//! - [`shape`]: Square occupancy masks
//! - [`pieces`]: Orientation tables and modular rotation
//! - [`rng`]: 7-bag random piece generation, optionally seeded
//! - [`playfield`]: 10x20 grid, collision testing and delayed row clearing
//! - [`player`]: Active piece, gravity, lock delay, scoring and level
//! - [`scoring`]: Score table, level formula and gravity curve
//! - [`marathon`]: A session tying one playfield to one player
//! - [`snapshot`]: Render-ready copy of a session
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: Every run of seven draws after a refill holds each type once
//! - **Rotation**: Plain orientation stepping, a blocked rotation is undone (no kicks)
//! - **Lock Delay**: 0.5s once grounded, reset by moves, capped at 15 moves per piece
//! - **Ghost Piece**: Shows where the current piece will land
//! - **Row Clear**: Completed rows are highlighted for 0.5s, then collapse
//! - **Scoring**: 100/300/500/800 x level, 2 per hard-dropped row, 1 per soft-drop step
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use marathon_core::{GameConfig, Marathon};
//! use marathon_types::{Control, TickInput};
//!
//! let mut game = Marathon::new(GameConfig::with_seed(12345));
//!
//! game.update(Duration::from_millis(16), &TickInput::pressed(Control::MoveRight));
//! game.update(Duration::from_millis(16), &TickInput::pressed(Control::HardDrop));
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! The caller drives time: every [`Player::update`](player::Player::update)
//! receives the elapsed time since the previous tick. Gravity at level 1 is
//! one row per second and speeds up until level 20.

pub mod config;
pub mod marathon;
pub mod pieces;
pub mod player;
pub mod playfield;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use marathon_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use marathon::{Marathon, SessionState};
pub use pieces::{get_shape, Piece};
pub use player::{LockPhase, Player, PlayerState, TickEvents};
pub use playfield::{LinesCleared, Playfield};
pub use rng::Randomizer;
pub use scoring::{drop_interval, hard_drop_score, level_for_lines, line_clear_score};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
