//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Snapshots
//! are drawn into a framebuffer by [`GameView`] and flushed to the terminal
//! by [`TerminalRenderer`], which only rewrites what changed.
//!
//! - Keeps `core` free of I/O
//! - Two terminal columns per grid cell to square up the well

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use marathon_core as core;
pub use marathon_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
