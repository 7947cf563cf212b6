//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events onto [`crate::types::Control`] through a [`ControlScheme`] and keeps
//! per-frame edge state in a [`ControlState`], which turns into the
//! [`crate::types::TickInput`] a simulation tick consumes.

pub mod map;
pub mod scheme;
pub mod state;

pub use marathon_types as types;

pub use map::{apply_key_event, handle_key_event, should_quit, should_restart};
pub use scheme::{ControlScheme, SchemeError};
pub use state::{ControlState, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
