//! Marathon (workspace facade crate).
//!
//! Re-exports the workspace crates as `marathon::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use marathon_core as core;
pub use marathon_input as input;
pub use marathon_term as term;
pub use marathon_types as types;
