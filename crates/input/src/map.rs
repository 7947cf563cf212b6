//! Key mapping from terminal events to controls.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::scheme::ControlScheme;
use crate::state::ControlState;
use crate::types::Control;

/// Map a key event to the control it drives under `scheme`.
pub fn handle_key_event(scheme: &ControlScheme, key: KeyEvent) -> Option<Control> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    scheme.control_for(key.code)
}

/// Feed a key event into `state`.
///
/// Presses and terminal auto-repeats both refresh the held state; repeats
/// never produce a new edge. Returns the control the event applied to.
pub fn apply_key_event(
    scheme: &ControlScheme,
    state: &mut ControlState,
    key: KeyEvent,
) -> Option<Control> {
    let control = handle_key_event(scheme, key)?;
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => state.press(control),
        KeyEventKind::Release => state.release(control),
    }
    Some(control)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should start a new game.
pub fn should_restart(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
