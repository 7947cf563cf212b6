//! Edge-triggered control state for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a control counts as released once no press or repeat event has arrived for
//! the timeout.

use crate::types::{Control, TickInput};

/// Release timeout used when none is configured
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Per-control up/down state across frames.
#[derive(Debug, Clone)]
pub struct ControlState {
    previous: [bool; Control::COUNT],
    current: [bool; Control::COUNT],
    /// Up-to-down transitions seen this frame, kept even if released again
    pressed: [bool; Control::COUNT],
    /// Milliseconds since the last press/repeat event
    since_event_ms: [u32; Control::COUNT],
    key_release_timeout_ms: u32,
}

impl ControlState {
    pub fn new() -> Self {
        Self {
            previous: [false; Control::COUNT],
            current: [false; Control::COUNT],
            pressed: [false; Control::COUNT],
            since_event_ms: [0; Control::COUNT],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    /// A timeout of 0 disables the implicit release.
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a press or auto-repeat event.
    pub fn press(&mut self, control: Control) {
        let i = control.index();
        if !self.current[i] {
            self.pressed[i] = true;
        }
        self.current[i] = true;
        self.since_event_ms[i] = 0;
    }

    pub fn release(&mut self, control: Control) {
        self.current[control.index()] = false;
    }

    /// Went down this frame.
    pub fn is_pressed(&self, control: Control) -> bool {
        self.pressed[control.index()]
    }

    pub fn is_down(&self, control: Control) -> bool {
        self.current[control.index()]
    }

    /// Went up this frame.
    pub fn is_released(&self, control: Control) -> bool {
        let i = control.index();
        self.previous[i] && !self.current[i]
    }

    /// Controls for the tick about to run.
    pub fn tick_input(&self) -> TickInput {
        let mut input = TickInput::idle();
        for control in Control::ALL {
            let active = match control {
                Control::SoftDrop => self.is_down(control) || self.is_pressed(control),
                _ => self.is_pressed(control),
            };
            input.set(control, active);
        }
        input
    }

    /// Close the frame: current becomes previous, held controls age.
    pub fn end_frame(&mut self, elapsed_ms: u32) {
        self.previous = self.current;
        self.pressed = [false; Control::COUNT];

        if self.key_release_timeout_ms == 0 {
            return;
        }

        for i in 0..Control::COUNT {
            if !self.current[i] {
                continue;
            }
            self.since_event_ms[i] = self.since_event_ms[i].saturating_add(elapsed_ms);
            if self.since_event_ms[i] >= self.key_release_timeout_ms {
                self.current[i] = false;
            }
        }
    }

    /// Forget everything, e.g. after a restart.
    pub fn reset(&mut self) {
        let timeout = self.key_release_timeout_ms;
        *self = Self::new().with_key_release_timeout_ms(timeout);
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}
