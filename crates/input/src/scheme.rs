//! Control scheme: one key per control.

use crossterm::event::KeyCode;

use crate::types::Control;

/// Reasons a binding list cannot become a control scheme.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum SchemeError {
    #[error("no key bound to {}", .0.as_str())]
    MissingBinding(Control),
    #[error("key {key:?} bound to both {} and {}", .first.as_str(), .second.as_str())]
    DuplicateKey {
        key: KeyCode,
        first: Control,
        second: Control,
    },
}

/// Key bindings indexed by [`Control`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlScheme {
    keys: [KeyCode; Control::COUNT],
}

impl ControlScheme {
    /// Build a scheme from `(control, key)` pairs.
    ///
    /// Every control needs a key and no key may drive two controls. A control
    /// listed twice keeps its last key.
    pub fn from_bindings(bindings: &[(Control, KeyCode)]) -> Result<Self, SchemeError> {
        let mut keys: [Option<KeyCode>; Control::COUNT] = [None; Control::COUNT];
        for &(control, key) in bindings {
            keys[control.index()] = Some(normalize(key));
        }

        let mut resolved = [KeyCode::Null; Control::COUNT];
        for control in Control::ALL {
            let key = keys[control.index()].ok_or(SchemeError::MissingBinding(control))?;

            if let Some(first) = Control::ALL[..control.index()]
                .iter()
                .copied()
                .find(|other| resolved[other.index()] == key)
            {
                return Err(SchemeError::DuplicateKey {
                    key,
                    first,
                    second: control,
                });
            }

            resolved[control.index()] = key;
        }

        Ok(Self { keys: resolved })
    }

    pub fn key_for(&self, control: Control) -> KeyCode {
        self.keys[control.index()]
    }

    /// Control driven by `key`, if any. Letters match either case.
    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        let key = normalize(key);
        Control::ALL
            .iter()
            .copied()
            .find(|control| self.keys[control.index()] == key)
    }
}

impl Default for ControlScheme {
    fn default() -> Self {
        let mut keys = [KeyCode::Null; Control::COUNT];
        keys[Control::MoveLeft.index()] = KeyCode::Left;
        keys[Control::MoveRight.index()] = KeyCode::Right;
        keys[Control::SoftDrop.index()] = KeyCode::Down;
        keys[Control::HardDrop.index()] = KeyCode::Up;
        keys[Control::RotateCw.index()] = KeyCode::Char('x');
        keys[Control::RotateCcw.index()] = KeyCode::Char('z');
        Self { keys }
    }
}

fn normalize(key: KeyCode) -> KeyCode {
    match key {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
