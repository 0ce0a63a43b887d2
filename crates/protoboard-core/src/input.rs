//! Pointer input primitives shared by the interaction machine and the
//! hosting shell.

use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state at the time of an input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Whether the platform command modifier is held (ctrl, or meta on
    /// macOS-style layouts). Gates wheel-zoom vs wheel-pan.
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}
