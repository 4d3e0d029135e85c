//! Filtered pointer input delivered to menu controls.
//!
//! The window-system event source is an external collaborator; by the time
//! an event reaches this crate it has been filtered down to a position and
//! the modifier state, with the button reported separately by the caller.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A filtered pointer event in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Pointer position.
    pub position: Point,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerInput {
    /// Event at a position with no modifiers held.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers::default(),
        }
    }
}
