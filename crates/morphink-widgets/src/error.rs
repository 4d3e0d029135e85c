//! Menu errors.

use morphink_core::GeometryError;
use thiserror::Error;

/// Errors surfaced by the menu state machine.
///
/// All of these are programmer/integration errors: they surface
/// immediately, are never retried, and are never swallowed. The subsystem
/// performs no I/O, so it has no transient failure modes.
#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    /// An operation was invoked in the wrong state, e.g. an index-mutating
    /// call while closed, or `open` while already open.
    #[error("{op} called while the menu is {state}")]
    InvalidState {
        op: &'static str,
        state: &'static str,
    },
    /// `open` on a group with zero items.
    #[error("cannot open a menu with no items")]
    EmptyGroup,
    /// Malformed geometry reached a layout or classification step.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl MenuError {
    pub(crate) fn closed(op: &'static str) -> Self {
        MenuError::InvalidState { op, state: "closed" }
    }
}
