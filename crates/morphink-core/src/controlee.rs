//! Controlee capability contract and arena.
//!
//! A controlee is the object a menu or item currently acts on. Menus and
//! items hold only ids; the arena owns the objects, so a controlee may
//! outlive or be swapped mid-interaction without lifecycle ambiguity.

use kurbo::{Point, Rect, Vec2};
use std::collections::HashMap;
use uuid::Uuid;

use crate::geometry::DOWNWARD;

/// Unique identifier for controlees.
pub type ControleeId = Uuid;

/// Capability contract for objects a menu operates on.
///
/// Every method is total: it must hold even for an empty controlee (an
/// empty document, or the background), so callers never special-case a
/// missing target.
pub trait Controlee {
    /// Unit vector orthogonal to the boundary near `point`.
    ///
    /// Returns [`DOWNWARD`] when no boundary direction is defined.
    fn orthogonal_at(&self, point: Point) -> Vec2;

    /// Nearest point still on the boundary region: the stop a sliding
    /// benchmark cannot pass.
    fn clamp_to_edge(&self, point: Point) -> Point;

    /// Whether `point` falls on the inked outline.
    fn stroke_hit(&self, point: Point) -> bool;

    /// Bounding box in world coordinates.
    fn bounds(&self) -> Rect;
}

/// The documented default controlee: what "nothing is targeted" resolves
/// to. Reports a downward orthogonal, clamps nothing, and is never hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyControlee;

impl Controlee for EmptyControlee {
    fn orthogonal_at(&self, _point: Point) -> Vec2 {
        DOWNWARD
    }

    fn clamp_to_edge(&self, point: Point) -> Point {
        point
    }

    fn stroke_hit(&self, _point: Point) -> bool {
        false
    }

    fn bounds(&self) -> Rect {
        Rect::ZERO
    }
}

/// Externally-owned storage for controlees.
#[derive(Default)]
pub struct ControleeArena {
    entries: HashMap<ControleeId, Box<dyn Controlee>>,
    empty: EmptyControlee,
}

impl ControleeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a controlee and return its id.
    pub fn insert(&mut self, controlee: Box<dyn Controlee>) -> ControleeId {
        let id = Uuid::new_v4();
        self.entries.insert(id, controlee);
        id
    }

    /// Remove a controlee. Outstanding id references held by menus then
    /// resolve to the empty controlee.
    pub fn remove(&mut self, id: ControleeId) -> Option<Box<dyn Controlee>> {
        self.entries.remove(&id)
    }

    /// Resolve an optional back reference.
    ///
    /// Absent or unknown ids resolve to the empty controlee, never to a
    /// null: "no controlee" is a real variant.
    pub fn resolve(&self, id: Option<ControleeId>) -> &dyn Controlee {
        id.and_then(|id| self.entries.get(&id))
            .map(|boxed| boxed.as_ref())
            .unwrap_or(&self.empty)
    }

    /// Number of controlees owned by the arena.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The kind of thing a picked sub-handle manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubHandleKind {
    Corner,
    Edge,
    Endpoint,
    Control,
}

/// A sub-handle on a controlee found under the menu hotspot during a
/// tracking slide. Advisory: recorded as the operand candidate for a
/// subsequent operation, never acted on by the menu itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubHandle {
    /// The controlee carrying the handle.
    pub controlee: ControleeId,
    /// What the handle manipulates.
    pub kind: SubHandleKind,
    /// Position in world coordinates.
    pub position: Point,
}

/// Pick query: does a sub-handle on some controlee lie under a point?
pub trait SubHandlePicker {
    fn pick(&self, point: Point) -> Option<SubHandle>;
}

/// Picker that never finds a handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPick;

impl SubHandlePicker for NoPick {
    fn pick(&self, _point: Point) -> Option<SubHandle> {
        None
    }
}
