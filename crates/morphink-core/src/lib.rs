//! Morphink Core Library
//!
//! Platform-agnostic geometry, pointer input, and collaborator contracts
//! for the morphink editor's interaction core. The handle-menu subsystem
//! in `morphink-widgets` builds on these primitives; rendering and
//! window-system plumbing live behind the narrow traits defined here.

pub mod controlee;
pub mod geometry;
pub mod input;
pub mod registry;
pub mod surface;

pub use controlee::{
    Controlee, ControleeArena, ControleeId, EmptyControlee, NoPick, SubHandle, SubHandleKind,
    SubHandlePicker,
};
pub use geometry::{DOWNWARD, GeometryError, normalize_onto_axis, orthogonal, unit};
pub use input::{Modifiers, MouseButton, PointerInput};
pub use registry::{SceneRegistry, WidgetId};
pub use surface::{DrawSurface, PlainSurface};
