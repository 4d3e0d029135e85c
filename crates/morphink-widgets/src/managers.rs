//! External manager contracts the menu drives.
//!
//! Control activation, drag and drop, the scene registry, and sub-handle
//! picking are owned by the application. The menu calls them; it
//! implements none of them. Test doubles substitute freely.

use morphink_core::{ControleeArena, ControleeId, PointerInput, SceneRegistry, SubHandlePicker};
use uuid::Uuid;

/// Unique identifier for menu items.
pub type ItemId = Uuid;

/// Control activation bookkeeping.
///
/// The manager enforces the one-active-control policy: activating a
/// control implicitly deactivates whichever control was active before.
pub trait ControlActivation {
    /// Make `item` the active control, operating on `controlee`.
    fn activate(&mut self, item: ItemId, event: &PointerInput, controlee: Option<ControleeId>);

    /// Deactivate `item`; the application decides what becomes active.
    fn deactivate(&mut self, item: ItemId, event: &PointerInput);

    /// Hand control to the root/background control (drag handoff).
    fn activate_root(&mut self, event: &PointerInput);

    /// Open the context submenu of `item` on `controlee`. Focus is
    /// deliberately not changed.
    fn open_context_menu(
        &mut self,
        item: ItemId,
        event: &PointerInput,
        controlee: Option<ControleeId>,
    );
}

/// Drag-and-drop protocol entry point.
pub trait DragDrop {
    /// Begin a drag with the originating item and its controlee as the
    /// payload. After this the dispatcher redirects pointer events to the
    /// drag protocol; the menu holds no continuation.
    fn begin(&mut self, event: &PointerInput, controlee: Option<ControleeId>, item: ItemId);
}

/// Borrow bundle of every collaborator a menu operation may touch.
pub struct MenuHost<'a> {
    pub controls: &'a mut dyn ControlActivation,
    pub drops: &'a mut dyn DragDrop,
    pub scene: &'a mut SceneRegistry,
    pub arena: &'a ControleeArena,
    pub picker: &'a dyn SubHandlePicker,
}
