//! Scene registry: visible ephemeral widgets and queued dirty regions.

use kurbo::Rect;
use log::trace;
use uuid::Uuid;

/// Unique identifier for ephemeral widgets.
pub type WidgetId = Uuid;

/// Process-wide list of currently visible ephemeral widgets plus the dirty
/// regions queued for the next paint cycle.
///
/// Owned by the application: created at startup, dropped at exit. Menus
/// add themselves on open and remove themselves on close, so membership
/// spans exactly a widget's open duration. Invalidations are
/// fire-and-forget; nothing repaints synchronously.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    visible: Vec<WidgetId>,
    dirty: Vec<Rect>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget as visible. Adding twice is a no-op.
    pub fn add(&mut self, id: WidgetId) {
        if !self.visible.contains(&id) {
            trace!("scene: widget {id} visible");
            self.visible.push(id);
        }
    }

    /// Remove a widget. Removing an absent widget is a no-op.
    pub fn remove(&mut self, id: WidgetId) {
        trace!("scene: widget {id} hidden");
        self.visible.retain(|w| *w != id);
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.visible.contains(&id)
    }

    /// Visible widgets in registration order (the paint order).
    pub fn visible(&self) -> &[WidgetId] {
        &self.visible
    }

    /// Queue a region for redraw on the next paint.
    pub fn invalidate(&mut self, region: Rect) {
        self.dirty.push(region);
    }

    /// Drain the queued dirty regions; called once per paint cycle.
    pub fn take_dirty(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
