//! A single handle-menu item: glyph bounds and pointer classification.
//!
//! Items are the part of the menu that decides how the whole group
//! behaves: they classify pointer motion against the group's layout axis
//! and the group acts on the classification (slide, change item, close).

use kurbo::{BezPath, Point, Rect, Shape, Vec2};
use morphink_core::{ControleeId, GeometryError, PointerInput, geometry};
use uuid::Uuid;

use crate::config::MenuConfig;
use crate::layout_spec::LayoutSpec;
use crate::managers::ItemId;

/// Path-flattening tolerance for item glyphs.
const GLYPH_TOLERANCE: f64 = 0.1;

/// How the pointer left an item, classified against the menu axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExitClass {
    /// Departure perpendicular to the menu line: close the whole menu.
    Sideways,
    /// Departure along the menu line: the group resolves it to
    /// next/previous, or a close at the menu boundary.
    AlongAxis(Vec2),
}

/// One iconic item in a handle menu.
///
/// Items belong to exactly one group, which owns them; the back reference
/// is by index. Each item may end up targeting a different controlee than
/// its group: items inherit the controlee of the item they replace and can
/// be re-aimed independently.
#[derive(Debug, Clone)]
pub struct HandleItem {
    pub id: ItemId,
    /// Visual bounds from the latest layout pass.
    pub bounds: Rect,
    /// The object this item currently operates on.
    pub controlee: Option<ControleeId>,
    /// Drawn in the highlight style while the item is active.
    pub highlighted: bool,
    glyph: BezPath,
}

impl HandleItem {
    /// A square item glyph of the given size, centered at the origin
    /// until the first layout pass.
    pub fn new(size: f64) -> Self {
        let bounds = Rect::new(-size / 2.0, -size / 2.0, size / 2.0, size / 2.0);
        Self {
            id: Uuid::new_v4(),
            bounds,
            controlee: None,
            highlighted: false,
            glyph: bounds.to_path(GLYPH_TOLERANCE),
        }
    }

    /// Recenter the bounds at `point`; called by the group's layout pass.
    pub fn center_at(&mut self, point: Point) {
        let half = Vec2::new(self.bounds.width() / 2.0, self.bounds.height() / 2.0);
        self.bounds = Rect::from_origin_size(point - half, self.bounds.size());
        self.glyph = self.bounds.to_path(GLYPH_TOLERANCE);
    }

    /// Path drawn for this item.
    pub fn glyph(&self) -> &BezPath {
        &self.glyph
    }

    /// Signed perpendicular distance of the pointer from the menu axis,
    /// measured from the benchmark.
    ///
    /// The sign means left/right of the axis, not a screen direction.
    pub fn pixels_off_axis(
        &self,
        event: &PointerInput,
        spec: &LayoutSpec,
    ) -> Result<f64, GeometryError> {
        let mouse = event.position - spec.benchmark;
        Ok(geometry::normalize_onto_axis(mouse, spec.axis)?.y)
    }

    /// Classify a pointer exit from this item against the menu axis.
    ///
    /// A perpendicular component past the side-exit threshold is a
    /// sideways departure; anything else travels along the menu line.
    pub fn classify_exit(
        &self,
        event: &PointerInput,
        spec: &LayoutSpec,
        config: &MenuConfig,
    ) -> Result<ExitClass, GeometryError> {
        let exit_vector = event.position - self.bounds.center();
        let normalized = geometry::normalize_onto_axis(exit_vector, spec.axis)?;
        if normalized.y.abs() > config.side_exit_threshold {
            Ok(ExitClass::Sideways)
        } else {
            Ok(ExitClass::AlongAxis(exit_vector))
        }
    }
}
