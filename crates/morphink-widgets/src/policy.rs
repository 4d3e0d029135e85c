//! Layout policies: how a menu orients, opens, slides, and draws.
//!
//! The state machine in [`crate::group`] is one concrete type; the
//! differences between menu flavors are confined here.

use kurbo::Vec2;
use morphink_core::{Controlee, PointerInput, geometry};
use serde::{Deserialize, Serialize};

use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::layout_spec::LayoutSpec;

/// Layout policy of a menu group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutPolicy {
    /// Handle menu opening on a point: fixed downward axis, never moves.
    Stationed,
    /// Handle menu opening on an edge: axis follows the controlee's edge
    /// orthogonal, slides along the edge, picks sub-handles as it moves.
    Tracking,
    /// Traditional menu: fixed vertical column, all items drawn, opens on
    /// the first item.
    Column,
}

impl LayoutPolicy {
    /// Fresh layout spec for a menu opening at the event position.
    pub fn new_layout_spec(
        &self,
        event: &PointerInput,
        controlee: &dyn Controlee,
        item_count: usize,
        config: &MenuConfig,
    ) -> Result<LayoutSpec, MenuError> {
        let axis: Vec2 = match self {
            LayoutPolicy::Stationed | LayoutPolicy::Column => geometry::DOWNWARD,
            // Total even for the empty controlee, which reports DOWNWARD.
            LayoutPolicy::Tracking => controlee.orthogonal_at(event.position),
        };
        let opening = match self {
            LayoutPolicy::Column => 0,
            // Handle menus open on the middle item.
            _ => item_count / 2,
        };
        Ok(LayoutSpec::from_hotspot(
            event.position,
            axis,
            config.benchmark_offset,
            opening,
        )?)
    }

    /// Whether `slide` may move this menu at all.
    pub fn slides(&self) -> bool {
        !matches!(self, LayoutPolicy::Stationed)
    }

    /// Whether the sliding menu follows the controlee's edge curve (and
    /// picks sub-handles) rather than translating rigidly.
    pub fn tracks_edge(&self) -> bool {
        matches!(self, LayoutPolicy::Tracking)
    }

    /// Whether draw renders every item or only the active one.
    pub fn draws_all_items(&self) -> bool {
        matches!(self, LayoutPolicy::Column)
    }
}
