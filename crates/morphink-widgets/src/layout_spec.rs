//! Per-layout geometry of a menu: axis, benchmark, opening item.

use kurbo::{Point, Vec2};
use log::trace;
use morphink_core::{Controlee, GeometryError, geometry};

/// The layout record established when a menu opens.
///
/// `axis` and `benchmark` may be rewritten in place by [`slide_follow`] on
/// a tracking menu; everything else is fixed until the next open. The axis
/// is always a unit vector, never zero.
///
/// [`slide_follow`]: LayoutSpec::slide_follow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpec {
    /// Where the menu opened.
    pub origin: Point,
    /// Reference point items are centered from.
    pub benchmark: Point,
    /// Unit direction of the menu's line.
    pub axis: Vec2,
    /// Index of the item activated on open.
    pub opening_item_index: usize,
}

impl LayoutSpec {
    /// Build a spec for a menu opening at `hotspot`.
    ///
    /// Fails on a degenerate axis before any state is committed.
    pub fn from_hotspot(
        hotspot: Point,
        axis: Vec2,
        offset: f64,
        opening_item_index: usize,
    ) -> Result<Self, GeometryError> {
        let axis = geometry::unit(axis)?;
        Ok(Self {
            origin: hotspot,
            benchmark: benchmark_from_hotspot(axis, hotspot, offset),
            axis,
            opening_item_index,
        })
    }

    /// Where the active item sits. The tracking pick query probes here.
    pub fn hotspot(&self) -> Point {
        self.benchmark
    }

    /// Re-derive the axis from the controlee's edge at the benchmark and
    /// move the benchmark `pixels_off_axis` along that edge, stopping at
    /// the controlee boundary.
    ///
    /// Everything is computed into temporaries and committed only on
    /// success, so a degenerate axis cannot corrupt the spec. A zero
    /// offset refreshes the axis and nothing else.
    pub fn slide_follow(
        &mut self,
        controlee: &dyn Controlee,
        pixels_off_axis: f64,
    ) -> Result<(), GeometryError> {
        let axis = geometry::unit(controlee.orthogonal_at(self.benchmark))?;
        if pixels_off_axis == 0.0 {
            self.axis = axis;
            return Ok(());
        }
        let step = geometry::orthogonal(axis, pixels_off_axis)?;
        let benchmark = controlee.clamp_to_edge(self.benchmark + step);
        trace!(
            "slide_follow: benchmark {:?} -> {:?}, axis {:?}",
            self.benchmark, benchmark, axis
        );
        self.axis = axis;
        self.benchmark = benchmark;
        Ok(())
    }
}

/// Benchmark for a menu opening at `hotspot`: offset along the axis so the
/// opening item lands just off the glyph edge.
pub fn benchmark_from_hotspot(axis: Vec2, hotspot: Point, offset: f64) -> Point {
    hotspot + axis * offset
}
