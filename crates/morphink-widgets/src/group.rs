//! The item-group state machine.
//!
//! An [`ItemGroup`] manages an ordered group of control items with menu
//! policy: exactly one item is active and highlighted while the group is
//! open, zero when closed. The items classify pointer events against the
//! group's layout axis and the group acts on the classification: slide
//! off-axis, change item along the axis, close at the menu boundary or on
//! a sideways departure.
//!
//! The group persists across many open/close cycles; it is populated once
//! with [`add`](ItemGroup::add) and never recreated per interaction.

use kurbo::{Rect, Vec2};
use log::{debug, trace, warn};
use morphink_core::{
    ControleeId, DrawSurface, MouseButton, PointerInput, SubHandle, WidgetId, geometry,
};
use uuid::Uuid;

use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::item::{ExitClass, HandleItem};
use crate::layout_spec::LayoutSpec;
use crate::managers::MenuHost;
use crate::policy::LayoutPolicy;

/// A menu of items with one active at a time.
pub struct ItemGroup {
    id: WidgetId,
    policy: LayoutPolicy,
    config: MenuConfig,
    items: Vec<HandleItem>,
    /// Index of the active item; `None` means the group is closed.
    active: Option<usize>,
    /// The object the group as a whole was opened on. Initializes the
    /// items' controlees; items may drift to other controlees afterwards.
    controlee: Option<ControleeId>,
    /// Present exactly while the group is open; replaced wholesale on each
    /// open so geometric queries never see a stale layout.
    layout_spec: Option<LayoutSpec>,
    /// Sub-handle under the hotspot after the latest tracking slide.
    /// Advisory operand candidate for the next operation.
    picked: Option<SubHandle>,
}

impl ItemGroup {
    pub fn new(policy: LayoutPolicy, config: MenuConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            policy,
            config,
            items: Vec::new(),
            active: None,
            controlee: None,
            layout_spec: None,
            picked: None,
        }
    }

    /// Append an item. Population happens once, before the first open.
    pub fn add(&mut self, item: HandleItem) {
        self.items.push(item);
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_item(&self) -> Option<&HandleItem> {
        self.active.map(|index| &self.items[index])
    }

    pub fn items(&self) -> &[HandleItem] {
        &self.items
    }

    pub fn controlee(&self) -> Option<ControleeId> {
        self.controlee
    }

    /// The current layout, present while open.
    pub fn layout_spec(&self) -> Option<&LayoutSpec> {
        self.layout_spec.as_ref()
    }

    pub fn picked(&self) -> Option<SubHandle> {
        self.picked
    }

    /// Open the menu at the event position, acting on `controlee`.
    ///
    /// Establishes a fresh layout, positions every item, registers with
    /// the scene, and activates and highlights the opening item. Opening
    /// an already-open menu is rejected: redefinition without an explicit
    /// close would silently reuse stale active state.
    pub fn open(
        &mut self,
        host: &mut MenuHost<'_>,
        event: &PointerInput,
        controlee: Option<ControleeId>,
    ) -> Result<(), MenuError> {
        if self.items.is_empty() {
            return Err(MenuError::EmptyGroup);
        }
        if self.active.is_some() {
            return Err(MenuError::InvalidState {
                op: "open",
                state: "open",
            });
        }
        debug!("menu {}: open at {:?}", self.id, event.position);
        self.controlee = controlee;
        let spec = self.policy.new_layout_spec(
            event,
            host.arena.resolve(controlee),
            self.items.len(),
            &self.config,
        )?;
        let opening = spec.opening_item_index.min(self.items.len() - 1);
        self.layout_spec = Some(spec);
        self.layout()?;
        self.active = Some(opening);
        host.scene.add(self.id);
        self.invalidate(host);
        self.activate_item(host, event, opening, controlee);
        self.set_highlight(host, opening, true);
        Ok(())
    }

    /// Close the menu. Always safe and total: tears down active and
    /// highlight state unconditionally, and is a no-op when already
    /// closed.
    pub fn close(&mut self, host: &mut MenuHost<'_>, event: &PointerInput) {
        let Some(index) = self.active else {
            trace!("menu {}: close while already closed", self.id);
            return;
        };
        debug!("menu {}: close", self.id);
        self.invalidate(host);
        self.set_highlight(host, index, false);
        // Deactivation hands control back to the application, which also
        // drops any focus held for the menu.
        host.controls.deactivate(self.items[index].id, event);
        host.scene.remove(self.id);
        self.active = None;
        self.layout_spec = None;
        self.picked = None;
    }

    /// Activate the following item, closing at the menu boundary.
    pub fn next(&mut self, host: &mut MenuHost<'_>, event: &PointerInput) -> Result<(), MenuError> {
        self.change_item(host, event, 1)
    }

    /// Activate the preceding item, closing at the menu boundary.
    pub fn previous(
        &mut self,
        host: &mut MenuHost<'_>,
        event: &PointerInput,
    ) -> Result<(), MenuError> {
        self.change_item(host, event, -1)
    }

    fn change_item(
        &mut self,
        host: &mut MenuHost<'_>,
        event: &PointerInput,
        direction: isize,
    ) -> Result<(), MenuError> {
        let index = self.active.ok_or(MenuError::closed("change_item"))?;
        let target = index as isize + direction;
        if target < 0 || target >= self.items.len() as isize {
            // Walking off either end of the menu closes it: intentional
            // UX, not an error.
            debug!("menu {}: boundary exit at index {target}", self.id);
            self.close(host, event);
            return Ok(());
        }
        let target = target as usize;
        trace!("menu {}: change item {index} -> {target}", self.id);
        self.set_highlight(host, index, false);
        // The new item inherits whatever the user was operating on.
        // Activation implicitly deactivates the previous control; the
        // manager enforces the one-active policy.
        let carried = self.items[index].controlee;
        self.active = Some(target);
        self.activate_item(host, event, target, carried);
        self.set_highlight(host, target, true);
        Ok(())
    }

    /// The pointer exited an item along the menu line; resolve the exit
    /// vector to next or previous.
    ///
    /// The menu is laid out anti-axis, so an exit travelling against the
    /// axis means "toward the next item": the sign here is inverted
    /// relative to the visual layout direction, deliberately.
    pub fn do_item_exit(
        &mut self,
        host: &mut MenuHost<'_>,
        event: &PointerInput,
        exit_vector: Vec2,
    ) -> Result<(), MenuError> {
        let spec = self.spec()?;
        let along = geometry::normalize_onto_axis(exit_vector, spec.axis)?.x;
        if along < 0.0 {
            self.change_item(host, event, 1)
        } else {
            self.change_item(host, event, -1)
        }
    }

    /// Slide the menu sideways by `pixels_off_axis`.
    ///
    /// Stationed menus never move. A column menu translates rigidly along
    /// the orthogonal. A tracking menu follows the controlee's edge curve
    /// and then picks at the hotspot, recording any sub-handle found there
    /// as the operand candidate for a subsequent operation.
    pub fn slide(
        &mut self,
        host: &mut MenuHost<'_>,
        pixels_off_axis: f64,
    ) -> Result<(), MenuError> {
        if self.active.is_none() {
            return Err(MenuError::closed("slide"));
        }
        if !self.policy.slides() {
            trace!("menu {}: stationed, slide ignored", self.id);
            return Ok(());
        }
        self.invalidate(host); // old footprint
        if self.policy.tracks_edge() {
            let controlee = host.arena.resolve(self.controlee);
            let spec = self.layout_spec.as_mut().ok_or(MenuError::closed("slide"))?;
            spec.slide_follow(controlee, pixels_off_axis)?;
        } else {
            let spec = self.layout_spec.as_mut().ok_or(MenuError::closed("slide"))?;
            let step = geometry::orthogonal(spec.axis, pixels_off_axis)?;
            spec.origin += step;
            spec.benchmark += step;
        }
        self.layout()?;
        self.invalidate(host); // new footprint
        if self.policy.tracks_edge() {
            let hotspot = self.spec()?.hotspot();
            self.picked = host.picker.pick(hotspot);
            if self.picked.is_some() {
                debug!("menu {}: picked sub-handle at hotspot", self.id);
            }
        }
        Ok(())
    }

    /// Position every item, even though a handle menu draws only the
    /// active one: when the pointer exits an item, its neighbors are
    /// already in place.
    fn layout(&mut self) -> Result<(), MenuError> {
        let spec = self.layout_spec.as_ref().ok_or(MenuError::closed("layout"))?;
        let (start, step) = if self.policy.draws_all_items() {
            // Column: stack whole items down the axis from the origin.
            (spec.origin, spec.axis * self.config.item_size)
        } else {
            // Handle menus: overlap at half-item steps from the
            // benchmark, ordered anti-axis (toward the controlee).
            (spec.benchmark, spec.axis * (-self.config.item_size / 2.0))
        };
        let mut at = start;
        for item in &mut self.items {
            item.center_at(at);
            at += step;
        }
        Ok(())
    }

    /// Button press inside the active item.
    ///
    /// Primary begins a drag: the menu closes, control passes to the root
    /// (background) control, and the external drop protocol takes over
    /// with (event, controlee, item) as payload. Secondary opens the
    /// item's context submenu on its controlee; focus is deliberately not
    /// changed.
    pub fn press(
        &mut self,
        host: &mut MenuHost<'_>,
        event: &PointerInput,
        button: MouseButton,
    ) -> Result<(), MenuError> {
        let index = self.active.ok_or(MenuError::closed("press"))?;
        let item_id = self.items[index].id;
        let controlee = self.items[index].controlee;
        match button {
            MouseButton::Left => {
                debug!("menu {}: drag begins from item {item_id}", self.id);
                self.close(host, event);
                host.controls.activate_root(event);
                // Mode switch: the dispatcher now routes pointer events to
                // the drag protocol. The menu keeps no continuation.
                host.drops.begin(event, controlee, item_id);
            }
            MouseButton::Right => {
                self.close(host, event);
                host.controls.open_context_menu(item_id, event, controlee);
            }
            MouseButton::Middle => {
                trace!("menu {}: middle press ignored", self.id);
            }
        }
        Ok(())
    }

    /// Pointer motion inside the active item.
    ///
    /// Motion off-axis past the jitter threshold slides the menu; motion
    /// along the axis is left alone (a neighboring item is reached via
    /// `exit`, not `motion`). Degenerate geometry degrades to "no
    /// movement" rather than aborting the interactive session.
    pub fn motion(
        &mut self,
        host: &mut MenuHost<'_>,
        event: &PointerInput,
    ) -> Result<(), MenuError> {
        let index = self.active.ok_or(MenuError::closed("motion"))?;
        let spec = self.spec()?;
        let off_axis = match self.items[index].pixels_off_axis(event, spec) {
            Ok(off_axis) => off_axis,
            Err(err) => {
                warn!("menu {}: motion with degenerate axis: {err}", self.id);
                return Ok(());
            }
        };
        trace!("menu {}: motion {off_axis:.1}px off axis", self.id);
        if off_axis.abs() > self.config.jitter_threshold {
            match self.slide(host, off_axis) {
                Ok(()) => {}
                Err(MenuError::Geometry(err)) => {
                    warn!(
                        "menu {}: slide with degenerate geometry: {err}; treated as no movement",
                        self.id
                    );
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// The pointer exited the active item with no button down.
    ///
    /// A sideways departure closes the menu; a departure along the menu
    /// line resolves to next/previous (or a boundary close).
    pub fn exit(
        &mut self,
        host: &mut MenuHost<'_>,
        event: &PointerInput,
    ) -> Result<(), MenuError> {
        let index = self.active.ok_or(MenuError::closed("exit"))?;
        let spec = self.spec()?;
        match self.items[index].classify_exit(event, spec, &self.config) {
            Ok(ExitClass::Sideways) => {
                self.close(host, event);
                Ok(())
            }
            Ok(ExitClass::AlongAxis(exit_vector)) => self.do_item_exit(host, event, exit_vector),
            Err(err) => {
                warn!("menu {}: exit with degenerate axis: {err}", self.id);
                Ok(())
            }
        }
    }

    /// Scroll over the active item. Advisory hook for item-specific
    /// behavior; the group itself does nothing with it.
    pub fn scroll(
        &mut self,
        _host: &mut MenuHost<'_>,
        _event: &PointerInput,
        delta: Vec2,
    ) -> Result<(), MenuError> {
        self.active.ok_or(MenuError::closed("scroll"))?;
        trace!("menu {}: scroll {delta:?} over active item", self.id);
        Ok(())
    }

    /// Draw through the surface contract. Handle menus render only the
    /// active item; a column menu renders every item.
    pub fn draw(&self, surface: &mut dyn DrawSurface) -> Rect {
        let Some(index) = self.active else {
            return Rect::ZERO;
        };
        let mut bounds: Option<Rect> = None;
        if self.policy.draws_all_items() {
            for item in &self.items {
                surface.put_path(item.glyph());
                let inked = surface.path_bounds(item.glyph());
                bounds = Some(bounds.map_or(inked, |acc| acc.union(inked)));
            }
        } else {
            let item = &self.items[index];
            surface.put_path(item.glyph());
            bounds = Some(surface.path_bounds(item.glyph()));
        }
        bounds.unwrap_or(Rect::ZERO)
    }

    fn spec(&self) -> Result<&LayoutSpec, MenuError> {
        self.layout_spec.as_ref().ok_or(MenuError::closed("layout query"))
    }

    fn footprint(&self) -> Rect {
        let mut bounds: Option<Rect> = None;
        for item in &self.items {
            bounds = Some(bounds.map_or(item.bounds, |acc| acc.union(item.bounds)));
        }
        bounds.unwrap_or(Rect::ZERO)
    }

    fn invalidate(&self, host: &mut MenuHost<'_>) {
        host.scene.invalidate(self.footprint());
    }

    fn activate_item(
        &mut self,
        host: &mut MenuHost<'_>,
        event: &PointerInput,
        index: usize,
        controlee: Option<ControleeId>,
    ) {
        self.items[index].controlee = controlee;
        host.controls.activate(self.items[index].id, event, controlee);
    }

    fn set_highlight(&mut self, host: &mut MenuHost<'_>, index: usize, on: bool) {
        self.items[index].highlighted = on;
        host.scene.invalidate(self.items[index].bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};
    use morphink_core::{
        Controlee, ControleeArena, NoPick, PlainSurface, SceneRegistry, SubHandleKind,
        SubHandlePicker,
    };
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::managers::{ControlActivation, DragDrop, ItemId};

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[derive(Default)]
    struct RecordingControls {
        activated: Vec<(ItemId, Option<ControleeId>)>,
        deactivated: Vec<ItemId>,
        root_activations: usize,
        context_menus: Vec<(ItemId, Option<ControleeId>)>,
    }

    impl ControlActivation for RecordingControls {
        fn activate(&mut self, item: ItemId, _event: &PointerInput, controlee: Option<ControleeId>) {
            self.activated.push((item, controlee));
        }

        fn deactivate(&mut self, item: ItemId, _event: &PointerInput) {
            self.deactivated.push(item);
        }

        fn activate_root(&mut self, _event: &PointerInput) {
            self.root_activations += 1;
        }

        fn open_context_menu(
            &mut self,
            item: ItemId,
            _event: &PointerInput,
            controlee: Option<ControleeId>,
        ) {
            self.context_menus.push((item, controlee));
        }
    }

    #[derive(Default)]
    struct RecordingDrops {
        begun: Vec<(Point, Option<ControleeId>, ItemId)>,
    }

    impl DragDrop for RecordingDrops {
        fn begin(&mut self, event: &PointerInput, controlee: Option<ControleeId>, item: ItemId) {
            self.begun.push((event.position, controlee, item));
        }
    }

    /// Controlee whose edge orthogonal can be changed mid-test through a
    /// shared cell, with a box-shaped boundary stop.
    struct SharedEdge {
        orthogonal: Rc<Cell<Vec2>>,
        stop: Rect,
    }

    impl Controlee for SharedEdge {
        fn orthogonal_at(&self, _point: Point) -> Vec2 {
            self.orthogonal.get()
        }

        fn clamp_to_edge(&self, point: Point) -> Point {
            Point::new(
                point.x.clamp(self.stop.x0, self.stop.x1),
                point.y.clamp(self.stop.y0, self.stop.y1),
            )
        }

        fn stroke_hit(&self, _point: Point) -> bool {
            false
        }

        fn bounds(&self) -> Rect {
            self.stop
        }
    }

    /// Picker that reports a sub-handle whenever the probe comes near a
    /// target point.
    struct PickNear {
        target: Point,
        handle: SubHandle,
    }

    impl SubHandlePicker for PickNear {
        fn pick(&self, point: Point) -> Option<SubHandle> {
            ((point - self.target).hypot() < 10.0).then_some(self.handle)
        }
    }

    struct Fixture {
        controls: RecordingControls,
        drops: RecordingDrops,
        scene: SceneRegistry,
        arena: ControleeArena,
        picker: Box<dyn SubHandlePicker>,
    }

    impl Fixture {
        fn new() -> Self {
            init_logs();
            Self {
                controls: RecordingControls::default(),
                drops: RecordingDrops::default(),
                scene: SceneRegistry::new(),
                arena: ControleeArena::new(),
                picker: Box::new(NoPick),
            }
        }

        fn host(&mut self) -> MenuHost<'_> {
            MenuHost {
                controls: &mut self.controls,
                drops: &mut self.drops,
                scene: &mut self.scene,
                arena: &self.arena,
                picker: self.picker.as_ref(),
            }
        }
    }

    fn group_of(policy: LayoutPolicy, items: usize) -> ItemGroup {
        let mut group = ItemGroup::new(policy, MenuConfig::default());
        for _ in 0..items {
            group.add(HandleItem::new(ITEM_SIZE_PX));
        }
        group
    }

    const ITEM_SIZE_PX: f64 = 16.0;

    fn open_at(
        group: &mut ItemGroup,
        fixture: &mut Fixture,
        position: Point,
        controlee: Option<ControleeId>,
    ) {
        let event = PointerInput::at(position);
        group.open(&mut fixture.host(), &event, controlee).unwrap();
    }

    /// Install a tracking controlee with a wide-open stop; returns the id
    /// and the shared orthogonal cell.
    fn tracked_edge(fixture: &mut Fixture, orthogonal: Vec2) -> (ControleeId, Rc<Cell<Vec2>>) {
        let cell = Rc::new(Cell::new(orthogonal));
        let id = fixture.arena.insert(Box::new(SharedEdge {
            orthogonal: cell.clone(),
            stop: Rect::new(-1000.0, -1000.0, 1000.0, 1000.0),
        }));
        (id, cell)
    }

    #[test]
    fn test_open_activates_and_registers() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        open_at(&mut group, &mut fixture, Point::new(40.0, 40.0), None);

        // Stationed: opens on the middle item.
        assert_eq!(group.active_index(), Some(1));
        assert!(group.active_item().unwrap().highlighted);
        assert!(fixture.scene.contains(group.id()));
        assert!(!fixture.scene.take_dirty().is_empty());
        assert_eq!(fixture.controls.activated.len(), 1);
        assert_eq!(fixture.controls.activated[0].0, group.items()[1].id);
    }

    #[test]
    fn test_open_empty_group_rejected_before_side_effects() {
        let mut fixture = Fixture::new();
        let mut group = ItemGroup::new(LayoutPolicy::Stationed, MenuConfig::default());
        let event = PointerInput::at(Point::ZERO);
        let err = group.open(&mut fixture.host(), &event, None).unwrap_err();
        assert_eq!(err, MenuError::EmptyGroup);
        assert!(fixture.controls.activated.is_empty());
        assert!(fixture.scene.is_empty());
    }

    #[test]
    fn test_open_while_open_rejected() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, None);

        let event = PointerInput::at(Point::new(10.0, 10.0));
        let err = group.open(&mut fixture.host(), &event, None).unwrap_err();
        assert!(matches!(err, MenuError::InvalidState { op: "open", .. }));
        // The original layout is untouched by the rejected open.
        assert_eq!(group.layout_spec().unwrap().origin, Point::ZERO);
    }

    #[test]
    fn test_open_close_round_trip() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        open_at(&mut group, &mut fixture, Point::new(5.0, 5.0), None);

        let event = PointerInput::at(Point::new(5.0, 5.0));
        group.close(&mut fixture.host(), &event);

        assert_eq!(group.active_index(), None);
        assert!(group.layout_spec().is_none());
        assert!(!fixture.scene.contains(group.id()));
        assert_eq!(fixture.controls.deactivated.len(), 1);
        assert!(!group.items()[1].highlighted);

        // Close again: idempotent, no second deactivation.
        group.close(&mut fixture.host(), &event);
        assert_eq!(fixture.controls.deactivated.len(), 1);

        // The group is ready to reopen.
        open_at(&mut group, &mut fixture, Point::new(9.0, 9.0), None);
        assert_eq!(group.active_index(), Some(1));
    }

    #[test]
    fn test_change_item_while_closed_fails_fast() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        let event = PointerInput::at(Point::ZERO);
        let err = group.next(&mut fixture.host(), &event).unwrap_err();
        assert!(matches!(err, MenuError::InvalidState { .. }));
    }

    #[test]
    fn test_next_past_boundary_closes() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, None);
        assert_eq!(group.active_index(), Some(1));

        let event = PointerInput::at(Point::ZERO);
        group.next(&mut fixture.host(), &event).unwrap();
        assert_eq!(group.active_index(), Some(2));

        group.next(&mut fixture.host(), &event).unwrap();
        assert_eq!(group.active_index(), None);
        assert!(!fixture.scene.contains(group.id()));
    }

    #[test]
    fn test_previous_past_boundary_closes() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, None);

        let event = PointerInput::at(Point::ZERO);
        group.previous(&mut fixture.host(), &event).unwrap();
        assert_eq!(group.active_index(), Some(0));

        group.previous(&mut fixture.host(), &event).unwrap();
        assert_eq!(group.active_index(), None);
    }

    #[test]
    fn test_change_item_carries_controlee() {
        let mut fixture = Fixture::new();
        let (id, _) = tracked_edge(&mut fixture, Vec2::new(0.0, 1.0));
        let mut group = group_of(LayoutPolicy::Tracking, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, Some(id));

        let event = PointerInput::at(Point::ZERO);
        group.next(&mut fixture.host(), &event).unwrap();

        // The new active item inherits the previous item's controlee.
        assert_eq!(group.active_item().unwrap().controlee, Some(id));
        assert_eq!(fixture.controls.activated.last().unwrap().1, Some(id));
    }

    #[test]
    fn test_do_item_exit_sign_is_inverted() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, None);
        assert_eq!(group.active_index(), Some(1));

        // Axis is downward. An exit travelling against the axis (up) has
        // a negative along component and selects the NEXT item, because
        // items are laid out anti-axis.
        let event = PointerInput::at(Point::ZERO);
        group
            .do_item_exit(&mut fixture.host(), &event, Vec2::new(0.0, -5.0))
            .unwrap();
        assert_eq!(group.active_index(), Some(2));

        // And with the axis, previous.
        group
            .do_item_exit(&mut fixture.host(), &event, Vec2::new(0.0, 5.0))
            .unwrap();
        assert_eq!(group.active_index(), Some(1));
    }

    #[test]
    fn test_stationed_slide_never_moves() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        open_at(&mut group, &mut fixture, Point::new(7.0, 7.0), None);
        let before = *group.layout_spec().unwrap();

        for magnitude in [0.0, 3.0, -40.0, 500.0] {
            group.slide(&mut fixture.host(), magnitude).unwrap();
            assert_eq!(*group.layout_spec().unwrap(), before);
        }
    }

    #[test]
    fn test_slide_while_closed_fails_fast() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Tracking, 3);
        let err = group.slide(&mut fixture.host(), 5.0).unwrap_err();
        assert!(matches!(err, MenuError::InvalidState { .. }));
    }

    #[test]
    fn test_tracking_slide_follows_and_relayouts() {
        let mut fixture = Fixture::new();
        let (id, _) = tracked_edge(&mut fixture, Vec2::new(0.0, 1.0));
        let mut group = group_of(LayoutPolicy::Tracking, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, Some(id));
        let before = group.layout_spec().unwrap().benchmark;
        fixture.scene.take_dirty();

        group.slide(&mut fixture.host(), 6.0).unwrap();

        let after = group.layout_spec().unwrap().benchmark;
        assert!((after - before).hypot() > 0.0);
        // Items were re-laid-out: the first item is centered on the new
        // benchmark.
        assert_eq!(group.items()[0].bounds.center(), after);
        // Old footprint and new footprint were both invalidated (plus the
        // highlight invalidations already queued by open).
        assert!(fixture.scene.take_dirty().len() >= 2);
    }

    #[test]
    fn test_tracking_slide_zero_is_idempotent() {
        let mut fixture = Fixture::new();
        let (id, _) = tracked_edge(&mut fixture, Vec2::new(0.0, 1.0));
        let mut group = group_of(LayoutPolicy::Tracking, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, Some(id));
        let before = *group.layout_spec().unwrap();

        group.slide(&mut fixture.host(), 0.0).unwrap();
        group.slide(&mut fixture.host(), 0.0).unwrap();

        let after = group.layout_spec().unwrap();
        assert!((after.benchmark - before.benchmark).hypot() < 1e-12);
        assert!((after.axis - before.axis).hypot() < 1e-12);
    }

    #[test]
    fn test_tracking_slide_picks_sub_handle_at_hotspot() {
        let mut fixture = Fixture::new();
        let (id, _) = tracked_edge(&mut fixture, Vec2::new(0.0, 1.0));
        // Sliding by +6 moves the benchmark from (0, 8) to (-6, 8).
        let handle = SubHandle {
            controlee: id,
            kind: SubHandleKind::Corner,
            position: Point::new(-6.0, 8.0),
        };
        fixture.picker = Box::new(PickNear {
            target: Point::new(-6.0, 8.0),
            handle,
        });
        let mut group = group_of(LayoutPolicy::Tracking, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, Some(id));
        assert_eq!(group.picked(), None);

        group.slide(&mut fixture.host(), 6.0).unwrap();
        assert_eq!(group.picked(), Some(handle));

        // Advisory state clears on close.
        let event = PointerInput::at(Point::ZERO);
        group.close(&mut fixture.host(), &event);
        assert_eq!(group.picked(), None);
    }

    #[test]
    fn test_motion_within_jitter_does_not_slide() {
        let mut fixture = Fixture::new();
        let (id, _) = tracked_edge(&mut fixture, Vec2::new(0.0, 1.0));
        let mut group = group_of(LayoutPolicy::Tracking, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, Some(id));
        let before = group.layout_spec().unwrap().benchmark;

        // 1px off a downward axis from the benchmark at (0, 8): inside
        // the jitter threshold.
        let event = PointerInput::at(Point::new(-1.0, 10.0));
        group.motion(&mut fixture.host(), &event).unwrap();
        assert_eq!(group.layout_spec().unwrap().benchmark, before);

        // 5px off axis: slides.
        let event = PointerInput::at(Point::new(-5.0, 10.0));
        group.motion(&mut fixture.host(), &event).unwrap();
        assert_ne!(group.layout_spec().unwrap().benchmark, before);
    }

    #[test]
    fn test_motion_with_degenerate_edge_degrades_to_no_movement() {
        let mut fixture = Fixture::new();
        let (id, orthogonal) = tracked_edge(&mut fixture, Vec2::new(0.0, 1.0));
        let mut group = group_of(LayoutPolicy::Tracking, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, Some(id));
        let before = *group.layout_spec().unwrap();

        // The controlee's edge collapses under the menu.
        orthogonal.set(Vec2::ZERO);
        let event = PointerInput::at(Point::new(-8.0, 10.0));
        group.motion(&mut fixture.host(), &event).unwrap();

        // Treated as no movement; the layout spec is not corrupted.
        assert_eq!(*group.layout_spec().unwrap(), before);
        assert_eq!(group.active_index(), Some(1));
    }

    #[test]
    fn test_press_primary_closes_and_begins_drag() {
        let mut fixture = Fixture::new();
        let (id, _) = tracked_edge(&mut fixture, Vec2::new(0.0, 1.0));
        let mut group = group_of(LayoutPolicy::Tracking, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, Some(id));
        let item_id = group.active_item().unwrap().id;

        let event = PointerInput::at(Point::new(1.0, 9.0));
        group
            .press(&mut fixture.host(), &event, MouseButton::Left)
            .unwrap();

        assert_eq!(group.active_index(), None);
        assert_eq!(fixture.controls.root_activations, 1);
        assert_eq!(fixture.drops.begun.len(), 1);
        assert_eq!(fixture.drops.begun[0], (Point::new(1.0, 9.0), Some(id), item_id));
    }

    #[test]
    fn test_press_secondary_opens_context_menu_without_focus_change() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, None);
        let item_id = group.active_item().unwrap().id;

        let event = PointerInput::at(Point::ZERO);
        group
            .press(&mut fixture.host(), &event, MouseButton::Right)
            .unwrap();

        assert_eq!(group.active_index(), None);
        assert_eq!(fixture.controls.context_menus, vec![(item_id, None)]);
        assert_eq!(fixture.controls.root_activations, 0);
        assert!(fixture.drops.begun.is_empty());
    }

    #[test]
    fn test_exit_sideways_closes() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, None);
        let center = group.active_item().unwrap().bounds.center();

        // Far off the downward axis: a sideways departure.
        let event = PointerInput::at(center + Vec2::new(25.0, 0.0));
        group.exit(&mut fixture.host(), &event).unwrap();
        assert_eq!(group.active_index(), None);
    }

    #[test]
    fn test_exit_along_axis_changes_item() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        open_at(&mut group, &mut fixture, Point::ZERO, None);
        let center = group.active_item().unwrap().bounds.center();

        // Straight up from the item center: against the axis, within the
        // side threshold, so the next item activates.
        let event = PointerInput::at(center + Vec2::new(0.0, -12.0));
        group.exit(&mut fixture.host(), &event).unwrap();
        assert_eq!(group.active_index(), Some(2));
    }

    #[test]
    fn test_draw_renders_only_active_item() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Stationed, 3);
        let mut surface = PlainSurface::default();

        // Closed menus draw nothing.
        assert_eq!(group.draw(&mut surface), Rect::ZERO);
        assert_eq!(surface.queued_len(), 0);

        open_at(&mut group, &mut fixture, Point::new(30.0, 30.0), None);
        let bounds = group.draw(&mut surface);
        assert_eq!(surface.queued_len(), 1);
        assert!(bounds.area() > 0.0);
    }

    #[test]
    fn test_column_menu_draws_all_items_stacked() {
        let mut fixture = Fixture::new();
        let mut group = group_of(LayoutPolicy::Column, 3);
        open_at(&mut group, &mut fixture, Point::new(30.0, 30.0), None);
        assert_eq!(group.active_index(), Some(0));

        // Items stack down the axis a full item apart.
        let first = group.items()[0].bounds.center();
        let second = group.items()[1].bounds.center();
        assert_eq!(second - first, Vec2::new(0.0, ITEM_SIZE_PX));

        let mut surface = PlainSurface::default();
        group.draw(&mut surface);
        assert_eq!(surface.queued_len(), 3);
    }
}
