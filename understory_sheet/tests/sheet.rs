// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_sheet` crate.
//!
//! These drive a `SheetController` end to end through recording stand-ins
//! for the viewport observer, the swipe surface, and the scroll reset.

use std::cell::RefCell;
use std::rc::Rc;

use understory_sheet::{
    ControlMode, Extent, HeightListener, HeightObserver, Overflow, PointerEvents, PositionIndex,
    SheetConfig, SheetController, Subscription, SurfaceEvent, SurfaceFrame, SwipeSurface,
};

/// Viewport stand-in that reports its height on subscribe and on resize.
#[derive(Default)]
struct Viewport {
    height: f64,
    listeners: Rc<RefCell<Vec<Option<HeightListener>>>>,
}

impl Viewport {
    fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    fn resize(&mut self, height: f64) {
        self.height = height;
        for listener in self.listeners.borrow_mut().iter_mut().flatten() {
            listener(height);
        }
    }

    fn active(&self) -> usize {
        self.listeners.borrow().iter().flatten().count()
    }
}

impl HeightObserver for Viewport {
    fn subscribe(&mut self, mut on_change: HeightListener) -> Subscription {
        on_change(self.height);
        let mut listeners = self.listeners.borrow_mut();
        let slot = listeners.len();
        listeners.push(Some(on_change));
        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut()[slot] = None;
            }
        })
    }
}

#[derive(Default)]
struct Surface {
    frames: Vec<SurfaceFrame>,
    synced: Vec<PositionIndex>,
}

impl SwipeSurface for Surface {
    fn render(&mut self, frame: &SurfaceFrame) {
        self.frames.push(*frame);
    }

    fn set_index(&mut self, index: PositionIndex) {
        self.synced.push(index);
    }
}

fn change_log() -> (Rc<RefCell<Vec<bool>>>, impl FnMut(bool) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    (log, move |open| sink.borrow_mut().push(open))
}

#[test]
fn opening_without_sliver_enables_scroll_and_resets_on_settle() {
    let (log, sink) = change_log();
    let mut viewport = Viewport::new(800.0);
    let mut sheet: SheetController<u32> = SheetController::uncontrolled(false).with_on_change(sink);
    sheet.observe_viewport(&mut viewport);
    sheet.set_body_element(Some(7));

    let mut resets = Vec::new();
    let mut scroll = |body: Option<&u32>| resets.push(body.copied());

    sheet.handle_surface_event(SurfaceEvent::IndexChanged(PositionIndex::Open), &mut scroll);
    assert!(sheet.current_open());
    assert_eq!(*log.borrow(), vec![true]);
    assert_eq!(sheet.layout().body.overflow, Overflow::Auto);
    assert_eq!(sheet.geometry().max_content_height, 800.0);

    sheet.handle_surface_event(SurfaceEvent::TransitionEnd, &mut scroll);
    assert_eq!(resets, vec![Some(7)]);
}

#[test]
fn closing_with_sliver_resets_once() {
    let mut sheet: SheetController<u8> = SheetController::uncontrolled(true);
    sheet.set_config(
        SheetConfig::builder()
            .overflow_height(40.0)
            .margin_top(20.0)
            .scroll_top_at_close(true)
            .build(),
    );
    sheet.set_viewport_height(600.0);
    sheet.set_body_element(Some(0));

    let mut resets = 0;
    let mut scroll = |_: Option<&u8>| resets += 1;

    sheet.handle_surface_event(SurfaceEvent::IndexChanged(PositionIndex::Closed), &mut scroll);
    assert!(!sheet.geometry().shadows_hidden);
    let layout = sheet.layout();
    assert!(layout.container.shadow.is_some());
    assert!(layout.shadow_tip.is_some());
    assert_eq!(layout.body.max_height, 580.0);

    sheet.handle_surface_event(SurfaceEvent::TransitionEnd, &mut scroll);
    assert_eq!(resets, 1);
}

#[test]
fn full_screen_body_tracks_viewport() {
    let mut viewport = Viewport::new(500.0);
    let mut sheet: SheetController<()> = SheetController::controlled(true);
    sheet.set_config(
        SheetConfig::builder()
            .full_screen(true)
            .margin_top(50.0)
            .build(),
    );
    sheet.observe_viewport(&mut viewport);
    assert_eq!(sheet.layout().body.height, Extent::Fixed(450.0));

    viewport.resize(400.0);
    assert_eq!(sheet.layout().body.height, Extent::Fixed(350.0));
    assert_eq!(sheet.layout().body.max_height, 350.0);
    assert!(sheet.current_open());
}

#[test]
fn round_trip_without_sliver_resets_once_per_close() {
    let mut sheet: SheetController<()> = SheetController::uncontrolled(false);
    sheet.set_viewport_height(700.0);
    let mut resets = 0;
    let mut scroll = |_: Option<&()>| resets += 1;

    sheet.handle_surface_event(SurfaceEvent::IndexChanged(PositionIndex::Open), &mut scroll);
    sheet.handle_surface_event(SurfaceEvent::IndexChanged(PositionIndex::Closed), &mut scroll);
    sheet.handle_surface_event(SurfaceEvent::TransitionEnd, &mut scroll);

    assert_eq!(sheet.position_index(), PositionIndex::Closed);
    assert_eq!(resets, 1);
}

#[test]
fn repeated_settle_is_idempotent() {
    let (log, sink) = change_log();
    let mut sheet: SheetController<()> = SheetController::uncontrolled(false).with_on_change(sink);

    sheet.handle_index_change(PositionIndex::Closed);
    sheet.handle_index_change(PositionIndex::Closed);

    assert_eq!(*log.borrow(), vec![false, false]);
    assert!(!sheet.current_open());
}

#[test]
fn controlled_owner_drives_surface_index() {
    let (log, sink) = change_log();
    let mut surface = Surface::default();
    let mut sheet: SheetController<()> = SheetController::controlled(false).with_on_change(sink);
    assert_eq!(sheet.control_mode(), ControlMode::Controlled);

    // The user drags open: the owner hears about it, nothing else changes yet.
    sheet.handle_index_change(PositionIndex::Open);
    assert_eq!(*log.borrow(), vec![true]);
    sheet.render(&mut surface);
    assert_eq!(surface.frames[0].index, PositionIndex::Closed);

    // The owner catches up a render later.
    assert!(sheet.set_controlled_open(true, &mut surface));
    sheet.render(&mut surface);
    assert_eq!(surface.synced, vec![PositionIndex::Open]);
    assert_eq!(surface.frames[1].index, PositionIndex::Open);

    // The owner closes the sheet programmatically.
    assert!(sheet.set_controlled_open(false, &mut surface));
    assert_eq!(sheet.position_index(), PositionIndex::Closed);
    assert_eq!(*log.borrow(), vec![true]);
}

#[test]
fn overlay_passes_input_through_while_closed() {
    let mut surface = Surface::default();
    let mut sheet: SheetController<()> = SheetController::uncontrolled(false);
    sheet.set_viewport_height(640.0);

    let closed = sheet.render(&mut surface).overlay.unwrap();
    assert_eq!(closed.pointer_events, PointerEvents::None);
    assert_eq!(closed.opacity, 0.0);
    assert!(!sheet.handle_overlay_click());

    sheet.handle_index_change(PositionIndex::Open);
    let open = sheet.render(&mut surface).overlay.unwrap();
    assert_eq!(open.pointer_events, PointerEvents::Auto);
    assert_eq!(open.height, 640.0);
    assert!(sheet.handle_overlay_click());
    assert!(!sheet.current_open());
}

#[test]
fn dropping_controller_unsubscribes() {
    let mut viewport = Viewport::new(300.0);
    {
        let mut sheet: SheetController<()> = SheetController::uncontrolled(false);
        sheet.observe_viewport(&mut viewport);
        assert_eq!(sheet.viewport_height(), 300.0);
        assert_eq!(viewport.active(), 1);
    }
    assert_eq!(viewport.active(), 0);
    viewport.resize(320.0);
}

#[test]
fn resubscribing_releases_previous_subscription() {
    let mut first = Viewport::new(300.0);
    let mut second = Viewport::new(900.0);
    let mut sheet: SheetController<()> = SheetController::uncontrolled(false);

    sheet.observe_viewport(&mut first);
    sheet.observe_viewport(&mut second);
    assert_eq!(first.active(), 0);
    assert_eq!(second.active(), 1);

    first.resize(100.0);
    assert_eq!(sheet.viewport_height(), 900.0);

    sheet.stop_observing();
    assert_eq!(second.active(), 0);
}

#[test]
fn reported_heights_are_normalized() {
    let mut viewport = Viewport::new(-20.0);
    let mut sheet: SheetController<()> = SheetController::uncontrolled(true);
    sheet.observe_viewport(&mut viewport);
    assert_eq!(sheet.viewport_height(), 0.0);

    viewport.resize(f64::NAN);
    assert_eq!(sheet.viewport_height(), 0.0);

    viewport.resize(480.0);
    assert_eq!(sheet.geometry().max_content_height, 480.0);
}
