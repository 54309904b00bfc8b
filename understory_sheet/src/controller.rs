// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful sheet controller.
//!
//! ## Usage
//!
//! 1) Create a controller with [`SheetController::new`], passing `Some(open)`
//!    for a controlled sheet or `None` for an uncontrolled one.
//! 2) Attach a viewport source with [`SheetController::observe_viewport`] (or
//!    feed heights through [`SheetController::set_viewport_height`]).
//! 3) Each render pass, update configuration and call
//!    [`SheetController::render`] with the swipe surface.
//! 4) Route surface notifications to [`SheetController::handle_surface_event`].
//!
//! ## Control modes
//!
//! The control mode is sampled once, at construction. An owner that sometimes
//! supplies an open value and sometimes does not is outside the contract: the
//! controller keeps whatever mode it started in and does not try to detect the
//! switch.
//!
//! In controlled mode the owner is notified of every settled position and is
//! expected to feed its new value back through
//! [`SheetController::set_controlled_open`]. That feedback may lag by a render
//! pass.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use crate::config::{SheetConfig, SheetFlags, normalize_extent};
use crate::geometry::{SheetGeometry, SheetSnapshot};
use crate::layout::{OverlayStyle, RootStyle, SheetLayout, ShadowTipStyle};
use crate::observer::{HeightObserver, Subscription};
use crate::overrides::StyleOverrides;
use crate::scroll::ScrollReset;
use crate::state::{ControlMode, PositionIndex, SheetState};
use crate::surface::{SurfaceEvent, SurfaceFrame, SurfaceOptions, SwipeSurface};

/// Owner callback receiving the requested open value.
pub type ChangeCallback = Box<dyn FnMut(bool)>;

/// Owner callback run after the surface settles.
pub type TransitionEndCallback = Box<dyn FnMut()>;

/// Where the open/closed value lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SourceOfTruth {
    /// Latest value supplied by the owner.
    External(SheetState),
    /// Value tracked by the controller.
    Internal(SheetState),
}

/// Everything a host draws for one render pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetRender {
    /// Root container.
    pub root: RootStyle,
    /// Overlay layer, if enabled.
    pub overlay: Option<OverlayStyle>,
    /// Frame handed to the swipe surface.
    pub surface: SurfaceFrame,
    /// Shadow tip layer, if shown.
    pub shadow_tip: Option<ShadowTipStyle>,
}

/// State-and-geometry engine for a bottom sheet.
///
/// `E` is the host's handle to the rendered content body, used only for
/// scroll resets.
///
/// ```rust
/// use understory_sheet::{PositionIndex, SheetConfig, SheetController, SurfaceEvent};
///
/// let mut sheet: SheetController<()> = SheetController::new(None, false);
/// sheet.set_config(SheetConfig::builder().overflow_height(40.0).build());
/// sheet.set_viewport_height(600.0);
///
/// let mut resets = 0;
/// let mut reset = |_: Option<&()>| resets += 1;
///
/// sheet.handle_surface_event(SurfaceEvent::IndexChanged(PositionIndex::Open), &mut reset);
/// assert!(sheet.current_open());
/// assert_eq!(sheet.layout().body.max_height, 600.0);
/// ```
pub struct SheetController<E> {
    source: SourceOfTruth,
    viewport_height: Rc<Cell<f64>>,
    subscription: Option<Subscription>,
    config: SheetConfig,
    overrides: StyleOverrides,
    surface: SurfaceOptions,
    body: Option<E>,
    on_change: Option<ChangeCallback>,
    on_transition_end: Option<TransitionEndCallback>,
}

impl<E> fmt::Debug for SheetController<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetController")
            .field("source", &self.source)
            .field("viewport_height", &self.viewport_height.get())
            .field("config", &self.config)
            .field("observing", &self.subscription.is_some())
            .field("has_body", &self.body.is_some())
            .finish_non_exhaustive()
    }
}

impl<E> SheetController<E> {
    /// Creates a controller.
    ///
    /// `open` selects the control mode for the controller's whole lifetime:
    /// `Some(_)` is controlled (including `Some(false)`), `None` is
    /// uncontrolled and starts from `default_open`.
    #[must_use]
    pub fn new(open: Option<bool>, default_open: bool) -> Self {
        let source = match open {
            Some(open) => SourceOfTruth::External(SheetState::from_open(open)),
            None => SourceOfTruth::Internal(SheetState::from_open(default_open)),
        };
        Self {
            source,
            viewport_height: Rc::new(Cell::new(0.0)),
            subscription: None,
            config: SheetConfig::default(),
            overrides: StyleOverrides::default(),
            surface: SurfaceOptions::default(),
            body: None,
            on_change: None,
            on_transition_end: None,
        }
    }

    /// Creates a controlled controller.
    #[must_use]
    pub fn controlled(open: bool) -> Self {
        Self::new(Some(open), false)
    }

    /// Creates an uncontrolled controller.
    #[must_use]
    pub fn uncontrolled(default_open: bool) -> Self {
        Self::new(None, default_open)
    }

    /// Sets the owner change callback.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(bool) + 'static) -> Self {
        self.set_on_change(Some(Box::new(on_change)));
        self
    }

    /// Sets the owner transition-end callback.
    #[must_use]
    pub fn with_on_transition_end(mut self, on_transition_end: impl FnMut() + 'static) -> Self {
        self.set_on_transition_end(Some(Box::new(on_transition_end)));
        self
    }

    /// Replaces the owner change callback.
    pub fn set_on_change(&mut self, on_change: Option<ChangeCallback>) {
        self.on_change = on_change;
    }

    /// Replaces the owner transition-end callback.
    pub fn set_on_transition_end(&mut self, on_transition_end: Option<TransitionEndCallback>) {
        self.on_transition_end = on_transition_end;
    }

    /// The control mode chosen at construction.
    #[must_use]
    pub fn control_mode(&self) -> ControlMode {
        match self.source {
            SourceOfTruth::External(_) => ControlMode::Controlled,
            SourceOfTruth::Internal(_) => ControlMode::Uncontrolled,
        }
    }

    /// Resolved state: the owner's value if controlled, else the tracked one.
    #[must_use]
    pub fn state(&self) -> SheetState {
        match self.source {
            SourceOfTruth::External(state) | SourceOfTruth::Internal(state) => state,
        }
    }

    /// Returns `true` if the resolved state is open.
    #[must_use]
    pub fn current_open(&self) -> bool {
        self.state().is_open()
    }

    /// Surface position for the resolved state.
    #[must_use]
    pub fn position_index(&self) -> PositionIndex {
        self.state().position_index()
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Replaces the configuration for subsequent passes.
    pub fn set_config(&mut self, config: SheetConfig) {
        self.config = config;
    }

    /// Replaces owner style overrides.
    pub fn set_style_overrides(&mut self, overrides: StyleOverrides) {
        self.overrides = overrides;
    }

    /// Replaces surface pass-through options.
    pub fn set_surface_options(&mut self, options: SurfaceOptions) {
        self.surface = options;
    }

    /// Latest viewport height.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    /// Records a viewport height. Negative or non-finite heights become `0.0`.
    pub fn set_viewport_height(&mut self, height: f64) {
        let height = normalize_extent(height);
        tracing::trace!(height, "sheet viewport height");
        self.viewport_height.set(height);
    }

    /// Subscribes to `observer` for viewport heights.
    ///
    /// Any previous subscription is released first. The subscription is
    /// released when the controller is dropped or
    /// [`stop_observing`](Self::stop_observing) is called; a height reported
    /// after that is ignored.
    pub fn observe_viewport<O: HeightObserver + ?Sized>(&mut self, observer: &mut O) {
        self.stop_observing();
        let target = Rc::downgrade(&self.viewport_height);
        let subscription = observer.subscribe(Box::new(move |height| {
            if let Some(cell) = target.upgrade() {
                let height = normalize_extent(height);
                tracing::trace!(height, "sheet viewport height");
                cell.set(height);
            }
        }));
        self.subscription = Some(subscription);
    }

    /// Releases the viewport subscription, if any.
    pub fn stop_observing(&mut self) {
        self.subscription = None;
    }

    /// Sets the handle of the rendered content body.
    pub fn set_body_element(&mut self, body: Option<E>) {
        self.body = body;
    }

    /// Handle of the rendered content body.
    #[must_use]
    pub fn body_element(&self) -> Option<&E> {
        self.body.as_ref()
    }

    /// Immutable inputs for this pass.
    #[must_use]
    pub fn snapshot(&self) -> SheetSnapshot {
        SheetSnapshot::new(self.state(), self.viewport_height(), self.config)
    }

    /// Scalar geometry for this pass.
    #[must_use]
    pub fn geometry(&self) -> SheetGeometry {
        SheetGeometry::compute(&self.snapshot())
    }

    /// Computed styles with owner and surface overrides applied.
    #[must_use]
    pub fn layout(&self) -> SheetLayout {
        SheetLayout::compute(&self.snapshot()).apply_overrides(&self.overrides, &self.surface.styles)
    }

    /// Renders one pass: hands the frame to `surface` and returns the layers
    /// the host draws around it.
    pub fn render<S: SwipeSurface + ?Sized>(&self, surface: &mut S) -> SheetRender {
        let layout = self.layout();
        let frame = SurfaceFrame::from_layout(&layout, &self.surface);
        surface.render(&frame);
        SheetRender {
            root: layout.root,
            overlay: layout.overlay,
            surface: frame,
            shadow_tip: layout.shadow_tip,
        }
    }

    /// Feeds the owner's open value in controlled mode.
    ///
    /// When the value moves the sheet to another position, `surface` is
    /// re-synced imperatively and `true` is returned. Uncontrolled
    /// controllers ignore this call.
    pub fn set_controlled_open<S: SwipeSurface + ?Sized>(
        &mut self,
        open: bool,
        surface: &mut S,
    ) -> bool {
        let SourceOfTruth::External(current) = self.source else {
            tracing::debug!(open, "ignoring controlled value on uncontrolled sheet");
            return false;
        };
        let next = SheetState::from_open(open);
        self.source = SourceOfTruth::External(next);
        if next == current {
            return false;
        }
        tracing::debug!(?next, "controlled sheet re-synced");
        surface.set_index(next.position_index());
        true
    }

    /// Applies a settled surface position.
    ///
    /// Uncontrolled sheets adopt the requested state. The owner change
    /// callback fires in both modes, even when the requested state equals the
    /// current one.
    pub fn handle_index_change(&mut self, index: PositionIndex) {
        let requested = index.state();
        if let SourceOfTruth::Internal(current) = self.source {
            if current != requested {
                tracing::debug!(from = ?current, to = ?requested, "sheet settled");
            }
            self.source = SourceOfTruth::Internal(requested);
        }
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(requested.is_open());
        }
    }

    /// Handles a click on the overlay.
    ///
    /// An open sheet with an overlay closes exactly as if the surface had
    /// settled at position `0`. While closed the overlay is pass-through, so
    /// the click is ignored. Returns `true` if the click was handled.
    pub fn handle_overlay_click(&mut self) -> bool {
        if !self.config.has(SheetFlags::OVERLAY) || !self.geometry().overlay_interactive {
            return false;
        }
        self.handle_index_change(PositionIndex::Closed);
        true
    }

    /// Runs settle-completion side effects, then the owner callback.
    ///
    /// - Without a sliver, the body is always scrolled to the top, whichever
    ///   way the sheet moved. The handle may be absent; `scroll` then no-ops.
    /// - With a sliver and [`SheetFlags::SCROLL_TOP_AT_CLOSE`], a closed sheet
    ///   scrolls its body to the top if the body is mounted.
    pub fn handle_transition_end<R: ScrollReset<E> + ?Sized>(&mut self, scroll: &mut R) {
        if self.config.hidden_when_closed() {
            tracing::trace!(open = self.current_open(), "scroll reset, no sliver");
            scroll.reset(self.body.as_ref());
        } else if self.config.has(SheetFlags::SCROLL_TOP_AT_CLOSE) && !self.current_open() {
            if let Some(body) = self.body.as_ref() {
                tracing::trace!("scroll reset at close");
                scroll.reset(Some(body));
            }
        }
        if let Some(on_transition_end) = self.on_transition_end.as_mut() {
            on_transition_end();
        }
    }

    /// Dispatches a surface notification.
    pub fn handle_surface_event<R: ScrollReset<E> + ?Sized>(
        &mut self,
        event: SurfaceEvent,
        scroll: &mut R,
    ) {
        match event {
            SurfaceEvent::IndexChanged(index) => self.handle_index_change(index),
            SurfaceEvent::TransitionEnd => self.handle_transition_end(scroll),
        }
    }
}
