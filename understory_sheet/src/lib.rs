// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet --heading-base-level=0

//! Understory Sheet: a headless bottom sheet state-and-geometry engine.
//!
//! A bottom sheet is a panel that slides up from the bottom edge of the
//! viewport and snaps between two resting positions: closed, showing a thin
//! sliver of configurable height, and open, showing its content up to the
//! available height. This crate owns the part of a bottom sheet that has real
//! logic:
//!
//! - Resolving the open/closed state in controlled and uncontrolled use.
//! - Absorbing viewport height changes.
//! - Deriving overlay, shadow, body sizing and scroll behavior from state.
//! - Deciding when the body should be scrolled back to the top.
//!
//! It does **not** recognize gestures, animate, or draw. Those jobs belong to
//! three collaborators the host provides:
//!
//! - [`HeightObserver`]: reports viewport height changes.
//! - [`SwipeSurface`]: renders the two positions and reports settled drags.
//! - [`ScrollReset`]: scrolls the content body to the top.
//!
//! ## Layers
//!
//! - [`SheetGeometry::compute`] and [`SheetLayout::compute`] are pure
//!   functions of a [`SheetSnapshot`] (state, viewport height, configuration).
//! - [`StyleOverrides`] and [`SurfaceOverrides`] are typed patches layered
//!   over computed styles with a fixed precedence.
//! - [`SheetController`] holds the persisted state and wires everything up.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_sheet::{
//!     Extent, PositionIndex, SheetConfig, SheetController, SurfaceEvent, SurfaceFrame,
//!     SwipeSurface,
//! };
//!
//! struct Surface;
//!
//! impl SwipeSurface for Surface {
//!     fn render(&mut self, _frame: &SurfaceFrame) {}
//!     fn set_index(&mut self, _index: PositionIndex) {}
//! }
//!
//! let mut sheet: SheetController<()> = SheetController::uncontrolled(false);
//! sheet.set_config(
//!     SheetConfig::builder()
//!         .margin_top(50.0)
//!         .full_screen(true)
//!         .build(),
//! );
//! sheet.set_viewport_height(500.0);
//!
//! // The user drags the sheet open.
//! let mut scroll = |_: Option<&()>| {};
//! sheet.handle_surface_event(SurfaceEvent::IndexChanged(PositionIndex::Open), &mut scroll);
//!
//! let render = sheet.render(&mut Surface);
//! assert_eq!(render.surface.index, PositionIndex::Open);
//! assert_eq!(render.surface.content.body.height, Extent::Fixed(450.0));
//! ```
//!
//! ## Logging
//!
//! State transitions and controlled re-syncs are reported through `tracing`
//! at `debug` level; viewport updates and scroll resets at `trace` level.
//! Install a subscriber in the host to see them.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo and Peniko.
//! - `libm`: forward `libm` to Kurbo and Peniko for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod geometry;
mod layout;
mod observer;
mod overrides;
mod scroll;
mod state;
mod surface;

pub use config::{SheetConfig, SheetConfigBuilder, SheetFlags};
pub use controller::{ChangeCallback, SheetController, SheetRender, TransitionEndCallback};
pub use geometry::{SheetGeometry, SheetSnapshot, max_content_height};
pub use layout::{
    BodyStyle, BoxShadow, ContainerStyle, Extent, OVERLAY_OPEN_OPACITY, Overflow, OverlayStyle,
    PointerEvents, RootStyle, SHADOW_TIP_HEIGHT, SHADOW_TIP_OPEN_SHIFT, ShadowTipStyle,
    SheetLayout, SlideStyle, TRANSITION,
};
pub use observer::{HeightListener, HeightObserver, Subscription};
pub use overrides::{
    BodyOverride, ContainerOverride, OverlayOverride, RootOverride, SlideOverride,
    StyleOverrides, SurfaceOverrides,
};
pub use scroll::{NoScrollReset, ScrollReset};
pub use state::{ControlMode, InvalidPositionIndex, PositionIndex, SheetState};
pub use surface::{
    ContentSlide, SliverSlide, SurfaceEvent, SurfaceFrame, SurfaceOptions, SwipeSurface,
};
