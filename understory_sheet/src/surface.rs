// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe surface contract.
//!
//! The swipe surface owns the drag gesture and the snap animation. It
//! renders two slides along the vertical axis:
//!
//! - position `0`: the sliver spacer, the sheet is closed;
//! - position `1`: the content body, the sheet is open.
//!
//! The host routes the surface's settled index changes and transition-end
//! notifications to the controller as [`SurfaceEvent`]s. Intermediate drag
//! frames are never reported.

use crate::layout::{BodyStyle, ContainerStyle, SheetLayout, SlideStyle};
use crate::overrides::SurfaceOverrides;
use crate::state::PositionIndex;

/// Options passed through to the swipe surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurfaceOptions {
    /// Let mouse drags move the surface, not just touch.
    pub enable_mouse_events: bool,
    /// Style overrides for the surface container and slides.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub styles: SurfaceOverrides,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            enable_mouse_events: true,
            styles: SurfaceOverrides::default(),
        }
    }
}

/// First slide: the scrollable content body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContentSlide {
    /// Body style.
    pub body: BodyStyle,
    /// State class for the body element.
    pub class_name: &'static str,
}

/// Second slide: an empty spacer reserving room for the sliver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliverSlide {
    /// Bottom margin of the spacer; the sliver height.
    pub margin_bottom: f64,
}

/// Everything a swipe surface needs for one render pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceFrame {
    /// Position to rest at.
    pub index: PositionIndex,
    /// Mouse dragging enabled.
    pub enable_mouse_events: bool,
    /// Container style.
    pub container: ContainerStyle,
    /// Style applied to both slides.
    pub slide: SlideStyle,
    /// Content slide.
    pub content: ContentSlide,
    /// Sliver slide.
    pub sliver: SliverSlide,
}

impl SurfaceFrame {
    /// Builds a frame from a (possibly overridden) layout.
    #[must_use]
    pub fn from_layout(layout: &SheetLayout, options: &SurfaceOptions) -> Self {
        Self {
            index: layout.geometry.position_index,
            enable_mouse_events: options.enable_mouse_events,
            container: layout.container,
            slide: layout.slide,
            content: ContentSlide {
                body: layout.body,
                class_name: layout.state.class_name(),
            },
            sliver: SliverSlide {
                margin_bottom: layout.sliver_spacer,
            },
        }
    }

    /// Slides in position order.
    #[must_use]
    pub fn slides(&self) -> (&ContentSlide, &SliverSlide) {
        (&self.content, &self.sliver)
    }
}

/// Notifications from the swipe surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A drag or release settled on a position.
    IndexChanged(PositionIndex),
    /// The snap animation finished.
    TransitionEnd,
}

/// A draggable two-position surface.
pub trait SwipeSurface {
    /// Renders a frame.
    fn render(&mut self, frame: &SurfaceFrame);

    /// Moves the surface to `index` without user interaction.
    ///
    /// Used when a controlled sheet's owner changes the open value. This must
    /// not be reported back as [`SurfaceEvent::IndexChanged`].
    fn set_index(&mut self, index: PositionIndex);
}
