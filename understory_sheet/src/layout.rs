// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computed style descriptors for every layer a sheet renders.
//!
//! A sheet is drawn as up to four layers, bottom to top:
//!
//! 1. The root container, fixed to the bottom edge of the viewport.
//! 2. An optional dimming overlay covering the viewport.
//! 3. The swipe surface: a container holding two slides, the content body and
//!    a spacer for the sliver.
//! 4. An optional shadow tip just below the bottom edge.
//!
//! [`SheetLayout::compute`] produces the default descriptor for each layer.
//! Owner overrides are layered on top afterwards, see
//! [`StyleOverrides`](crate::StyleOverrides).

use core::time::Duration;

use kurbo::Vec2;
use peniko::Color;

use crate::config::SheetFlags;
use crate::geometry::{SheetGeometry, SheetSnapshot};
use crate::state::SheetState;

/// Duration of the overlay fade and the shadow tip slide.
pub const TRANSITION: Duration = Duration::from_millis(450);

/// Overlay opacity while the sheet is open.
pub const OVERLAY_OPEN_OPACITY: f32 = 0.54;

/// Height of the shadow tip element.
pub const SHADOW_TIP_HEIGHT: f64 = 60.0;

/// How far the shadow tip moves down while the sheet is open.
pub const SHADOW_TIP_OPEN_SHIFT: f64 = 50.0;

const BLACK: Color = Color::new([0.0, 0.0, 0.0, 1.0]);
const WHITE: Color = Color::new([1.0, 1.0, 1.0, 1.0]);

/// A drop shadow.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxShadow {
    /// Shadow offset relative to the casting box.
    pub offset: Vec2,
    /// Blur radius.
    pub blur: f64,
    /// Shadow color, including alpha.
    pub color: Color,
}

impl BoxShadow {
    /// Shadow cast upwards along the top edge of the surface.
    pub const TOP: Self = Self {
        offset: Vec2::new(0.0, -6.0),
        blur: 5.0,
        color: Color::new([0.0, 0.0, 0.0, 0.156_863]),
    };

    /// Wide, soft shadow cast by the shadow tip.
    pub const TIP: Self = Self {
        offset: Vec2::ZERO,
        blur: 30.0,
        color: Color::new([0.0, 0.0, 0.0, 0.7]),
    };
}

/// Whether a layer receives pointer input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEvents {
    /// Input passes through to whatever lies underneath.
    None,
    /// The layer captures input.
    Auto,
}

/// Overflow handling along the block axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Content may paint outside the box.
    Visible,
    /// Content is clipped and cannot be scrolled.
    Hidden,
    /// Content is clipped and scrollable.
    Auto,
}

/// A block-axis length that may be left to the content.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Extent {
    /// Sized by content.
    Auto,
    /// Fixed length.
    Fixed(f64),
}

/// Root container, fixed to the bottom edge and stretched horizontally.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RootStyle {
    /// Height reserved at the bottom of the viewport; the sliver height.
    pub height: f64,
    /// Distance from the bottom edge.
    pub bottom: f64,
}

/// Dimming overlay, fixed to the top of the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Overlay height; the full viewport height.
    pub height: f64,
    /// Current opacity.
    pub opacity: f32,
    /// Whether clicks hit the overlay.
    pub pointer_events: PointerEvents,
    /// Fill color.
    pub background: Color,
    /// Opacity transition duration.
    pub transition: Duration,
}

/// Swipe surface container, the element that moves between positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerStyle {
    /// Shadow along the top edge, if shown.
    pub shadow: Option<BoxShadow>,
}

/// Style shared by both slides of the surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideStyle {
    /// Slides never clip, so the content body can extend past its slot.
    pub overflow: Overflow,
    /// Negative sliver height, pulling the next slide up under the sliver.
    pub margin_bottom: f64,
}

/// Content body inside the first slide.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyStyle {
    /// Scrolling is only enabled while open.
    pub overflow: Overflow,
    /// Fill color.
    pub background: Color,
    /// Pinned to the max content height in full screen mode.
    pub height: Extent,
    /// Upper bound so content never exceeds the viewport.
    pub max_height: f64,
}

/// Shadow tip, positioned just below the bottom edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadowTipStyle {
    /// Element height.
    pub height: f64,
    /// Distance from the bottom edge (negative: below the viewport).
    pub bottom: f64,
    /// Shadow cast upwards into the viewport.
    pub shadow: BoxShadow,
    /// Translation applied for the current state.
    pub translate: Vec2,
    /// Transform transition duration.
    pub transition: Duration,
}

/// Style descriptors for every layer of a sheet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetLayout {
    /// Scalar geometry the styles were derived from.
    pub geometry: SheetGeometry,
    /// State the layout was computed for.
    pub state: SheetState,
    /// Root container.
    pub root: RootStyle,
    /// Overlay, present when [`SheetFlags::OVERLAY`] is set.
    pub overlay: Option<OverlayStyle>,
    /// Surface container.
    pub container: ContainerStyle,
    /// Style applied to both slides.
    pub slide: SlideStyle,
    /// Content body.
    pub body: BodyStyle,
    /// Bottom margin of the sliver spacer inside the second slide.
    pub sliver_spacer: f64,
    /// Shadow tip, present when enabled and shadows are not hidden.
    pub shadow_tip: Option<ShadowTipStyle>,
}

impl SheetLayout {
    /// Computes default styles for a snapshot.
    #[must_use]
    pub fn compute(snapshot: &SheetSnapshot) -> Self {
        let geometry = SheetGeometry::compute(snapshot);
        let config = snapshot.config();
        let open = snapshot.state().is_open();
        let overflow_height = config.overflow_height();

        let overlay = config.has(SheetFlags::OVERLAY).then(|| OverlayStyle {
            height: snapshot.viewport_height(),
            opacity: if open { OVERLAY_OPEN_OPACITY } else { 0.0 },
            pointer_events: if geometry.overlay_interactive {
                PointerEvents::Auto
            } else {
                PointerEvents::None
            },
            background: BLACK,
            transition: TRANSITION,
        });

        let top_shadow = config.has(SheetFlags::TOP_SHADOW) && !geometry.shadows_hidden;
        let shadow_tip = (config.has(SheetFlags::SHADOW_TIP) && !geometry.shadows_hidden).then(|| {
            ShadowTipStyle {
                height: SHADOW_TIP_HEIGHT,
                bottom: -SHADOW_TIP_HEIGHT,
                shadow: BoxShadow::TIP,
                translate: if open {
                    Vec2::new(0.0, SHADOW_TIP_OPEN_SHIFT)
                } else {
                    Vec2::ZERO
                },
                transition: TRANSITION,
            }
        });

        Self {
            geometry,
            state: snapshot.state(),
            root: RootStyle {
                height: overflow_height,
                bottom: 0.0,
            },
            overlay,
            container: ContainerStyle {
                shadow: top_shadow.then_some(BoxShadow::TOP),
            },
            slide: SlideStyle {
                overflow: Overflow::Visible,
                margin_bottom: -overflow_height,
            },
            body: BodyStyle {
                overflow: if geometry.body_scrollable {
                    Overflow::Auto
                } else {
                    Overflow::Hidden
                },
                background: WHITE,
                height: if config.has(SheetFlags::FULL_SCREEN) {
                    Extent::Fixed(geometry.max_content_height)
                } else {
                    Extent::Auto
                },
                max_height: geometry.max_content_height,
            },
            sliver_spacer: overflow_height,
            shadow_tip,
        }
    }
}
