// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner style overrides layered over computed styles.
//!
//! Each override is a typed patch: fields left as `None` keep the computed
//! value, fields set to `Some` replace it. Precedence is fixed:
//!
//! **Owner override → Computed default**
//!
//! [`SheetLayout::apply_overrides`] applies patches in layer order (root,
//! overlay, container, slide, body). No patch reads a value another patch
//! wrote.

use core::time::Duration;

use peniko::Color;

use crate::layout::{
    BodyStyle, BoxShadow, ContainerStyle, Extent, Overflow, OverlayStyle, PointerEvents,
    RootStyle, SheetLayout, SlideStyle,
};

#[inline]
fn patch<T: Copy>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Patch for [`RootStyle`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RootOverride {
    /// Replaces the root height.
    pub height: Option<f64>,
    /// Replaces the bottom offset.
    pub bottom: Option<f64>,
}

impl RootOverride {
    /// Applies this patch to `style`.
    pub fn apply(&self, style: &mut RootStyle) {
        patch(&mut style.height, self.height);
        patch(&mut style.bottom, self.bottom);
    }
}

/// Patch for [`OverlayStyle`].
///
/// Only applied when the overlay is enabled; it never creates an overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OverlayOverride {
    /// Replaces the overlay height.
    pub height: Option<f64>,
    /// Replaces the opacity for both states.
    pub opacity: Option<f32>,
    /// Replaces pointer handling for both states.
    pub pointer_events: Option<PointerEvents>,
    /// Replaces the fill color.
    pub background: Option<Color>,
    /// Replaces the fade duration.
    pub transition: Option<Duration>,
}

impl OverlayOverride {
    /// Applies this patch to `style`.
    pub fn apply(&self, style: &mut OverlayStyle) {
        patch(&mut style.height, self.height);
        patch(&mut style.opacity, self.opacity);
        patch(&mut style.pointer_events, self.pointer_events);
        patch(&mut style.background, self.background);
        patch(&mut style.transition, self.transition);
    }
}

/// Patch for [`ContainerStyle`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContainerOverride {
    /// `Some(None)` removes the top shadow, `Some(Some(_))` replaces it.
    pub shadow: Option<Option<BoxShadow>>,
}

impl ContainerOverride {
    /// Applies this patch to `style`.
    pub fn apply(&self, style: &mut ContainerStyle) {
        patch(&mut style.shadow, self.shadow);
    }
}

/// Patch for [`SlideStyle`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SlideOverride {
    /// Replaces slide overflow.
    pub overflow: Option<Overflow>,
    /// Replaces the slide bottom margin.
    pub margin_bottom: Option<f64>,
}

impl SlideOverride {
    /// Applies this patch to `style`.
    pub fn apply(&self, style: &mut SlideStyle) {
        patch(&mut style.overflow, self.overflow);
        patch(&mut style.margin_bottom, self.margin_bottom);
    }
}

/// Patch for [`BodyStyle`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BodyOverride {
    /// Replaces body overflow for both states.
    pub overflow: Option<Overflow>,
    /// Replaces the body fill.
    pub background: Option<Color>,
    /// Replaces the body height.
    pub height: Option<Extent>,
    /// Replaces the height cap.
    pub max_height: Option<f64>,
}

impl BodyOverride {
    /// Applies this patch to `style`.
    pub fn apply(&self, style: &mut BodyStyle) {
        patch(&mut style.overflow, self.overflow);
        patch(&mut style.background, self.background);
        patch(&mut style.height, self.height);
        patch(&mut style.max_height, self.max_height);
    }
}

/// Style overrides owned by the sheet's owner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StyleOverrides {
    /// Root container.
    pub root: RootOverride,
    /// Overlay layer.
    pub overlay: OverlayOverride,
    /// Content body.
    pub body: BodyOverride,
}

/// Style overrides passed through to the swipe surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfaceOverrides {
    /// Surface container.
    pub container: ContainerOverride,
    /// Both slides.
    pub slide: SlideOverride,
}

impl SheetLayout {
    /// Layers owner and surface overrides over the computed styles.
    #[must_use]
    pub fn apply_overrides(mut self, sheet: &StyleOverrides, surface: &SurfaceOverrides) -> Self {
        sheet.root.apply(&mut self.root);
        if let Some(overlay) = self.overlay.as_mut() {
            sheet.overlay.apply(overlay);
        }
        surface.container.apply(&mut self.container);
        surface.slide.apply(&mut self.slide);
        sheet.body.apply(&mut self.body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetConfig;
    use crate::geometry::SheetSnapshot;
    use crate::state::SheetState;

    fn computed(state: SheetState) -> SheetLayout {
        let config = SheetConfig::builder().overflow_height(40.0).build();
        SheetLayout::compute(&SheetSnapshot::new(state, 600.0, config))
    }

    #[test]
    fn empty_overrides_keep_computed_styles() {
        let base = computed(SheetState::Open);
        let layered =
            base.apply_overrides(&StyleOverrides::default(), &SurfaceOverrides::default());
        assert_eq!(layered, base);
    }

    #[test]
    fn set_fields_replace_and_unset_fields_keep() {
        let red = Color::new([1.0, 0.0, 0.0, 1.0]);
        let sheet = StyleOverrides {
            body: BodyOverride {
                background: Some(red),
                ..BodyOverride::default()
            },
            overlay: OverlayOverride {
                opacity: Some(0.8),
                ..OverlayOverride::default()
            },
            ..StyleOverrides::default()
        };
        let layered = computed(SheetState::Open).apply_overrides(&sheet, &SurfaceOverrides::default());

        assert_eq!(layered.body.background, red);
        assert_eq!(layered.body.overflow, Overflow::Auto);
        assert_eq!(layered.body.max_height, 600.0);

        let overlay = layered.overlay.unwrap();
        assert_eq!(overlay.opacity, 0.8);
        assert_eq!(overlay.pointer_events, PointerEvents::Auto);
    }

    #[test]
    fn container_shadow_can_be_removed() {
        let surface = SurfaceOverrides {
            container: ContainerOverride { shadow: Some(None) },
            slide: SlideOverride {
                margin_bottom: Some(0.0),
                ..SlideOverride::default()
            },
        };
        let base = computed(SheetState::Closed);
        assert!(base.container.shadow.is_some());

        let layered = base.apply_overrides(&StyleOverrides::default(), &surface);
        assert!(layered.container.shadow.is_none());
        assert_eq!(layered.slide.margin_bottom, 0.0);
        assert_eq!(layered.slide.overflow, Overflow::Visible);
    }

    #[test]
    fn overlay_override_never_creates_an_overlay() {
        let config = SheetConfig::builder().overlay(false).build();
        let base = SheetLayout::compute(&SheetSnapshot::new(SheetState::Open, 600.0, config));
        let sheet = StyleOverrides {
            overlay: OverlayOverride {
                opacity: Some(1.0),
                ..OverlayOverride::default()
            },
            root: RootOverride {
                height: Some(12.0),
                ..RootOverride::default()
            },
            ..StyleOverrides::default()
        };
        let layered = base.apply_overrides(&sheet, &SurfaceOverrides::default());
        assert!(layered.overlay.is_none());
        assert_eq!(layered.root.height, 12.0);
    }
}
