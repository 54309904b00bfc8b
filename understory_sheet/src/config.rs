// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-render sheet configuration.

bitflags::bitflags! {
    /// Feature toggles for a sheet.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SheetFlags: u8 {
        /// Pin the body height to the maximum content height instead of
        /// sizing it to its content.
        const FULL_SCREEN         = 0b0000_0001;
        /// Draw a dimming overlay behind the sheet while it is open.
        const OVERLAY             = 0b0000_0010;
        /// Draw the soft shadow below the bottom edge.
        const SHADOW_TIP          = 0b0000_0100;
        /// Draw the shadow along the top edge of the surface.
        const TOP_SHADOW          = 0b0000_1000;
        /// Scroll the body back to the top once the sheet settles closed.
        const SCROLL_TOP_AT_CLOSE = 0b0001_0000;
    }
}

impl Default for SheetFlags {
    fn default() -> Self {
        Self::OVERLAY | Self::SHADOW_TIP | Self::TOP_SHADOW | Self::SCROLL_TOP_AT_CLOSE
    }
}

/// Clamps a length to a finite, non-negative value.
///
/// `NaN`, infinities and negative values all map to `0.0`.
#[inline]
pub(crate) fn normalize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Immutable sheet configuration.
///
/// Lengths are always finite and non-negative; the builder normalizes
/// anything else to `0.0`.
///
/// # Example
///
/// ```rust
/// use understory_sheet::{SheetConfig, SheetFlags};
///
/// let config = SheetConfig::builder()
///     .overflow_height(40.0)
///     .margin_top(-10.0)
///     .full_screen(true)
///     .build();
///
/// assert_eq!(config.overflow_height(), 40.0);
/// assert_eq!(config.margin_top(), 0.0);
/// assert!(config.flags().contains(SheetFlags::FULL_SCREEN | SheetFlags::OVERLAY));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "SheetConfigBuilder"))]
pub struct SheetConfig {
    overflow_height: f64,
    margin_top: f64,
    flags: SheetFlags,
}

impl SheetConfig {
    /// Starts a builder seeded with the default configuration.
    #[must_use]
    pub fn builder() -> SheetConfigBuilder {
        SheetConfigBuilder::new()
    }

    /// Height of the sliver that stays visible while closed.
    #[must_use]
    #[inline]
    pub fn overflow_height(&self) -> f64 {
        self.overflow_height
    }

    /// Inset reserved at the top of the viewport.
    #[must_use]
    #[inline]
    pub fn margin_top(&self) -> f64 {
        self.margin_top
    }

    /// Feature toggles.
    #[must_use]
    #[inline]
    pub fn flags(&self) -> SheetFlags {
        self.flags
    }

    /// Returns `true` if `flag` is set.
    #[must_use]
    #[inline]
    pub fn has(&self, flag: SheetFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Returns `true` when no sliver is visible while closed.
    #[must_use]
    #[inline]
    pub fn hidden_when_closed(&self) -> bool {
        self.overflow_height == 0.0
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfigBuilder::new().build()
    }
}

/// Builder for [`SheetConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetConfigBuilder {
    overflow_height: f64,
    margin_top: f64,
    flags: SheetFlags,
}

impl Default for SheetConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetConfigBuilder {
    /// Creates a builder with no sliver, no top margin and default flags.
    #[must_use]
    pub fn new() -> Self {
        Self {
            overflow_height: 0.0,
            margin_top: 0.0,
            flags: SheetFlags::default(),
        }
    }

    /// Sets the sliver height.
    #[must_use]
    pub fn overflow_height(mut self, height: f64) -> Self {
        self.overflow_height = height;
        self
    }

    /// Sets the top inset.
    #[must_use]
    pub fn margin_top(mut self, margin: f64) -> Self {
        self.margin_top = margin;
        self
    }

    /// Replaces all flags at once.
    #[must_use]
    pub fn flags(mut self, flags: SheetFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Toggles [`SheetFlags::FULL_SCREEN`].
    #[must_use]
    pub fn full_screen(self, on: bool) -> Self {
        self.with_flag(SheetFlags::FULL_SCREEN, on)
    }

    /// Toggles [`SheetFlags::OVERLAY`].
    #[must_use]
    pub fn overlay(self, on: bool) -> Self {
        self.with_flag(SheetFlags::OVERLAY, on)
    }

    /// Toggles [`SheetFlags::SHADOW_TIP`].
    #[must_use]
    pub fn shadow_tip(self, on: bool) -> Self {
        self.with_flag(SheetFlags::SHADOW_TIP, on)
    }

    /// Toggles [`SheetFlags::TOP_SHADOW`].
    #[must_use]
    pub fn top_shadow(self, on: bool) -> Self {
        self.with_flag(SheetFlags::TOP_SHADOW, on)
    }

    /// Toggles [`SheetFlags::SCROLL_TOP_AT_CLOSE`].
    #[must_use]
    pub fn scroll_top_at_close(self, on: bool) -> Self {
        self.with_flag(SheetFlags::SCROLL_TOP_AT_CLOSE, on)
    }

    fn with_flag(mut self, flag: SheetFlags, on: bool) -> Self {
        self.flags.set(flag, on);
        self
    }

    /// Builds the configuration, normalizing lengths.
    #[must_use]
    pub fn build(self) -> SheetConfig {
        SheetConfig {
            overflow_height: normalize_extent(self.overflow_height),
            margin_top: normalize_extent(self.margin_top),
            flags: self.flags,
        }
    }
}

impl From<SheetConfigBuilder> for SheetConfig {
    fn from(builder: SheetConfigBuilder) -> Self {
        builder.build()
    }
}
