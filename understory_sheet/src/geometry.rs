// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry derivation from a sheet snapshot.
//!
//! Everything here is a function of three inputs: the resolved
//! [`SheetState`], the latest viewport height, and the [`SheetConfig`].
//! Nothing is cached, so hosts can recompute on every render pass.

use crate::config::{SheetConfig, normalize_extent};
use crate::state::{PositionIndex, SheetState};

/// Immutable inputs to geometry and layout derivation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetSnapshot {
    state: SheetState,
    viewport_height: f64,
    config: SheetConfig,
}

impl SheetSnapshot {
    /// Creates a snapshot. The viewport height is clamped to be non-negative.
    #[must_use]
    pub fn new(state: SheetState, viewport_height: f64, config: SheetConfig) -> Self {
        Self {
            state,
            viewport_height: normalize_extent(viewport_height),
            config,
        }
    }

    /// Resolved open/closed state.
    #[must_use]
    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Viewport height as last reported.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Configuration in effect for this pass.
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }
}

/// Returns `max(0, viewport_height - margin_top)`.
///
/// A margin larger than the viewport collapses the content area to zero
/// rather than producing a negative height.
#[must_use]
pub fn max_content_height(viewport_height: f64, margin_top: f64) -> f64 {
    (normalize_extent(viewport_height) - normalize_extent(margin_top)).max(0.0)
}

/// Scalar geometry derived from a [`SheetSnapshot`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetGeometry {
    /// Tallest the content body may grow.
    pub max_content_height: f64,
    /// No sliver is shown while closed.
    pub hidden_when_closed: bool,
    /// Tip and top shadows are suppressed.
    pub shadows_hidden: bool,
    /// Surface position for the resolved state.
    pub position_index: PositionIndex,
    /// The content body accepts scrolling.
    pub body_scrollable: bool,
    /// The overlay (if any) captures pointer input.
    pub overlay_interactive: bool,
}

impl SheetGeometry {
    /// Derives geometry from a snapshot.
    ///
    /// ```rust
    /// use understory_sheet::{PositionIndex, SheetConfig, SheetGeometry, SheetSnapshot, SheetState};
    ///
    /// let config = SheetConfig::builder().margin_top(50.0).build();
    /// let snapshot = SheetSnapshot::new(SheetState::Open, 500.0, config);
    /// let geometry = SheetGeometry::compute(&snapshot);
    ///
    /// assert_eq!(geometry.max_content_height, 450.0);
    /// assert_eq!(geometry.position_index, PositionIndex::Open);
    /// assert!(geometry.body_scrollable);
    /// ```
    #[must_use]
    pub fn compute(snapshot: &SheetSnapshot) -> Self {
        let open = snapshot.state.is_open();
        let hidden_when_closed = snapshot.config.hidden_when_closed();
        Self {
            max_content_height: max_content_height(
                snapshot.viewport_height,
                snapshot.config.margin_top(),
            ),
            hidden_when_closed,
            shadows_hidden: hidden_when_closed && !open,
            position_index: snapshot.state.position_index(),
            body_scrollable: open,
            overlay_interactive: open,
        }
    }
}
