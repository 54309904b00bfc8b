// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/closed state, surface position indices, and control modes.

use core::fmt;

/// Resting state of a bottom sheet.
///
/// A sheet only ever rests in one of two positions. In-flight drag positions
/// belong to the swipe surface and never show up here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SheetState {
    /// Collapsed: only the sliver (if any) is visible.
    #[default]
    Closed,
    /// Expanded: the content body is visible up to the maximum content height.
    Open,
}

impl SheetState {
    /// Maps a boolean open flag to a state.
    #[must_use]
    pub const fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Returns `true` for [`SheetState::Open`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The surface position that displays this state.
    #[must_use]
    pub const fn position_index(self) -> PositionIndex {
        match self {
            Self::Closed => PositionIndex::Closed,
            Self::Open => PositionIndex::Open,
        }
    }

    /// Class name hosts can attach to the content body to style by state.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Closed => "understory-sheet--closed",
            Self::Open => "understory-sheet--open",
        }
    }
}

impl From<bool> for SheetState {
    fn from(open: bool) -> Self {
        Self::from_open(open)
    }
}

impl From<SheetState> for bool {
    fn from(state: SheetState) -> Self {
        state.is_open()
    }
}

/// One of the two ordered positions of the swipe surface.
///
/// Position `0` shows the sliver, position `1` shows the content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PositionIndex {
    /// Index `0`.
    Closed,
    /// Index `1`.
    Open,
}

impl PositionIndex {
    /// Returns the raw index.
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Closed => 0,
            Self::Open => 1,
        }
    }

    /// The sheet state this position settles into.
    #[must_use]
    pub const fn state(self) -> SheetState {
        match self {
            Self::Closed => SheetState::Closed,
            Self::Open => SheetState::Open,
        }
    }
}

impl TryFrom<usize> for PositionIndex {
    type Error = InvalidPositionIndex;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Closed),
            1 => Ok(Self::Open),
            other => Err(InvalidPositionIndex(other)),
        }
    }
}

impl From<PositionIndex> for usize {
    fn from(index: PositionIndex) -> Self {
        index.get()
    }
}

/// A swipe surface reported an index outside the two sheet positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidPositionIndex(pub usize);

impl fmt::Display for InvalidPositionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position index {} is out of range, a sheet only has positions 0 and 1",
            self.0
        )
    }
}

impl core::error::Error for InvalidPositionIndex {}

/// Who owns the open/closed value.
///
/// Resolved once when a controller is created and never re-evaluated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlMode {
    /// The owner supplies the open value and updates it in response to
    /// change notifications.
    Controlled,
    /// The controller tracks the open value itself.
    Uncontrolled,
}
