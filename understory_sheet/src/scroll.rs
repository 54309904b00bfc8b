// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll reset for the content body.

/// Resets a scrollable element to its top.
///
/// `E` is the host's element handle type. The controller never dereferences
/// it; it only hands it back here.
pub trait ScrollReset<E: ?Sized> {
    /// Scrolls `element` back to offset zero.
    ///
    /// A `None` element means the body is not mounted; implementations must
    /// treat that as a no-op.
    fn reset(&mut self, element: Option<&E>);
}

impl<E, F> ScrollReset<E> for F
where
    E: ?Sized,
    F: FnMut(Option<&E>),
{
    fn reset(&mut self, element: Option<&E>) {
        self(element);
    }
}

/// A [`ScrollReset`] that does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoScrollReset;

impl<E: ?Sized> ScrollReset<E> for NoScrollReset {
    fn reset(&mut self, _element: Option<&E>) {}
}
