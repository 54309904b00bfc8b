// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport height observation.
//!
//! A [`HeightObserver`] reports the viewport height once promptly after
//! subscribing and again on every change. Subscriptions are scoped: dropping
//! the returned [`Subscription`] tears the listener down.

use alloc::boxed::Box;
use core::fmt;

/// Listener invoked with each reported viewport height.
pub type HeightListener = Box<dyn FnMut(f64)>;

/// Source of viewport height changes.
pub trait HeightObserver {
    /// Registers `on_change` and returns a guard that unsubscribes on drop.
    ///
    /// Implementations should report the current height promptly, either
    /// synchronously from this call or on the next dispatch.
    fn subscribe(&mut self, on_change: HeightListener) -> Subscription;
}

/// Guard for an active [`HeightObserver`] subscription.
///
/// The unsubscribe action runs exactly once, either from [`Subscription::cancel`]
/// or when the guard is dropped.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a guard running `unsubscribe` on release.
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A guard with nothing to release.
    pub fn empty() -> Self {
        Self { unsubscribe: None }
    }

    /// Unsubscribes now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
