// Copyright 2026 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop region adapter: depth tracking plus user callbacks for one element.
//!
//! [`DropRegion`] wires a [`DragDepth`] counter to three optional callbacks
//! and to the platform's propagation controls. Feed it every `dragenter`,
//! `dragleave`, and `drop` signal the bound element observes, in dispatch
//! order, and it invokes:
//!
//! - `on_enter` exactly once per true entry into the region,
//! - `on_leave` exactly once per true exit,
//! - `on_drop` on every drop, after the counter has been reset.
//!
//! All three handlers stop the signal's propagation so that an ancestor
//! region never observes descendant-internal drag traffic. The drop handler
//! additionally prevents the platform's default action; see
//! [`DropRegion::handle_drop`].
//!
//! Events are abstracted behind [`DragSignal`] so the adapter can be driven
//! by DOM events (see the `windfall_web` crate) or by test doubles.
//!
//! ## Minimal example
//!
//! ```
//! use windfall_event_state::region::{DragSignal, DropRegion};
//!
//! // A stand-in for the platform event.
//! struct Signal;
//! impl DragSignal for Signal {
//!     fn stop_propagation(&self) {}
//!     fn prevent_default(&self) {}
//! }
//!
//! let entries = std::rc::Rc::new(std::cell::Cell::new(0));
//! let hits = std::rc::Rc::clone(&entries);
//! let mut region = DropRegion::new().on_enter(move |_: &Signal| hits.set(hits.get() + 1));
//!
//! // Entering a nested child bubbles a second enter; only the first one
//! // is a true entry.
//! region.handle_enter(&Signal);
//! region.handle_enter(&Signal);
//! assert_eq!(entries.get(), 1);
//! assert!(region.is_over());
//! assert_eq!(region.depth(), 2);
//! ```

use alloc::boxed::Box;
use core::fmt;

use crate::depth::DragDepth;

/// Propagation controls a drag signal must expose.
///
/// Mirrors the two DOM `Event` methods the adapter relies on. Behavior is
/// undefined if the platform object silently ignores either call; the
/// adapter does not verify the suppression took effect.
pub trait DragSignal {
    /// Prevents ancestor-bound handlers from observing this signal.
    fn stop_propagation(&self);

    /// Suppresses the platform's default action for this signal.
    fn prevent_default(&self);
}

/// Enter/leave/drop adapter for a single drop region.
///
/// Owns the [`DragDepth`] counter and the user callbacks. The counter is
/// private: only the three `handle_*` methods mutate it, which is what
/// makes the true-transition accounting sound.
pub struct DropRegion<E> {
    depth: DragDepth,
    on_enter: Option<Box<dyn FnMut(&E)>>,
    on_leave: Option<Box<dyn FnMut(&E)>>,
    on_drop: Option<Box<dyn FnMut()>>,
}

impl<E> DropRegion<E> {
    /// Creates an adapter with no callbacks and the pointer outside.
    #[must_use]
    pub fn new() -> Self {
        Self {
            depth: DragDepth::new(),
            on_enter: None,
            on_leave: None,
            on_drop: None,
        }
    }

    /// Sets the callback invoked once per true entry into the region.
    #[must_use]
    pub fn on_enter(mut self, f: impl FnMut(&E) + 'static) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Sets the callback invoked once per true exit from the region.
    #[must_use]
    pub fn on_leave(mut self, f: impl FnMut(&E) + 'static) -> Self {
        self.on_leave = Some(Box::new(f));
        self
    }

    /// Sets the callback invoked on every drop. It receives no event; the
    /// region has already been reset when it runs.
    #[must_use]
    pub fn on_drop(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drop = Some(Box::new(f));
        self
    }

    /// Current nesting depth. Negative values are the suppressed-enter
    /// quirk documented on [`DragDepth`].
    #[must_use]
    pub fn depth(&self) -> i32 {
        self.depth.depth()
    }

    /// Returns `true` while the pointer is inside the region.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.depth.is_over()
    }
}

impl<E: DragSignal> DropRegion<E> {
    /// Consumes one enter signal observed on the bound element.
    ///
    /// Always stops propagation. Invokes `on_enter` only when the pointer
    /// was outside the region before this signal (depth 0 → 1); bubbled
    /// enters from descendants are absorbed silently.
    pub fn handle_enter(&mut self, event: &E) {
        event.stop_propagation();
        if self.depth.enter()
            && let Some(f) = self.on_enter.as_mut()
        {
            f(event);
        }
    }

    /// Consumes one leave signal observed on the bound element.
    ///
    /// Always stops propagation. Invokes `on_leave` only when the counter
    /// falls to ≤ 0: either a true exit, or the unmatched leave from a
    /// descendant that suppressed its own enter bubbling.
    pub fn handle_leave(&mut self, event: &E) {
        event.stop_propagation();
        if self.depth.leave()
            && let Some(f) = self.on_leave.as_mut()
        {
            f(event);
        }
    }

    /// Consumes one drop signal observed on the bound element.
    ///
    /// Calls `prevent_default` *and* `stop_propagation`, in that order and
    /// unconditionally. The pair is a compatibility contract: Firefox
    /// navigates to the dropped resource in a new window when either call
    /// is missing. The counter is then reset to 0 whatever its prior
    /// value, and `on_drop` runs last.
    pub fn handle_drop(&mut self, event: &E) {
        event.prevent_default();
        event.stop_propagation();
        self.depth.reset();
        if let Some(f) = self.on_drop.as_mut() {
            f();
        }
    }
}

impl<E> Default for DropRegion<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for DropRegion<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropRegion")
            .field("depth", &self.depth)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .field("on_drop", &self.on_drop.is_some())
            .finish()
    }
}
