// Copyright 2026 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth counter: reinterpret nested enter/leave signals as true transitions.
//!
//! Browsers fire a `dragleave` on a parent element whenever the pointer
//! enters one of its children, even though the pointer never left the
//! parent's bounds. When the child does not stop propagation, the child's
//! own `dragenter` bubbles up to the parent first, so the parent observes
//! enter-then-leave for a pointer that stayed inside it the whole time.
//!
//! [`DragDepth`] resolves this by counting: each enter signal observed on
//! the bound element increments, each leave signal decrements. The pointer
//! has truly entered only on the 0 → 1 increment, and has truly left only
//! when the counter falls back to ≤ 0.
//!
//! ## Minimal example
//!
//! ```
//! use windfall_event_state::depth::DragDepth;
//!
//! let mut depth = DragDepth::new();
//!
//! // Pointer enters the element: true entry.
//! assert!(depth.enter());
//!
//! // Pointer moves onto a nested child: the child's enter bubbles up
//! // first, then the parent's spurious leave arrives. Neither is a
//! // true transition.
//! assert!(!depth.enter());
//! assert!(!depth.leave());
//!
//! // Pointer exits the element entirely: true exit.
//! assert!(depth.leave());
//! assert_eq!(depth.depth(), 0);
//! ```
//!
//! ## The negative-depth quirk
//!
//! A child that stops propagation of its own `dragenter` but not its
//! `dragleave` makes the parent observe a leave with no matching enter.
//! The counter goes negative and [`DragDepth::leave`] reports a true exit.
//! That child opted out of coordination, so the mismatch is accepted as-is
//! rather than corrected; [`DragDepth::reset`] (the drop signal) is the
//! only thing that restores the counter to 0.

/// Net nesting level of enter vs. leave signals for one bound element.
///
/// Mutate this only from the bound element's own three drag handlers;
/// correctness relies on nothing else touching the counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragDepth {
    depth: i32,
}

impl DragDepth {
    /// Creates a counter at depth 0 (pointer outside the region).
    #[must_use]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Records one enter signal.
    ///
    /// Returns `true` iff this was a true entry into the region, i.e. the
    /// depth was exactly 0 before the increment. Bubbled enters from
    /// descendants already inside the region return `false`.
    pub fn enter(&mut self) -> bool {
        let entered = self.depth == 0;
        self.depth += 1;
        entered
    }

    /// Records one leave signal.
    ///
    /// Returns `true` iff the pointer has truly left the region, i.e. the
    /// depth is ≤ 0 after the decrement. A leave that merely balances a
    /// nested descendant's enter returns `false`.
    pub fn leave(&mut self) -> bool {
        self.depth -= 1;
        self.depth <= 0
    }

    /// Resets to depth 0 unconditionally.
    ///
    /// Called on the drop signal: the interaction is over regardless of
    /// how unbalanced the observed enters and leaves were.
    pub fn reset(&mut self) {
        self.depth = 0;
    }

    /// Current depth. Negative values indicate the quirk described in the
    /// module docs.
    #[must_use]
    pub const fn depth(&self) -> i32 {
        self.depth
    }

    /// Returns `true` while the pointer is inside the region.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.depth > 0
    }
}
