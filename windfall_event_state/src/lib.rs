// Copyright 2026 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windfall_event_state --heading-base-level=0

//! Windfall Event State: normalized drag-and-drop enter/leave tracking.
//!
//! Browsers report drag lifecycle events per element, and nested elements
//! make those reports misleading for the element you actually care about:
//!
//! - Moving the pointer onto a child fires the parent's `dragleave` even
//!   though the pointer is still inside the parent's bounds. Unless the
//!   child stops propagation, the child's `dragenter` also bubbles up to
//!   the parent, so the parent sees a spurious enter/leave pair.
//! - A child that stops propagation of its `dragenter` but not its
//!   `dragleave` leaves the parent with an unmatched leave.
//!
//! This crate reinterprets that raw stream into a single correct "pointer
//! is over this element" signal using a small depth counter:
//!
//! - [`depth::DragDepth`]: the counter itself. Increments per enter signal,
//!   decrements per leave signal, and reports which signals are *true*
//!   transitions (0 → 1, and back to ≤ 0).
//! - [`region::DropRegion`]: the counter wired to optional `on_enter` /
//!   `on_leave` / `on_drop` callbacks and to the platform's propagation
//!   controls, abstracted behind [`region::DragSignal`].
//!
//! ## Usage
//!
//! ```
//! use windfall_event_state::region::{DragSignal, DropRegion};
//! # use std::cell::Cell;
//! # use std::rc::Rc;
//!
//! struct Signal;
//! impl DragSignal for Signal {
//!     fn stop_propagation(&self) {}
//!     fn prevent_default(&self) {}
//! }
//!
//! let over = Rc::new(Cell::new(false));
//! let (enter_flag, leave_flag) = (Rc::clone(&over), Rc::clone(&over));
//! let mut region = DropRegion::new()
//!     .on_enter(move |_: &Signal| enter_flag.set(true))
//!     .on_leave(move |_: &Signal| leave_flag.set(false));
//!
//! // Pointer enters the element, then a nested child, then exits.
//! region.handle_enter(&Signal); // true entry: on_enter runs
//! region.handle_enter(&Signal); // child enter, absorbed
//! region.handle_leave(&Signal); // parent's spurious leave, absorbed
//! assert!(over.get());
//! region.handle_leave(&Signal); // true exit: on_leave runs
//! assert!(!over.get());
//! ```
//!
//! Every handled signal has its propagation stopped, so stacking one
//! `DropRegion` per element in an ancestor chain keeps each region's
//! accounting independent: descendant-internal traffic never reaches an
//! ancestor's handlers.
//!
//! For binding a region to a DOM element on `wasm32`, see the
//! `windfall_web` crate.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod depth;
pub mod region;
