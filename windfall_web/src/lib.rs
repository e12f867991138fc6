// Copyright 2026 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windfall_web --heading-base-level=0

//! DOM binding for the Windfall drag enter/leave normalizer.
//!
//! This crate attaches a `windfall_event_state` [`DropRegion`] to one
//! `web_sys::Element` when targeting `wasm32`: [`DropZone::bind`] registers
//! `dragenter`, `dragleave`, and `drop` listeners that feed the region's
//! depth counter, so the `on_enter`/`on_leave` callbacks fire only on true
//! transitions across the element's total bounds — nested children and
//! their bubbled events included.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn attach(element: web_sys::Element) -> Result<windfall_web::DropZone, wasm_bindgen::JsValue> {
//!     use windfall_event_state::region::DropRegion;
//!     use windfall_web::WebDragEvent;
//!
//!     let region = DropRegion::new()
//!         .on_enter(|_event: &WebDragEvent| { /* highlight the target */ })
//!         .on_leave(|_event: &WebDragEvent| { /* clear the highlight */ })
//!         .on_drop(|| { /* accept the payload */ });
//!     windfall_web::DropZone::bind(&element, region)
//! }
//! ```
//!
//! Notes:
//! - Dropping the returned [`DropZone`] removes the listeners. Call
//!   [`DropZone::forget`] instead to keep them attached for the element's
//!   remaining lifetime.
//! - The drop listener calls `preventDefault()` *and* `stopPropagation()`;
//!   without both, Firefox navigates to the dropped resource in a new
//!   window.
//! - On targets other than `wasm32` this crate compiles to an empty shell.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
use alloc::boxed::Box;
#[cfg(target_arch = "wasm32")]
use alloc::rc::Rc;
#[cfg(target_arch = "wasm32")]
use core::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use core::fmt;
#[cfg(target_arch = "wasm32")]
use core::mem::ManuallyDrop;
#[cfg(target_arch = "wasm32")]
use core::ops::Deref;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{DragEvent, Element};

#[cfg(target_arch = "wasm32")]
use windfall_event_state::region::{DragSignal, DropRegion};

/// A `web_sys::DragEvent` wearing the [`DragSignal`] propagation controls.
///
/// Callbacks receive `&WebDragEvent`; it derefs to the underlying
/// [`DragEvent`] for access to coordinates, modifier keys, and the rest of
/// the DOM surface.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct WebDragEvent(DragEvent);

#[cfg(target_arch = "wasm32")]
impl DragSignal for WebDragEvent {
    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

#[cfg(target_arch = "wasm32")]
impl Deref for WebDragEvent {
    type Target = DragEvent;

    fn deref(&self) -> &DragEvent {
        &self.0
    }
}

#[cfg(target_arch = "wasm32")]
type DragClosure = Closure<dyn FnMut(DragEvent)>;

/// A [`DropRegion`] bound to one DOM element.
///
/// Created with [`DropZone::bind`]. The zone owns the three registered JS
/// closures; dropping it removes the listeners, while [`forget`] leaves
/// them attached forever (the traditional behavior for listeners meant to
/// live as long as the document).
///
/// Each `bind` call owns an independent depth counter. Binding the same
/// element twice yields two counters that each observe every signal, which
/// doubles the callback traffic; bind once per element.
///
/// [`forget`]: DropZone::forget
#[cfg(target_arch = "wasm32")]
pub struct DropZone {
    element: Element,
    region: Rc<RefCell<DropRegion<WebDragEvent>>>,
    dragenter: DragClosure,
    dragleave: DragClosure,
    drop: DragClosure,
}

#[cfg(target_arch = "wasm32")]
impl DropZone {
    /// Attaches `dragenter`/`dragleave`/`drop` listeners on `element` that
    /// drive `region`.
    ///
    /// The region is consumed: its counter belongs to this binding alone
    /// from here on, which is what keeps the true-transition accounting
    /// sound.
    pub fn bind(element: &Element, region: DropRegion<WebDragEvent>) -> Result<Self, JsValue> {
        let region = Rc::new(RefCell::new(region));

        let shared = Rc::clone(&region);
        let dragenter = Closure::wrap(Box::new(move |event: DragEvent| {
            shared.borrow_mut().handle_enter(&WebDragEvent(event));
        }) as Box<dyn FnMut(_)>);
        element.add_event_listener_with_callback("dragenter", dragenter.as_ref().unchecked_ref())?;

        let shared = Rc::clone(&region);
        let dragleave = Closure::wrap(Box::new(move |event: DragEvent| {
            shared.borrow_mut().handle_leave(&WebDragEvent(event));
        }) as Box<dyn FnMut(_)>);
        element.add_event_listener_with_callback("dragleave", dragleave.as_ref().unchecked_ref())?;

        let shared = Rc::clone(&region);
        let drop = Closure::wrap(Box::new(move |event: DragEvent| {
            shared.borrow_mut().handle_drop(&WebDragEvent(event));
        }) as Box<dyn FnMut(_)>);
        element.add_event_listener_with_callback("drop", drop.as_ref().unchecked_ref())?;

        Ok(Self {
            element: element.clone(),
            region,
            dragenter,
            dragleave,
            drop,
        })
    }

    /// The element the listeners are attached to.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Returns `true` while a drag is over the bound element.
    ///
    /// Borrows the shared region; do not call from inside one of the
    /// region's own callbacks.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.region.borrow().is_over()
    }

    /// Current nesting depth observed on the bound element.
    #[must_use]
    pub fn depth(&self) -> i32 {
        self.region.borrow().depth()
    }

    /// Leaks the binding, keeping the listeners attached for the
    /// element's remaining lifetime.
    pub fn forget(self) {
        // Skipping Drop leaks the closures, exactly like Closure::forget.
        let _ = ManuallyDrop::new(self);
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for DropZone {
    fn drop(&mut self) {
        // Removal failures leave the listener attached with a live
        // closure, so there is nothing useful to do with the error.
        let _ = self
            .element
            .remove_event_listener_with_callback("dragenter", self.dragenter.as_ref().unchecked_ref());
        let _ = self
            .element
            .remove_event_listener_with_callback("dragleave", self.dragleave.as_ref().unchecked_ref());
        let _ = self
            .element
            .remove_event_listener_with_callback("drop", self.drop.as_ref().unchecked_ref());
    }
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for DropZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropZone")
            .field("element", &self.element)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}
