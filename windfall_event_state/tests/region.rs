// Copyright 2026 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests for `DropRegion`: whole drag interactions replayed in
//! browser dispatch order, including an ancestor region that must stay
//! oblivious to descendant-internal traffic.

use std::cell::Cell;
use std::rc::Rc;

use windfall_event_state::region::{DragSignal, DropRegion};

/// Mock platform event recording which suppressions were requested.
#[derive(Default)]
struct Signal {
    stopped: Cell<bool>,
    prevented: Cell<bool>,
}

impl DragSignal for Signal {
    fn stop_propagation(&self) {
        self.stopped.set(true);
    }

    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Kind {
    Enter,
    Leave,
    Drop,
}

/// Two regions in an ancestor chain. Mimics browser bubbling: the inner
/// region handles the signal first, and the outer one observes it only if
/// the inner handler failed to stop propagation.
struct Chain {
    inner: DropRegion<Signal>,
    outer: DropRegion<Signal>,
    leaked_to_outer: Rc<Cell<u32>>,
}

impl Chain {
    fn new(inner: DropRegion<Signal>) -> Self {
        let leaked = Rc::new(Cell::new(0));
        let (e, l, d) = (Rc::clone(&leaked), Rc::clone(&leaked), Rc::clone(&leaked));
        let outer = DropRegion::new()
            .on_enter(move |_: &Signal| e.set(e.get() + 1))
            .on_leave(move |_: &Signal| l.set(l.get() + 1))
            .on_drop(move || d.set(d.get() + 1));
        Self {
            inner,
            outer,
            leaked_to_outer: leaked,
        }
    }

    fn dispatch(&mut self, kind: Kind) {
        let event = Signal::default();
        match kind {
            Kind::Enter => self.inner.handle_enter(&event),
            Kind::Leave => self.inner.handle_leave(&event),
            Kind::Drop => self.inner.handle_drop(&event),
        }
        if !event.stopped.get() {
            match kind {
                Kind::Enter => self.outer.handle_enter(&event),
                Kind::Leave => self.outer.handle_leave(&event),
                Kind::Drop => self.outer.handle_drop(&event),
            }
        }
    }
}

fn counting_region() -> (DropRegion<Signal>, Rc<Cell<u32>>, Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let enters = Rc::new(Cell::new(0));
    let leaves = Rc::new(Cell::new(0));
    let drops = Rc::new(Cell::new(0));
    let (e, l, d) = (Rc::clone(&enters), Rc::clone(&leaves), Rc::clone(&drops));
    let region = DropRegion::new()
        .on_enter(move |_: &Signal| e.set(e.get() + 1))
        .on_leave(move |_: &Signal| l.set(l.get() + 1))
        .on_drop(move || d.set(d.get() + 1));
    (region, enters, leaves, drops)
}

#[test]
fn full_drag_over_nested_children_then_exit() {
    // Element with two nested children, visited in sequence:
    //   enter element, enter child A, (spurious leave), leave A back to
    //   element, enter child B, (spurious leave), leave B, exit element.
    let (region, enters, leaves, _) = counting_region();
    let mut chain = Chain::new(region);

    for kind in [
        Kind::Enter, // pointer enters the element
        Kind::Enter, // child A's enter bubbles up
        Kind::Leave, // element's spurious leave for child A
        Kind::Enter, // element's enter as the pointer moves back off child A
        Kind::Leave, // child A's leave bubbles up
        Kind::Enter, // child B's enter bubbles up
        Kind::Leave, // element's spurious leave for child B
        Kind::Leave, // true exit
    ] {
        chain.dispatch(kind);
    }

    assert_eq!(enters.get(), 1, "one true entry for the whole traversal");
    assert_eq!(leaves.get(), 1, "one true exit for the whole traversal");
    assert_eq!(chain.inner.depth(), 0);
    assert_eq!(
        chain.leaked_to_outer.get(),
        0,
        "ancestor region must never observe the inner region's signals"
    );
}

#[test]
fn drag_ending_in_drop_over_a_child() {
    let (region, enters, leaves, drops) = counting_region();
    let mut chain = Chain::new(region);

    chain.dispatch(Kind::Enter); // element
    chain.dispatch(Kind::Enter); // child bubbles
    chain.dispatch(Kind::Leave); // spurious leave
    chain.dispatch(Kind::Drop); // released over the child

    assert_eq!(enters.get(), 1);
    assert_eq!(leaves.get(), 0, "no exit happened before the drop");
    assert_eq!(drops.get(), 1);
    assert_eq!(chain.inner.depth(), 0);
    assert_eq!(chain.leaked_to_outer.get(), 0);
}

#[test]
fn suppressed_child_enter_produces_the_documented_quirk() {
    // The child stopped its own dragenter from bubbling, so the element
    // only observes the spurious leave. The region reports an exit even
    // though the pointer is still inside; the child opted out.
    let (region, enters, leaves, _) = counting_region();
    let mut chain = Chain::new(region);

    chain.dispatch(Kind::Enter); // element
    chain.dispatch(Kind::Leave); // spurious leave, no bubbled child enter

    assert_eq!(enters.get(), 1);
    assert_eq!(leaves.get(), 1);
    assert_eq!(chain.inner.depth(), 0);

    // Leaving the child fires the element's enter/leave normally again.
    chain.dispatch(Kind::Enter);
    assert_eq!(enters.get(), 2);
    assert_eq!(chain.leaked_to_outer.get(), 0);
}

#[test]
fn drop_after_unbalanced_leaves_recovers_to_zero() {
    let (region, _, leaves, drops) = counting_region();
    let mut chain = Chain::new(region);

    chain.dispatch(Kind::Leave);
    chain.dispatch(Kind::Leave);
    assert_eq!(chain.inner.depth(), -2);
    assert_eq!(leaves.get(), 2, "every leave at depth <= 0 reports an exit");

    chain.dispatch(Kind::Drop);
    assert_eq!(drops.get(), 1);
    assert_eq!(chain.inner.depth(), 0);

    chain.dispatch(Kind::Enter);
    assert!(chain.inner.is_over());
}

#[test]
fn consecutive_interactions_reuse_the_same_region() {
    let (region, enters, leaves, drops) = counting_region();
    let mut chain = Chain::new(region);

    // First interaction: hover through and out.
    chain.dispatch(Kind::Enter);
    chain.dispatch(Kind::Leave);

    // Second interaction: hover in and drop.
    chain.dispatch(Kind::Enter);
    chain.dispatch(Kind::Drop);

    assert_eq!(enters.get(), 2);
    assert_eq!(leaves.get(), 1);
    assert_eq!(drops.get(), 1);
    assert_eq!(chain.inner.depth(), 0);
    assert_eq!(chain.leaked_to_outer.get(), 0);
}

#[test]
fn drop_prevents_default_exactly_once_per_signal() {
    let mut region: DropRegion<Signal> = DropRegion::new();

    let enter = Signal::default();
    region.handle_enter(&enter);
    assert!(enter.stopped.get());
    assert!(!enter.prevented.get(), "enter must not prevent default");

    let drop = Signal::default();
    region.handle_drop(&drop);
    assert!(drop.stopped.get());
    assert!(drop.prevented.get());
}
