//! Pointer interaction with the knot
//!
//! A small two-state machine: Idle (no grab) and Grabbing (one node held
//! with a press-time offset). Press picks the first node whose position is
//! within a per-axis box of the pointer; move pins the grabbed node to the
//! pointer plus offset; release always drops the grab.

use super::states::{Grab, Knot, NVec2};

/// One discrete input event, polled once per tick in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Quit,
    Down(NVec2),
    Up,
    Move(NVec2),
}

/// Apply a batch of pointer events to the knot in order.
/// Returns `false` once a `Quit` event is seen; remaining events are
/// not processed.
pub fn drain_pointer_events(
    knot: &mut Knot,
    events: impl IntoIterator<Item = PointerEvent>,
    pick_radius: f64,
) -> bool {
    for event in events {
        match event {
            PointerEvent::Quit => return false,
            PointerEvent::Down(p) => press(knot, p, pick_radius),
            PointerEvent::Up => knot.grab = None,
            PointerEvent::Move(p) => drag(knot, p),
        }
    }
    true
}

/// Pick the first node (in index order) whose position lies within
/// `pick_radius` of the pointer on both axes independently. A miss leaves
/// any existing grab in place.
fn press(knot: &mut Knot, pointer: NVec2, pick_radius: f64) {
    for (i, node) in knot.nodes.iter().enumerate() {
        if (pointer.x - node.x.x).abs() < pick_radius && (pointer.y - node.x.y).abs() < pick_radius
        {
            knot.grab = Some(Grab {
                node: i,
                offset: node.x - pointer,
            });
            break;
        }
    }
}

/// Pin the grabbed node to the pointer plus the stored offset. The node's
/// velocity is left untouched; physics resumes with whatever velocity the
/// node holds at release time.
fn drag(knot: &mut Knot, pointer: NVec2) {
    if let Some(grab) = knot.grab {
        knot.nodes[grab.node].x = pointer + grab.offset;
    }
}
