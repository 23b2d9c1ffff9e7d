//! Fixed-step time integrator for the knot
//!
//! Advances all node velocities and positions by one tick using three
//! passes whose ordering is load-bearing:
//!
//! 1. elastic pass: structural spring kicks into every node's velocity
//! 2. relax pass: origin-restoring force, damping, explicit Euler
//!    position update (skipped entirely for a grabbed node)
//! 3. contact pass: short-range repulsion kicks into every node's
//!    velocity; positions only see these on the next tick
//!
//! The contact pass runs after position integration on purpose: its kicks
//! surface in positions one tick later.

use super::forces::KickSet;
use super::params::Parameters;
use super::states::{Knot, NVec2};

/// Advance the knot by one tick.
///
/// `elastic` is applied before the position update, `contact` after.
/// A grabbed node still receives elastic and contact kicks (so springs keep
/// tugging on its velocity and on its neighbors), but its restore, damping
/// and position update are suspended; the pointer owns its position.
pub fn knot_integrator(knot: &mut Knot, elastic: &KickSet, contact: &KickSet, params: &Parameters) {
    let n = knot.nodes.len();
    if n == 0 {
        // no nodes, return
        return;
    }

    // Shared kick buffer, one velocity increment per node
    let mut kicks = vec![NVec2::zeros(); n];

    // Elastic pass: spring kicks from current positions
    elastic.accumulate_kicks(&*knot, &mut kicks);
    for (node, k) in knot.nodes.iter_mut().zip(kicks.iter()) {
        node.v += *k;
    }

    // Relax pass: restore, damp, integrate; grabbed node excluded
    let grabbed = knot.grab.map(|g| g.node);
    for (i, node) in knot.nodes.iter_mut().enumerate() {
        if Some(i) == grabbed {
            continue;
        }

        // Linear spring toward the node's own fixed anchor
        node.v += params.restore_k * (node.origin - node.x);

        // Damping bounds energy growth and produces settling
        node.v *= params.damping;

        // x_n+1 = x_n + v_n+1 (explicit Euler, unit timestep)
        node.x += node.v;
    }

    // Contact pass: repulsion from the just-updated positions. These
    // kicks land in velocities now and reach positions next tick.
    contact.accumulate_kicks(&*knot, &mut kicks);
    for (node, k) in knot.nodes.iter_mut().zip(kicks.iter()) {
        node.v += *k;
    }
}
