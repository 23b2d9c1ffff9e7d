use knotsim::simulation::forces::{KickSet, Repulsion, SpringChain};
use knotsim::simulation::integrator::knot_integrator;
use knotsim::simulation::interaction::{drain_pointer_events, PointerEvent};
use knotsim::simulation::params::Parameters;
use knotsim::simulation::states::{Grab, Knot, NVec2, Node, Spring};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        rest_length: 50.0,
        spring_k: 0.1,
        restore_k: 0.05,
        damping: 0.9,
        repel_radius: 20.0,
        repel_k: 0.2,
        pick_radius: 10.0,
    }
}

/// Build the spring kick set for `p`
pub fn elastic_set(p: &Parameters) -> KickSet {
    KickSet::new().with(SpringChain {
        rest_length: p.rest_length,
        k: p.spring_k,
    })
}

/// Build the repulsion kick set for `p`
pub fn contact_set(p: &Parameters) -> KickSet {
    KickSet::new().with(Repulsion {
        radius: p.repel_radius,
        k: p.repel_k,
    })
}

/// Jitter-free 4-node ring of radius 100: nodes land at (100,0), (0,100),
/// (-100,0), (0,-100) up to floating error
pub fn diamond_knot() -> Knot {
    let mut rng = StdRng::seed_from_u64(7);
    Knot::ring(4, NVec2::zeros(), 100.0, 0.0, &mut rng)
}

/// Two free nodes `dist` apart along x, springs optional
pub fn pair_knot(dist: f64, with_spring: bool) -> Knot {
    let node = |x: NVec2| Node {
        x,
        v: NVec2::zeros(),
        origin: x,
    };
    let springs = if with_spring {
        vec![Spring { i: 0, j: 1 }]
    } else {
        Vec::new()
    };
    Knot {
        nodes: vec![node(NVec2::zeros()), node(NVec2::new(dist, 0.0))],
        springs,
        grab: None,
    }
}

fn tick(knot: &mut Knot, p: &Parameters) {
    let elastic = elastic_set(p);
    let contact = contact_set(p);
    knot_integrator(knot, &elastic, &contact, p);
}

// ==================================================================================
// Topology tests
// ==================================================================================

#[test]
fn ring_topology_is_single_cycle() {
    let mut rng = StdRng::seed_from_u64(1);

    for n in [2usize, 3, 4, 20] {
        let knot = Knot::ring(n, NVec2::zeros(), 150.0, 20.0, &mut rng);

        assert_eq!(knot.nodes.len(), n);
        assert_eq!(knot.springs.len(), n);

        let mut degree = vec![0usize; n];
        for (k, spring) in knot.springs.iter().enumerate() {
            assert_ne!(spring.i, spring.j, "self-loop at spring {k}");
            assert_eq!(spring.i, k);
            assert_eq!(spring.j, (k + 1) % n);
            degree[spring.i] += 1;
            degree[spring.j] += 1;
        }
        for (i, d) in degree.iter().enumerate() {
            assert_eq!(*d, 2, "node {i} does not have exactly two incident edges");
        }
    }
}

#[test]
fn origin_is_jittered_position_and_never_mutated() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut knot = Knot::ring(20, NVec2::zeros(), 150.0, 20.0, &mut rng);

    let origins: Vec<NVec2> = knot.nodes.iter().map(|node| node.origin).collect();
    for node in &knot.nodes {
        // Anchor is the perturbed starting point, not the ideal circle point
        assert_eq!(node.origin, node.x);
        let off_circle = (node.origin.norm() - 150.0).abs();
        assert!(off_circle <= 20.0 * 2f64.sqrt() + 1e-9);
    }

    let p = test_params();
    for _ in 0..50 {
        tick(&mut knot, &p);
    }
    for (node, origin) in knot.nodes.iter().zip(origins.iter()) {
        assert_eq!(node.origin, *origin, "origin mutated by integration");
    }
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn spring_kick_conserves_momentum() {
    let knot = diamond_knot();
    let p = test_params();
    let elastic = elastic_set(&p);

    let mut kicks = vec![NVec2::zeros(); knot.nodes.len()];
    elastic.accumulate_kicks(&knot, &mut kicks);

    let net: NVec2 = kicks.iter().sum();
    assert!(net.norm() < 1e-12, "net spring momentum not zero: {net:?}");
}

#[test]
fn stretched_springs_pull_adjacent_nodes_together() {
    // Adjacent separation is 100 * sqrt(2) > rest length 50, so every
    // spring is stretched and pulls its endpoints toward each other
    let mut knot = diamond_knot();
    let p = test_params();

    let d01_before = (knot.nodes[1].x - knot.nodes[0].x).norm();
    tick(&mut knot, &p);

    for i in 0..4 {
        let v = knot.nodes[i].v;
        assert!(v.norm() > 0.0, "node {i} velocity should be nonzero");
        // Velocity points toward the center for a symmetric stretched ring
        assert!(v.dot(&(-knot.nodes[i].origin)) > 0.0, "node {i} not pulled inward");
    }

    for _ in 0..5 {
        tick(&mut knot, &p);
    }
    let d01_after = (knot.nodes[1].x - knot.nodes[0].x).norm();
    assert!(
        d01_after < d01_before,
        "adjacent distance did not shrink: {d01_before} -> {d01_after}"
    );
}

#[test]
fn repulsion_doubles_over_ordered_pairs() {
    let knot = pair_knot(10.0, false);
    let p = test_params();
    let contact = contact_set(&p);

    let mut kicks = vec![NVec2::zeros(); 2];
    contact.accumulate_kicks(&knot, &mut kicks);

    // (radius - dist) * k = 2 per visit, and the ordered loop visits the
    // pair twice, so each node gets a kick of magnitude 4 away from the other
    assert!((kicks[0].x + 4.0).abs() < 1e-12, "got {:?}", kicks[0]);
    assert!((kicks[1].x - 4.0).abs() < 1e-12, "got {:?}", kicks[1]);
    assert_eq!(kicks[0].y, 0.0);
    assert_eq!(kicks[1].y, 0.0);

    let net: NVec2 = kicks.iter().sum();
    assert!(net.norm() < 1e-12, "net repulsion momentum not zero: {net:?}");
}

#[test]
fn coincident_nodes_produce_no_force_and_no_nan() {
    let mut knot = pair_knot(0.0, true);
    knot.nodes[1].x = knot.nodes[0].x;
    knot.nodes[1].origin = knot.nodes[0].origin;

    let p = test_params();
    tick(&mut knot, &p);

    for (i, node) in knot.nodes.iter().enumerate() {
        assert!(node.x.x.is_finite() && node.x.y.is_finite(), "node {i} position not finite");
        assert!(node.v.x.is_finite() && node.v.y.is_finite(), "node {i} velocity not finite");
        // Zero separation is skipped by both passes; at rest on the anchor
        // nothing moves at all
        assert_eq!(node.v, NVec2::zeros());
        assert_eq!(node.x, node.origin);
    }
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn damping_keeps_motion_bounded() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut knot = Knot::ring(20, NVec2::zeros(), 150.0, 20.0, &mut rng);
    let p = test_params();

    for _ in 0..500 {
        tick(&mut knot, &p);
        for (i, node) in knot.nodes.iter().enumerate() {
            let excursion = (node.x - node.origin).norm();
            assert!(
                excursion < 300.0,
                "node {i} diverged: {excursion} units from origin"
            );
        }
    }
}

#[test]
fn repulsion_lags_position_update_by_one_tick() {
    // Two free nodes inside the repulsion radius, at rest on their anchors
    let mut knot = pair_knot(10.0, false);
    let p = test_params();

    let x_before: Vec<NVec2> = knot.nodes.iter().map(|node| node.x).collect();
    tick(&mut knot, &p);

    // First tick: repulsion lands in velocities only, positions untouched
    assert_eq!(knot.nodes[0].x, x_before[0]);
    assert_eq!(knot.nodes[1].x, x_before[1]);
    assert!(knot.nodes[0].v.x < 0.0);
    assert!(knot.nodes[1].v.x > 0.0);

    // Second tick: those velocities finally move the positions apart
    tick(&mut knot, &p);
    let dist = (knot.nodes[1].x - knot.nodes[0].x).norm();
    assert!(dist > 10.0, "nodes did not separate: {dist}");
}

// ==================================================================================
// Interaction tests
// ==================================================================================

#[test]
fn press_grabs_first_node_within_pick_box() {
    let mut knot = diamond_knot();

    // (95, 5) is within 10 of node 0 at (100, 0) on both axes
    let alive = drain_pointer_events(
        &mut knot,
        [PointerEvent::Down(NVec2::new(95.0, 5.0))],
        10.0,
    );
    assert!(alive);

    let grab = knot.grab.expect("press inside pick box should grab");
    assert_eq!(grab.node, 0);
    assert_eq!(grab.offset, knot.nodes[0].x - NVec2::new(95.0, 5.0));
}

#[test]
fn press_outside_all_pick_boxes_stays_idle() {
    let mut knot = diamond_knot();
    drain_pointer_events(&mut knot, [PointerEvent::Down(NVec2::new(50.0, 50.0))], 10.0);
    assert!(knot.grab.is_none());
}

#[test]
fn pick_box_is_per_axis_not_circular() {
    let mut knot = diamond_knot();

    // Both axis deltas < 10, but the euclidean distance exceeds 10
    let dx: f64 = 8.0;
    let dy: f64 = 9.0;
    assert!((dx * dx + dy * dy).sqrt() > 10.0);
    let inside_box = knot.nodes[0].x + NVec2::new(dx, dy);
    drain_pointer_events(&mut knot, [PointerEvent::Down(inside_box)], 10.0);
    assert_eq!(knot.grab.map(|g| g.node), Some(0));

    // One axis out of range misses even though the other is dead on
    knot.grab = None;
    let off_axis = knot.nodes[0].x + NVec2::new(0.0, 10.5);
    drain_pointer_events(&mut knot, [PointerEvent::Down(off_axis)], 10.0);
    assert!(knot.grab.is_none());
}

#[test]
fn press_picks_lowest_index_on_tie() {
    let node = Node {
        x: NVec2::new(30.0, 40.0),
        v: NVec2::zeros(),
        origin: NVec2::new(30.0, 40.0),
    };
    let mut knot = Knot {
        nodes: vec![node.clone(), node],
        springs: Vec::new(),
        grab: None,
    };

    drain_pointer_events(&mut knot, [PointerEvent::Down(NVec2::new(31.0, 41.0))], 10.0);
    assert_eq!(knot.grab.map(|g| g.node), Some(0));
}

#[test]
fn drag_pins_node_to_pointer_plus_offset() {
    let mut knot = diamond_knot();
    let press = NVec2::new(95.0, 5.0);
    let offset = knot.nodes[0].x - press;

    drain_pointer_events(
        &mut knot,
        [
            PointerEvent::Down(press),
            PointerEvent::Move(NVec2::new(150.0, 0.0)),
        ],
        10.0,
    );

    assert_eq!(knot.nodes[0].x, NVec2::new(150.0, 0.0) + offset);

    // Dragging assigns position only; velocity is untouched
    assert_eq!(knot.nodes[0].v, NVec2::zeros());
}

#[test]
fn release_is_unconditional() {
    let mut knot = diamond_knot();
    drain_pointer_events(&mut knot, [PointerEvent::Down(NVec2::new(95.0, 5.0))], 10.0);
    assert!(knot.grab.is_some());

    drain_pointer_events(&mut knot, [PointerEvent::Up], 10.0);
    assert!(knot.grab.is_none());

    // Releasing while idle is a no-op
    drain_pointer_events(&mut knot, [PointerEvent::Up], 10.0);
    assert!(knot.grab.is_none());
}

#[test]
fn quit_stops_event_processing() {
    let mut knot = diamond_knot();
    let alive = drain_pointer_events(
        &mut knot,
        [PointerEvent::Quit, PointerEvent::Down(NVec2::new(95.0, 5.0))],
        10.0,
    );
    assert!(!alive);
    assert!(knot.grab.is_none(), "events after Quit must not be applied");
}

// ==================================================================================
// Grab/physics interplay tests
// ==================================================================================

#[test]
fn grabbed_node_position_is_not_integrated() {
    let mut knot = diamond_knot();
    let p = test_params();

    knot.grab = Some(Grab {
        node: 0,
        offset: NVec2::zeros(),
    });
    let x0 = knot.nodes[0].x;

    tick(&mut knot, &p);

    // Held node: position pinned, but springs still kick its velocity
    assert_eq!(knot.nodes[0].x, x0);
    assert!(knot.nodes[0].v.norm() > 0.0);

    // The rest of the ring keeps moving
    for i in 1..4 {
        assert!(knot.nodes[i].v.norm() > 0.0, "node {i} should be moving");
    }
}

#[test]
fn release_resumes_with_held_velocity() {
    // Ring radius chosen so adjacent separation equals the rest length:
    // every spring starts at zero force and nothing moves on its own
    let mut rng = StdRng::seed_from_u64(5);
    let radius = 50.0 / (2.0 * (std::f64::consts::PI / 4.0).sin());
    let mut knot = Knot::ring(4, NVec2::zeros(), radius, 0.0, &mut rng);
    let p = test_params();

    knot.nodes[0].v = NVec2::new(3.0, -2.0);
    knot.grab = Some(Grab {
        node: 0,
        offset: NVec2::zeros(),
    });

    tick(&mut knot, &p);
    // Held at rest geometry: no spring force (up to rounding), no relax
    // pass, velocity kept
    assert!((knot.nodes[0].v - NVec2::new(3.0, -2.0)).norm() < 1e-9);

    knot.grab = None;
    let origin = knot.nodes[0].origin;
    tick(&mut knot, &p);

    // Physics resumes from the velocity the node held while grabbed:
    // restore is zero on the anchor, so v' = damping * v and x' = origin + v'
    let expected_v = 0.9 * NVec2::new(3.0, -2.0);
    assert!((knot.nodes[0].v - expected_v).norm() < 1e-9);
    assert!((knot.nodes[0].x - (origin + expected_v)).norm() < 1e-9);
}
