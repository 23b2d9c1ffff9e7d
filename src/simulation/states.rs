//! Core state types for the knot simulation.
//!
//! Defines the per-node kinematic record (`Node`), the structural spring
//! edge (`Spring`), the pointer grab record (`Grab`), and the aggregate
//! simulation state (`Knot`) that owns all of them.

use nalgebra::Vector2;
use rand::Rng;

pub type NVec2 = Vector2<f64>;

/// One point mass in the closed chain.
#[derive(Debug, Clone)]
pub struct Node {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub origin: NVec2, // rest anchor, fixed after construction
}

/// Structural spring between two nodes, stored as indices into
/// `Knot::nodes` rather than references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spring {
    pub i: usize,
    pub j: usize,
}

/// An active pointer grab: which node and the press-time offset
/// (node position minus pointer position).
#[derive(Debug, Clone, Copy)]
pub struct Grab {
    pub node: usize,
    pub offset: NVec2,
}

/// Aggregate simulation state: all nodes, the ring of springs, and the
/// current grab (at most one).
#[derive(Debug, Clone)]
pub struct Knot {
    pub nodes: Vec<Node>,
    pub springs: Vec<Spring>,
    pub grab: Option<Grab>,
}

impl Knot {
    /// Place `count` nodes evenly around a circle of `radius` centered at
    /// `center`, each perturbed by independent uniform jitter in both axes.
    /// Every node's `origin` is its perturbed position, so the restoring
    /// force pulls back toward the randomized layout, not the ideal polygon.
    ///
    /// Springs connect each node to its successor, wrapping at the end:
    /// exactly `count` edges forming a single cycle. `count >= 2` assumed.
    pub fn ring(count: usize, center: NVec2, radius: f64, jitter: f64, rng: &mut impl Rng) -> Self {
        let mut nodes = Vec::with_capacity(count);

        for i in 0..count {
            let angle = i as f64 * (2.0 * std::f64::consts::PI / count as f64);
            let mut x = center + radius * NVec2::new(angle.cos(), angle.sin());
            if jitter > 0.0 {
                x.x += rng.gen_range(-jitter..jitter);
                x.y += rng.gen_range(-jitter..jitter);
            }
            nodes.push(Node {
                x,
                v: NVec2::zeros(),
                origin: x,
            });
        }

        let springs = (0..count)
            .map(|i| Spring {
                i,
                j: (i + 1) % count,
            })
            .collect();

        Self {
            nodes,
            springs,
            grab: None,
        }
    }

    /// Whether node `i` is currently held by the pointer.
    pub fn is_grabbed(&self, i: usize) -> bool {
        self.grab.map_or(false, |g| g.node == i)
    }
}
