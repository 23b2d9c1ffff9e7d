//! Force contributors for the knot integrator
//!
//! The model applies force increments directly to velocities (unit mass,
//! unit timestep), so contributors are "kicks": each term accumulates a
//! velocity increment per node into a shared buffer

use crate::simulation::states::{Knot, NVec2};

/// Collection of velocity-kick terms.
/// Each term implements [`Kick`] and their contributions are summed
/// into a single velocity increment per node
pub struct KickSet {
    terms: Vec<Box<dyn Kick + Send + Sync>>,
}

impl KickSet {
    /// Create an empty kick set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a kick term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Kick + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total velocity increments for all nodes in `knot`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_kicks(&self, knot: &Knot, out: &mut [NVec2]) {
        // Zero buffer
        for k in out.iter_mut() {
            *k = NVec2::zeros();
        }
        // Iterate over all kick contributors
        for term in &self.terms {
            term.kick(knot, out);
        }
    }
}

/// Trait for velocity-kick sources operating on [`Knot`]
/// Implementations add their contribution into `out[i]` for each node
pub trait Kick {
    fn kick(&self, knot: &Knot, out: &mut [NVec2]);
}

/// Structural spring chain over the knot's edge ring
///
/// Hooke force about `rest_length`, applied equal-and-opposite to the two
/// endpoints of every spring. A coincident pair (zero separation) has no
/// defined direction and contributes nothing.
pub struct SpringChain {
    pub rest_length: f64,
    pub k: f64,
}

impl Kick for SpringChain {
    fn kick(&self, knot: &Knot, out: &mut [NVec2]) {
        for spring in &knot.springs {
            let ni = &knot.nodes[spring.i];
            let nj = &knot.nodes[spring.j];

            // d points from i to j; positive stretch pulls i along +d
            let d = nj.x - ni.x;
            let dist = d.norm();
            if dist == 0.0 {
                continue;
            }

            // Hooke's law about the rest length:
            // f = (dist - rest) * k, along the unit separation vector
            let f = (dist - self.rest_length) * self.k * (d / dist);

            // Equal and opposite on the two endpoints
            out[spring.i] += f;
            out[spring.j] -= f;
        }
    }
}

/// All-pairs short-range repulsion
///
/// Every ordered pair (i, j), i != j, closer than `radius` pushes both
/// nodes apart. Ordered iteration visits each unordered pair twice, so the
/// effective impulse per pair is doubled; `k` is tuned with this in mind.
pub struct Repulsion {
    pub radius: f64,
    pub k: f64,
}

impl Kick for Repulsion {
    fn kick(&self, knot: &Knot, out: &mut [NVec2]) {
        let n = knot.nodes.len();
        for i in 0..n {
            let xi = knot.nodes[i].x;

            for j in 0..n {
                if i == j {
                    continue;
                }

                let d = knot.nodes[j].x - xi;
                let dist = d.norm();

                // Only close pairs interact; dist == 0 has no direction
                if dist <= 0.0 || dist >= self.radius {
                    continue;
                }

                let f = (self.radius - dist) * self.k * (d / dist);

                // Push i away from j and j away from i
                out[i] -= f;
                out[j] += f;
            }
        }
    }
}
