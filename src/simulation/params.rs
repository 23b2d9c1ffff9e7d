//! Physical parameters for the knot simulation.
//!
//! `Parameters` holds the force constants used each tick:
//! - structural spring rest length and stiffness,
//! - origin-restoring stiffness and velocity damping,
//! - short-range repulsion radius and strength,
//! - pointer pick radius (per axis)

#[derive(Debug, Clone)]
pub struct Parameters {
    pub rest_length: f64, // spring force is zero at this separation
    pub spring_k: f64, // structural spring stiffness
    pub restore_k: f64, // pull toward each node's origin anchor
    pub damping: f64, // per-tick velocity multiplier, < 1
    pub repel_radius: f64, // pairs closer than this push apart
    pub repel_k: f64, // repulsion strength
    pub pick_radius: f64, // per-axis box half-width for pointer picking
}
