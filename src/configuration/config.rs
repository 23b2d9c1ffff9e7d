//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! knot scenario. A scenario consists of:
//!
//! - [`KnotConfig`]       – initial knot layout (node count, ring radius, jitter, seed)
//! - [`ParametersConfig`] – force constants and pick radius
//! - [`ScreenConfig`]     – viewer window dimensions
//! - [`DecorConfig`]      – decorative star field and wave overlay settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! knot:
//!   nodes: 20               # point masses in the closed chain
//!   radius: 150.0           # ring radius the nodes start on
//!   jitter: 20.0            # per-axis uniform placement perturbation
//!   seed: 42                # deterministic placement seed
//!
//! parameters:
//!   rest_length: 50.0       # zero-force spring separation
//!   spring_k: 0.1           # structural spring stiffness
//!   restore_k: 0.05         # pull toward each node's origin
//!   damping: 0.9            # per-tick velocity multiplier
//!   repel_radius: 20.0      # pairs closer than this push apart
//!   repel_k: 0.2            # repulsion strength
//!   pick_radius: 10.0       # per-axis pointer pick box half-width
//!
//! screen:
//!   width: 800.0
//!   height: 600.0
//!
//! decor:
//!   stars: 150              # swirl particles in the background
//!   wave_amplitude: 20.0    # sinusoidal overlay height
//!   wave_frequency: 0.1     # sinusoidal overlay frequency along each edge
//!   wave_speed: 0.05        # phase advance per second
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;

/// Initial knot layout.
#[derive(Deserialize, Debug, Clone)]
pub struct KnotConfig {
    pub nodes: usize,  // point masses in the closed chain, >= 2
    pub radius: f64,   // ring radius the nodes are placed on
    pub jitter: f64,   // per-axis uniform perturbation of initial placement
    pub seed: u64,     // deterministic seed to make runs reproducable
}

/// Force constants and the pointer pick radius.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub rest_length: f64,  // zero-force spring separation
    pub spring_k: f64,     // structural spring stiffness
    pub restore_k: f64,    // pull toward each node's origin anchor
    pub damping: f64,      // per-tick velocity multiplier, < 1
    pub repel_radius: f64, // pairs closer than this push apart
    pub repel_k: f64,      // repulsion strength
    pub pick_radius: f64,  // per-axis pick box half-width
}

/// Viewer window dimensions in logical pixels.
#[derive(Deserialize, Debug, Clone)]
pub struct ScreenConfig {
    pub width: f64,
    pub height: f64,
}

/// Decorative layer settings (star field swirl, sinusoidal overlay).
#[derive(Deserialize, Debug, Clone)]
pub struct DecorConfig {
    pub stars: usize,       // swirl particles in the background
    pub wave_amplitude: f64, // sinusoidal overlay height
    pub wave_frequency: f64, // frequency along each edge's sample parameter
    pub wave_speed: f64,     // phase advance per second
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub knot: KnotConfig,             // initial knot layout
    pub parameters: ParametersConfig, // force constants
    pub screen: ScreenConfig,         // window dimensions
    pub decor: DecorConfig,           // decorative layer settings
}
