//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - physical parameters (`Parameters`)
//! - knot state (`Knot` with nodes placed on the jittered ring)
//! - the two active kick sets (`elastic` before position integration,
//!   `contact` after)
//! - screen and decor settings consumed by the viewer
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, integration, and drawing systems

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::forces::{KickSet, Repulsion, SpringChain};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Knot, NVec2};

/// Viewer window extents in simulation units (one unit = one logical pixel,
/// origin at the center).
#[derive(Debug, Clone)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

impl Screen {
    /// Whether `p` lies inside the screen rectangle.
    pub fn contains(&self, p: NVec2) -> bool {
        p.x.abs() <= self.width / 2.0 && p.y.abs() <= self.height / 2.0
    }
}

/// Decorative layer settings (star field swirl, sinusoidal overlay).
#[derive(Debug, Clone)]
pub struct Decor {
    pub stars: usize,
    pub wave_amplitude: f64,
    pub wave_frequency: f64,
    pub wave_speed: f64,
}

/// Bevy resource representing a fully-initialized knot scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the physical parameters, the current knot state, and the two
/// active kick sets, split by where they sit relative to the position
/// update (elastic before, contact after)
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub knot: Knot,
    pub elastic: KickSet,
    pub contact: KickSet,
    pub screen: Screen,
    pub decor: Decor,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            rest_length: p_cfg.rest_length,
            spring_k: p_cfg.spring_k,
            restore_k: p_cfg.restore_k,
            damping: p_cfg.damping,
            repel_radius: p_cfg.repel_radius,
            repel_k: p_cfg.repel_k,
            pick_radius: p_cfg.pick_radius,
        };

        // Knot state: jittered ring centered on the screen origin,
        // placement driven by the configured seed
        let mut rng = StdRng::seed_from_u64(cfg.knot.seed);
        let knot = Knot::ring(
            cfg.knot.nodes,
            NVec2::zeros(),
            cfg.knot.radius,
            cfg.knot.jitter,
            &mut rng,
        );

        // Kicks: springs run before the position update, repulsion after
        let elastic = KickSet::new().with(SpringChain {
            rest_length: parameters.rest_length,
            k: parameters.spring_k,
        });
        let contact = KickSet::new().with(Repulsion {
            radius: parameters.repel_radius,
            k: parameters.repel_k,
        });

        let screen = Screen {
            width: cfg.screen.width,
            height: cfg.screen.height,
        };

        let decor = Decor {
            stars: cfg.decor.stars,
            wave_amplitude: cfg.decor.wave_amplitude,
            wave_frequency: cfg.decor.wave_frequency,
            wave_speed: cfg.decor.wave_speed,
        };

        Self {
            parameters,
            knot,
            elastic,
            contact,
            screen,
            decor,
        }
    }
}
