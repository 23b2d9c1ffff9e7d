pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Grab, Knot, NVec2, Node, Spring};
pub use simulation::params::Parameters;
pub use simulation::forces::{Kick, KickSet, Repulsion, SpringChain};
pub use simulation::integrator::knot_integrator;
pub use simulation::interaction::{drain_pointer_events, PointerEvent};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    DecorConfig, KnotConfig, ParametersConfig, ScenarioConfig, ScreenConfig,
};

pub use visualization::knot_vis2d::run_2d;

pub use benchmark::benchmark::{bench_kicks, bench_step};
