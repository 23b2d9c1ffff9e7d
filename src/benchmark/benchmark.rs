use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::forces::{Kick, KickSet, Repulsion, SpringChain};
use crate::simulation::integrator::knot_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Knot, NVec2};

fn bench_params() -> Parameters {
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

/// Deterministic knot for benchmarking: jitter-free ring, seeded rng
fn bench_knot(n: usize) -> Knot {
    let mut rng = StdRng::seed_from_u64(42);
    Knot::ring(n, NVec2::zeros(), 150.0, 0.0, &mut rng)
}

/// Time one pass of each kick term across growing node counts.
/// The spring chain is O(N); the all-pairs repulsion is O(N^2) and
/// dominates for large rings.
pub fn bench_kicks() {
    let ns = [20, 40, 80, 160, 320, 640, 1280];

    for n in ns {
        let knot = bench_knot(n);
        let p = bench_params();

        let springs = SpringChain {
            rest_length: p.rest_length,
            k: p.spring_k,
        };
        let repulsion = Repulsion {
            radius: p.repel_radius,
            k: p.repel_k,
        };

        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        springs.kick(&knot, &mut out);
        repulsion.kick(&knot, &mut out);

        // Time springs
        let t0 = Instant::now();
        springs.kick(&knot, &mut out);
        let dt_springs = t0.elapsed().as_secs_f64();

        // Time repulsion
        let t1 = Instant::now();
        repulsion.kick(&knot, &mut out);
        let dt_repel = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, springs = {:10.8} s, repulsion = {:10.8} s",
            dt_springs, dt_repel
        );
    }
}

/// Time full integrator ticks across growing node counts.
pub fn bench_step() {
    let ns = [20, 40, 80, 160, 320, 640];
    let ticks = 1000;

    for n in ns {
        let mut knot = bench_knot(n);
        let p = bench_params();

        let elastic = KickSet::new().with(SpringChain {
            rest_length: p.rest_length,
            k: p.spring_k,
        });
        let contact = KickSet::new().with(Repulsion {
            radius: p.repel_radius,
            k: p.repel_k,
        });

        let t0 = Instant::now();
        for _ in 0..ticks {
            knot_integrator(&mut knot, &elastic, &contact, &p);
        }
        let per_tick = t0.elapsed().as_secs_f64() / ticks as f64;

        println!("N = {n:5}, {per_tick:10.8} s/tick over {ticks} ticks");
    }
}
