//! Decorative background layers: the swirling star field and the
//! sinusoidal overlay curves between adjacent knot nodes.
//!
//! Both layers read node positions and screen bounds only; nothing here
//! feeds back into the physics.

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use rand::Rng;
use std::f64::consts::TAU;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

const STAR_RADIUS: f32 = 2.0;
const STAR_DRIFT: f64 = 0.2; // outward radius growth per frame
const WAVE_SAMPLES: usize = 100; // segments per overlay curve

const LIGHT_BLUE: Color = Color::rgb(173.0 / 255.0, 216.0 / 255.0, 230.0 / 255.0);
const PURPLE: Color = Color::rgb(128.0 / 255.0, 0.0, 128.0 / 255.0);

/// One swirl particle, tracked in polar coordinates around the screen center.
#[derive(Component)]
pub struct Star {
    angle: f64,
    radius: f64,
    speed: f64,
}

/// Per-spring random phase offsets for the sinusoidal overlay.
#[derive(Resource)]
pub struct WavePhases(Vec<f64>);

pub fn wave_phases(count: usize) -> WavePhases {
    let mut rng = rand::thread_rng();
    WavePhases((0..count).map(|_| rng.gen_range(0.0..TAU)).collect())
}

pub fn spawn_stars(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    count: usize,
) {
    let mut rng = rand::thread_rng();
    let mesh = Mesh2dHandle(meshes.add(Circle::new(STAR_RADIUS)));
    let material = materials.add(ColorMaterial::from(LIGHT_BLUE));

    for _ in 0..count {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: mesh.clone(),
                material: material.clone(),
                transform: Transform::from_xyz(0.0, 0.0, 0.0),
                ..Default::default()
            },
            Star {
                angle: rng.gen_range(0.0..TAU),
                radius: rng.gen_range(50.0..250.0),
                speed: rng.gen_range(0.01..0.05),
            },
        ));
    }
}

/// Advance every star along its spiral: the angle rotates at the star's
/// own speed while the radius drifts outward. Stars leaving the screen are
/// recycled with fresh random polar coordinates.
pub fn galaxy_swirl_system(
    scenario: Res<Scenario>,
    mut stars: Query<(&mut Star, &mut Transform)>,
) {
    let mut rng = rand::thread_rng();

    for (mut star, mut transform) in &mut stars {
        star.angle += star.speed;
        star.radius += STAR_DRIFT;

        let mut p = NVec2::new(
            star.radius * star.angle.cos(),
            star.radius * star.angle.sin(),
        );
        if !scenario.screen.contains(p) {
            star.radius = rng.gen_range(50.0..250.0);
            star.angle = rng.gen_range(0.0..TAU);
            p = NVec2::new(
                star.radius * star.angle.cos(),
                star.radius * star.angle.sin(),
            );
        }

        transform.translation.x = p.x as f32;
        transform.translation.y = p.y as f32;
    }
}

/// Draw one sinusoidal curve per spring: a straight interpolation between
/// the two endpoint nodes with a sine perturbation on y, phase-shifted per
/// curve and slowly advancing over time.
pub fn draw_wave_lines_system(
    scenario: Res<Scenario>,
    phases: Res<WavePhases>,
    time: Res<Time>,
    mut gizmos: Gizmos,
) {
    let decor = &scenario.decor;
    let drift = decor.wave_speed * time.elapsed_seconds_f64();

    for (spring, phase) in scenario.knot.springs.iter().zip(phases.0.iter()) {
        let a = scenario.knot.nodes[spring.i].x;
        let b = scenario.knot.nodes[spring.j].x;

        let points = (0..=WAVE_SAMPLES).map(|s| {
            let t = s as f64;
            let mut p = a + (b - a) * (t / WAVE_SAMPLES as f64);
            p.y += decor.wave_amplitude * (decor.wave_frequency * t + phase + drift).sin();
            Vec2::new(p.x as f32, p.y as f32)
        });

        gizmos.linestrip_2d(points, PURPLE);
    }
}
