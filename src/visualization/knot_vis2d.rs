use bevy::app::AppExit;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{CursorMoved, WindowResolution};

use crate::simulation::integrator::knot_integrator;
use crate::simulation::interaction::{drain_pointer_events, PointerEvent};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::decor;

#[derive(Component)]
struct NodeIndex(pub usize);

/// Last known cursor position in world coordinates
#[derive(Resource, Default)]
struct CursorPos(Option<NVec2>);

const NODE_RADIUS: f32 = 6.0;
const TICK_SECONDS: f64 = 0.010;

// Scene palette
const BACKGROUND: Color = Color::rgb(0.0, 0.0, 30.0 / 255.0);
const PINK: Color = Color::rgb(1.0, 105.0 / 255.0, 180.0 / 255.0);
const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
const LIGHT_BLUE: Color = Color::rgb(173.0 / 255.0, 216.0 / 255.0, 230.0 / 255.0);
const ORANGE: Color = Color::rgb(1.0, 165.0 / 255.0, 0.0);

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} nodes",
        scenario.knot.nodes.len()
    );

    let resolution =
        WindowResolution::new(scenario.screen.width as f32, scenario.screen.height as f32);

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(BACKGROUND))
        // Physics runs on the fixed schedule at the nominal tick length
        .insert_resource(Time::<Fixed>::from_seconds(TICK_SECONDS))
        .init_resource::<CursorPos>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Interactive Knot".into(),
                resolution,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_scene_system)
        .add_systems(
            Update,
            (
                pointer_input_system,
                decor::galaxy_swirl_system,
                decor::draw_wave_lines_system,
                draw_springs_system,
                sync_node_transforms_system,
            ),
        )
        .add_systems(FixedUpdate, physics_step_system)
        .run();
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // Background star field, behind everything
    decor::spawn_stars(&mut commands, &mut meshes, &mut materials, scenario.decor.stars);

    // Per-spring random phases for the sinusoidal overlay
    commands.insert_resource(decor::wave_phases(scenario.knot.springs.len()));

    // Node markers: fixed-radius white circles, one per node
    let mesh = Mesh2dHandle(meshes.add(Circle::new(NODE_RADIUS)));
    let material = materials.add(ColorMaterial::from(Color::WHITE));

    for (i, node) in scenario.knot.nodes.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: mesh.clone(),
                material: material.clone(),
                transform: Transform::from_xyz(node.x.x as f32, node.x.y as f32, 2.0),
                ..Default::default()
            },
            NodeIndex(i),
        ));
    }
}

/// Collect this frame's pointer events in arrival order and apply them to
/// the knot. Escape (or window close via Bevy) quits; left button grabs,
/// drags, and releases nodes.
fn pointer_input_system(
    mut scenario: ResMut<Scenario>,
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut cursor: ResMut<CursorPos>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut exit: EventWriter<AppExit>,
) {
    let Ok((camera, camera_transform)) = camera.get_single() else {
        return;
    };

    let mut events = Vec::new();

    if keys.just_pressed(KeyCode::Escape) {
        events.push(PointerEvent::Quit);
    }

    // CursorMoved carries window coordinates; map them into the world
    for moved in cursor_moved.read() {
        if let Some(world) = camera.viewport_to_world_2d(camera_transform, moved.position) {
            let p = NVec2::new(world.x as f64, world.y as f64);
            cursor.0 = Some(p);
            events.push(PointerEvent::Move(p));
        }
    }

    if let Some(p) = cursor.0 {
        if buttons.just_pressed(MouseButton::Left) {
            events.push(PointerEvent::Down(p));
        }
    }
    if buttons.just_released(MouseButton::Left) {
        events.push(PointerEvent::Up);
    }

    let pick_radius = scenario.parameters.pick_radius;
    if !drain_pointer_events(&mut scenario.knot, events, pick_radius) {
        exit.send(AppExit);
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        knot,
        elastic,
        contact,
        parameters,
        ..
    } = &mut *scenario;

    knot_integrator(knot, elastic, contact, parameters);
}

/// Draw the structural spring edges, colored by current length relative to
/// the rest length (shorter edges warm, stretched edges cool-to-orange).
fn draw_springs_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let rest = scenario.parameters.rest_length;

    for spring in &scenario.knot.springs {
        let a = scenario.knot.nodes[spring.i].x;
        let b = scenario.knot.nodes[spring.j].x;
        let dist = (b - a).norm();

        let color = if dist < rest {
            PINK
        } else if dist < 2.0 * rest {
            YELLOW
        } else if dist < 3.0 * rest {
            LIGHT_BLUE
        } else {
            ORANGE
        };

        gizmos.line_2d(
            Vec2::new(a.x as f32, a.y as f32),
            Vec2::new(b.x as f32, b.y as f32),
            color,
        );
    }
}

fn sync_node_transforms_system(
    scenario: Res<Scenario>,
    mut query: Query<(&NodeIndex, &mut Transform)>,
) {
    for (NodeIndex(i), mut transform) in &mut query {
        if let Some(node) = scenario.knot.nodes.get(*i) {
            transform.translation.x = node.x.x as f32;
            transform.translation.y = node.x.y as f32;
        }
    }
}
