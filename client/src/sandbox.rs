//! Flat test world hosting the water placer outside of a real game.

use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use shared::{LiquidEvent, LiquidIndex, LiquidRegistry, LiquidTemplate, WATER_TEMPLATE_IDENTIFIER};
use waterplacer::{Terrain, ToolCamera};

pub const DEFAULT_TERRAIN_RADIUS: i32 = 24;

const WATER_TEMPLATE_ID: u64 = 1;
const MOVE_SPEED: f32 = 8.0;
const MOVE_SPEED_BOOST: f32 = 4.0;
const LOOK_SENSITIVITY: f32 = 0.003;

#[derive(Resource, Debug, Clone, Copy)]
pub struct SandboxSettings {
    pub terrain_radius: i32,
}

#[derive(Resource)]
struct WaterAssets {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

/// Cells that already show a water cube.
#[derive(Resource, Default)]
struct PlacedWater(HashSet<IVec3>);

#[derive(Component, Default)]
struct FlyCamera {
    yaw: f32,
    pitch: f32,
}

pub fn sandbox_plugin(app: &mut App) {
    app.init_resource::<PlacedWater>()
        .add_systems(
            Startup,
            (register_liquids, setup_world, setup_water_assets),
        )
        .add_systems(Update, (move_camera, rotate_camera, show_liquid_events));
}

fn register_liquids(mut liquids: ResMut<LiquidRegistry>) {
    liquids.register_template(LiquidTemplate {
        id: WATER_TEMPLATE_ID,
        identifier: WATER_TEMPLATE_IDENTIFIER.to_string(),
        name: "Water".to_string(),
    });
    liquids.assign_index(LiquidIndex(0), WATER_TEMPLATE_ID);
}

fn setup_world(
    mut commands: Commands,
    settings: Res<SandboxSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let radius = settings.terrain_radius.max(1);
    let width = (radius * 2 + 1) as f32;
    let ground = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.55, 0.3),
        perceptual_roughness: 1.0,
        ..default()
    });
    let stone = materials.add(StandardMaterial {
        base_color: Color::srgb(0.5, 0.5, 0.52),
        perceptual_roughness: 1.0,
        ..default()
    });

    // Ground layer occupies cells y = 0
    commands.spawn((
        Terrain,
        Mesh3d(meshes.add(Cuboid::new(width, 1.0, width))),
        MeshMaterial3d(ground),
        Transform::from_xyz(0.5, 0.5, 0.5),
    ));

    // A basin wall to flood into
    let cube = meshes.add(Cuboid::from_length(1.0));
    for i in -4..=4 {
        for cell in [
            IVec3::new(i, 1, -4),
            IVec3::new(i, 1, 4),
            IVec3::new(-4, 1, i),
            IVec3::new(4, 1, i),
        ] {
            commands.spawn((
                Terrain,
                Mesh3d(cube.clone()),
                MeshMaterial3d(stone.clone()),
                Transform::from_translation(cell.as_vec3() + Vec3::splat(0.5)),
            ));
        }
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 20.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let camera_transform = Transform::from_xyz(-10.0, 8.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y);
    let (yaw, pitch, _) = camera_transform.rotation.to_euler(EulerRot::YXZ);
    commands.spawn((
        Camera3d::default(),
        ToolCamera,
        FlyCamera { yaw, pitch },
        camera_transform,
    ));
}

fn setup_water_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(WaterAssets {
        mesh: meshes.add(Cuboid::from_length(1.0)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgba(0.2, 0.45, 0.9, 0.6),
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
    });
}

fn move_camera(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut camera: Query<&mut Transform, With<FlyCamera>>,
) {
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    let mut input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        input.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        input.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        input.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::Space) {
        input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::ControlLeft) {
        input.y -= 1.0;
    }
    if input == Vec3::ZERO {
        return;
    }

    let speed = if keyboard.pressed(KeyCode::ShiftLeft) {
        MOVE_SPEED * MOVE_SPEED_BOOST
    } else {
        MOVE_SPEED
    };

    let forward = transform.forward().with_y(0.0).normalize_or_zero();
    let right = transform.right().with_y(0.0).normalize_or_zero();
    let direction = forward * input.z + right * input.x + Vec3::Y * input.y;
    transform.translation += direction.normalize_or_zero() * speed * time.delta_secs();
}

/// Looks around while the middle mouse button is held; left and right stay
/// free for the tool actions.
fn rotate_camera(
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    mut camera: Query<(&mut Transform, &mut FlyCamera)>,
) {
    if !mouse.pressed(MouseButton::Middle) || motion.delta == Vec2::ZERO {
        return;
    }
    let Ok((mut transform, mut fly)) = camera.single_mut() else {
        return;
    };

    fly.yaw -= motion.delta.x * LOOK_SENSITIVITY;
    fly.pitch = (fly.pitch - motion.delta.y * LOOK_SENSITIVITY).clamp(-FRAC_PI_2 + 0.01, FRAC_PI_2 - 0.01);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, fly.yaw, fly.pitch, 0.0);
}

/// Stands in for the game's liquid simulation: set-cell events show a water
/// cube, flood fills are only logged.
fn show_liquid_events(
    mut commands: Commands,
    mut events: EventReader<LiquidEvent>,
    mut placed: ResMut<PlacedWater>,
    assets: Option<Res<WaterAssets>>,
) {
    let Some(assets) = assets else {
        return;
    };

    for event in events.read() {
        match *event {
            LiquidEvent::SetCell { cell, liquid, amount } => {
                if !placed.0.insert(cell) {
                    continue;
                }
                debug!("Liquid {} ({}) set at {:?}", liquid, amount, cell);
                commands.spawn((
                    Mesh3d(assets.mesh.clone()),
                    MeshMaterial3d(assets.material.clone()),
                    Transform::from_translation(cell.as_vec3() + Vec3::splat(0.5)),
                ));
            }
            LiquidEvent::FloodFill { cell, liquid, .. } => {
                info!("Flood fill of liquid {} requested at {:?}", liquid, cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_set_cell_spawns_one_cube() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<LiquidEvent>()
            .init_resource::<PlacedWater>()
            .insert_resource(WaterAssets {
                mesh: Handle::default(),
                material: Handle::default(),
            })
            .add_systems(Update, show_liquid_events);

        let cell = IVec3::new(1, 1, 1);
        app.world_mut()
            .send_event(LiquidEvent::set_cell(cell, LiquidIndex(0)));
        app.world_mut()
            .send_event(LiquidEvent::set_cell(cell, LiquidIndex(0)));
        app.world_mut()
            .send_event(LiquidEvent::flood_fill(IVec3::ZERO, LiquidIndex(0)));
        app.update();

        let mut cubes = app.world_mut().query::<&Mesh3d>();
        assert_eq!(cubes.iter(app.world()).count(), 1);
        assert!(app.world().resource::<PlacedWater>().0.contains(&cell));
    }
}
