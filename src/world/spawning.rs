//! Demo scene setup - floor, obstacles, and pickup props.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::interaction::Interactable;
use crate::inventory::{InventoryConfig, ItemIcon};
use crate::player::{spawn_player, PlayerConfig};

/// Marker for scene geometry and props, for cleanup on state exit.
#[derive(Component)]
pub struct SceneObject;

/// Build the sandbox scene and spawn the player in it.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    player_config: Res<PlayerConfig>,
    inventory_config: Res<InventoryConfig>,
) {
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.35, 0.38),
        perceptual_roughness: 0.9,
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.5, 0.45, 0.4),
        ..default()
    });

    // Floor
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(40.0, 0.5, 40.0))),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, -0.25, 0.0),
        Collider::cuboid(20.0, 0.25, 20.0),
        SceneObject,
    ));

    // A low overhang the player has to crouch under (and can't stand
    // up beneath - exercises the clearance probe)
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(4.0, 0.3, 4.0))),
        MeshMaterial3d(wall_material.clone()),
        Transform::from_xyz(6.0, 1.35, 0.0),
        Collider::cuboid(2.0, 0.15, 2.0),
        SceneObject,
    ));

    // A crate to jump onto
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(2.0, 1.0, 2.0))),
        MeshMaterial3d(wall_material),
        Transform::from_xyz(-5.0, 0.5, -3.0),
        Collider::cuboid(1.0, 0.5, 1.0),
        SceneObject,
    ));

    // Pickup props scattered around the spawn point
    let props = [
        ("wrench", Color::srgb(0.8, 0.3, 0.2), Vec3::new(2.0, 0.6, -2.0)),
        ("crowbar", Color::srgb(0.2, 0.4, 0.8), Vec3::new(-2.0, 0.6, -3.0)),
        ("lamp", Color::srgb(0.9, 0.8, 0.3), Vec3::new(0.0, 0.6, -4.0)),
        ("canister", Color::srgb(0.3, 0.7, 0.4), Vec3::new(3.0, 0.6, -5.0)),
    ];
    for (name, color, position) in props {
        spawn_prop(&mut commands, &mut meshes, &mut materials, name, color, position);
    }

    // Light
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
        SceneObject,
    ));

    spawn_player(
        &mut commands,
        Vec3::new(0.0, 1.0, 0.0),
        &player_config,
        &inventory_config,
    );

    info!("Scene built: {} pickup props", props.len());
}

/// Spawn a single pickup prop: a small dynamic box tagged interactable.
fn spawn_prop(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    name: &str,
    color: Color,
    position: Vec3,
) {
    commands.spawn((
        Interactable,
        ItemIcon(name.to_string()),
        Mesh3d(meshes.add(Cuboid::new(0.3, 0.2, 0.5))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color,
            ..default()
        })),
        Transform::from_translation(position),
        RigidBody::Dynamic,
        Collider::cuboid(0.15, 0.1, 0.25),
        SceneObject,
    ));
}

/// Tear the scene down when gameplay ends.
pub fn cleanup_scene(
    mut commands: Commands,
    scene_query: Query<Entity, With<SceneObject>>,
    player_query: Query<Entity, With<crate::player::Player>>,
) {
    for entity in scene_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in player_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
