use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, CollisionGroups, Group};

use crate::components::{PlayerAvatar, COLLISION_GROUP_PLAYER, COLLISION_GROUP_WORLD};
use crate::resources::SceneSettings;
use crate::systems::orbit_camera_system::OrbitCamera;
use crate::systems::spawn_object_system::{spawn_cube, spawn_plane};

/// Side length of the scene parcel, in world units.
const PARCEL_SIZE: f32 = 16.0;

/// Player spawn point within the parcel.
const AVATAR_SPAWN: Vec3 = Vec3::new(8.0, 1.0, 8.0);

/// System that assembles the initial scene: ground, light, the player
/// avatar, the orbit camera, and the configured initial objects.
pub fn scene_setup_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene_settings: Res<SceneSettings>,
) {
    // Ground
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(PARCEL_SIZE, PARCEL_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.5, 0.3),
            perceptual_roughness: 0.9,
            ..Default::default()
        })),
        Transform::from_xyz(PARCEL_SIZE / 2.0, 0.0, PARCEL_SIZE / 2.0),
        Collider::cuboid(PARCEL_SIZE / 2.0, 0.01, PARCEL_SIZE / 2.0),
        CollisionGroups::new(COLLISION_GROUP_WORLD, Group::all()),
    ));

    // Sun
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..Default::default()
        },
        Transform::from_xyz(8.0, 12.0, 4.0).looking_at(Vec3::new(8.0, 0.0, 8.0), Vec3::Y),
    ));

    // Player avatar
    let avatar = commands
        .spawn((
            PlayerAvatar,
            Mesh3d(meshes.add(Capsule3d::new(0.35, 1.1))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.8, 0.7, 0.6),
                ..Default::default()
            })),
            Transform::from_translation(AVATAR_SPAWN),
            Collider::capsule_y(0.55, 0.35),
            CollisionGroups::new(COLLISION_GROUP_PLAYER, Group::all()),
        ))
        .id();

    // Camera following the avatar
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(8.0, 4.0, 16.0).looking_at(AVATAR_SPAWN, Vec3::Y),
        OrbitCamera::new(avatar, Vec3::new(0.0, 1.6, 0.0), 6.0),
    ));

    // Initial objects
    for position in scene_settings.initial_cubes.iter() {
        spawn_cube(&mut commands, &mut meshes, &mut materials, *position, true);
    }
    spawn_plane(
        &mut commands,
        &mut materials,
        scene_settings.plane_position,
        scene_settings.plane_rotation,
        true,
    );

    info!(
        "Scene initialised with {} spawner cube(s)",
        scene_settings.initial_cubes.len()
    );
}
