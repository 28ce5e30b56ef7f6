use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, CollisionGroups, Group};

use crate::components::{
    AvatarAnchor, FlightPlatform, PlayerAvatar, COLLISION_GROUP_PLATFORM,
};
use crate::resources::{FlightSettings, FlightState};
use crate::systems::OrbitCamera;

/// System that applies the per-tick vertical flight offset to the platform.
/// Active (via run condition) only while flight mode is registered.
///
/// Reads the avatar and camera transforms, lazily creates the carrier
/// platform on the first tick, converts the camera rotation to Euler angles,
/// confines the derived forward vector to its horizontal yaw component, and
/// applies the resulting offset's vertical component to the platform. The
/// offset's horizontal components are computed but not applied: the anchor
/// keeps the platform under the avatar, and camera heading only influences
/// the climb term.
pub fn flight_movement_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut flight_state: ResMut<FlightState>,
    flight_settings: Res<FlightSettings>,
    camera_query: Query<&Transform, With<OrbitCamera>>,
    avatar_query: Query<(Entity, &Transform), (With<PlayerAvatar>, Without<FlightPlatform>)>,
    mut platform_query: Query<
        &mut Transform,
        (With<FlightPlatform>, Without<PlayerAvatar>, Without<OrbitCamera>),
    >,
) {
    let Ok((avatar_entity, avatar_transform)) = avatar_query.single() else {
        return;
    };

    if flight_state.flying {
        if flight_state.platform.is_none() {
            let platform = spawn_platform(
                &mut commands,
                &mut meshes,
                &mut materials,
                avatar_entity,
                avatar_transform.translation,
                &flight_settings,
            );
            flight_state.platform = Some(platform);
            info!("Created flight platform {:?}", platform);
        }

        let Ok(camera_transform) = camera_query.single() else {
            return;
        };

        let camera_euler = quaternion_to_euler(camera_transform.rotation);
        let camera_forward = horizontal_camera_forward(camera_euler);
        let offset = camera_forward * flight_settings.vertical_speed;

        if !flight_state.hovering {
            if let Some(platform) = flight_state.platform {
                if let Ok(mut platform_transform) = platform_query.get_mut(platform) {
                    let lifted = lifted_position(avatar_transform.translation, offset);
                    platform_transform.translation = lifted;
                }
            }
        }
    } else if let Some(platform) = flight_state.platform.take() {
        commands.entity(platform).despawn();
        info!("Exited fly mode");
    }
}

/// Spawns the invisible carrier platform attached to the avatar's position
/// anchor.
fn spawn_platform(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    avatar: Entity,
    position: Vec3,
    settings: &FlightSettings,
) -> Entity {
    commands
        .spawn((
            FlightPlatform,
            AvatarAnchor { avatar },
            Transform {
                translation: position,
                rotation: Quat::IDENTITY,
                scale: settings.platform_scale,
            },
            Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
            MeshMaterial3d(materials.add(StandardMaterial::default())),
            Collider::cuboid(0.5, 0.5, 0.5),
            CollisionGroups::new(COLLISION_GROUP_PLATFORM, Group::all()),
            Visibility::Hidden,
        ))
        .id()
}

/// Converts a rotation quaternion to Euler angles with the standard
/// atan2/asin decomposition.
pub fn quaternion_to_euler(quaternion: Quat) -> Vec3 {
    let x = (2.0 * (quaternion.w * quaternion.x + quaternion.y * quaternion.z)).atan2(
        1.0 - 2.0 * (quaternion.x * quaternion.x + quaternion.y * quaternion.y),
    );
    let y = (2.0 * (quaternion.w * quaternion.y - quaternion.z * quaternion.x))
        .clamp(-1.0, 1.0)
        .asin();
    let z = (2.0 * (quaternion.w * quaternion.z + quaternion.x * quaternion.y)).atan2(
        1.0 - 2.0 * (quaternion.y * quaternion.y + quaternion.z * quaternion.z),
    );
    Vec3::new(x, y, z)
}

/// Camera forward direction confined to the horizontal-plane yaw component.
pub fn horizontal_camera_forward(camera_euler: Vec3) -> Vec3 {
    Vec3::new(camera_euler.y.sin(), 0.0, camera_euler.y.cos())
}

/// Candidate new position for the carrier: only the offset's vertical
/// component is applied.
pub fn lifted_position(position: Vec3, offset: Vec3) -> Vec3 {
    Vec3::new(position.x, position.y + offset.y, position.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{AvatarEmoteEvent, FlightToggleEvent, HoverToggleEvent};
    use crate::resources::vertical_movement_registered;
    use crate::systems::{avatar_emote_system, flight_toggle_system};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_quaternion_to_euler_identity() {
        let euler = quaternion_to_euler(Quat::IDENTITY);
        assert!(euler.length() < EPSILON);
    }

    #[test]
    fn test_quaternion_to_euler_yaw() {
        let euler = quaternion_to_euler(Quat::from_rotation_y(0.5));
        assert!((euler.y - 0.5).abs() < EPSILON);
        assert!(euler.x.abs() < EPSILON);
        assert!(euler.z.abs() < EPSILON);
    }

    #[test]
    fn test_quaternion_to_euler_pitch() {
        let euler = quaternion_to_euler(Quat::from_rotation_x(0.3));
        assert!((euler.x - 0.3).abs() < EPSILON);
    }

    #[test]
    fn test_horizontal_camera_forward_has_no_vertical_component() {
        for yaw in [0.0, 0.5, 1.0, 2.0, -1.5] {
            let forward = horizontal_camera_forward(Vec3::new(0.2, yaw, 0.1));
            assert_eq!(forward.y, 0.0);
            assert!((forward.length() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_horizontal_camera_forward_tracks_yaw() {
        let forward = horizontal_camera_forward(Vec3::ZERO);
        assert!(forward.abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), EPSILON));

        let forward = horizontal_camera_forward(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
        assert!(forward.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), EPSILON));
    }

    #[test]
    fn test_lifted_position_discards_horizontal_offset() {
        let position = Vec3::new(8.0, 2.0, 8.0);
        let offset = Vec3::new(0.4, 0.1, -0.3);
        let lifted = lifted_position(position, offset);
        assert_eq!(lifted, Vec3::new(8.0, 2.1, 8.0));
    }

    fn test_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(Assets::<Mesh>::default());
        app.insert_resource(Assets::<StandardMaterial>::default());
        app.init_resource::<FlightState>();
        app.init_resource::<FlightSettings>();
        app.add_message::<FlightToggleEvent>();
        app.add_message::<HoverToggleEvent>();
        app.add_message::<AvatarEmoteEvent>();
        app.add_systems(
            Update,
            (
                flight_toggle_system,
                flight_movement_system
                    .run_if(vertical_movement_registered)
                    .after(flight_toggle_system),
                avatar_emote_system.after(flight_toggle_system),
            ),
        );

        let avatar = app
            .world_mut()
            .spawn((PlayerAvatar, Transform::from_xyz(8.0, 1.0, 8.0)))
            .id();
        app.world_mut().spawn((
            OrbitCamera::new(avatar, Vec3::new(0.0, 1.6, 0.0), 6.0),
            Transform::default(),
        ));

        (app, avatar)
    }

    #[test]
    fn test_identity_camera_rotation_applies_no_climb() {
        let (mut app, avatar) = test_app();

        app.world_mut().send_event(FlightToggleEvent);
        app.update();
        app.update();
        app.update();

        let avatar_y = app.world().get::<Transform>(avatar).unwrap().translation.y;
        let platform = app.world().resource::<FlightState>().platform.unwrap();
        let platform_transform = app.world().get::<Transform>(platform).unwrap();

        // Identity camera rotation gives a forward vector with no vertical
        // component, so the applied offset is zero.
        assert_eq!(platform_transform.translation.y, avatar_y);
        assert_eq!(
            platform_transform.scale,
            FlightSettings::default().platform_scale
        );
    }

    #[test]
    fn test_platform_follows_avatar_horizontally() {
        let (mut app, avatar) = test_app();

        app.world_mut().send_event(FlightToggleEvent);
        app.update();

        app.world_mut()
            .get_mut::<Transform>(avatar)
            .unwrap()
            .translation = Vec3::new(3.0, 1.0, 12.0);
        app.update();

        let platform = app.world().resource::<FlightState>().platform.unwrap();
        let platform_translation = app.world().get::<Transform>(platform).unwrap().translation;
        assert_eq!(platform_translation.x, 3.0);
        assert_eq!(platform_translation.z, 12.0);
    }
}
