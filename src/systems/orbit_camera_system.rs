use bevy::{
    input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel},
    prelude::*,
};
use bevy_egui::EguiContexts;
use dolly::prelude::{Arm, CameraRig, LeftHanded, Position, Smooth, YawPitch};

/// Mouse-drag rotation sensitivity, degrees per pixel.
const DRAG_SENSITIVITY: f32 = 0.1;

/// Orbit camera rig following the player avatar. Right-drag rotates, the
/// scroll wheel zooms.
#[derive(Component)]
pub struct OrbitCamera {
    pub rig: CameraRig<LeftHanded>,
    pub follow_entity: Entity,
    pub follow_offset: Vec3,
    pub follow_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    pub fn new(follow_entity: Entity, follow_offset: Vec3, follow_distance: f32) -> Self {
        Self {
            rig: CameraRig::builder()
                .with(Position::new(mint::Point3 {
                    x: 0.0,
                    y: 0.0,
                    z: 0.0,
                }))
                .with(YawPitch::new().yaw_degrees(45.0).pitch_degrees(-30.0))
                .with(Smooth::new_position_rotation(1.0, 1.0))
                .with(Arm::new(mint::Vector3 {
                    x: 0.0,
                    y: 0.0,
                    z: follow_distance,
                }))
                .build(),
            follow_entity,
            follow_offset,
            follow_distance,
            min_distance: 2.0,
            max_distance: 40.0,
        }
    }
}

/// System that drives the orbit camera rig from mouse input and the followed
/// entity's position, then writes the rig's smoothed transform back to the
/// camera.
pub fn orbit_camera_system(
    time: Res<Time>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion_events: MessageReader<MouseMotion>,
    mut mouse_wheel_events: MessageReader<MouseWheel>,
    mut egui_ctx: EguiContexts,
    query_follow: Query<&GlobalTransform>,
    mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let Ok((mut orbit_camera, mut camera_transform)) = query.single_mut() else {
        return;
    };

    let allow_mouse_input = match egui_ctx.ctx_mut() {
        Ok(ctx) => !ctx.wants_pointer_input(),
        Err(_) => return,
    };

    let mut drag_delta = Vec2::ZERO;
    let mut zoom_multiplier = 1.0f32;

    if allow_mouse_input {
        if mouse_buttons.pressed(MouseButton::Right) {
            for event in mouse_motion_events.read() {
                drag_delta += event.delta;
            }
        }

        for event in mouse_wheel_events.read() {
            match event.unit {
                MouseScrollUnit::Line => zoom_multiplier *= 1.0 - event.y * 0.10,
                MouseScrollUnit::Pixel => zoom_multiplier *= 1.0 - event.y * 0.0005,
            }
        }
    }

    // Follow target
    if let Ok(follow_transform) = query_follow.get(orbit_camera.follow_entity) {
        let follow_position = follow_transform.translation() + orbit_camera.follow_offset;
        orbit_camera.rig.driver_mut::<Position>().position = mint::Point3 {
            x: follow_position.x,
            y: follow_position.y,
            z: follow_position.z,
        };
    }

    // Rotate with mouse drag
    if drag_delta != Vec2::ZERO {
        orbit_camera.rig.driver_mut::<YawPitch>().rotate_yaw_pitch(
            -DRAG_SENSITIVITY * drag_delta.x,
            -DRAG_SENSITIVITY * drag_delta.y,
        );
    }

    // Adjust zoom with mouse wheel
    orbit_camera.follow_distance = (orbit_camera.follow_distance * zoom_multiplier)
        .clamp(orbit_camera.min_distance, orbit_camera.max_distance);
    let arm_distance = orbit_camera.follow_distance;
    orbit_camera.rig.driver_mut::<Arm>().offset.z = arm_distance;

    // Update camera
    let calculated_transform = orbit_camera.rig.update(time.delta_secs());
    camera_transform.translation = Vec3::new(
        calculated_transform.position.x,
        calculated_transform.position.y,
        calculated_transform.position.z,
    );
    camera_transform.rotation = Quat::from_xyzw(
        calculated_transform.rotation.v.x,
        calculated_transform.rotation.v.y,
        calculated_transform.rotation.v.z,
        calculated_transform.rotation.s,
    );
}
