use bevy::{prelude::*, window::PrimaryWindow};
use bevy_egui::EguiContexts;
use bevy_rapier3d::prelude::{CollisionGroups, Group, QueryFilter, ReadRapierContext};
use rand::Rng;

use crate::components::{InteractionPrompt, COLLISION_FILTER_CLICKABLE};
use crate::events::SpawnObjectEvent;
use crate::resources::{SceneSettings, SelectedSpawner};

/// Key bound to the primary interaction named in the spawn prompt.
const PRIMARY_ACTION_KEY: KeyCode = KeyCode::KeyE;

/// Upper bound for the pointer ray, in world units. Individual prompts can
/// only narrow this with their own `max_distance`.
const MAX_POINTER_DISTANCE: f32 = 100.0;

/// System that tracks which spawner object the pointer is over and requests
/// a cube spawn when the primary action is pressed while hovering.
pub fn pointer_interaction_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    query_window: Query<&Window, With<PrimaryWindow>>,
    query_camera: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    rapier_context: ReadRapierContext,
    mut egui_ctx: EguiContexts,
    query_prompt: Query<&InteractionPrompt>,
    scene_settings: Res<SceneSettings>,
    mut selected_spawner: ResMut<SelectedSpawner>,
    mut spawn_events: MessageWriter<SpawnObjectEvent>,
) {
    selected_spawner.hover = None;

    let Ok(window) = query_window.single() else {
        return;
    };
    let Some(cursor_position) = window.cursor_position() else {
        return;
    };
    let Ok(egui_context) = egui_ctx.ctx_mut() else {
        return;
    };
    if egui_context.wants_pointer_input() {
        return;
    }
    let Ok((camera, camera_transform)) = query_camera.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_position) else {
        return;
    };

    let Ok(rapier_context) = rapier_context.single() else {
        return;
    };
    let hit = rapier_context.cast_ray(
        ray.origin,
        *ray.direction,
        MAX_POINTER_DISTANCE,
        false,
        QueryFilter::new().groups(CollisionGroups::new(
            Group::all(),
            COLLISION_FILTER_CLICKABLE,
        )),
    );

    let Some((hit_entity, hit_distance)) = hit else {
        return;
    };
    let Ok(prompt) = query_prompt.get(hit_entity) else {
        return;
    };
    if hit_distance > prompt.max_distance {
        return;
    }

    selected_spawner.hover = Some(hit_entity);

    if keyboard.just_pressed(PRIMARY_ACTION_KEY) {
        let position = random_spawn_position(&mut rand::thread_rng(), &scene_settings);
        spawn_events.write(SpawnObjectEvent::Cube { position });
        debug!("Spawn requested from {:?} at {}", hit_entity, position);
    }
}

/// Uniform position within the configured spawn bounds.
pub fn random_spawn_position(rng: &mut impl Rng, settings: &SceneSettings) -> Vec3 {
    Vec3::new(
        rng.gen_range(settings.spawn_min.x..=settings.spawn_max.x),
        rng.gen_range(settings.spawn_min.y..=settings.spawn_max.y),
        rng.gen_range(settings.spawn_min.z..=settings.spawn_max.z),
    )
}
