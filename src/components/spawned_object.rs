use bevy::prelude::*;

/// Marker for cubes produced by the object factory. Used to track the cubes.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct Cube;

/// Marker for the invisible collision planes produced by the object factory.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct SpawnedPlane;

/// Per-entity spin rate consumed by the spinner system, in degrees per second.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct Spinner {
    pub speed: f32,
}

/// Pointer interaction descriptor for spawner objects.
///
/// The prompt text is shown while the pointer hovers the object within
/// `max_distance`; pressing the primary action while hovering requests a new
/// spawn.
#[derive(Component, Clone, Reflect)]
#[reflect(Component)]
pub struct InteractionPrompt {
    pub hover_text: String,
    pub max_distance: f32,
}

impl Default for InteractionPrompt {
    fn default() -> Self {
        Self {
            hover_text: "Press E to spawn".to_string(),
            max_distance: 100.0,
        }
    }
}
