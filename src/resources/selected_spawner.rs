use bevy::prelude::*;

/// Tracks which spawner object the pointer is currently over, for the hover
/// prompt overlay and the primary-action spawn request.
#[derive(Resource, Default)]
pub struct SelectedSpawner {
    pub hover: Option<Entity>,
}
