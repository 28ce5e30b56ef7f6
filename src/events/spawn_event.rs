use bevy::prelude::*;

/// Event requesting the object factory spawn a new entity.
///
/// Sent by the pointer interaction layer so input handling does not need to
/// hold mesh or material assets itself.
#[derive(Message, Clone, Debug)]
pub enum SpawnObjectEvent {
    /// Spawn a unit cube at the given position.
    Cube { position: Vec3 },
    /// Spawn an invisible collision plane with a static rotation.
    Plane { position: Vec3, rotation: Quat },
}
