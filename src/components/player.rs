use bevy::prelude::*;

/// Marker for the player avatar entity.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerAvatar;

/// Attachment record for entities anchored to an avatar's position.
///
/// The flight systems keep an anchored carrier aligned with the avatar each
/// tick; the reconciliation routine resolves the avatar through this
/// component when pinning the carrier's height.
#[derive(Component, Clone, Copy, Debug)]
pub struct AvatarAnchor {
    pub avatar: Entity,
}
