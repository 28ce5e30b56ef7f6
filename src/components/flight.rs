use bevy::prelude::*;

/// Marker for the invisible platform entity that carries the avatar while
/// flight mode is active.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct FlightPlatform;

/// Animation state applied to the avatar by the emote system.
///
/// Looping emotes persist until replaced; one-shot emotes are removed once
/// their playback window elapses.
#[derive(Component, Clone, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct ActiveEmote {
    pub clip: String,
    pub looping: bool,
    pub elapsed: f32,
}
