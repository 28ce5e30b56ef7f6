use bevy::prelude::*;

/// Event requesting an avatar animation clip.
#[derive(Message, Clone, Debug)]
pub struct AvatarEmoteEvent {
    /// Path of the animation clip to play.
    pub clip: String,
    /// Whether the clip should loop until replaced.
    pub looping: bool,
}
