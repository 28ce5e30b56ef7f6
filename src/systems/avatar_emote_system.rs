use bevy::prelude::*;

use crate::components::{ActiveEmote, PlayerAvatar};
use crate::events::AvatarEmoteEvent;

/// Playback window granted to one-shot emote clips, in seconds.
const ONE_SHOT_EMOTE_SECONDS: f32 = 4.0;

/// System that applies emote requests to the avatar.
///
/// The newest request wins. Looping emotes persist until replaced; one-shot
/// emotes are removed once their playback window elapses.
pub fn avatar_emote_system(
    mut commands: Commands,
    time: Res<Time>,
    mut emote_events: MessageReader<AvatarEmoteEvent>,
    mut avatar_query: Query<(Entity, Option<&mut ActiveEmote>), With<PlayerAvatar>>,
) {
    let Ok((avatar, active_emote)) = avatar_query.single_mut() else {
        return;
    };

    for event in emote_events.read() {
        info!("Playing avatar emote {} (looping: {})", event.clip, event.looping);
        commands.entity(avatar).insert(ActiveEmote {
            clip: event.clip.clone(),
            looping: event.looping,
            elapsed: 0.0,
        });
    }

    if let Some(mut active_emote) = active_emote {
        active_emote.elapsed += time.delta_secs();
        if !active_emote.looping && active_emote.elapsed >= ONE_SHOT_EMOTE_SECONDS {
            commands.entity(avatar).remove::<ActiveEmote>();
        }
    }
}
