use bevy::prelude::*;

use crate::components::{AvatarAnchor, PlayerAvatar};
use crate::events::{AvatarEmoteEvent, FlightToggleEvent, HoverToggleEvent};
use crate::resources::{FlightSettings, FlightState};

/// Threshold for the idle position-correction rate limiter, in milliseconds.
const IDLE_CORRECTION_INTERVAL_MS: f64 = 1_000_000.0;

/// System that consumes flight and hover toggle events and reconciles the
/// flight state machine.
///
/// Each toggle flips its flag and runs one reconciliation pass:
/// - entering flight issues the looping flight emote and activates the
///   per-tick vertical movement system
/// - leaving flight deactivates it
/// - while a platform exists, hover mode pins its height to the avatar;
///   otherwise the platform is destroyed and recreated lazily by the
///   movement system on the next tick
pub fn flight_toggle_system(
    mut commands: Commands,
    time: Res<Time>,
    flight_settings: Res<FlightSettings>,
    mut flight_state: ResMut<FlightState>,
    mut flight_toggle_events: MessageReader<FlightToggleEvent>,
    mut hover_toggle_events: MessageReader<HoverToggleEvent>,
    mut emote_events: MessageWriter<AvatarEmoteEvent>,
    avatar_query: Query<Entity, With<PlayerAvatar>>,
    anchor_query: Query<&AvatarAnchor>,
    mut transform_query: Query<&mut Transform>,
) {
    let mut reconcile_passes = 0;

    for _ in flight_toggle_events.read() {
        flight_state.flying = !flight_state.flying;
        info!("Toggled flying: {}", flight_state.flying);
        reconcile_passes += 1;
    }

    for _ in hover_toggle_events.read() {
        flight_state.hovering = !flight_state.hovering;
        info!("Toggled hovering: {}", flight_state.hovering);
        reconcile_passes += 1;
    }

    for _ in 0..reconcile_passes {
        reconcile_flight_state(
            &mut commands,
            &time,
            &flight_settings,
            &mut flight_state,
            &mut emote_events,
            &avatar_query,
            &anchor_query,
            &mut transform_query,
        );
    }
}

fn reconcile_flight_state(
    commands: &mut Commands,
    time: &Time,
    settings: &FlightSettings,
    state: &mut FlightState,
    emote_events: &mut MessageWriter<AvatarEmoteEvent>,
    avatar_query: &Query<Entity, With<PlayerAvatar>>,
    anchor_query: &Query<&AvatarAnchor>,
    transform_query: &mut Query<&mut Transform>,
) {
    if state.flying {
        if !state.movement_registered {
            emote_events.write(AvatarEmoteEvent {
                clip: settings.flight_emote.clone(),
                looping: true,
            });
            state.movement_registered = true;
            info!("Enabled vertical flight movement");
        }
    } else if state.movement_registered {
        state.movement_registered = false;
        info!("Disabled vertical flight movement");
    }

    if let Some(platform) = state.platform {
        if state.hovering {
            // Pin the platform to the avatar's current height.
            let avatar_y = anchor_query
                .get(platform)
                .ok()
                .and_then(|anchor| transform_query.get(anchor.avatar).ok())
                .map(|avatar_transform| avatar_transform.translation.y);

            if let Some(avatar_y) = avatar_y {
                if let Ok(mut platform_transform) = transform_query.get_mut(platform) {
                    platform_transform.translation.y = avatar_y;
                }
            }
        } else {
            commands.entity(platform).despawn();
            state.platform = None;
            info!("Exited fly mode");
        }
    }

    // Idle position correction, rate limited. The interval keeps this path
    // inert over any realistic session.
    if !state.flying {
        let now_ms = time.elapsed().as_secs_f64() * 1000.0;
        if now_ms - state.last_idle_correction_ms >= IDLE_CORRECTION_INTERVAL_MS {
            state.last_idle_correction_ms = now_ms;
            if let Some(avatar) = avatar_query.iter().next() {
                if let Ok(mut avatar_transform) = transform_query.get_mut(avatar) {
                    avatar_transform.translation.y = state.cached_y;
                }
            }
        }
    }
}
