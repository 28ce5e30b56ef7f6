use bevy::prelude::*;

use crate::events::{FlightToggleEvent, HoverToggleEvent};

/// Key that toggles flight mode.
const TOGGLE_FLY_KEY: KeyCode = KeyCode::KeyF;

/// Key that toggles hover mode.
const TOGGLE_HOVER_KEY: KeyCode = KeyCode::KeyH;

/// System that maps keyboard input to the flight state toggles. The toggles
/// stay event-driven so other UI layers can issue them the same way.
pub fn flight_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut flight_toggle_events: MessageWriter<FlightToggleEvent>,
    mut hover_toggle_events: MessageWriter<HoverToggleEvent>,
) {
    if keyboard.just_pressed(TOGGLE_FLY_KEY) {
        flight_toggle_events.write(FlightToggleEvent);
    }

    if keyboard.just_pressed(TOGGLE_HOVER_KEY) {
        hover_toggle_events.write(HoverToggleEvent);
    }
}
