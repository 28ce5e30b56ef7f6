use bevy::prelude::*;

/// The flight controller state record.
///
/// Owned by the world as a single resource and mutated only by the toggle
/// reconciliation and the per-tick movement system, replacing what would
/// otherwise be free-floating module globals.
#[derive(Resource, Default, Reflect)]
#[reflect(Resource)]
pub struct FlightState {
    /// Whether flight mode is currently enabled
    pub flying: bool,
    /// Whether hover mode is layered on top of flight
    pub hovering: bool,
    /// Whether the per-tick vertical movement system is active
    pub movement_registered: bool,
    /// The platform entity carrying the avatar, if one exists
    pub platform: Option<Entity>,
    /// Cached vertical position used by the idle position correction
    pub cached_y: f32,
    /// Timestamp of the last idle position correction, in milliseconds
    pub last_idle_correction_ms: f64,
}

/// Run condition for the per-tick vertical movement system. Movement is
/// registered only while flight mode is active, so cancellation is an
/// observable state change rather than hidden scheduler bookkeeping.
pub fn vertical_movement_registered(flight_state: Res<FlightState>) -> bool {
    flight_state.movement_registered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_state_default() {
        let state = FlightState::default();
        assert!(!state.flying);
        assert!(!state.hovering);
        assert!(!state.movement_registered);
        assert!(state.platform.is_none());
        assert_eq!(state.cached_y, 0.0);
        assert_eq!(state.last_idle_correction_ms, 0.0);
    }
}
