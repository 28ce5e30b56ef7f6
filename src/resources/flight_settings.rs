use bevy::prelude::*;

/// Resource holding global flight system settings
#[derive(Resource, Reflect, Clone)]
#[reflect(Resource)]
pub struct FlightSettings {
    /// Vertical offset applied per tick while flying, in world units
    pub vertical_speed: f32,
    /// Scale of the carrier platform
    pub platform_scale: Vec3,
    /// Looping emote clip played when flight mode is entered
    pub flight_emote: String,
}

impl Default for FlightSettings {
    fn default() -> Self {
        Self {
            vertical_speed: 0.05,
            platform_scale: Vec3::new(1.0, 1.385, 1.0),
            flight_emote: "models/dance10.glb".to_string(),
        }
    }
}
