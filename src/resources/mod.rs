pub mod flight_settings;
pub mod flight_state;
pub mod scene_settings;
pub mod selected_spawner;

pub use flight_settings::FlightSettings;
pub use flight_state::{vertical_movement_registered, FlightState};
pub use scene_settings::SceneSettings;
pub use selected_spawner::SelectedSpawner;
