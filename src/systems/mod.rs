pub mod avatar_emote_system;
pub mod flight_input_system;
pub mod flight_movement_system;
pub mod flight_toggle_system;
pub mod orbit_camera_system;
pub mod pointer_interaction_system;
pub mod scene_setup_system;
pub mod spawn_object_system;
pub mod spinner_system;

pub use avatar_emote_system::avatar_emote_system;
pub use flight_input_system::flight_input_system;
pub use flight_movement_system::{
    flight_movement_system, horizontal_camera_forward, lifted_position, quaternion_to_euler,
};
pub use flight_toggle_system::flight_toggle_system;
pub use orbit_camera_system::{orbit_camera_system, OrbitCamera};
pub use pointer_interaction_system::{pointer_interaction_system, random_spawn_position};
pub use scene_setup_system::scene_setup_system;
pub use spawn_object_system::{
    random_albedo_color, spawn_cube, spawn_object_event_system, spawn_plane,
};
pub use spinner_system::spinner_system;
