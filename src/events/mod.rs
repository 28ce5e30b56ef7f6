pub mod emote_event;
pub mod flight_event;
pub mod spawn_event;

pub use emote_event::AvatarEmoteEvent;
pub use flight_event::{FlightToggleEvent, HoverToggleEvent};
pub use spawn_event::SpawnObjectEvent;
