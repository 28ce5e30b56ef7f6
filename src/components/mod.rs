use bevy_rapier3d::prelude::Group;

pub mod flight;
pub mod player;
pub mod spawned_object;

pub use flight::{ActiveEmote, FlightPlatform};
pub use player::{AvatarAnchor, PlayerAvatar};
pub use spawned_object::{Cube, InteractionPrompt, SpawnedPlane, Spinner};

pub const COLLISION_GROUP_OBJECT: Group = Group::GROUP_1;
pub const COLLISION_GROUP_PLATFORM: Group = Group::GROUP_2;
pub const COLLISION_GROUP_PLAYER: Group = Group::GROUP_3;
pub const COLLISION_GROUP_WORLD: Group = Group::GROUP_4;

/// Membership bit carried by objects that respond to pointer interaction,
/// matched by the pointer ray cast filter.
pub const COLLISION_FILTER_CLICKABLE: Group = Group::GROUP_5;
