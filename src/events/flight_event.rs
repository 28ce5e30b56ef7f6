use bevy::prelude::*;

/// Event sent when flight mode should be toggled
#[derive(Message, Clone, Debug)]
pub struct FlightToggleEvent;

/// Event sent when hover mode should be toggled
#[derive(Message, Clone, Debug)]
pub struct HoverToggleEvent;
