use bevy::prelude::*;

use crate::components::Spinner;

/// Rotates every spinner-tagged object around its Y axis at the per-entity
/// rate assigned when it was spawned.
pub fn spinner_system(time: Res<Time>, mut query: Query<(&Spinner, &mut Transform)>) {
    let delta_seconds = time.delta_secs();
    for (spinner, mut transform) in query.iter_mut() {
        transform.rotate_y(spinner.speed.to_radians() * delta_seconds);
    }
}
