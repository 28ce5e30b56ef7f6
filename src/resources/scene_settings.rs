use bevy::prelude::*;

/// Resource holding the scene layout: where the initial objects go and the
/// bounds new spawner-requested cubes are drawn from.
#[derive(Resource, Clone)]
pub struct SceneSettings {
    /// Positions of the spawner cubes placed at startup
    pub initial_cubes: Vec<Vec3>,
    /// Position of the static collision plane placed at startup
    pub plane_position: Vec3,
    /// Rotation of the static collision plane
    pub plane_rotation: Quat,
    /// Lower corner of the spawn bounds
    pub spawn_min: Vec3,
    /// Upper corner of the spawn bounds
    pub spawn_max: Vec3,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            initial_cubes: vec![Vec3::new(8.0, 1.0, 8.0)],
            plane_position: Vec3::new(1.0, 1.0, 1.0),
            plane_rotation: Quat::from_xyzw(0.0, 0.0, 1.0, 1.0).normalize(),
            spawn_min: Vec3::new(1.0, 1.0, 1.0),
            spawn_max: Vec3::new(15.0, 8.0, 15.0),
        }
    }
}
