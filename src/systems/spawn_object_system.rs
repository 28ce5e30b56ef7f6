use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, CollisionGroups, Group};
use rand::Rng;

use crate::components::{
    Cube, InteractionPrompt, SpawnedPlane, Spinner, COLLISION_FILTER_CLICKABLE,
    COLLISION_GROUP_OBJECT,
};
use crate::events::SpawnObjectEvent;

/// Upper bound for the per-cube spin rate, degrees per second.
const MAX_SPIN_SPEED: f32 = 10.0;

/// Scale applied to spawned collision planes.
const PLANE_SCALE: Vec3 = Vec3::new(2.0, 2.0, 2.0);

/// Cube factory.
///
/// Spawns a unit cube at the given position with a random albedo color, a box
/// collider, and a random spin rate. When `spawner` is true the cube also
/// carries an [`InteractionPrompt`] so pointing at it offers to spawn further
/// cubes.
pub fn spawn_cube(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    position: Vec3,
    spawner: bool,
) -> Entity {
    let mut rng = rand::thread_rng();

    let memberships = if spawner {
        COLLISION_GROUP_OBJECT | COLLISION_FILTER_CLICKABLE
    } else {
        COLLISION_GROUP_OBJECT
    };

    let mut entity_commands = commands.spawn((
        Cube,
        Transform::from_translation(position),
        Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: random_albedo_color(&mut rng),
            ..Default::default()
        })),
        Collider::cuboid(0.5, 0.5, 0.5),
        CollisionGroups::new(memberships, Group::all()),
        Spinner {
            speed: rng.gen_range(0.0..MAX_SPIN_SPEED),
        },
    ));

    if spawner {
        entity_commands.insert(InteractionPrompt::default());
    }

    let entity = entity_commands.id();
    debug!("Spawned cube {:?} at {}", entity, position);
    entity
}

/// Plane factory.
///
/// Spawns a scaled, statically rotated collision plane. The plane carries a
/// material but no mesh, so it is invisible and only participates in
/// collision; pointer interaction is likewise not attached.
pub fn spawn_plane(
    commands: &mut Commands,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    position: Vec3,
    rotation: Quat,
    _spawner: bool,
) -> Entity {
    let mut rng = rand::thread_rng();

    let entity = commands
        .spawn((
            SpawnedPlane,
            Transform {
                translation: position,
                rotation,
                scale: PLANE_SCALE,
            },
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: random_albedo_color(&mut rng),
                ..Default::default()
            })),
            Collider::cuboid(0.5, 0.01, 0.5),
            CollisionGroups::new(COLLISION_GROUP_OBJECT, Group::all()),
        ))
        .id();

    debug!("Spawned collision plane {:?} at {}", entity, position);
    entity
}

/// System that services [`SpawnObjectEvent`] requests from the interaction
/// layer.
pub fn spawn_object_event_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut spawn_events: MessageReader<SpawnObjectEvent>,
) {
    for event in spawn_events.read() {
        match event {
            SpawnObjectEvent::Cube { position } => {
                spawn_cube(&mut commands, &mut meshes, &mut materials, *position, true);
            }
            SpawnObjectEvent::Plane { position, rotation } => {
                spawn_plane(&mut commands, &mut materials, *position, *rotation, true);
            }
        }
    }
}

/// Picks a random opaque albedo color.
pub fn random_albedo_color(rng: &mut impl Rng) -> Color {
    Color::srgb(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::SystemState;

    fn test_world() -> World {
        let mut world = World::new();
        world.insert_resource(Assets::<Mesh>::default());
        world.insert_resource(Assets::<StandardMaterial>::default());
        world
    }

    fn factory_state(
        world: &mut World,
    ) -> SystemState<(
        Commands<'static, 'static>,
        ResMut<'static, Assets<Mesh>>,
        ResMut<'static, Assets<StandardMaterial>>,
    )> {
        SystemState::new(world)
    }

    #[test]
    fn test_spawn_cube_components() {
        let mut world = test_world();
        let mut state = factory_state(&mut world);

        let entity;
        {
            let (mut commands, mut meshes, mut materials) = state.get_mut(&mut world);
            entity = spawn_cube(
                &mut commands,
                &mut meshes,
                &mut materials,
                Vec3::new(8.0, 1.0, 8.0),
                true,
            );
        }
        state.apply(&mut world);

        assert!(world.get::<Cube>(entity).is_some());
        assert!(world.get::<Mesh3d>(entity).is_some());
        assert!(world.get::<Collider>(entity).is_some());
        assert!(world.get::<InteractionPrompt>(entity).is_some());
        assert_eq!(
            world.get::<Transform>(entity).unwrap().translation,
            Vec3::new(8.0, 1.0, 8.0)
        );
    }

    #[test]
    fn test_spawn_cube_spin_speed_range() {
        let mut world = test_world();
        let mut state = factory_state(&mut world);

        let mut entities = Vec::new();
        {
            let (mut commands, mut meshes, mut materials) = state.get_mut(&mut world);
            for _ in 0..32 {
                entities.push(spawn_cube(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    Vec3::ONE,
                    false,
                ));
            }
        }
        state.apply(&mut world);

        for entity in entities {
            let spinner = world.get::<Spinner>(entity).unwrap();
            assert!(spinner.speed >= 0.0 && spinner.speed < MAX_SPIN_SPEED);
        }
    }

    #[test]
    fn test_spawn_cube_without_spawner_has_no_prompt() {
        let mut world = test_world();
        let mut state = factory_state(&mut world);

        let entity;
        {
            let (mut commands, mut meshes, mut materials) = state.get_mut(&mut world);
            entity = spawn_cube(&mut commands, &mut meshes, &mut materials, Vec3::ONE, false);
        }
        state.apply(&mut world);

        assert!(world.get::<InteractionPrompt>(entity).is_none());
    }

    #[test]
    fn test_spawn_plane_is_collision_only() {
        let mut world = test_world();
        let mut state = factory_state(&mut world);

        let rotation = Quat::from_xyzw(0.0, 0.0, 1.0, 1.0).normalize();
        let entity;
        {
            let (mut commands, _, mut materials) = state.get_mut(&mut world);
            entity = spawn_plane(
                &mut commands,
                &mut materials,
                Vec3::new(1.0, 1.0, 1.0),
                rotation,
                true,
            );
        }
        state.apply(&mut world);

        assert!(world.get::<SpawnedPlane>(entity).is_some());
        assert!(world.get::<Collider>(entity).is_some());
        // No mesh and no pointer interaction: the plane is invisible.
        assert!(world.get::<Mesh3d>(entity).is_none());
        assert!(world.get::<InteractionPrompt>(entity).is_none());

        let transform = world.get::<Transform>(entity).unwrap();
        assert_eq!(transform.scale, PLANE_SCALE);
        assert!(transform.rotation.abs_diff_eq(rotation, 1e-6));
    }

    #[test]
    fn test_random_albedo_color_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let srgba = random_albedo_color(&mut rng).to_srgba();
            assert!((0.0..=1.0).contains(&srgba.red));
            assert!((0.0..=1.0).contains(&srgba.green));
            assert!((0.0..=1.0).contains(&srgba.blue));
            assert_eq!(srgba.alpha, 1.0);
        }
    }
}
