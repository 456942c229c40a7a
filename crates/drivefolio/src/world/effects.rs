//! Transient visual effects.

use bevy::prelude::*;
use rand::Rng;

use crate::vehicle::VehicleReset;

/// How many dust cubes a reset kicks up.
const DUST_COUNT: usize = 24;

/// Dust particle lifetime in seconds.
const DUST_LIFETIME: f32 = 0.8;

#[derive(Component)]
pub(super) struct DustParticle {
    velocity: Vec3,
    age: f32,
}

/// Kick up a burst of dust at each reset location.
pub(super) fn spawn_reset_dust(
    mut resets: MessageReader<VehicleReset>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::rng();

    for reset in resets.read() {
        let mesh = meshes.add(Cuboid::new(0.12, 0.12, 0.12));
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.55, 0.5, 0.42),
            unlit: true,
            ..default()
        });

        for _ in 0..DUST_COUNT {
            let direction = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(0.5..1.5),
                rng.random_range(-1.0..1.0),
            );
            commands.spawn((
                DustParticle {
                    velocity: direction * rng.random_range(2.0..5.0),
                    age: 0.0,
                },
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(reset.position),
            ));
        }
    }
}

/// Integrate dust motion, shrink it over its lifetime, and despawn it.
pub(super) fn update_dust(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut DustParticle, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (entity, mut particle, mut transform) in &mut query {
        particle.age += dt;
        if particle.age >= DUST_LIFETIME {
            commands.entity(entity).despawn();
            continue;
        }

        particle.velocity.y -= 9.81 * dt;
        transform.translation += particle.velocity * dt;
        transform.scale = Vec3::splat(1.0 - particle.age / DUST_LIFETIME);
    }
}
