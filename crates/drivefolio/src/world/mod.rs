//! World geometry and portfolio content.

mod effects;
pub mod sections;

use avian3d::prelude::*;
use bevy::prelude::*;

pub use sections::{ActiveSection, PortfolioContent, Section, SectionEntered, SectionLine};

/// Plugin for the drivable world: floor, section platforms, and effects.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(sections::portfolio_content())
            .init_resource::<ActiveSection>()
            .add_message::<SectionEntered>()
            .add_systems(Startup, (spawn_floor, sections::spawn_sections))
            .add_systems(
                Update,
                (
                    sections::detect_active_section,
                    effects::spawn_reset_dust,
                    effects::update_dust,
                ),
            );
    }
}

/// Spawn the ground plane with its static collider, plus the intro plinth.
fn spawn_floor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        RigidBody::Static,
        Collider::half_space(Vec3::Y),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(400.0, 400.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.04, 0.04, 0.05),
            metallic: 0.6,
            perceptual_roughness: 0.4,
            ..default()
        })),
        Transform::IDENTITY,
    ));

    // Intro plinth near the spawn point, an emissive landmark to drive
    // away from.
    let accent = Color::srgb(0.0, 1.0, 0.53);
    commands.spawn((
        RigidBody::Static,
        Collider::cuboid(3.0, 0.4, 3.0),
        Mesh3d(meshes.add(Cuboid::new(3.0, 0.4, 3.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.08, 0.08, 0.09),
            emissive: accent.to_linear() * 0.2,
            metallic: 0.8,
            perceptual_roughness: 0.3,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.2, -8.0),
    ));
}
