//! Portfolio section platforms and proximity detection.
//!
//! Each section is a static platform in the world; driving onto one makes it
//! the active section, which the UI overlay renders and the audio layer
//! chimes for.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::vehicle::Vehicle;

/// One line of section body content.
#[derive(Clone, Copy)]
pub enum SectionLine {
    Heading(&'static str),
    Text(&'static str),
    Bullet(&'static str),
}

/// Content for one portfolio section.
#[derive(Clone)]
pub struct Section {
    pub title: &'static str,
    pub color: Color,
    pub position: Vec3,
    pub body: &'static [SectionLine],
}

/// All portfolio content, in world order.
#[derive(Resource)]
pub struct PortfolioContent(pub Vec<Section>);

/// Platform half-extent in the ground plane (meters).
pub const PLATFORM_HALF_EXTENT: f32 = 4.0;

/// Platform slab height (meters).
const PLATFORM_HEIGHT: f32 = 0.5;

pub fn portfolio_content() -> PortfolioContent {
    use SectionLine::{Bullet, Heading, Text};

    PortfolioContent(vec![
        Section {
            title: "Experience",
            color: Color::srgb(0.23, 0.51, 0.96),
            position: Vec3::new(15.0, 0.25, -15.0),
            body: &[
                Heading("Software Engineer"),
                Text("Abhram Technologies, Nov 2025 - present"),
                Bullet("React Native, Next.js, NestJS"),
                Bullet("Prisma, PostgreSQL, AWS"),
                Heading("Junior Dev Trainee"),
                Text("MDigitz, Jul 2025 - Oct 2025"),
            ],
        },
        Section {
            title: "Skills",
            color: Color::srgb(0.96, 0.62, 0.04),
            position: Vec3::new(-15.0, 0.25, -15.0),
            body: &[
                Heading("Languages"),
                Text("JavaScript, TypeScript, C++, Java, PHP, Rust"),
                Heading("Frontend"),
                Text("React, Next.js, Tailwind"),
                Heading("Backend"),
                Text("Node, NestJS, Laravel"),
                Heading("Tools"),
                Text("Git, AWS, Figma"),
            ],
        },
        Section {
            title: "Projects",
            color: Color::srgb(0.94, 0.27, 0.27),
            position: Vec3::new(15.0, 0.25, 15.0),
            body: &[
                Heading("Outbreak FPS"),
                Text("Unreal Engine first-person shooter"),
                Heading("SolidServe"),
                Text("CRUD application for Akshaya centers"),
                Heading("Fig"),
                Text("User directory listing platform"),
            ],
        },
        Section {
            title: "Contact",
            color: Color::srgb(0.66, 0.33, 0.97),
            position: Vec3::new(-15.0, 0.25, 15.0),
            body: &[
                Text("Muvattupuzha, India"),
                Text("GitHub: jibin-jose"),
                Text("LinkedIn: jibin-jose"),
            ],
        },
    ])
}

/// Static platform entity for one section.
#[derive(Component)]
pub struct SectionPlatform {
    /// Index into [`PortfolioContent`].
    pub index: usize,
}

/// Which section the car is currently on, if any.
#[derive(Resource, Default)]
pub struct ActiveSection(pub Option<usize>);

/// Emitted when the car drives onto a section it was not on before.
#[derive(Message)]
pub struct SectionEntered {
    pub index: usize,
}

/// Spawn the section platforms with their emissive borders.
pub fn spawn_sections(
    mut commands: Commands,
    content: Res<PortfolioContent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let size = PLATFORM_HALF_EXTENT * 2.0;
    let slab_mesh = meshes.add(Cuboid::new(size, PLATFORM_HEIGHT, size));
    let border_mesh = meshes.add(Cuboid::new(size + 0.1, 0.1, size + 0.1));
    let slab_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.1, 0.1, 0.1),
        metallic: 0.8,
        perceptual_roughness: 0.2,
        ..default()
    });

    for (index, section) in content.0.iter().enumerate() {
        let border_material = materials.add(StandardMaterial {
            base_color: section.color,
            emissive: section.color.to_linear() * 0.5,
            ..default()
        });

        commands
            .spawn((
                SectionPlatform { index },
                RigidBody::Static,
                Collider::cuboid(size, PLATFORM_HEIGHT, size),
                Mesh3d(slab_mesh.clone()),
                MeshMaterial3d(slab_material.clone()),
                Transform::from_translation(section.position),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(border_mesh.clone()),
                    MeshMaterial3d(border_material),
                    Transform::from_xyz(0.0, PLATFORM_HEIGHT / 2.0 + 0.05, 0.0),
                ));
            });
    }
}

/// Track which platform the car is on and announce transitions.
pub fn detect_active_section(
    vehicle_query: Query<&Transform, With<Vehicle>>,
    platform_query: Query<(&SectionPlatform, &Transform), Without<Vehicle>>,
    mut active: ResMut<ActiveSection>,
    mut entered: MessageWriter<SectionEntered>,
) {
    let Ok(vehicle_transform) = vehicle_query.single() else {
        return;
    };
    let car = vehicle_transform.translation;

    let current = platform_query.iter().find_map(|(platform, transform)| {
        let delta = car - transform.translation;
        (delta.x.abs() <= PLATFORM_HALF_EXTENT && delta.z.abs() <= PLATFORM_HALF_EXTENT)
            .then_some(platform.index)
    });

    if current != active.0 {
        if let Some(index) = current {
            entered.write(SectionEntered { index });
            tracing::debug!("Entered section {index}");
        }
        active.0 = current;
    }
}
