//! Drivable 3D portfolio.
//!
//! A portfolio site rendered as a small physics playground: the visitor
//! drives a raycast car between platforms, and each platform opens one
//! section of the portfolio.

pub mod audio;
pub mod camera;
pub mod config;
pub mod input;
pub mod launch_params;
pub mod physics;
pub mod ui;
pub mod vehicle;
pub mod world;

use bevy::light::light_consts::lux;
use bevy::prelude::*;

/// Plugin for the main application.
pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            physics::PhysicsSetupPlugin,
            input::DriveInputPlugin,
            vehicle::VehiclePlugin,
            camera::CameraPlugin,
            world::WorldPlugin,
            audio::AudioCuePlugin,
            ui::UiPlugin,
        ))
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.03)))
        .add_systems(Startup, setup_scene);
    }
}

/// Set up the initial 3D scene with camera and lighting.
fn setup_scene(mut commands: Commands) {
    // The follow system takes the camera over once the car exists; this
    // initial pose matches the follow offset so there is no startup swoop.
    commands.spawn((
        Camera3d::default(),
        Camera::default(),
        Transform::from_xyz(10.0, 12.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        Projection::Perspective(PerspectiveProjection {
            fov: 40.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..Default::default()
        }),
        AmbientLight {
            color: Color::srgb(0.6, 0.7, 1.0),
            brightness: 120.0,
            ..default()
        },
    ));

    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: lux::OVERCAST_DAY,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    tracing::info!("Scene setup complete - use WASD to drive, R to reset");
}
