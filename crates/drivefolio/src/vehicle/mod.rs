//! Raycast-car vehicle system.
//!
//! The chassis is an Avian rigid body; wheels are suspension rays cast from
//! chassis-local connection points. Tuning comes from RON presets (see
//! [`crate::config`]); the per-tick math lives in [`core`] so it can be
//! exercised headless by the tuning binary and the unit tests.

mod components;
pub mod core;
mod physics;
pub mod telemetry;
mod wheels;

use avian3d::prelude::*;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

pub use components::{SpawnPose, Vehicle, VehicleConfig, VehicleInput, VehicleState, WheelVisual};
pub use physics::{VehicleReset, vehicle_physics_system};

use crate::{
    camera::{FollowCameraConfig, FollowedEntity},
    config,
    launch_params::LaunchParams,
};

/// Plugin for vehicle functionality.
pub struct VehiclePlugin;

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<VehicleReset>()
            .add_systems(Startup, spawn_vehicle)
            .add_systems(FixedPreUpdate, vehicle_physics_system)
            .add_systems(
                FixedPostUpdate,
                telemetry::emit_vehicle_telemetry
                    .run_if(|enabled: Res<telemetry::TelemetryEnabled>| enabled.0),
            )
            .add_systems(Update, wheels::wheel_visual_sync_system);
    }
}

/// Spawn the player car from the launch preset.
fn spawn_vehicle(
    mut commands: Commands,
    launch: Res<LaunchParams>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let preset = match config::load_preset(&launch.vehicle) {
        Ok(preset) => preset,
        Err(err) => {
            tracing::error!("{err}; falling back to the default preset");
            let fallback = config::builtin_names().next().unwrap_or("roadster");
            match config::load_preset(fallback) {
                Ok(preset) => preset,
                Err(err) => {
                    tracing::error!("default preset failed to load: {err}");
                    return;
                }
            }
        }
    };

    let params = preset.params.clone();
    let spawn_position = launch.spawn.unwrap_or(preset.spawn_position);
    let spawn = SpawnPose {
        position: spawn_position,
        rotation: Quat::IDENTITY,
    };

    tracing::info!(
        "Spawning vehicle '{}' ({}) at {spawn_position}",
        preset.name,
        preset.description
    );

    let h = params.chassis_half_extents;
    let body_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.0, 1.0, 0.53),
        metallic: 0.7,
        perceptual_roughness: 0.2,
        ..default()
    });
    let glass_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.6),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let wheel_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.13, 0.13, 0.13),
        ..default()
    });

    let chassis = commands
        .spawn((
            Vehicle {
                name: preset.name.clone(),
                description: preset.description.clone(),
            },
            VehicleConfig(params.clone()),
            VehicleInput::default(),
            VehicleState::default(),
            spawn,
            RigidBody::Dynamic,
            Collider::cuboid(h.x * 2.0, h.y * 2.0, h.z * 2.0),
            Mass(params.chassis_mass),
            LinearVelocity::default(),
            AngularVelocity::default(),
            Transform::from_translation(spawn.position).with_rotation(spawn.rotation),
            Visibility::default(),
            // Camera follow target: behind-and-above diagonal offset.
            FollowedEntity,
            FollowCameraConfig::default(),
        ))
        .id();

    // Chassis body, cabin, and windshield visuals.
    let body_mesh = meshes.add(Cuboid::new(h.x * 2.0, h.y * 2.0, h.z * 2.0));
    let cabin_mesh = meshes.add(Cuboid::new(h.x * 1.6, h.y * 2.0, h.z));
    let windshield_mesh = meshes.add(Plane3d::default().mesh().size(h.x * 1.5, h.y * 2.0));

    commands.entity(chassis).with_children(|parent| {
        parent.spawn((
            Mesh3d(body_mesh),
            MeshMaterial3d(body_material.clone()),
            Transform::IDENTITY,
        ));
        parent.spawn((
            Mesh3d(cabin_mesh),
            MeshMaterial3d(body_material),
            Transform::from_xyz(0.0, h.y * 1.6, h.z * 0.2),
        ));
        parent.spawn((
            Mesh3d(windshield_mesh),
            MeshMaterial3d(glass_material),
            Transform::from_xyz(0.0, h.y * 2.0, -h.z * 0.3)
                .with_rotation(Quat::from_rotation_x(-0.5)),
        ));
    });

    // One visual per wheel; the mesh child carries the fixed axle
    // orientation so the sync system owns the wheel entity's transform
    // outright.
    let wheel_mesh = meshes.add(Cylinder::new(params.wheel_radius, params.wheel_width));
    for (index, wheel) in params.wheels.iter().enumerate() {
        let wheel_entity = commands
            .spawn((
                WheelVisual { index },
                Transform::from_translation(wheel.offset - Vec3::Y * wheel.rest_length),
                Visibility::default(),
            ))
            .id();
        commands.entity(chassis).add_child(wheel_entity);

        let mesh_entity = commands
            .spawn((
                Mesh3d(wheel_mesh.clone()),
                MeshMaterial3d(wheel_material.clone()),
                Transform::from_rotation(Quat::from_rotation_z(FRAC_PI_2)),
            ))
            .id();
        commands.entity(wheel_entity).add_child(mesh_entity);
    }
}
