//! Headless vehicle physics tuner.
//!
//! Runs actual Avian3D physics on a vehicle preset over a flat plane to
//! measure settling, acceleration, and braking characteristics.
//!
//! This binary reuses the same `vehicle_physics_system` as the main
//! application.
//!
//! Run with: cargo run -p drivefolio --bin vehicle-tuning -- [preset_name]
//! Example: cargo run -p drivefolio --bin vehicle-tuning -- dunebug

use std::env;

use avian3d::prelude::*;
use bevy::{
    app::ScheduleRunnerPlugin,
    prelude::*,
    render::settings::{RenderCreation, WgpuSettings},
};

use drivefolio::{
    config,
    vehicle::{
        SpawnPose, Vehicle, VehicleConfig, VehicleInput, VehicleReset, VehicleState,
        core::DriveInputs, vehicle_physics_system,
    },
};

/// Fixed timestep for physics simulation (64 Hz).
const FIXED_TIMESTEP: f64 = 1.0 / 64.0;

/// Time to wait for the suspension to settle (seconds).
const SETTLE_TIME: f32 = 3.0;

/// Full-throttle run duration (seconds).
const SPEED_TEST_TIME: f32 = 8.0;

/// Maximum braking time before giving up (seconds).
const MAX_BRAKE_TIME: f32 = 10.0;

/// Speed threshold for the acceleration measurement (m/s).
const ACCEL_TARGET_SPEED: f32 = 20.0;

/// State of the tuner simulation.
#[derive(Resource)]
enum TunerState {
    /// Drop from the spawn pose and wait for the suspension to settle.
    Settle { elapsed: f32, settled_time: f32 },
    /// Full throttle, measure speed.
    SpeedTest { elapsed: f32 },
    /// Full brake, measure stopping distance.
    BrakeTest { elapsed: f32, start: Vec3 },
    /// Simulation complete.
    Complete,
}

impl Default for TunerState {
    fn default() -> Self {
        Self::Settle {
            elapsed: 0.0,
            settled_time: 0.0,
        }
    }
}

/// Measurement results accumulated during the test.
#[derive(Resource, Default)]
struct MeasurementResults {
    preset_name: String,
    mass: f32,
    ride_height: f32,
    max_speed: f32,
    time_to_target: Option<f32>,
    brake_distance: f32,
    brake_time: f32,
}

/// Set up the test environment with ground plane and vehicle.
fn setup_test_environment(mut commands: Commands, mut results: ResMut<MeasurementResults>) {
    commands.spawn((
        RigidBody::Static,
        Collider::cuboid(10000.0, 1.0, 10000.0),
        Transform::from_translation(Vec3::new(0.0, -0.5, 0.0)),
    ));

    let preset_name = env::args().nth(1).unwrap_or_else(|| "roadster".to_string());
    let preset = match config::load_preset(&preset_name) {
        Ok(preset) => preset,
        Err(err) => {
            eprintln!("# ERROR: {err}");
            std::process::exit(1);
        }
    };

    results.preset_name = preset.name.clone();
    results.mass = preset.params.chassis_mass;

    let params = preset.params.clone();
    let h = params.chassis_half_extents;
    let spawn = SpawnPose {
        position: Vec3::new(0.0, 2.0, 0.0),
        rotation: Quat::IDENTITY,
    };

    commands.spawn((
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
        Transform::from_translation(spawn.position),
    ));

    eprintln!("# Testing preset: {preset_name}");
    eprintln!("# Settling...");
}

/// Apply test inputs to the vehicle.
///
/// Full throttle during the speed test, full brake during the brake test.
/// The actual physics are handled by `vehicle_physics_system`.
fn apply_test_inputs(state: Res<TunerState>, mut query: Query<&mut VehicleInput, With<Vehicle>>) {
    for mut input in &mut query {
        input.0 = DriveInputs {
            forward: matches!(&*state, TunerState::SpeedTest { .. }),
            brake: matches!(&*state, TunerState::BrakeTest { .. }),
            ..Default::default()
        };
    }
}

/// Measure vehicle state and drive the test phases.
fn measure_and_track(
    time: Res<Time>,
    mut state: ResMut<TunerState>,
    mut results: ResMut<MeasurementResults>,
    query: Query<(&VehicleState, &Transform, &LinearVelocity), With<Vehicle>>,
) {
    let dt = time.delta_secs();
    if dt == 0.0 {
        return;
    }

    let Ok((vehicle_state, transform, linear_velocity)) = query.single() else {
        return;
    };

    match &mut *state {
        TunerState::Settle {
            elapsed,
            settled_time,
        } => {
            *elapsed += dt;

            // Settled means grounded with negligible vertical motion.
            if vehicle_state.grounded && linear_velocity.0.y.abs() < 0.05 {
                *settled_time += dt;
            } else {
                *settled_time = 0.0;
            }

            if *settled_time >= 0.5 || *elapsed >= SETTLE_TIME {
                results.ride_height = transform.translation.y;
                eprintln!("# Settled at ride height {:.3} m", results.ride_height);
                eprintln!("# Running speed test...");
                *state = TunerState::SpeedTest { elapsed: 0.0 };
            }
        }
        TunerState::SpeedTest { elapsed } => {
            *elapsed += dt;

            let speed = vehicle_state.speed;
            if speed > results.max_speed {
                results.max_speed = speed;
            }
            if results.time_to_target.is_none() && speed >= ACCEL_TARGET_SPEED {
                results.time_to_target = Some(*elapsed);
            }

            if *elapsed >= SPEED_TEST_TIME {
                eprintln!(
                    "# Speed test complete, braking from {:.1} m/s...",
                    vehicle_state.speed
                );
                *state = TunerState::BrakeTest {
                    elapsed: 0.0,
                    start: transform.translation,
                };
            }
        }
        TunerState::BrakeTest { elapsed, start } => {
            *elapsed += dt;

            if vehicle_state.speed < 0.2 || *elapsed >= MAX_BRAKE_TIME {
                results.brake_distance = (transform.translation - *start).length();
                results.brake_time = *elapsed;
                *state = TunerState::Complete;
            }
        }
        TunerState::Complete => {}
    }
}

/// Check for completion and output summary.
fn check_complete(state: Res<TunerState>, results: Res<MeasurementResults>) {
    let TunerState::Complete = &*state else {
        return;
    };

    eprintln!();
    eprintln!("# === {} ===", results.preset_name);
    eprintln!("# Mass: {:.1} kg", results.mass);
    eprintln!("# Ride height: {:.3} m", results.ride_height);
    eprintln!(
        "# Max speed: {:.1} m/s ({:.1} km/h)",
        results.max_speed,
        results.max_speed * 3.6
    );
    if let Some(time) = results.time_to_target {
        eprintln!("# Time to {ACCEL_TARGET_SPEED:.0} m/s: {time:.2} s");
    } else {
        eprintln!("# Time to {ACCEL_TARGET_SPEED:.0} m/s: (not reached)");
    }
    eprintln!(
        "# Brake: {:.1} m in {:.2} s",
        results.brake_distance, results.brake_time
    );

    std::process::exit(0);
}

fn main() {
    App::new()
        // Headless plugins: DefaultPlugins without windowing, with headless rendering.
        .add_plugins(
            DefaultPlugins
                .set(bevy::render::RenderPlugin {
                    render_creation: RenderCreation::Automatic(WgpuSettings {
                        backends: None,
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::winit::WinitPlugin>(),
        )
        // Schedule runner for headless loop.
        .add_plugins(ScheduleRunnerPlugin::run_loop(
            std::time::Duration::from_secs_f64(FIXED_TIMESTEP),
        ))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec3::NEG_Y * 9.81))
        .insert_resource(Time::<Fixed>::from_seconds(FIXED_TIMESTEP))
        .add_message::<VehicleReset>()
        .init_resource::<TunerState>()
        .init_resource::<MeasurementResults>()
        .add_systems(Startup, setup_test_environment)
        // Use the SAME physics system as the main app.
        .add_systems(FixedPreUpdate, vehicle_physics_system)
        .add_systems(Update, (apply_test_inputs, measure_and_track, check_complete))
        .run();
}
