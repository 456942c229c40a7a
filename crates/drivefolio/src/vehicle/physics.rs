//! Vehicle physics simulation.
//!
//! Runs the raycast-car controller each fixed tick: suspension raycasts
//! through Avian's spatial query pipeline, then the pure core step, then the
//! resulting velocity changes applied to the chassis rigid body. The chassis
//! transform stays the single source of truth; nothing here writes wheel
//! visuals (see [`super::wheels`]).

use avian3d::prelude::*;
use bevy::prelude::*;

use super::{
    components::{SpawnPose, Vehicle, VehicleConfig, VehicleInput, VehicleState},
    core::{self, BodyState},
};

/// Emitted when a hard reset teleports the car back to its spawn pose.
///
/// Consumed by the audio cue and dust burst systems.
#[derive(Message)]
pub struct VehicleReset {
    /// Where the car reappeared.
    pub position: Vec3,
}

/// Apply drive commands to the chassis rigid body.
#[allow(clippy::type_complexity)]
pub fn vehicle_physics_system(
    time: Res<Time<Fixed>>,
    spatial_query: Res<SpatialQueryPipeline>,
    mut resets: MessageWriter<VehicleReset>,
    mut query: Query<
        (
            Entity,
            &VehicleConfig,
            &VehicleInput,
            &SpawnPose,
            &mut VehicleState,
            &mut Position,
            &mut Rotation,
            &mut LinearVelocity,
            &mut AngularVelocity,
        ),
        With<Vehicle>,
    >,
) {
    let dt = time.delta_secs();

    for (
        entity,
        config,
        input,
        spawn,
        mut state,
        mut position,
        mut rotation,
        mut linear_velocity,
        mut angular_velocity,
    ) in &mut query
    {
        let params = &config.0;
        let inputs = &input.0;

        // Hard reset: teleport to the spawn pose and zero all motion,
        // overriding any drive commands issued this tick.
        if inputs.reset {
            let mut body = BodyState {
                position: position.0,
                rotation: rotation.0,
                linear_velocity: linear_velocity.0,
                angular_velocity: angular_velocity.0,
            };
            core::apply_reset(&mut body, spawn.position, spawn.rotation);

            position.0 = body.position;
            rotation.0 = body.rotation;
            linear_velocity.0 = body.linear_velocity;
            angular_velocity.0 = body.angular_velocity;

            state.prev_compression.clear();
            state.wheels.clear();
            state.grounded = false;
            state.speed = 0.0;
            state.total_force = Vec3::ZERO;
            state.total_torque = Vec3::ZERO;

            resets.write(VehicleReset {
                position: spawn.position,
            });
            tracing::debug!("Vehicle reset to spawn pose");
            continue;
        }

        let body = BodyState {
            position: position.0,
            rotation: rotation.0,
            linear_velocity: linear_velocity.0,
            angular_velocity: angular_velocity.0,
        };

        // Suspension rays point along chassis down and ignore the car's own
        // collider.
        let down = Dir3::new(body.rotation * -Vec3::Y).unwrap_or(Dir3::NEG_Y);
        let filter = SpatialQueryFilter::default().with_excluded_entities([entity]);

        let ray_hits: Vec<Option<f32>> = params
            .wheels
            .iter()
            .map(|wheel| {
                let origin = body.position + body.rotation * wheel.offset;
                spatial_query
                    .cast_ray(origin, down, params.ray_length(wheel), true, &filter)
                    .map(|hit| hit.distance)
            })
            .collect();

        let out = core::drive_step(
            params,
            inputs,
            &body,
            &ray_hits,
            &state.prev_compression,
            dt,
        );

        linear_velocity.0 += out.delta_linear_velocity;
        angular_velocity.0 += out.delta_angular_velocity;

        // Book-keeping for the damper term, wheel visuals, and diagnostics.
        state.prev_compression = out.wheels.iter().map(|w| w.compression).collect();
        if state.wheel_roll.len() != out.wheels.len() {
            state.wheel_roll = vec![0.0; out.wheels.len()];
        }
        for (roll, wheel) in state.wheel_roll.iter_mut().zip(&out.wheels) {
            if wheel.in_contact {
                *roll += wheel.ground_speed / params.wheel_radius.max(1e-3) * dt;
            }
        }
        state.grounded = out.grounded;
        state.speed = linear_velocity.0.length();
        state.total_force = out.total_force;
        state.total_torque = out.total_torque;
        state.wheels = out.wheels;
    }
}
