//! Core vehicle physics calculations.
//!
//! Pure functions that can be tested in isolation without Bevy dependencies.
//! Used by the Bevy physics system, the tuning binary, and the unit tests.
//!
//! The model is a raycast car: the chassis is a rigid body owned by the
//! physics engine, and each wheel is a suspension ray cast down from a
//! chassis-local connection point. Wheel visuals are derived from the solved
//! per-wheel state and never simulated independently.

use glam::{Quat, Vec3};
use serde::Deserialize;

/// Boolean drive flags sampled once per tick from the input layer.
///
/// Key-repeat is idempotent by construction: re-setting an already-true flag
/// changes nothing. Conflicting flags are legal and resolved by precedence in
/// [`resolve_commands`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriveInputs {
    pub forward: bool,
    pub backward: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    pub brake: bool,
    pub reset: bool,
    pub jump: bool,
}

/// Per-wheel suspension and friction parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct WheelParams {
    /// Connection point in chassis-local space (x=right, y=up, z=back).
    pub offset: Vec3,
    /// Suspension length with no load (meters).
    pub rest_length: f32,
    /// Maximum suspension compression (meters).
    pub travel: f32,
    /// Spring constant (N/m).
    pub stiffness: f32,
    /// Damper constant (N·s/m).
    pub damping: f32,
    /// Upper bound on the spring-damper force (N).
    pub max_suspension_force: f32,
    /// Lateral grip decay rate (1/s). Higher kills sideways slip faster.
    pub friction_slip: f32,
    /// Front wheels: steering rotates this wheel's axes about chassis up.
    pub steered: bool,
    /// Engine force is applied through this wheel when it has contact.
    pub driven: bool,
}

/// Full vehicle tuning, loaded from a RON preset.
#[derive(Clone, Debug, Deserialize)]
pub struct VehicleParams {
    /// Chassis collider half-extents (meters).
    pub chassis_half_extents: Vec3,
    /// Chassis mass (kg).
    pub chassis_mass: f32,
    /// Wheel radius (meters).
    pub wheel_radius: f32,
    /// Wheel width, visual only (meters).
    pub wheel_width: f32,
    /// Engine force magnitude (N). Negative commands drive forward.
    pub engine_force: f32,
    /// Steering angle magnitude (radians). Positive steers left.
    pub steer_angle: f32,
    /// Brake torque per wheel (N·m).
    pub brake_torque: f32,
    /// Jump impulse at the center of mass (N·s).
    pub jump_impulse: f32,
    /// Wheel layout, front wheels first by convention.
    pub wheels: Vec<WheelParams>,
}

impl VehicleParams {
    /// Maximum suspension ray length from the connection point.
    pub fn ray_length(&self, wheel: &WheelParams) -> f32 {
        wheel.rest_length + wheel.travel + self.wheel_radius
    }

    /// Simplified scalar moment of inertia: I ≈ m·r² with r the average
    /// half-extent.
    pub fn inertia(&self) -> f32 {
        let h = self.chassis_half_extents;
        let avg_extent = (h.x + h.y + h.z) / 3.0;
        self.chassis_mass * avg_extent * avg_extent
    }
}

/// Commands issued to the physics engine for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriveCommands {
    /// Force along the driven wheels' +Z axis. Negative moves the car forward.
    pub engine_force: f32,
    /// Steering angle for the steered wheel pair. Positive is left.
    pub steer_angle: f32,
    /// Brake torque applied to all wheels in contact.
    pub brake_torque: f32,
    /// Upward impulse request; reapplies every tick while held.
    pub jump: bool,
    /// Hard reset request. When set, every other command is zero; the caller
    /// teleports the body with [`apply_reset`].
    pub reset: bool,
}

/// Map drive flags to commands.
///
/// Precedence: reset overrides everything else issued in the same tick, then
/// forward over backward and left over right. Brake and engine force coexist
/// at the command level; braking dominates in effective motion because the
/// brake force is sized against the wheel's contact velocity.
pub fn resolve_commands(inputs: &DriveInputs, params: &VehicleParams) -> DriveCommands {
    if inputs.reset {
        return DriveCommands {
            reset: true,
            ..Default::default()
        };
    }

    let engine_force = if inputs.forward {
        -params.engine_force
    } else if inputs.backward {
        params.engine_force
    } else {
        0.0
    };

    let steer_angle = if inputs.steer_left {
        params.steer_angle
    } else if inputs.steer_right {
        -params.steer_angle
    } else {
        0.0
    };

    let brake_torque = if inputs.brake { params.brake_torque } else { 0.0 };

    DriveCommands {
        engine_force,
        steer_angle,
        brake_torque,
        jump: inputs.jump,
        reset: false,
    }
}

/// Chassis rigid-body state, mirrored from the physics engine each tick.
#[derive(Clone, Copy, Debug)]
pub struct BodyState {
    pub position: Vec3,
    pub rotation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
}

impl BodyState {
    pub fn at_rest(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
        }
    }

    /// Chassis forward direction (-Z convention).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Velocity of the chassis at an offset from the center of mass.
    pub fn velocity_at(&self, offset: Vec3) -> Vec3 {
        self.linear_velocity + self.angular_velocity.cross(offset)
    }
}

/// Hard reset to the spawn pose: teleport and zero all motion.
///
/// Overrides any drive commands issued in the same tick.
pub fn apply_reset(body: &mut BodyState, spawn_position: Vec3, spawn_rotation: Quat) {
    body.position = spawn_position;
    body.rotation = spawn_rotation;
    body.linear_velocity = Vec3::ZERO;
    body.angular_velocity = Vec3::ZERO;
}

/// Solved per-wheel state for one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelContact {
    /// Whether the suspension ray hit ground within its length.
    pub in_contact: bool,
    /// Suspension compression (meters, 0 at full droop).
    pub compression: f32,
    /// Spring-damper force applied this tick (N).
    pub suspension_force: f32,
    /// Steering angle applied to this wheel (radians).
    pub steer: f32,
    /// Ray hit distance from the connection point, ray length when airborne.
    pub ray_distance: f32,
    /// Ground speed along the wheel forward axis (m/s), for visual roll.
    pub ground_speed: f32,
}

/// Output of one controller tick.
#[derive(Clone, Debug, Default)]
pub struct DriveStepOutput {
    /// Velocity change to add to the chassis linear velocity.
    pub delta_linear_velocity: Vec3,
    /// Velocity change to add to the chassis angular velocity.
    pub delta_angular_velocity: Vec3,
    /// The commands that produced this step.
    pub commands: DriveCommands,
    /// Per-wheel solved state, same order as `params.wheels`.
    pub wheels: Vec<WheelContact>,
    /// True when any wheel has contact.
    pub grounded: bool,
    /// Total force for diagnostics (impulses folded in as F = J/dt).
    pub total_force: Vec3,
    /// Total torque for diagnostics.
    pub total_torque: Vec3,
}

/// Compute a single controller tick.
///
/// `ray_hits` holds the suspension raycast distance per wheel (None when the
/// ray missed); `prev_compression` is last tick's compression per wheel, used
/// for the damper term. Gravity is the physics engine's job and is not
/// applied here.
pub fn drive_step(
    params: &VehicleParams,
    inputs: &DriveInputs,
    body: &BodyState,
    ray_hits: &[Option<f32>],
    prev_compression: &[f32],
    dt: f32,
) -> DriveStepOutput {
    let commands = resolve_commands(inputs, params);

    // A reset tick issues no drive forces at all; wheels report full droop.
    if commands.reset {
        return DriveStepOutput {
            commands,
            wheels: params
                .wheels
                .iter()
                .map(|wheel| WheelContact {
                    ray_distance: params.ray_length(wheel),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
    }

    let inv_mass = 1.0 / params.chassis_mass.max(0.1);
    let inv_inertia = 1.0 / params.inertia().max(0.1);

    let up = body.up();
    let forward = body.forward();
    let right = body.right();

    let mut wheels = Vec::with_capacity(params.wheels.len());
    let mut total_force = Vec3::ZERO;
    let mut total_torque = Vec3::ZERO;
    let mut delta_linear = Vec3::ZERO;
    let mut delta_angular = Vec3::ZERO;

    // Contact count first: brake and grip forces are split evenly across
    // wheels that touch the ground.
    let contact_count = params
        .wheels
        .iter()
        .zip(ray_hits)
        .filter(|(wheel, hit)| hit.is_some_and(|d| d <= params.ray_length(wheel)))
        .count();
    let contact_share = 1.0 / contact_count.max(1) as f32;

    for (i, wheel) in params.wheels.iter().enumerate() {
        let ray_length = params.ray_length(wheel);
        let hit = ray_hits.get(i).copied().flatten();
        let in_contact = hit.is_some_and(|d| d <= ray_length);
        let ray_distance = hit.unwrap_or(ray_length).min(ray_length);

        let steer = if wheel.steered { commands.steer_angle } else { 0.0 };

        let mut contact = WheelContact {
            in_contact,
            steer,
            ray_distance,
            ..Default::default()
        };

        if in_contact {
            // Spring-damper suspension along chassis up.
            let suspension_length = (ray_distance - params.wheel_radius).max(0.0);
            let compression = (wheel.rest_length - suspension_length).clamp(0.0, wheel.travel);
            let compression_rate = if dt > 0.0 {
                (compression - prev_compression.get(i).copied().unwrap_or(compression)) / dt
            } else {
                0.0
            };
            let suspension_force = (wheel.stiffness * compression
                + wheel.damping * compression_rate)
                .clamp(0.0, wheel.max_suspension_force);

            contact.compression = compression;
            contact.suspension_force = suspension_force;

            let offset = body.rotation * wheel.offset;
            let spring = up * suspension_force;
            total_force += spring;
            total_torque += offset.cross(spring);
            delta_linear += spring * inv_mass * dt;
            delta_angular += offset.cross(spring) * inv_inertia * dt;

            // Steered wheels rotate their axes about chassis up.
            let steer_rotation = Quat::from_axis_angle(up, steer);
            let wheel_forward = steer_rotation * forward;
            let wheel_right = steer_rotation * right;

            let contact_velocity = body.velocity_at(offset);
            contact.ground_speed = contact_velocity.dot(wheel_forward);

            // Engine force along the wheel's +Z axis: the negative command
            // convention means `forward` drives the car toward -Z.
            if wheel.driven {
                let drive = -wheel_forward * commands.engine_force;
                total_force += drive;
                total_torque += offset.cross(drive);
                delta_linear += drive * inv_mass * dt;
                delta_angular += offset.cross(drive) * inv_inertia * dt;
            }

            // Brake: oppose longitudinal contact velocity, clamped so a
            // single tick cannot push the wheel backwards.
            let longitudinal = contact_velocity.dot(wheel_forward);
            if commands.brake_torque > 0.0 && longitudinal.abs() > 1e-4 && dt > 0.0 {
                let max_stop =
                    longitudinal.abs() * params.chassis_mass * contact_share / dt;
                let magnitude = (commands.brake_torque / params.wheel_radius).min(max_stop);
                let brake = -wheel_forward * longitudinal.signum() * magnitude;
                total_force += brake;
                delta_linear += brake * inv_mass * dt;
            }

            // Lateral grip: exponential decay of sideways slip at the
            // contact, applied as an impulse at the wheel offset.
            let lateral = contact_velocity.dot(wheel_right);
            if dt > 0.0 && lateral.abs() > 1e-6 {
                let grip = 1.0 - (-wheel.friction_slip * dt).exp();
                let impulse =
                    -wheel_right * lateral * grip * params.chassis_mass * contact_share;
                delta_linear += impulse * inv_mass;
                delta_angular += offset.cross(impulse) * inv_inertia;
                total_force += impulse / dt;
                total_torque += offset.cross(impulse) / dt;
            }
        }

        wheels.push(contact);
    }

    let grounded = contact_count > 0;

    // Jump is a center-of-mass impulse; while the flag stays held it
    // reapplies every grounded tick, no debounce.
    if commands.jump && grounded {
        let impulse = up * params.jump_impulse;
        delta_linear += impulse * inv_mass;
        if dt > 0.0 {
            total_force += impulse / dt;
        }
    }

    DriveStepOutput {
        delta_linear_velocity: delta_linear,
        delta_angular_velocity: delta_angular,
        commands,
        wheels,
        grounded,
        total_force,
        total_torque,
    }
}

/// One camera follow tick: exponential smoothing toward `target`.
///
/// The blend factor is constant per tick, so smoothing is frame-rate
/// dependent on purpose.
pub fn follow_step(current: Vec3, target: Vec3, blend: f32) -> Vec3 {
    current.lerp(target, blend.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> VehicleParams {
        let wheel = |x: f32, z: f32, steered: bool, driven: bool| WheelParams {
            offset: Vec3::new(x, -0.15, z),
            rest_length: 0.3,
            travel: 0.25,
            stiffness: 20_000.0,
            damping: 2_500.0,
            max_suspension_force: 100_000.0,
            friction_slip: 30.0,
            steered,
            driven,
        };
        VehicleParams {
            chassis_half_extents: Vec3::new(0.6, 0.25, 1.0),
            chassis_mass: 500.0,
            wheel_radius: 0.35,
            wheel_width: 0.3,
            engine_force: 1500.0,
            steer_angle: 0.5,
            brake_torque: 700.0,
            jump_impulse: 2000.0,
            // Front wheels (negative z) steer, rear wheels drive.
            wheels: vec![
                wheel(-0.6, -1.0, true, false),
                wheel(0.6, -1.0, true, false),
                wheel(-0.6, 1.0, false, true),
                wheel(0.6, 1.0, false, true),
            ],
        }
    }

    fn grounded_hits(params: &VehicleParams) -> Vec<Option<f32>> {
        // Ray distance that puts every wheel at half travel.
        params
            .wheels
            .iter()
            .map(|w| Some(w.rest_length + params.wheel_radius - w.travel / 2.0))
            .collect()
    }

    const DT: f32 = 1.0 / 64.0;

    #[test]
    fn engine_force_sign_convention() {
        let params = test_params();

        let forward_only = DriveInputs {
            forward: true,
            ..Default::default()
        };
        assert_eq!(
            resolve_commands(&forward_only, &params).engine_force,
            -params.engine_force
        );

        let backward_only = DriveInputs {
            backward: true,
            ..Default::default()
        };
        assert_eq!(
            resolve_commands(&backward_only, &params).engine_force,
            params.engine_force
        );

        // Forward dominates when both are held.
        let both = DriveInputs {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert_eq!(
            resolve_commands(&both, &params).engine_force,
            -params.engine_force
        );

        assert_eq!(
            resolve_commands(&DriveInputs::default(), &params).engine_force,
            0.0
        );
    }

    #[test]
    fn steering_precedence_and_symmetry() {
        let params = test_params();

        let left = DriveInputs {
            steer_left: true,
            ..Default::default()
        };
        assert_eq!(resolve_commands(&left, &params).steer_angle, params.steer_angle);

        let right = DriveInputs {
            steer_right: true,
            ..Default::default()
        };
        assert_eq!(
            resolve_commands(&right, &params).steer_angle,
            -params.steer_angle
        );

        let both = DriveInputs {
            steer_left: true,
            steer_right: true,
            ..Default::default()
        };
        assert_eq!(resolve_commands(&both, &params).steer_angle, params.steer_angle);

        assert_eq!(resolve_commands(&DriveInputs::default(), &params).steer_angle, 0.0);
    }

    #[test]
    fn steering_reaches_both_front_wheels_only() {
        let params = test_params();
        let body = BodyState::at_rest(Vec3::new(0.0, 0.5, 0.0), Quat::IDENTITY);
        let inputs = DriveInputs {
            steer_left: true,
            ..Default::default()
        };

        let out = drive_step(
            &params,
            &inputs,
            &body,
            &grounded_hits(&params),
            &[0.0; 4],
            DT,
        );

        assert_eq!(out.wheels[0].steer, params.steer_angle);
        assert_eq!(out.wheels[1].steer, params.steer_angle);
        assert_eq!(out.wheels[2].steer, 0.0);
        assert_eq!(out.wheels[3].steer, 0.0);
    }

    #[test]
    fn forward_input_accelerates_toward_negative_z() {
        let params = test_params();
        let body = BodyState::at_rest(Vec3::new(0.0, 0.5, 0.0), Quat::IDENTITY);
        let inputs = DriveInputs {
            forward: true,
            ..Default::default()
        };

        let out = drive_step(
            &params,
            &inputs,
            &body,
            &grounded_hits(&params),
            &[0.0; 4],
            DT,
        );

        assert!(out.delta_linear_velocity.z < 0.0);
    }

    #[test]
    fn left_steer_with_forward_motion_yaws_left() {
        let params = test_params();
        let mut body = BodyState::at_rest(Vec3::new(0.0, 0.5, 0.0), Quat::IDENTITY);
        body.linear_velocity = Vec3::new(0.0, 0.0, -10.0);
        let inputs = DriveInputs {
            steer_left: true,
            ..Default::default()
        };

        let out = drive_step(
            &params,
            &inputs,
            &body,
            &grounded_hits(&params),
            &[0.0; 4],
            DT,
        );

        // Counterclockwise about +Y is a left turn.
        assert!(out.delta_angular_velocity.y > 0.0);
    }

    #[test]
    fn brake_opposes_motion_without_reversing() {
        let params = test_params();
        let mut body = BodyState::at_rest(Vec3::new(0.0, 0.5, 0.0), Quat::IDENTITY);
        body.linear_velocity = Vec3::new(0.0, 0.0, -10.0);
        let inputs = DriveInputs {
            brake: true,
            ..Default::default()
        };

        let out = drive_step(
            &params,
            &inputs,
            &body,
            &grounded_hits(&params),
            &[0.0; 4],
            DT,
        );

        // Moving toward -Z, so braking pushes toward +Z.
        assert!(out.delta_linear_velocity.z > 0.0);
        // A tick of braking never exceeds the speed it opposes.
        assert!(out.delta_linear_velocity.z <= 10.0 + 1e-3);
    }

    #[test]
    fn all_false_inputs_issue_no_commands() {
        let params = test_params();
        let body = BodyState::at_rest(Vec3::new(0.0, 10.0, 0.0), Quat::IDENTITY);

        // Airborne, no inputs: nothing at all is applied.
        let out = drive_step(
            &params,
            &DriveInputs::default(),
            &body,
            &[None; 4],
            &[0.0; 4],
            DT,
        );
        assert_eq!(out.commands, DriveCommands::default());
        assert_eq!(out.delta_linear_velocity, Vec3::ZERO);
        assert_eq!(out.delta_angular_velocity, Vec3::ZERO);
        assert!(!out.grounded);
    }

    #[test]
    fn resting_body_receives_only_vertical_suspension() {
        let params = test_params();
        let body = BodyState::at_rest(Vec3::new(0.0, 0.5, 0.0), Quat::IDENTITY);

        // Grounded with no inputs and no motion: suspension pushes straight
        // up, nothing drives the car sideways or forward.
        let hits = grounded_hits(&params);
        let prev: Vec<f32> = hits
            .iter()
            .zip(&params.wheels)
            .map(|(h, w)| w.rest_length - (h.unwrap() - params.wheel_radius))
            .collect();
        let out = drive_step(&params, &DriveInputs::default(), &body, &hits, &prev, DT);

        assert!(out.grounded);
        assert!(out.delta_linear_velocity.y > 0.0);
        assert!(out.delta_linear_velocity.x.abs() < 1e-5);
        assert!(out.delta_linear_velocity.z.abs() < 1e-5);
    }

    #[test]
    fn suspension_force_is_never_negative() {
        let params = test_params();
        let body = BodyState::at_rest(Vec3::new(0.0, 0.5, 0.0), Quat::IDENTITY);

        // Rapid extension: compression drops from full travel to zero in one
        // tick. The damper term would be strongly negative; the spring must
        // not pull the chassis down.
        let hits: Vec<Option<f32>> = params
            .wheels
            .iter()
            .map(|w| Some(w.rest_length + params.wheel_radius))
            .collect();
        let prev: Vec<f32> = params.wheels.iter().map(|w| w.travel).collect();
        let out = drive_step(&params, &DriveInputs::default(), &body, &hits, &prev, DT);

        for wheel in &out.wheels {
            assert!(wheel.suspension_force >= 0.0);
        }
    }

    #[test]
    fn jump_applies_upward_impulse_only_when_grounded() {
        let params = test_params();
        let body = BodyState::at_rest(Vec3::new(0.0, 0.5, 0.0), Quat::IDENTITY);
        let inputs = DriveInputs {
            jump: true,
            ..Default::default()
        };

        // Previous compression matches the current one so the damper term
        // stays out of the comparison.
        let grounded = drive_step(
            &params,
            &inputs,
            &body,
            &grounded_hits(&params),
            &[0.125; 4],
            DT,
        );
        let airborne = drive_step(&params, &inputs, &body, &[None; 4], &[0.0; 4], DT);

        let expected = params.jump_impulse / params.chassis_mass;
        assert!((grounded.delta_linear_velocity.y - expected).abs() < expected * 0.5);
        assert_eq!(airborne.delta_linear_velocity, Vec3::ZERO);
    }

    #[test]
    fn reset_restores_spawn_pose_and_zeroes_motion() {
        let spawn_position = Vec3::new(0.0, 2.0, 0.0);
        let spawn_rotation = Quat::IDENTITY;

        let mut body = BodyState {
            position: Vec3::new(40.0, 1.0, -25.0),
            rotation: Quat::from_rotation_y(1.3) * Quat::from_rotation_x(0.4),
            linear_velocity: Vec3::new(5.0, -2.0, 8.0),
            angular_velocity: Vec3::new(0.3, 2.0, -0.7),
        };

        apply_reset(&mut body, spawn_position, spawn_rotation);

        assert_eq!(body.position, spawn_position);
        assert_eq!(body.rotation, spawn_rotation);
        assert_eq!(body.linear_velocity, Vec3::ZERO);
        assert_eq!(body.angular_velocity, Vec3::ZERO);
    }

    #[test]
    fn reset_overrides_drive_commands_in_the_same_tick() {
        let params = test_params();
        let spawn_position = Vec3::new(0.0, 2.0, 0.0);
        let spawn_rotation = Quat::IDENTITY;

        let mut body = BodyState {
            position: Vec3::new(22.0, 0.6, -14.0),
            rotation: Quat::from_rotation_y(0.8),
            linear_velocity: Vec3::new(-6.0, 0.0, 9.0),
            angular_velocity: Vec3::new(0.0, 1.5, 0.0),
        };

        // Every drive flag held together with reset.
        let inputs = DriveInputs {
            forward: true,
            steer_left: true,
            brake: true,
            jump: true,
            reset: true,
            ..Default::default()
        };

        let out = drive_step(
            &params,
            &inputs,
            &body,
            &grounded_hits(&params),
            &[0.0; 4],
            DT,
        );

        // No forces, no commands: the drive flags lose outright.
        assert!(out.commands.reset);
        assert_eq!(out.commands.engine_force, 0.0);
        assert_eq!(out.commands.steer_angle, 0.0);
        assert_eq!(out.commands.brake_torque, 0.0);
        assert!(!out.commands.jump);
        assert_eq!(out.delta_linear_velocity, Vec3::ZERO);
        assert_eq!(out.delta_angular_velocity, Vec3::ZERO);
        for wheel in &out.wheels {
            assert_eq!(wheel.steer, 0.0);
            assert_eq!(wheel.suspension_force, 0.0);
        }

        apply_reset(&mut body, spawn_position, spawn_rotation);
        assert_eq!(body.position, spawn_position);
        assert_eq!(body.rotation, spawn_rotation);
        assert_eq!(body.linear_velocity, Vec3::ZERO);
        assert_eq!(body.angular_velocity, Vec3::ZERO);
    }

    #[test]
    fn camera_follow_converges_monotonically() {
        let target = Vec3::new(12.0, 10.0, 12.0);
        let mut camera = Vec3::new(-30.0, 4.0, 55.0);
        let mut last_distance = camera.distance(target);

        for _ in 0..200 {
            camera = follow_step(camera, target, 0.1);
            let distance = camera.distance(target);
            if distance < 1e-4 {
                return;
            }
            assert!(distance < last_distance);
            last_distance = distance;
        }
        assert!(last_distance < 1e-2);
    }
}
