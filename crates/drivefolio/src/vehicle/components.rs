//! Vehicle component definitions.

use bevy::prelude::*;

use super::core::{DriveInputs, VehicleParams, WheelContact};

/// Marker and metadata for the player car.
#[derive(Component, Clone)]
pub struct Vehicle {
    /// Preset display name.
    pub name: String,
    /// Short description of the preset's character.
    pub description: String,
}

/// The active tuning parameters, editable live from the diagnostics tab.
#[derive(Component, Clone)]
pub struct VehicleConfig(pub VehicleParams);

/// Drive flags sampled from the input layer, consumed by the fixed tick.
///
/// Owned by the vehicle entity rather than read from the keyboard directly so
/// the controller stays testable without a live input device.
#[derive(Component, Default)]
pub struct VehicleInput(pub DriveInputs);

/// Runtime controller state, rebuilt every tick from the solver output.
#[derive(Component, Default)]
pub struct VehicleState {
    /// Per-wheel solved contact state, same order as the config's wheels.
    pub wheels: Vec<WheelContact>,
    /// Last tick's compression per wheel, for the damper term.
    pub prev_compression: Vec<f32>,
    /// Accumulated visual roll angle per wheel (radians).
    pub wheel_roll: Vec<f32>,
    /// True when any wheel has ground contact.
    pub grounded: bool,
    /// Chassis speed magnitude (m/s).
    pub speed: f32,
    /// Total force applied last tick (diagnostics).
    pub total_force: Vec3,
    /// Total torque applied last tick (diagnostics).
    pub total_torque: Vec3,
}

/// Spawn pose recorded when the car is created; the hard-reset target.
#[derive(Component, Clone, Copy)]
pub struct SpawnPose {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Visual wheel, child of the chassis entity.
///
/// Its transform is written only by the wheel sync system from the solver's
/// per-wheel output, never simulated independently.
#[derive(Component)]
pub struct WheelVisual {
    /// Index into the config's wheel list.
    pub index: usize,
}
