//! Wheel visual sync.
//!
//! Copies the solver's per-wheel output onto the wheel child transforms after
//! each fixed tick. Pure read-and-apply: suspension placement from ray
//! distance, yaw from steering, roll accumulated from ground speed. Wheel
//! visuals carry no state of their own.

use bevy::prelude::*;

use super::components::{Vehicle, VehicleConfig, VehicleState, WheelVisual};

/// Place each wheel visual from the solved per-wheel state.
pub fn wheel_visual_sync_system(
    vehicle_query: Query<(&VehicleConfig, &VehicleState), With<Vehicle>>,
    mut wheel_query: Query<(&WheelVisual, &ChildOf, &mut Transform)>,
) {
    for (visual, child_of, mut transform) in &mut wheel_query {
        let Ok((config, state)) = vehicle_query.get(child_of.parent()) else {
            continue;
        };
        let params = &config.0;

        let Some(wheel) = params.wheels.get(visual.index) else {
            continue;
        };
        // Before the first tick there is no solved state yet; leave the
        // wheel at its spawn placement.
        let Some(contact) = state.wheels.get(visual.index) else {
            continue;
        };

        // The wheel hangs below the connection point by the solved
        // suspension length; at full droop that is rest length plus travel.
        let suspension_length = (contact.ray_distance - params.wheel_radius)
            .clamp(0.0, wheel.rest_length + wheel.travel);

        transform.translation = wheel.offset - Vec3::Y * suspension_length;

        // Yaw from steering, roll about the axle from accumulated ground
        // speed. Forward motion (-Z) rolls the wheel top toward -Z.
        let roll = state.wheel_roll.get(visual.index).copied().unwrap_or(0.0);
        transform.rotation = Quat::from_rotation_y(contact.steer) * Quat::from_rotation_x(-roll);
    }
}
