//! Follow camera.
//!
//! Third-person camera that eases toward a fixed offset from the followed
//! entity and looks at it. Exponential smoothing with a constant per-tick
//! blend factor; no collision or occlusion handling, the camera may clip
//! through geometry.

use bevy::prelude::*;

use crate::vehicle::core::follow_step;

/// Plugin for the follow camera.
pub(super) struct FollowCameraPlugin;

impl Plugin for FollowCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, follow_camera_system);
    }
}

/// Marker for the entity the camera follows.
#[derive(Component)]
pub struct FollowedEntity;

/// Follow tuning, carried by the followed entity.
#[derive(Component, Clone)]
pub struct FollowCameraConfig {
    /// World-space offset from the followed entity to the camera.
    pub offset: Vec3,
    /// Per-tick blend factor toward the target position.
    pub blend: f32,
}

impl Default for FollowCameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(10.0, 10.0, 10.0),
            blend: 0.1,
        }
    }
}

/// Ease the camera toward `target + offset`, then look at the target.
///
/// The followed entity's transform is the single source of truth for the
/// camera target; no simulation state is read back here. Skips silently
/// until both the camera and the target exist.
fn follow_camera_system(
    mut camera_query: Query<&mut Transform, (With<Camera3d>, Without<FollowedEntity>)>,
    target_query: Query<(&Transform, &FollowCameraConfig), With<FollowedEntity>>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };
    let Ok((target_transform, config)) = target_query.single() else {
        return;
    };

    let target = target_transform.translation;
    camera_transform.translation =
        follow_step(camera_transform.translation, target + config.offset, config.blend);
    camera_transform.look_at(target, Vec3::Y);
}
