//! Camera systems.

mod follow;

use bevy::prelude::*;

pub use follow::{FollowCameraConfig, FollowedEntity};

/// Plugin for camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(follow::FollowCameraPlugin);
    }
}
