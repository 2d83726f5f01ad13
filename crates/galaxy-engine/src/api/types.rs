use glam::Vec3;

use crate::extensions::tween::TweenKey;

/// The animated values the camera path drives.
/// Tweens write here; the viewer copies them into the camera and group each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LiveView {
    pub camera_position: Vec3,
    pub look_at: Vec3,
    /// Euler XYZ rotation of the galaxy group.
    pub group_rotation: Vec3,
}

impl LiveView {
    pub fn get(&self, key: TweenKey) -> Vec3 {
        match key {
            TweenKey::CameraPosition => self.camera_position,
            TweenKey::LookAt => self.look_at,
            TweenKey::GroupRotation => self.group_rotation,
        }
    }

    pub fn set(&mut self, key: TweenKey, value: Vec3) {
        match key {
            TweenKey::CameraPosition => self.camera_position = value,
            TweenKey::LookAt => self.look_at = value,
            TweenKey::GroupRotation => self.group_rotation = value,
        }
    }
}

/// Spatial-audio listener placement, published every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListenerPose {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
}

impl Default for ListenerPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }
}
