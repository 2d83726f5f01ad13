//! Scripted camera path: a fixed loop of keyframes, one step per trigger.

use std::f32::consts::FRAC_PI_4;

use glam::Vec3;

use crate::api::types::LiveView;
use crate::extensions::easing::Easing;
use crate::extensions::tween::{Tween, TweenKey, TweenState};

/// Seconds each camera move takes.
pub const DEFAULT_DURATION: f32 = 10.0;

/// Where the camera, its target and the galaxy group should end up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraKeyframe {
    pub camera_position: Vec3,
    pub look_at: Vec3,
    /// Euler XYZ rotation of the galaxy group.
    pub group_rotation: Vec3,
}

impl CameraKeyframe {
    pub fn new(camera_position: Vec3, look_at: Vec3, group_rotation: Vec3) -> Self {
        Self { camera_position, look_at, group_rotation }
    }

    pub fn get(&self, key: TweenKey) -> Vec3 {
        match key {
            TweenKey::CameraPosition => self.camera_position,
            TweenKey::LookAt => self.look_at,
            TweenKey::GroupRotation => self.group_rotation,
        }
    }
}

/// The four-stop tour: face-on, fly past an arm, dive to the core, back out.
pub fn default_keyframes() -> Vec<CameraKeyframe> {
    vec![
        CameraKeyframe::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::new(0.0, 0.0, FRAC_PI_4)),
        CameraKeyframe::new(Vec3::new(0.8, 0.7, -3.0), Vec3::new(2.0, 2.0, -4.0), Vec3::ZERO),
        CameraKeyframe::new(Vec3::new(1.0, 1.0, 0.0), Vec3::ZERO, Vec3::ZERO),
        CameraKeyframe::new(Vec3::new(3.0, 3.0, 3.0), Vec3::ZERO, Vec3::ZERO),
    ]
}

/// What one `advance` call did.
#[derive(Debug, Clone, PartialEq)]
pub struct Advance {
    /// Keyframe the tweens head toward.
    pub index: usize,
    /// Keys that got a new tween; keys already at their target are skipped.
    pub started: Vec<TweenKey>,
}

/// Cycles through keyframes, issuing tweens toward each in turn.
///
/// Tweens are fire-and-forget: a new `advance` before the previous move
/// finishes restarts each key from its current live value.
#[derive(Debug, Clone)]
pub struct CameraPathSequencer {
    keyframes: Vec<CameraKeyframe>,
    current_index: usize,
    duration: f32,
    easing: Easing,
}

impl CameraPathSequencer {
    pub fn new(keyframes: Vec<CameraKeyframe>) -> Self {
        Self {
            keyframes,
            current_index: 0,
            duration: DEFAULT_DURATION,
            easing: Easing::QuadInOut,
        }
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Tween from `live` toward the current keyframe, then move the cursor.
    /// Returns `None` when there are no keyframes.
    pub fn advance(&mut self, live: &LiveView, tweens: &mut TweenState) -> Option<Advance> {
        let keyframe = *self.keyframes.get(self.current_index)?;
        let index = self.current_index;

        let mut started = Vec::with_capacity(3);
        for key in [TweenKey::GroupRotation, TweenKey::CameraPosition, TweenKey::LookAt] {
            let from = live.get(key);
            let to = keyframe.get(key);
            if from == to {
                continue;
            }
            tweens.start(key, Tween::new(from, to, self.duration, self.easing));
            started.push(key);
        }

        self.current_index = (self.current_index + 1) % self.keyframes.len();
        log::debug!("camera path: heading to keyframe {} ({} tweens)", index, started.len());
        Some(Advance { index, started })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn keyframes(&self) -> &[CameraKeyframe] {
        &self.keyframes
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}

impl Default for CameraPathSequencer {
    fn default() -> Self {
        Self::new(default_keyframes())
    }
}
