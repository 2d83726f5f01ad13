// extensions/tween.rs
//
// Tween system: animates the live camera values, one tween per key.
// Starting a tween on a key that is already animating replaces it.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.start(TweenKey::CameraPosition, Tween::new(from, to, 10.0, Easing::QuadInOut));
//   tweens.tick(dt, &mut live);  // Advances all tweens, writes live values

use std::collections::HashMap;

use glam::Vec3;

use super::easing::{ease_vec3, Easing};
use crate::api::types::LiveView;

/// Which live value a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TweenKey {
    /// The camera position (before parallax offset).
    CameraPosition,
    /// The point the camera looks at.
    LookAt,
    /// Euler XYZ rotation of the galaxy group.
    GroupRotation,
}

/// A single Vec3 tween.
#[derive(Debug, Clone)]
pub struct Tween {
    pub from: Vec3,
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    /// Elapsed time.
    pub elapsed: f32,
    /// Easing function.
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Eased value at the current progress.
    pub fn value(&self) -> Vec3 {
        ease_vec3(self.from, self.to, self.progress(), self.easing)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Manages the active tweens, at most one per key.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: HashMap<TweenKey, Tween>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween for `key`. Returns true if an in-flight tween was superseded.
    pub fn start(&mut self, key: TweenKey, tween: Tween) -> bool {
        self.tweens.insert(key, tween).is_some()
    }

    /// Drop the tween for `key`, leaving the live value where it is.
    pub fn cancel(&mut self, key: TweenKey) -> bool {
        self.tweens.remove(&key).is_some()
    }

    pub fn get(&self, key: TweenKey) -> Option<&Tween> {
        self.tweens.get(&key)
    }

    pub fn is_active(&self, key: TweenKey) -> bool {
        self.tweens.contains_key(&key)
    }

    /// Advance all tweens and write their values into `live`.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, dt: f32, live: &mut LiveView) -> usize {
        let mut completed = 0;
        self.tweens.retain(|&key, tween| {
            tween.elapsed += dt;
            live.set(key, tween.value());
            if tween.is_complete() {
                completed += 1;
                false
            } else {
                true
            }
        });
        completed
    }

    /// Number of active tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether there are no active tweens.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_camera_position() {
        let mut tweens = TweenState::new();
        let mut live = LiveView::default();
        live.camera_position = Vec3::ZERO;

        tweens.start(
            TweenKey::CameraPosition,
            Tween::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 1.0, Easing::Linear),
        );

        tweens.tick(0.5, &mut live);
        assert!((live.camera_position.x - 5.0).abs() < 1e-4);

        tweens.tick(0.5, &mut live);
        assert!((live.camera_position.x - 10.0).abs() < 1e-4);

        // Tween should be removed
        assert!(tweens.is_empty());
    }

    #[test]
    fn tweens_only_touch_their_key() {
        let mut tweens = TweenState::new();
        let mut live = LiveView::default();
        live.look_at = Vec3::ONE;

        tweens.start(
            TweenKey::GroupRotation,
            Tween::new(Vec3::ZERO, Vec3::Z, 1.0, Easing::QuadInOut),
        );
        tweens.tick(0.25, &mut live);

        assert_eq!(live.look_at, Vec3::ONE);
        assert!(live.group_rotation.z > 0.0 && live.group_rotation.z < 0.25);
    }

    #[test]
    fn start_supersedes_running_tween() {
        let mut tweens = TweenState::new();
        let mut live = LiveView::default();

        let first = Tween::new(Vec3::ZERO, Vec3::X * 10.0, 1.0, Easing::Linear);
        assert!(!tweens.start(TweenKey::LookAt, first));
        tweens.tick(0.5, &mut live);

        // Restart from wherever the live value is now.
        let restart = Tween::new(live.look_at, Vec3::X * -10.0, 1.0, Easing::Linear);
        assert!(tweens.start(TweenKey::LookAt, restart));
        assert_eq!(tweens.len(), 1);

        tweens.tick(0.5, &mut live);
        assert!((live.look_at.x - (-2.5)).abs() < 1e-4);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut tweens = TweenState::new();
        let mut live = LiveView::default();
        tweens.start(TweenKey::CameraPosition, Tween::new(Vec3::ZERO, Vec3::ONE, 0.0, Easing::QuadInOut));
        assert_eq!(tweens.tick(0.0, &mut live), 1);
        assert_eq!(live.camera_position, Vec3::ONE);
    }

    #[test]
    fn cancel_leaves_value() {
        let mut tweens = TweenState::new();
        let mut live = LiveView::default();
        tweens.start(TweenKey::CameraPosition, Tween::new(Vec3::ZERO, Vec3::X, 1.0, Easing::Linear));
        tweens.tick(0.5, &mut live);
        assert!(tweens.cancel(TweenKey::CameraPosition));
        tweens.tick(0.5, &mut live);
        assert!((live.camera_position.x - 0.5).abs() < 1e-4);
    }
}
