//! Ambient camera sway from the pointer (desktop) or device tilt (touch).

use glam::{Vec2, Vec3};

/// Smoothed offset applied to the camera rig on top of the scripted path.
#[derive(Debug, Clone)]
pub struct ParallaxRig {
    /// Current offset added to the camera eye.
    pub offset: Vec3,
    /// Pointer position normalized to [-1, 1], Y up.
    cursor: Vec2,
    /// Device tilt mapped to [-1, 1] per axis.
    orientation: Vec3,
    /// Touch devices follow orientation instead of the pointer.
    touch: bool,
    /// Max pointer sway in world units at full distance.
    strength: f32,
    /// Fraction of the remaining gap closed per 60 Hz frame.
    smoothing: f32,
}

impl ParallaxRig {
    pub fn new(strength: f32, smoothing: f32) -> Self {
        Self {
            offset: Vec3::ZERO,
            cursor: Vec2::ZERO,
            orientation: Vec3::ZERO,
            touch: false,
            strength,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    pub fn set_touch(&mut self, touch: bool) {
        self.touch = touch;
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }

    /// Record a pointer position in pixels within a `viewport`-sized canvas.
    pub fn pointer_move(&mut self, x: f32, y: f32, viewport: Vec2) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        self.cursor = Vec2::new((x / viewport.x - 0.5) * 2.0, (y / viewport.y - 0.5) * -2.0);
    }

    /// Record device orientation angles in degrees.
    pub fn set_orientation(&mut self, alpha: f32, beta: f32, gamma: f32) {
        let a = alpha / 360.0 - 0.5;
        let b = (beta + 180.0) / 360.0 - 0.5;
        let g = (gamma + 90.0) / 180.0 - 0.5;
        self.orientation = Vec3::new(g * 2.0, b * 2.0, a * 2.0);
    }

    /// Where the offset is heading this frame.
    ///
    /// Pointer sway grows with the camera's distance from the core,
    /// saturating at the galaxy radius.
    pub fn target(&self, camera_position: Vec3, galaxy_radius: f32) -> Vec3 {
        if self.touch {
            return self.orientation;
        }
        let distance = if galaxy_radius > 0.0 {
            camera_position.length() / galaxy_radius
        } else {
            1.0
        };
        let normal_distance = if distance.is_finite() { distance.clamp(0.0, 1.0).sqrt() } else { 1.0 };
        Vec3::new(
            self.cursor.x * self.strength * normal_distance,
            self.cursor.y * self.strength * normal_distance,
            self.offset.z,
        )
    }

    /// Ease the offset toward its target.
    pub fn update(&mut self, camera_position: Vec3, galaxy_radius: f32, dt: f32) {
        let target = self.target(camera_position, galaxy_radius);
        let lerp_factor = 1.0 - (1.0 - self.smoothing).powf(dt * 60.0);
        self.offset += (target - self.offset) * lerp_factor;
    }
}

impl Default for ParallaxRig {
    fn default() -> Self {
        Self::new(0.25, 0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_normalized_y_up() {
        let mut rig = ParallaxRig::default();
        rig.pointer_move(0.0, 0.0, Vec2::new(800.0, 600.0));
        assert_eq!(rig.cursor(), Vec2::new(-1.0, 1.0));
        rig.pointer_move(800.0, 600.0, Vec2::new(800.0, 600.0));
        assert_eq!(rig.cursor(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn zero_viewport_ignored() {
        let mut rig = ParallaxRig::default();
        rig.pointer_move(10.0, 10.0, Vec2::ZERO);
        assert_eq!(rig.cursor(), Vec2::ZERO);
    }

    #[test]
    fn orientation_mapping() {
        let mut rig = ParallaxRig::default();
        rig.set_orientation(180.0, 0.0, 0.0);
        assert!(rig.orientation().abs_diff_eq(Vec3::ZERO, 1e-6));
        rig.set_orientation(360.0, 180.0, 90.0);
        assert!(rig.orientation().abs_diff_eq(Vec3::ONE, 1e-6));
    }

    #[test]
    fn sway_scales_with_distance() {
        let mut rig = ParallaxRig::default();
        rig.pointer_move(800.0, 0.0, Vec2::new(800.0, 600.0));
        let far = rig.target(Vec3::new(10.0, 0.0, 0.0), 5.0);
        assert!((far.x - 0.25).abs() < 1e-6);
        let near = rig.target(Vec3::new(1.25, 0.0, 0.0), 5.0);
        assert!((near.x - 0.125).abs() < 1e-6);
    }

    #[test]
    fn zero_radius_stays_finite() {
        let mut rig = ParallaxRig::default();
        rig.pointer_move(800.0, 0.0, Vec2::new(800.0, 600.0));
        rig.update(Vec3::splat(3.0), 0.0, 1.0 / 60.0);
        assert!(rig.offset.is_finite());
    }

    #[test]
    fn offset_moves_one_percent_per_frame() {
        let mut rig = ParallaxRig::default();
        rig.set_touch(true);
        rig.set_orientation(360.0, 180.0, 90.0);
        rig.update(Vec3::ZERO, 5.0, 1.0 / 60.0);
        assert!(rig.offset.abs_diff_eq(Vec3::splat(0.01), 1e-5));
    }
}
