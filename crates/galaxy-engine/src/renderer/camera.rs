use glam::{Mat4, Vec3};

use crate::api::types::ListenerPose;

/// Perspective camera orbiting the galaxy.
/// `position` is the scripted location; `rig_offset` is the parallax sway on top of it.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    /// Point the camera looks at, in world space.
    pub target: Vec3,
    pub up: Vec3,
    /// Added to `position` to get the eye (camera group offset).
    pub rig_offset: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::splat(3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            rig_offset: Vec3::ZERO,
            fov_y_deg,
            aspect,
            near,
            far,
        }
    }

    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        self.position + self.rig_offset
    }

    /// Unit view direction. Falls back to -Z when eye and target coincide.
    pub fn direction(&self) -> Vec3 {
        let dir = (self.target - self.eye()).normalize_or_zero();
        if dir == Vec3::ZERO { Vec3::NEG_Z } else { dir }
    }

    pub fn view_matrix(&self) -> Mat4 {
        let dir = self.direction();
        // Looking straight along `up` leaves the basis undefined; borrow Z instead.
        let up = if dir.cross(self.up).length_squared() < 1e-12 { Vec3::Z } else { self.up };
        Mat4::look_to_rh(self.eye(), dir, up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect.max(1e-6), self.near, self.far)
    }

    /// Update the aspect ratio from a canvas size in pixels.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Snap to `position`, looking at `target`.
    pub fn look_at(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    /// Where the spatial-audio listener sits and faces.
    pub fn listener_pose(&self) -> ListenerPose {
        ListenerPose {
            position: self.position,
            forward: self.direction(),
            up: self.up,
        }
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(75.0, 1.0, 0.001, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_points_at_target() {
        let mut cam = PerspectiveCamera::default();
        cam.look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO);
        assert!(cam.direction().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn degenerate_direction_falls_back() {
        let mut cam = PerspectiveCamera::default();
        cam.look_at(Vec3::ONE, Vec3::ONE);
        assert_eq!(cam.direction(), Vec3::NEG_Z);
    }

    #[test]
    fn view_matrix_maps_target_forward() {
        let mut cam = PerspectiveCamera::default();
        cam.look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO);
        let p = cam.view_matrix().transform_point3(Vec3::ZERO);
        // Right-handed view space looks down -Z.
        assert!((p.z + 3.0).abs() < 1e-5);
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
    }

    #[test]
    fn top_down_view_is_finite() {
        let mut cam = PerspectiveCamera::default();
        cam.look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
        assert!(cam.view_matrix().is_finite());
    }

    #[test]
    fn rig_offset_moves_eye_not_position() {
        let mut cam = PerspectiveCamera::default();
        cam.rig_offset = Vec3::new(0.1, 0.0, 0.0);
        assert!(cam.eye().abs_diff_eq(Vec3::new(3.1, 3.0, 3.0), 1e-6));
        assert_eq!(cam.listener_pose().position, Vec3::splat(3.0));
    }

    #[test]
    fn projection_maps_clip_planes_to_unit_depth() {
        let cam = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        let proj = cam.projection_matrix();
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -0.1));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -100.0));
        assert!(near.z.abs() < 1e-4, "near depth {}", near.z);
        assert!((far.z - 1.0).abs() < 1e-4, "far depth {}", far.z);
    }

    #[test]
    fn projection_narrows_x_with_wider_aspect() {
        let square = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0);
        let wide = PerspectiveCamera::new(75.0, 2.0, 0.1, 100.0);
        let p = Vec3::new(0.5, 0.5, -2.0);
        let a = square.projection_matrix().project_point3(p);
        let b = wide.projection_matrix().project_point3(p);
        assert!((a.x - 2.0 * b.x).abs() < 1e-5);
        assert!((a.y - b.y).abs() < 1e-6);
    }

    #[test]
    fn resize_sets_aspect() {
        let mut cam = PerspectiveCamera::default();
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        cam.resize(0.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
