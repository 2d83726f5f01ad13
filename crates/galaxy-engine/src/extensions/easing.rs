// extensions/easing.rs
//
// Pure easing functions for camera-path interpolation.
// No dependencies on the generator or viewer.

use std::f32::consts::PI;

use glam::Vec3;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Slow start and end. The camera path default.
    QuadInOut,
    /// Stronger slow start.
    CubicIn,
    /// Stronger slow end.
    CubicOut,
    /// Stronger slow start and end.
    CubicInOut,
    /// Sine wave easing (smooth).
    SineInOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t` in [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }

            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }

            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Parse a gsap-style ease name (`"power1.inOut"`, `"sine.inOut"`, `"none"`).
    /// Also accepts the variant names (`"QuadInOut"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let easing = match name {
            "none" | "linear" | "Linear" => Easing::Linear,
            "power1.in" | "quad.in" | "QuadIn" => Easing::QuadIn,
            "power1.out" | "power1" | "quad.out" | "QuadOut" => Easing::QuadOut,
            "power1.inOut" | "quad.inOut" | "QuadInOut" => Easing::QuadInOut,
            "power2.in" | "cubic.in" | "CubicIn" => Easing::CubicIn,
            "power2.out" | "power2" | "cubic.out" | "CubicOut" => Easing::CubicOut,
            "power2.inOut" | "cubic.inOut" | "CubicInOut" => Easing::CubicInOut,
            "sine.inOut" | "SineInOut" => Easing::SineInOut,
            _ => return None,
        };
        Some(easing)
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Interpolate Vec3 with easing.
#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    a.lerp(b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn in_out_is_symmetric() {
        for easing in [Easing::QuadInOut, Easing::CubicInOut, Easing::SineInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-6);
            let a = easing.apply(0.2);
            let b = easing.apply(0.8);
            assert!((a + b - 1.0).abs() < 1e-5, "{:?}: {} + {}", easing, a, b);
        }
    }

    #[test]
    fn quad_in_out_slow_start() {
        assert!(Easing::QuadInOut.apply(0.1) < 0.1);
    }

    #[test]
    fn gsap_names() {
        assert_eq!(Easing::from_name("power1.inOut"), Some(Easing::QuadInOut));
        assert_eq!(Easing::from_name("none"), Some(Easing::Linear));
        assert_eq!(Easing::from_name("elastic.out"), None);
    }

    #[test]
    fn ease_vec3_interpolates() {
        let v = ease_vec3(Vec3::ZERO, Vec3::new(2.0, 4.0, -6.0), 0.5, Easing::Linear);
        assert!((v - Vec3::new(1.0, 2.0, -3.0)).length() < 1e-6);
    }
}
