use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extensions::easing::Easing;

/// Viewer configuration, provided by the page at startup.
/// Every field is optional in JSON and falls back to the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Preset shown on load (default: 5).
    pub start_preset: usize,
    /// Generator seed (default: 42).
    pub seed: u64,
    /// Seconds per camera move (default: 10).
    pub tween_duration: f32,
    /// gsap-style ease name for camera moves (default: "power1.inOut").
    pub easing: String,
    /// Vertical field of view in degrees (default: 75).
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Max pointer sway in world units (default: 0.25).
    pub parallax_strength: f32,
    /// Fraction of the sway gap closed per 60 Hz frame (default: 0.01).
    pub parallax_smoothing: f32,
    /// Longest frame delta simulated, in seconds (default: 0.25).
    pub max_frame_dt: f32,
    /// Show the parameter panel and enable orbit controls.
    pub debug: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            start_preset: 5,
            seed: 42,
            tween_duration: 10.0,
            easing: "power1.inOut".to_string(),
            fov_y_deg: 75.0,
            near: 0.001,
            far: 100.0,
            parallax_strength: 0.25,
            parallax_smoothing: 0.01,
            max_frame_dt: 0.25,
            debug: false,
        }
    }
}

impl ViewerConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolved easing; unknown names fall back to `QuadInOut`.
    pub fn easing(&self) -> Easing {
        Easing::from_name(&self.easing).unwrap_or_else(|| {
            log::warn!("unknown easing {:?}, using power1.inOut", self.easing);
            Easing::QuadInOut
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config = ViewerConfig::from_json(r#"{ "start_preset": 2, "debug": true }"#).unwrap();
        assert_eq!(config.start_preset, 2);
        assert!(config.debug);
        assert_eq!(config.tween_duration, 10.0);
        assert_eq!(config.easing(), Easing::QuadInOut);
    }

    #[test]
    fn unknown_easing_falls_back() {
        let config = ViewerConfig { easing: "wobble".into(), ..ViewerConfig::default() };
        assert_eq!(config.easing(), Easing::QuadInOut);
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(ViewerConfig::from_json("{ start_preset: }").is_err());
    }
}
