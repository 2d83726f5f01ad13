use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};
use crate::generator::params::GalaxyParameters;

/// Built-in presets shipped with the crate.
const BUILTIN_JSON: &str = include_str!("presets.json");

/// Ordered list of selectable parameter sets.
/// Loaded from JSON; the panel's preset dropdown indexes into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetLibrary {
    pub presets: Vec<GalaxyParameters>,
}

impl PresetLibrary {
    /// Parse a library from a JSON string. An empty list is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let library: PresetLibrary = serde_json::from_str(json)?;
        if library.presets.is_empty() {
            return Err(GalaxyError::NoPresets);
        }
        Ok(library)
    }

    /// The seven presets bundled with the viewer.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_JSON) {
            Ok(library) => library,
            Err(err) => {
                log::error!("bundled presets failed to parse: {}", err);
                Self { presets: vec![GalaxyParameters::default()] }
            }
        }
    }

    pub fn get(&self, index: usize) -> Result<&GalaxyParameters> {
        self.presets.get(index).ok_or(GalaxyError::PresetOutOfRange {
            index,
            count: self.presets.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn builtin_presets_parse() {
        let lib = PresetLibrary::from_json(BUILTIN_JSON).unwrap();
        assert_eq!(lib.len(), 7);

        let first = lib.get(0).unwrap();
        assert_eq!(first.particle_count, 100_000);
        assert_eq!(first.branches, 3);
        assert_eq!(first.inside_color.to_hex(), "#ff6030");
        assert!(!first.texture_enabled);

        let multi = lib.get(3).unwrap();
        assert_eq!(multi.instance_count, 10);

        let tilted = lib.get(5).unwrap();
        assert!((tilted.initial_rotation - FRAC_PI_4).abs() < 1e-6);
        assert_eq!(tilted.initial_camera_position.y, 2.5);
    }

    #[test]
    fn preset_index_out_of_range() {
        let lib = PresetLibrary::builtin();
        assert!(matches!(
            lib.get(7),
            Err(GalaxyError::PresetOutOfRange { index: 7, count: 7 })
        ));
    }

    #[test]
    fn empty_library_rejected() {
        assert!(matches!(
            PresetLibrary::from_json(r#"{ "presets": [] }"#),
            Err(GalaxyError::NoPresets)
        ));
    }

    #[test]
    fn optional_fields_default() {
        let json = r##"{
            "presets": [{
                "particle_count": 10,
                "particle_size": 0.01,
                "radius": 1,
                "branches": 2,
                "spin": 0,
                "randomness": 0,
                "randomness_power": 1,
                "inside_color": "#000000",
                "outside_color": "#ffffff",
                "initial_camera_position": [0, 0, 3]
            }]
        }"##;
        let lib = PresetLibrary::from_json(json).unwrap();
        let p = lib.get(0).unwrap();
        assert_eq!(p.instance_count, 1);
        assert_eq!(p.texture_index, 0);
        assert_eq!(p.initial_rotation, 0.0);
    }
}
