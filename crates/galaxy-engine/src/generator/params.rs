//! Galaxy parameter set, colors, and field-level edits coming from the GUI.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};

/// Linear RGB color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GalaxyError::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| GalaxyError::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    /// Channel-wise linear interpolation toward `other`.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Rgb {
    type Error = GalaxyError;

    fn try_from(value: String) -> Result<Self> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// Allowed ranges for GUI-editable fields, as `(min, max)` inclusive.
pub mod limits {
    pub const PARTICLE_COUNT: (f64, f64) = (1.0, 1_000_000.0);
    pub const PARTICLE_SIZE: (f64, f64) = (0.001, 0.1);
    pub const RADIUS: (f64, f64) = (0.01, 20.0);
    pub const BRANCHES: (f64, f64) = (2.0, 20.0);
    pub const SPIN: (f64, f64) = (-5.0, 5.0);
    pub const RANDOMNESS: (f64, f64) = (0.0, 2.0);
    pub const RANDOMNESS_POWER: (f64, f64) = (1.0, 10.0);
    /// Number of particle sprite textures the page ships.
    pub const TEXTURE_COUNT: u32 = 13;
    pub const INSTANCE_COUNT: (f64, f64) = (1.0, 10.0);
}

/// Everything the generator needs to build one galaxy system.
///
/// Replaced as a unit on preset switch, edited field-by-field otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalaxyParameters {
    pub particle_count: u32,
    /// Render hint only.
    pub particle_size: f32,
    pub radius: f32,
    pub branches: u32,
    /// Radians of twist per unit radius.
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,
    pub inside_color: Rgb,
    pub outside_color: Rgb,
    #[serde(default)]
    pub texture_enabled: bool,
    #[serde(default)]
    pub texture_index: u32,
    /// Number of rotated copies ("galaxies").
    #[serde(default = "default_instance_count")]
    pub instance_count: u32,
    pub initial_camera_position: Vec3,
    #[serde(default)]
    pub initial_rotation: f32,
}

fn default_instance_count() -> u32 {
    1
}

impl Default for GalaxyParameters {
    fn default() -> Self {
        Self {
            particle_count: 100_000,
            particle_size: 0.01,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            inside_color: Rgb::new(1.0, 96.0 / 255.0, 48.0 / 255.0),
            outside_color: Rgb::new(27.0 / 255.0, 57.0 / 255.0, 132.0 / 255.0),
            texture_enabled: false,
            texture_index: 0,
            instance_count: 1,
            initial_camera_position: Vec3::splat(3.0),
            initial_rotation: 0.0,
        }
    }
}

/// A single field edit from a GUI binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamUpdate {
    ParticleCount(u32),
    ParticleSize(f32),
    Radius(f32),
    Branches(u32),
    Spin(f32),
    Randomness(f32),
    RandomnessPower(f32),
    InsideColor(Rgb),
    OutsideColor(Rgb),
    TextureEnabled(bool),
    TextureIndex(u32),
    InstanceCount(u32),
}

impl ParamUpdate {
    /// Map a numeric `(field, value)` notification onto an update.
    ///
    /// Accepts the panel's field names (`count`, `randomnessPower`,
    /// `galaxies`, ...) as well as the struct's snake_case names.
    pub fn from_field(field: &str, value: f64) -> Result<Self> {
        let name = canonical_field(field)?;
        if !value.is_finite() {
            return Err(GalaxyError::NotFinite { field: name });
        }
        let as_u32 = |v: f64| v.round().clamp(0.0, u32::MAX as f64) as u32;
        let update = match name {
            "particle_count" => ParamUpdate::ParticleCount(as_u32(value)),
            "particle_size" => ParamUpdate::ParticleSize(value as f32),
            "radius" => ParamUpdate::Radius(value as f32),
            "branches" => ParamUpdate::Branches(as_u32(value)),
            "spin" => ParamUpdate::Spin(value as f32),
            "randomness" => ParamUpdate::Randomness(value as f32),
            "randomness_power" => ParamUpdate::RandomnessPower(value as f32),
            "texture_enabled" => ParamUpdate::TextureEnabled(value != 0.0),
            "texture_index" => ParamUpdate::TextureIndex(as_u32(value)),
            "instance_count" => ParamUpdate::InstanceCount(as_u32(value)),
            _ => return Err(GalaxyError::UnknownField(field.to_string())),
        };
        Ok(update)
    }

    /// Map a color picker notification onto an update.
    pub fn from_color(field: &str, hex: &str) -> Result<Self> {
        let color = Rgb::from_hex(hex)?;
        match canonical_field(field)? {
            "inside_color" => Ok(ParamUpdate::InsideColor(color)),
            "outside_color" => Ok(ParamUpdate::OutsideColor(color)),
            _ => Err(GalaxyError::UnknownField(field.to_string())),
        }
    }
}

fn canonical_field(field: &str) -> Result<&'static str> {
    let name = match field {
        "count" | "particle_count" => "particle_count",
        "size" | "particle_size" => "particle_size",
        "radius" => "radius",
        "branches" => "branches",
        "spin" => "spin",
        "randomness" => "randomness",
        "randomnessPower" | "randomness_power" => "randomness_power",
        "insideColor" | "inside_color" => "inside_color",
        "outsideColor" | "outside_color" => "outside_color",
        "enableTexture" | "texture_enabled" => "texture_enabled",
        "texture" | "texture_index" => "texture_index",
        "galaxies" | "instance_count" => "instance_count",
        _ => return Err(GalaxyError::UnknownField(field.to_string())),
    };
    Ok(name)
}

/// Slack for f32 values that round just outside an f64 bound (0.01f32 < 0.01).
const RANGE_EPSILON: f64 = 1e-6;

fn check(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if !value.is_finite() {
        return Err(GalaxyError::NotFinite { field });
    }
    if value < min - RANGE_EPSILON || value > max + RANGE_EPSILON {
        return Err(GalaxyError::OutOfRange { field, value, min, max });
    }
    Ok(())
}

impl GalaxyParameters {
    /// Serialize for the panel to refresh its widgets.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate and write one field. On error the parameters are unchanged.
    pub fn apply(&mut self, update: ParamUpdate) -> Result<()> {
        match update {
            ParamUpdate::ParticleCount(v) => {
                check("particle_count", v as f64, limits::PARTICLE_COUNT)?;
                self.particle_count = v;
            }
            ParamUpdate::ParticleSize(v) => {
                check("particle_size", v as f64, limits::PARTICLE_SIZE)?;
                self.particle_size = v;
            }
            ParamUpdate::Radius(v) => {
                check("radius", v as f64, limits::RADIUS)?;
                self.radius = v;
            }
            ParamUpdate::Branches(v) => {
                check("branches", v as f64, limits::BRANCHES)?;
                self.branches = v;
            }
            ParamUpdate::Spin(v) => {
                check("spin", v as f64, limits::SPIN)?;
                self.spin = v;
            }
            ParamUpdate::Randomness(v) => {
                check("randomness", v as f64, limits::RANDOMNESS)?;
                self.randomness = v;
            }
            ParamUpdate::RandomnessPower(v) => {
                check("randomness_power", v as f64, limits::RANDOMNESS_POWER)?;
                self.randomness_power = v;
            }
            ParamUpdate::InsideColor(c) => self.inside_color = c,
            ParamUpdate::OutsideColor(c) => self.outside_color = c,
            ParamUpdate::TextureEnabled(v) => self.texture_enabled = v,
            ParamUpdate::TextureIndex(v) => {
                let max = (limits::TEXTURE_COUNT - 1) as f64;
                check("texture_index", v as f64, (0.0, max))?;
                self.texture_index = v;
            }
            ParamUpdate::InstanceCount(v) => {
                check("instance_count", v as f64, limits::INSTANCE_COUNT)?;
                self.instance_count = v;
            }
        }
        Ok(())
    }
}
