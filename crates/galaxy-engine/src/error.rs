//! Error types for parameter edits and preset loading.

use thiserror::Error;

/// Result type alias for galaxy-engine operations.
pub type Result<T> = std::result::Result<T, GalaxyError>;

/// Errors raised when the live parameter set cannot accept a change.
///
/// Generation itself never fails: numeric degeneracy is clamped.
#[derive(Debug, Error)]
pub enum GalaxyError {
    /// A numeric field was set outside its allowed range.
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A numeric field received NaN or infinity.
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    /// A color string was not `#rrggbb`.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A GUI binding named a field that does not exist.
    #[error("unknown parameter field: {0}")]
    UnknownField(String),

    /// Preset index past the end of the library.
    #[error("preset {index} out of range (have {count})")]
    PresetOutOfRange { index: usize, count: usize },

    /// The preset library was empty.
    #[error("preset library is empty")]
    NoPresets,

    /// Preset or config JSON failed to parse.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
