pub mod presets;

pub use presets::PresetLibrary;
