pub mod api;
pub mod core;
pub mod generator;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::ViewerConfig;
pub use api::controller::{GalaxyController, PresetSwitch};
pub use api::types::{ListenerPose, LiveView};
pub use api::viewer::GalaxyViewer;
pub use assets::presets::PresetLibrary;
pub use bridge::protocol::FrameState;
pub use crate::core::scene::GalaxyGroup;
pub use crate::core::time::FrameClock;
pub use error::{GalaxyError, Result};
pub use generator::{
    generate, generate_instances, GalaxyInstance, GalaxyParameters, ParamUpdate,
    ParticleCloud, RandomSource, Rgb, Rng,
};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::PerspectiveCamera;
pub use renderer::vertex::{InstanceRecord, PointBuffer, PointVertex};
pub use systems::parallax::ParallaxRig;
pub use systems::sequencer::{Advance, CameraKeyframe, CameraPathSequencer};

// Animation helpers
pub use extensions::{Easing, ease_vec3, TweenState, Tween, TweenKey};
