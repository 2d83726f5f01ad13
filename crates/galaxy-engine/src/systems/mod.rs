pub mod parallax;
pub mod sequencer;

pub use parallax::ParallaxRig;
pub use sequencer::{default_keyframes, Advance, CameraKeyframe, CameraPathSequencer};
