// extensions/mod.rs
//
// Animation helpers for the viewer.
// The sequencer drives them through TweenState.

pub mod easing;
pub mod tween;

pub use easing::{Easing, ease_vec3};
pub use tween::{TweenState, Tween, TweenKey};
