//! Galaxy generation: parameters, random sources and the point-cloud builder.

pub mod galaxy;
pub mod params;
pub mod rng;

pub use galaxy::{generate, generate_instances, instance_offset, GalaxyInstance, ParticleCloud};
pub use params::{limits, GalaxyParameters, ParamUpdate, Rgb};
pub use rng::{RandomSource, Rng};
