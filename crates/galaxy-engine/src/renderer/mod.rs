pub mod camera;
pub mod vertex;

pub use camera::PerspectiveCamera;
pub use vertex::{InstanceRecord, PointBuffer, PointVertex};
