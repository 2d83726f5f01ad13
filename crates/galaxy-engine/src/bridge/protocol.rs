/// Per-frame state block read by the JS renderer and audio listener.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values f32 / 4 bytes):
/// ```text
/// [ 0.. 3] eye            [ 3.. 6] look_at       [ 6.. 9] up
/// [ 9..12] listener pos   [12..15] listener fwd  [15..18] group rotation
/// [18..21] parallax       [21] fov_y_deg [22] aspect [23] near [24] far
/// [25] particle_size [26] texture_enabled [27] texture_index
/// [28] generation [29] instance_count [30] protocol version [31] pad
/// ```
///
/// Vertex and instance data live in separate buffers, see `renderer::vertex`.

use bytemuck::{Pod, Zeroable};

use crate::api::types::ListenerPose;
use crate::core::scene::GalaxyGroup;
use crate::generator::params::GalaxyParameters;
use crate::renderer::camera::PerspectiveCamera;

/// Protocol version written into every frame.
pub const PROTOCOL_VERSION: f32 = 1.0;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FrameState {
    pub eye: [f32; 3],
    pub look_at: [f32; 3],
    pub up: [f32; 3],
    pub listener_position: [f32; 3],
    pub listener_forward: [f32; 3],
    pub group_rotation: [f32; 3],
    pub parallax: [f32; 3],
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub particle_size: f32,
    pub texture_enabled: f32,
    pub texture_index: f32,
    pub generation: f32,
    pub instance_count: f32,
    pub version: f32,
    pub _pad: f32,
}

impl FrameState {
    pub const FLOATS: usize = 32;

    /// Snapshot the camera, group and render hints.
    pub fn capture(
        camera: &PerspectiveCamera,
        listener: &ListenerPose,
        group: &GalaxyGroup,
        params: &GalaxyParameters,
    ) -> Self {
        Self {
            eye: camera.eye().to_array(),
            look_at: camera.target.to_array(),
            up: camera.up.to_array(),
            listener_position: listener.position.to_array(),
            listener_forward: listener.forward.to_array(),
            group_rotation: group.rotation.to_array(),
            parallax: camera.rig_offset.to_array(),
            fov_y_deg: camera.fov_y_deg,
            aspect: camera.aspect,
            near: camera.near,
            far: camera.far,
            particle_size: params.particle_size,
            texture_enabled: if params.texture_enabled { 1.0 } else { 0.0 },
            texture_index: params.texture_index as f32,
            generation: group.generation() as f32,
            instance_count: group.len() as f32,
            version: PROTOCOL_VERSION,
            _pad: 0.0,
        }
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}
