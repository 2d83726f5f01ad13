use bytemuck::{Pod, Zeroable};

use crate::core::scene::GalaxyGroup;

/// Per-particle vertex read by the JS point renderer.
/// Must match the TypeScript layout: 6 floats = 24 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl PointVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One galaxy instance's slice of the vertex buffer plus its transform.
/// 20 floats = 80 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct InstanceRecord {
    /// Column-major model matrix (instance spread and tilt).
    pub model: [[f32; 4]; 4],
    pub first_vertex: f32,
    pub vertex_count: f32,
    pub _pad: [f32; 2],
}

impl InstanceRecord {
    pub const FLOATS: usize = 20;
}

/// Flattened vertices for every instance in the group.
/// Rebuilt only when the group's generation changes.
pub struct PointBuffer {
    pub vertices: Vec<PointVertex>,
    pub instances: Vec<InstanceRecord>,
    /// Group generation the buffer was built from.
    generation: Option<u32>,
}

impl PointBuffer {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            instances: Vec::new(),
            generation: None,
        }
    }

    /// Rebuild from `group` if it changed. Returns true if rebuilt.
    pub fn sync(&mut self, group: &GalaxyGroup) -> bool {
        if self.generation == Some(group.generation()) {
            return false;
        }

        // Free the previous generation before allocating the new one.
        drop(std::mem::take(&mut self.vertices));
        drop(std::mem::take(&mut self.instances));
        self.vertices = Vec::with_capacity(group.particle_count());
        self.instances = Vec::with_capacity(group.len());

        for instance in group.iter() {
            let first = self.vertices.len();
            let cloud = &instance.cloud;
            self.vertices.extend(
                cloud
                    .positions()
                    .iter()
                    .zip(cloud.colors())
                    .map(|(&position, &color)| PointVertex { position, color }),
            );
            self.instances.push(InstanceRecord {
                model: instance.model_matrix().to_cols_array_2d(),
                first_vertex: first as f32,
                vertex_count: cloud.len() as f32,
                _pad: [0.0; 2],
            });
        }

        self.generation = Some(group.generation());
        log::debug!(
            "point buffer rebuilt: {} vertices in {} instances",
            self.vertices.len(),
            self.instances.len()
        );
        true
    }

    pub fn generation(&self) -> Option<u32> {
        self.generation
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }
}

impl Default for PointBuffer {
    fn default() -> Self {
        Self::new()
    }
}
