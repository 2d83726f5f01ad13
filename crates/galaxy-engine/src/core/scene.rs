use glam::Vec3;

use crate::generator::galaxy::GalaxyInstance;

/// Owning container for the visible galaxies.
///
/// The whole collection is swapped on every regeneration; `generation`
/// changes each time so the renderer knows to drop its GPU copies.
pub struct GalaxyGroup {
    instances: Vec<GalaxyInstance>,
    /// Euler XYZ rotation applied to every instance.
    pub rotation: Vec3,
    generation: u32,
}

impl GalaxyGroup {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            rotation: Vec3::ZERO,
            generation: 0,
        }
    }

    /// Drop every current instance, then install `instances`.
    /// The generation advances exactly once per call.
    pub fn replace(&mut self, instances: Vec<GalaxyInstance>) {
        self.release();
        self.instances = instances;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Free the current instances ahead of building their replacement.
    /// Leaves the generation alone; the following `replace` advances it.
    pub(crate) fn release(&mut self) {
        self.instances = Vec::new();
    }

    pub fn instances(&self) -> &[GalaxyInstance] {
        &self.instances
    }

    /// Iterate over all instances.
    pub fn iter(&self) -> impl Iterator<Item = &GalaxyInstance> {
        self.instances.iter()
    }

    /// Total particles across all instances.
    pub fn particle_count(&self) -> usize {
        self.instances.iter().map(|g| g.cloud.len()).sum()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of instances in the group.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the group is empty.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for GalaxyGroup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_instances, GalaxyParameters, Rng};

    fn small(instances: u32) -> GalaxyParameters {
        GalaxyParameters {
            particle_count: 16,
            instance_count: instances,
            ..GalaxyParameters::default()
        }
    }

    #[test]
    fn replace_swaps_whole_collection() {
        let mut rng = Rng::new(1);
        let mut group = GalaxyGroup::new();
        group.replace(generate_instances(&small(3), &mut rng));
        assert_eq!(group.len(), 3);
        assert_eq!(group.particle_count(), 48);

        group.replace(generate_instances(&small(1), &mut rng));
        assert_eq!(group.len(), 1);
        assert_eq!(group.particle_count(), 16);
    }

    #[test]
    fn replace_advances_generation_once() {
        let mut rng = Rng::new(2);
        let mut group = GalaxyGroup::new();
        let g0 = group.generation();
        group.replace(generate_instances(&small(1), &mut rng));
        assert_eq!(group.generation(), g0.wrapping_add(1));

        group.replace(generate_instances(&small(2), &mut rng));
        assert_eq!(group.generation(), g0.wrapping_add(2));
    }

    #[test]
    fn release_keeps_generation() {
        let mut group = GalaxyGroup::new();
        group.replace(generate_instances(&small(2), &mut Rng::new(3)));
        let g = group.generation();
        group.release();
        assert!(group.is_empty());
        assert_eq!(group.generation(), g);
    }
}
