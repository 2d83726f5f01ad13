use glam::Vec3;

use crate::assets::presets::PresetLibrary;
use crate::core::scene::GalaxyGroup;
use crate::error::Result;
use crate::generator::galaxy::generate_instances;
use crate::generator::params::{GalaxyParameters, ParamUpdate};
use crate::generator::rng::RandomSource;

/// Camera reset requested by a preset switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetSwitch {
    pub index: usize,
    pub camera_position: Vec3,
}

/// Owns the live parameter set and the galaxies built from it.
///
/// Every accepted change rebuilds the whole group synchronously.
pub struct GalaxyController<R: RandomSource> {
    presets: PresetLibrary,
    preset_index: usize,
    params: GalaxyParameters,
    rng: R,
    group: GalaxyGroup,
}

impl<R: RandomSource> GalaxyController<R> {
    /// Start from `presets[preset_index]` and generate immediately.
    pub fn new(presets: PresetLibrary, preset_index: usize, rng: R) -> Result<Self> {
        let params = *presets.get(preset_index)?;
        let mut controller = Self {
            presets,
            preset_index,
            params,
            rng,
            group: GalaxyGroup::new(),
        };
        controller.regenerate();
        Ok(controller)
    }

    /// Validate and apply one field edit, then regenerate.
    /// Rejected edits leave parameters and galaxies untouched.
    pub fn apply(&mut self, update: ParamUpdate) -> Result<()> {
        self.params.apply(update)?;
        log::debug!("parameter update: {:?}", update);
        self.regenerate();
        Ok(())
    }

    /// Replace the whole parameter set with a preset and regenerate.
    pub fn select_preset(&mut self, index: usize) -> Result<PresetSwitch> {
        self.params = *self.presets.get(index)?;
        self.preset_index = index;
        log::info!("preset {} selected", index);
        self.regenerate();
        Ok(PresetSwitch {
            index,
            camera_position: self.params.initial_camera_position,
        })
    }

    /// Drop the current galaxies and build fresh ones from the live parameters.
    pub fn regenerate(&mut self) {
        self.group.release();
        let instances = generate_instances(&self.params, &mut self.rng);
        self.group.replace(instances);
        log::debug!(
            "regenerated {} galaxies, {} particles (generation {})",
            self.group.len(),
            self.group.particle_count(),
            self.group.generation()
        );
    }

    pub fn params(&self) -> &GalaxyParameters {
        &self.params
    }

    pub fn group(&self) -> &GalaxyGroup {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut GalaxyGroup {
        &mut self.group
    }

    pub fn preset_index(&self) -> usize {
        self.preset_index
    }

    pub fn presets(&self) -> &PresetLibrary {
        &self.presets
    }
}
