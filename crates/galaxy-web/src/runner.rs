use galaxy_engine::{
    FrameState, GalaxyViewer, InputEvent, InputQueue, ParamUpdate, PointBuffer, PresetLibrary,
    Result, Rng, ViewerConfig,
};

/// Wires the viewer to the page's frame loop.
///
/// Lives in a `thread_local!` in `lib.rs`, because wasm-bindgen cannot
/// export generic structs directly.
pub struct GalaxyRunner {
    viewer: GalaxyViewer<Rng>,
    input: InputQueue,
    points: PointBuffer,
}

impl GalaxyRunner {
    pub fn new(config: ViewerConfig, presets: PresetLibrary) -> Result<Self> {
        let rng = Rng::new(config.seed);
        let viewer = GalaxyViewer::new(config, presets, rng)?;
        let mut points = PointBuffer::new();
        points.sync(viewer.controller().group());
        Ok(Self {
            viewer,
            input: InputQueue::new(),
            points,
        })
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display frame and refresh the point buffer if galaxies changed.
    pub fn tick(&mut self, dt: f32) {
        self.viewer.update(dt, &mut self.input);
        self.points.sync(self.viewer.controller().group());
    }

    /// Apply a panel edit right away so the page learns whether it stuck.
    pub fn set_param(&mut self, update: ParamUpdate) -> bool {
        match self.viewer.apply_param(update) {
            Ok(()) => {
                self.points.sync(self.viewer.controller().group());
                true
            }
            Err(err) => {
                log::warn!("parameter rejected: {}", err);
                false
            }
        }
    }

    pub fn select_preset(&mut self, index: usize) -> bool {
        match self.viewer.select_preset(index) {
            Ok(_) => {
                self.points.sync(self.viewer.controller().group());
                true
            }
            Err(err) => {
                log::warn!("preset rejected: {}", err);
                false
            }
        }
    }

    pub fn set_touch(&mut self, touch: bool) {
        self.viewer.set_touch(touch);
    }

    pub fn preset_count(&self) -> u32 {
        self.viewer.controller().presets().len() as u32
    }

    pub fn preset_index(&self) -> u32 {
        self.viewer.controller().preset_index() as u32
    }

    /// Live parameters as JSON, for refreshing panel widgets.
    pub fn params_json(&self) -> String {
        match self.viewer.controller().params().to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("failed to serialize parameters: {}", err);
                String::from("{}")
            }
        }
    }

    pub fn is_debug(&self) -> bool {
        self.viewer.config().debug
    }

    // ---- Pointer accessors for zero-copy reads from JS ----

    pub fn vertices_ptr(&self) -> *const f32 {
        self.points.vertices_ptr()
    }

    pub fn vertex_count(&self) -> u32 {
        self.points.vertex_count()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.points.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.points.instance_count()
    }

    pub fn frame_state_ptr(&self) -> *const f32 {
        self.viewer.frame_state() as *const FrameState as *const f32
    }

    pub fn frame_state_floats(&self) -> u32 {
        FrameState::FLOATS as u32
    }

    pub fn generation(&self) -> u32 {
        self.points.generation().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_engine::GalaxyParameters;

    fn runner() -> GalaxyRunner {
        let presets = PresetLibrary {
            presets: vec![
                GalaxyParameters { particle_count: 20, ..GalaxyParameters::default() },
                GalaxyParameters { particle_count: 10, instance_count: 3, ..GalaxyParameters::default() },
            ],
        };
        let config = ViewerConfig { start_preset: 0, ..ViewerConfig::default() };
        GalaxyRunner::new(config, presets).unwrap()
    }

    #[test]
    fn buffers_ready_after_new() {
        let r = runner();
        assert_eq!(r.vertex_count(), 20);
        assert_eq!(r.instance_count(), 1);
        assert_eq!(r.frame_state_floats(), 32);
    }

    #[test]
    fn preset_switch_rebuilds_buffers() {
        let mut r = runner();
        let before = r.generation();
        assert!(r.select_preset(1));
        assert_eq!(r.vertex_count(), 30);
        assert_eq!(r.instance_count(), 3);
        assert_ne!(r.generation(), before);
        assert!(!r.select_preset(5));
    }

    #[test]
    fn rejected_param_reports_false() {
        let mut r = runner();
        assert!(!r.set_param(ParamUpdate::Branches(50)));
        assert!(r.set_param(ParamUpdate::ParticleCount(7)));
        assert_eq!(r.vertex_count(), 7);
    }

    #[test]
    fn tick_consumes_input() {
        let mut r = runner();
        r.push_input(InputEvent::Advance);
        r.tick(1.0 / 60.0);
        assert!(r.params_json().contains("\"particle_count\":20"));
    }
}
