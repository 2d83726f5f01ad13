use glam::{Vec2, Vec3};

use crate::api::config::ViewerConfig;
use crate::api::controller::{GalaxyController, PresetSwitch};
use crate::api::types::{ListenerPose, LiveView};
use crate::assets::presets::PresetLibrary;
use crate::bridge::protocol::FrameState;
use crate::core::time::FrameClock;
use crate::error::Result;
use crate::extensions::tween::{TweenKey, TweenState};
use crate::generator::params::ParamUpdate;
use crate::generator::rng::RandomSource;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::parallax::ParallaxRig;
use crate::systems::sequencer::{Advance, CameraPathSequencer};

/// Everything the page drives once per frame: galaxies, camera path, sway.
pub struct GalaxyViewer<R: RandomSource> {
    config: ViewerConfig,
    controller: GalaxyController<R>,
    sequencer: CameraPathSequencer,
    tweens: TweenState,
    live: LiveView,
    camera: PerspectiveCamera,
    parallax: ParallaxRig,
    clock: FrameClock,
    viewport: Vec2,
    listener: ListenerPose,
    frame: FrameState,
}

impl<R: RandomSource> GalaxyViewer<R> {
    pub fn new(config: ViewerConfig, presets: PresetLibrary, rng: R) -> Result<Self> {
        let controller = GalaxyController::new(presets, config.start_preset, rng)?;
        let sequencer = CameraPathSequencer::default()
            .with_duration(config.tween_duration)
            .with_easing(config.easing());

        let mut camera = PerspectiveCamera::new(config.fov_y_deg, 1.0, config.near, config.far);
        camera.look_at(controller.params().initial_camera_position, Vec3::ZERO);
        let live = LiveView {
            camera_position: camera.position,
            look_at: camera.target,
            group_rotation: Vec3::ZERO,
        };

        let mut viewer = Self {
            parallax: ParallaxRig::new(config.parallax_strength, config.parallax_smoothing),
            clock: FrameClock::new(config.max_frame_dt),
            config,
            controller,
            sequencer,
            tweens: TweenState::new(),
            live,
            camera,
            viewport: Vec2::ZERO,
            listener: ListenerPose::default(),
            frame: FrameState::default(),
        };
        viewer.publish();
        log::info!(
            "galaxy viewer ready: preset {}, {} particles",
            viewer.controller.preset_index(),
            viewer.controller.group().particle_count()
        );
        Ok(viewer)
    }

    /// Run one display frame: handle input, animate, publish state.
    pub fn update(&mut self, frame_dt: f32, input: &mut InputQueue) {
        let dt = self.clock.advance(frame_dt);

        for event in input.drain() {
            self.handle(event);
        }

        self.tweens.tick(dt, &mut self.live);
        self.camera.position = self.live.camera_position;
        self.camera.target = self.live.look_at;
        self.controller.group_mut().rotation = self.live.group_rotation;

        let radius = self.controller.params().radius;
        self.parallax.update(self.camera.position, radius, dt);
        self.camera.rig_offset = self.parallax.offset;

        self.publish();
    }

    fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Advance => {
                self.advance();
            }
            InputEvent::PointerMove { x, y } => self.parallax.pointer_move(x, y, self.viewport),
            InputEvent::Orientation { alpha, beta, gamma } => {
                self.parallax.set_orientation(alpha, beta, gamma)
            }
            InputEvent::Resize { width, height } => self.resize(width, height),
            InputEvent::SetParam(update) => {
                if let Err(err) = self.apply_param(update) {
                    log::warn!("ignored parameter update: {}", err);
                }
            }
            InputEvent::SelectPreset(index) => {
                if let Err(err) = self.select_preset(index) {
                    log::warn!("ignored preset switch: {}", err);
                }
            }
        }
    }

    /// Step the camera path toward its next keyframe.
    pub fn advance(&mut self) -> Option<Advance> {
        self.sequencer.advance(&self.live, &mut self.tweens)
    }

    pub fn apply_param(&mut self, update: ParamUpdate) -> Result<()> {
        self.controller.apply(update)?;
        self.publish();
        Ok(())
    }

    /// Switch presets and snap the camera to the preset's start, looking at the core.
    pub fn select_preset(&mut self, index: usize) -> Result<PresetSwitch> {
        let switch = self.controller.select_preset(index)?;
        self.tweens.cancel(TweenKey::CameraPosition);
        self.tweens.cancel(TweenKey::LookAt);
        self.live.camera_position = switch.camera_position;
        self.live.look_at = Vec3::ZERO;
        self.camera.look_at(switch.camera_position, Vec3::ZERO);
        self.publish();
        Ok(switch)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.camera.resize(width, height);
    }

    pub fn set_touch(&mut self, touch: bool) {
        self.parallax.set_touch(touch);
    }

    fn publish(&mut self) {
        self.listener = self.camera.listener_pose();
        self.frame = FrameState::capture(
            &self.camera,
            &self.listener,
            self.controller.group(),
            self.controller.params(),
        );
    }

    pub fn frame_state(&self) -> &FrameState {
        &self.frame
    }

    pub fn listener(&self) -> &ListenerPose {
        &self.listener
    }

    pub fn controller(&self) -> &GalaxyController<R> {
        &self.controller
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn live(&self) -> &LiveView {
        &self.live
    }

    pub fn sequencer(&self) -> &CameraPathSequencer {
        &self.sequencer
    }

    pub fn tweens(&self) -> &TweenState {
        &self.tweens
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }
}
