//! Browser bindings for the galaxy viewer.
//!
//! The page owns rendering, audio, the parameter panel and fullscreen;
//! it calls `galaxy_tick` from `requestAnimationFrame`, forwards input,
//! and reads vertex/instance/frame buffers straight out of wasm memory.

pub mod runner;

use std::cell::RefCell;

use galaxy_engine::{InputEvent, ParamUpdate, PresetLibrary, ViewerConfig};
use wasm_bindgen::prelude::*;

pub use runner::GalaxyRunner;

thread_local! {
    static RUNNER: RefCell<Option<GalaxyRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut GalaxyRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Galaxy not initialized. Call galaxy_init() first.");
        f(runner)
    })
}

fn init_with(config: ViewerConfig) -> bool {
    console_error_panic_hook::set_once();
    let level = if config.debug { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    match GalaxyRunner::new(config, PresetLibrary::builtin()) {
        Ok(runner) => {
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("galaxy-web: initialized");
            true
        }
        Err(err) => {
            log::error!("galaxy-web: init failed: {}", err);
            false
        }
    }
}

/// Initialize with default settings. A `seed` of 0 draws one from `Math.random`.
#[wasm_bindgen]
pub fn galaxy_init(seed: f64, debug: bool) -> bool {
    let seed = if seed > 0.0 {
        seed as u64
    } else {
        (js_sys::Math::random() * u32::MAX as f64) as u64
    };
    init_with(ViewerConfig { seed, debug, ..ViewerConfig::default() })
}

/// Initialize from a JSON `ViewerConfig`; missing fields take defaults.
#[wasm_bindgen]
pub fn galaxy_init_with_config(json: &str) -> bool {
    match ViewerConfig::from_json(json) {
        Ok(config) => init_with(config),
        Err(err) => {
            web_sys::console::error_1(&format!("galaxy-web: bad config: {}", err).into());
            false
        }
    }
}

#[wasm_bindgen]
pub fn galaxy_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn galaxy_advance() {
    with_runner(|r| r.push_input(InputEvent::Advance));
}

#[wasm_bindgen]
pub fn galaxy_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn galaxy_orientation(alpha: f32, beta: f32, gamma: f32) {
    with_runner(|r| r.push_input(InputEvent::Orientation { alpha, beta, gamma }));
}

#[wasm_bindgen]
pub fn galaxy_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

#[wasm_bindgen]
pub fn galaxy_set_touch(touch: bool) {
    with_runner(|r| r.set_touch(touch));
}

// ---- Parameter panel ----

#[wasm_bindgen]
pub fn galaxy_set_param(name: &str, value: f64) -> bool {
    match ParamUpdate::from_field(name, value) {
        Ok(update) => with_runner(|r| r.set_param(update)),
        Err(err) => {
            log::warn!("galaxy_set_param: {}", err);
            false
        }
    }
}

#[wasm_bindgen]
pub fn galaxy_set_color(name: &str, hex: &str) -> bool {
    match ParamUpdate::from_color(name, hex) {
        Ok(update) => with_runner(|r| r.set_param(update)),
        Err(err) => {
            log::warn!("galaxy_set_color: {}", err);
            false
        }
    }
}

#[wasm_bindgen]
pub fn galaxy_select_preset(index: u32) -> bool {
    with_runner(|r| r.select_preset(index as usize))
}

#[wasm_bindgen]
pub fn galaxy_preset_count() -> u32 {
    with_runner(|r| r.preset_count())
}

#[wasm_bindgen]
pub fn galaxy_preset_index() -> u32 {
    with_runner(|r| r.preset_index())
}

#[wasm_bindgen]
pub fn galaxy_params_json() -> String {
    with_runner(|r| r.params_json())
}

#[wasm_bindgen]
pub fn is_debug() -> bool {
    with_runner(|r| r.is_debug())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vertices_ptr())
}

#[wasm_bindgen]
pub fn get_vertex_count() -> u32 {
    with_runner(|r| r.vertex_count())
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_frame_state_ptr() -> *const f32 {
    with_runner(|r| r.frame_state_ptr())
}

#[wasm_bindgen]
pub fn get_frame_state_floats() -> u32 {
    with_runner(|r| r.frame_state_floats())
}

#[wasm_bindgen]
pub fn get_generation() -> u32 {
    with_runner(|r| r.generation())
}
