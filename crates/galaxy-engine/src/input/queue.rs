use crate::generator::params::ParamUpdate;

/// Input events the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Step the camera path (the page's click handler).
    Advance,
    /// Pointer moved to canvas pixel coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Device orientation angles in degrees.
    Orientation { alpha: f32, beta: f32, gamma: f32 },
    /// Canvas resized to (width, height) pixels.
    Resize { width: f32, height: f32 },
    /// A panel widget changed one parameter.
    SetParam(ParamUpdate),
    /// The preset dropdown changed.
    SelectPreset(usize),
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
