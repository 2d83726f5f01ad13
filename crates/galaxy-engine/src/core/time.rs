/// Frame clock for the render loop.
/// Tracks elapsed time and caps the per-frame delta so a backgrounded tab
/// does not fast-forward tweens on return.
pub struct FrameClock {
    /// Largest delta accepted per frame, in seconds.
    max_dt: f32,
    elapsed: f64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt: max_dt.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Record a frame. Returns the delta to simulate with.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        };
        self.elapsed += dt as f64;
        dt
    }

    /// Seconds simulated since start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
