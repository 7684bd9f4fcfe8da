//! Platform layer
//!
//! Host-side pieces that sit around the simulation:
//! - Frame clock (FPS estimate from frame callback timestamps)
//! - Browser bridge (wasm32 only): controls, pointer input, snapshots

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Frames averaged for the FPS estimate
pub const FPS_WINDOW: usize = 60;

/// Tracks host frame timestamps (milliseconds).
///
/// Purely informational; the simulation still runs exactly one tick per
/// frame callback.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames: u64,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames: 0,
            fps: 0,
        }
    }

    /// Record a frame callback at `time_ms`
    pub fn record(&mut self, time_ms: f64) {
        if !time_ms.is_finite() {
            return;
        }
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames += 1;

        // Oldest entry is the next slot once the window has filled
        if self.frames >= FPS_WINDOW as u64 {
            let oldest = self.frame_times[self.frame_index];
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    /// Rolling frames-per-second (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Frame callbacks recorded so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
