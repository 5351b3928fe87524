//! Frame timing utilities

use std::time::Instant;

/// High-precision monotonic clock for frame timing
///
/// Sampled once per frame tick. `tick()` returns the delta since the previous
/// tick so the driver reads the clock exactly once per frame.
pub struct FrameClock {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock; the first tick measures from this instant
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the clock and return the delta since the previous tick in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
        self.delta_time
    }

    /// Time since the last tick in seconds
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Total elapsed time since clock creation in seconds
    #[must_use]
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of ticks so far
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
