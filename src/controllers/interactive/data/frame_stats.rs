use std::time::Duration;

/// Frame counter and timing of the most recent frame. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    pub frames: u64,
    pub last_frame_duration: Option<Duration>,
    pub last_depth_cap: Option<u32>,
}

impl FrameStats {
    pub fn record_frame(&mut self, duration: Duration, depth_cap: u32) {
        self.frames += 1;
        self.last_frame_duration = Some(duration);
        self.last_depth_cap = Some(depth_cap);
    }

    /// Instantaneous frame rate derived from the last frame's duration.
    #[must_use]
    pub fn frame_rate(&self) -> Option<f64> {
        self.last_frame_duration
            .map(|duration| duration.as_secs_f64())
            .filter(|&secs| secs > 0.0)
            .map(|secs| 1.0 / secs)
    }

    #[must_use]
    pub fn is_report_due(&self, interval: u64) -> bool {
        interval > 0 && self.frames > 0 && self.frames % interval == 0
    }
}
