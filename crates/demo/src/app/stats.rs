use std::time::{Duration, Instant};

/// Frame timing snapshot emitted every `interval` ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Wall-clock time from the previous tick start to the reporting one.
    pub frame_ms: f64,
    /// Frames per second that tick time would allow.
    pub fps: f64,
    /// Ticks measured so far.
    pub frames: u64,
}

impl FrameReport {
    pub fn from_elapsed(elapsed: Duration, frames: u64) -> Self {
        // Clamp to 1 ns so a zero-length tick doesn't divide by zero
        let nanos = elapsed.as_nanos().max(1) as f64;
        Self {
            frame_ms: nanos / 1e6,
            fps: 1e9 / nanos,
            frames,
        }
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Time per frame draw: {:.4} ms | FPS (approximated): {:.1}",
            self.frame_ms, self.fps
        )
    }
}

/// Counts ticks and produces a [`FrameReport`] once per interval.
///
/// Frame time is measured start to start, so it covers the work of a tick
/// plus whatever wait the driver puts between ticks.
#[derive(Clone, Debug)]
pub struct FrameStats {
    interval: u32,
    since_report: u32,
    frames: u64,
    last: Option<FrameReport>,
    last_start: Option<Instant>,
}

impl FrameStats {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            since_report: 0,
            frames: 0,
            last: None,
            last_start: None,
        }
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_report(&self) -> Option<FrameReport> {
        self.last
    }

    /// Restart the frame clock, e.g. when the loop starts or resumes.
    pub fn restart(&mut self, now: Instant) {
        self.last_start = Some(now);
    }

    /// Record a tick starting at `now`. Its frame time is the gap since the
    /// previous tick start (or since the last `restart`).
    pub fn tick_started(&mut self, now: Instant) -> Option<FrameReport> {
        let elapsed = self
            .last_start
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_start = Some(now);
        self.record(elapsed)
    }

    /// Record one frame that took `elapsed`.
    pub fn record(&mut self, elapsed: Duration) -> Option<FrameReport> {
        self.frames += 1;
        self.since_report += 1;
        if self.since_report < self.interval {
            return None;
        }

        self.since_report = 0;
        let report = FrameReport::from_elapsed(elapsed, self.frames);
        self.last = Some(report);
        Some(report)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(30)
    }
}
