use std::time::{Duration, Instant};

const REPORT_EVERY: Duration = Duration::from_secs(5);

/// Per-frame delta time plus a periodic frame-rate report.
pub struct FrameTimer {
    last_frame: Instant,
    window_start: Instant,
    frames: u32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        FrameTimer {
            last_frame: now,
            window_start: now,
            frames: 0,
        }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= REPORT_EVERY {
            log::debug!(
                "{:.1} fps over the last {:.1}s",
                self.frames as f32 / elapsed.as_secs_f32(),
                elapsed.as_secs_f32()
            );
            self.window_start = now;
            self.frames = 0;
        }
        delta.as_secs_f32()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_time_since_previous_frame() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::starting_at(t0);
        let dt = timer.tick_at(t0 + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        let dt = timer.tick_at(t0 + Duration::from_millis(50));
        assert!((dt - 0.034).abs() < 1e-6);
    }

    #[test]
    fn report_window_resets_frame_count() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::starting_at(t0);
        timer.tick_at(t0 + Duration::from_secs(1));
        assert_eq!(timer.frames, 1);
        timer.tick_at(t0 + REPORT_EVERY);
        assert_eq!(timer.frames, 0);
        assert_eq!(timer.window_start, t0 + REPORT_EVERY);
    }
}
