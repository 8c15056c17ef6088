use std::cell::Cell;
use std::rc::Rc;

use web_time::Instant;

/// Source of monotonic seconds since an arbitrary epoch.
pub trait TimeSource {
    /// Current time in seconds.
    fn now_secs(&self) -> f64;
}

/// Wall-clock time source backed by [`web_time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemTime {
    epoch: Instant,
}

impl Default for SystemTime {
    fn default() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl TimeSource for SystemTime {
    fn now_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// Hand-driven time source for replays, benches and tests. Clones share
/// the same clock.
#[derive(Debug, Clone, Default)]
pub struct ManualTime(Rc<Cell<f64>>);

impl ManualTime {
    /// Clock reading `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to an absolute time in seconds.
    pub fn set(&self, secs: f64) {
        self.0.set(secs);
    }

    /// Move forward by `secs` (negative values step backward).
    pub fn advance(&self, secs: f64) {
        self.0.set(self.0.get() + secs);
    }
}

impl TimeSource for ManualTime {
    fn now_secs(&self) -> f64 {
        self.0.get()
    }
}

/// Per-frame delta-time accumulator with smoothed FPS.
pub struct FrameClock<T: TimeSource = SystemTime> {
    source: T,
    /// Time of the previous tick, `None` before the first one.
    last_frame: Option<f64>,
    /// Upper bound on a single delta (0 = unbounded).
    max_delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock<SystemTime> {
    /// Wall-clock frame clock. `max_delta` caps a single frame's delta in
    /// seconds; pass `0.0` to disable the cap.
    #[must_use]
    pub fn new(max_delta: f32) -> Self {
        Self::with_source(SystemTime::default(), max_delta)
    }
}

impl<T: TimeSource> FrameClock<T> {
    /// Frame clock reading from a custom time source.
    #[must_use]
    pub fn with_source(source: T, max_delta: f32) -> Self {
        Self {
            source,
            last_frame: None,
            max_delta: if max_delta.is_finite() {
                max_delta.max(0.0)
            } else {
                0.0
            },
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Seconds since the previous call.
    ///
    /// The first call returns `0.0`. A source that steps backward yields
    /// `0.0` rather than a negative delta.
    pub fn tick(&mut self) -> f32 {
        let now = self.source.now_secs();
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };

        let mut delta = (now - last) as f32;
        if !delta.is_finite() || delta < 0.0 {
            log::trace!("non-monotonic frame time ({delta}s), clamping to 0");
            delta = 0.0;
        }
        if self.max_delta > 0.0 && delta > self.max_delta {
            log::debug!("long frame {delta:.3}s capped to {}s", self.max_delta);
            delta = self.max_delta;
        }

        if delta > 0.0 {
            let instant_fps = 1.0 / delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        delta
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Forget the previous tick so the next one returns `0.0`.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let time = ManualTime::default();
        time.set(1234.5);
        let mut clock = FrameClock::with_source(time, 0.0);
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn tick_reports_elapsed_seconds() {
        let time = ManualTime::new();
        let mut clock = FrameClock::with_source(time.clone(), 0.0);
        let _ = clock.tick();
        time.advance(0.25);
        assert!((clock.tick() - 0.25).abs() < 1e-6);
        time.advance(0.5);
        assert!((clock.tick() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn backward_time_clamps_to_zero() {
        let time = ManualTime::default();
        time.set(10.0);
        let mut clock = FrameClock::with_source(time.clone(), 0.0);
        let _ = clock.tick();
        time.set(9.0);
        assert_eq!(clock.tick(), 0.0);
        time.set(9.5);
        assert!((clock.tick() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn long_frames_are_capped() {
        let time = ManualTime::default();
        let mut clock = FrameClock::with_source(time.clone(), 0.25);
        let _ = clock.tick();
        time.set(3.0);
        assert_eq!(clock.tick(), 0.25);
    }

    #[test]
    fn reset_makes_next_tick_zero() {
        let time = ManualTime::default();
        let mut clock = FrameClock::with_source(time.clone(), 0.0);
        let _ = clock.tick();
        time.set(5.0);
        clock.reset();
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn fps_tracks_frame_rate() {
        let time = ManualTime::default();
        let mut clock = FrameClock::with_source(time.clone(), 0.0);
        let _ = clock.tick();
        for i in 1..=400 {
            time.set(f64::from(i) / 120.0);
            let _ = clock.tick();
        }
        assert!((clock.fps() - 120.0).abs() < 1.0);
    }

    #[test]
    fn system_clock_is_non_negative() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.tick(), 0.0);
        let dt = clock.tick();
        assert!((0.0..=0.25).contains(&dt));
    }
}
