use glam::Vec2;

/// Tracks the last pointer position and turns absolute samples into deltas.
///
/// The first sample after creation or [`reset`](Self::reset) only records a
/// baseline, so a cursor that starts far from its last known position does
/// not produce a jump.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    last: Vec2,
    first_sample: bool,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    /// Tracker waiting for its first sample.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Vec2::ZERO,
            first_sample: true,
        }
    }

    /// Feed an absolute sample. Returns `(dx, dy)` with `dy` positive when
    /// the pointer moved up the screen, or `None` for a baseline sample.
    pub fn sample(&mut self, x: f32, y: f32) -> Option<Vec2> {
        if self.first_sample {
            self.last = Vec2::new(x, y);
            self.first_sample = false;
            return None;
        }

        let delta = Vec2::new(x - self.last.x, self.last.y - y);
        self.last = Vec2::new(x, y);
        Some(delta)
    }

    /// Re-arm the first-sample flag, e.g. after the cursor was moved
    /// programmatically.
    pub fn reset(&mut self) {
        self.first_sample = true;
    }

    /// Last recorded position.
    #[must_use]
    pub fn last_position(&self) -> Vec2 {
        self.last
    }

    /// Whether the next sample will be treated as a baseline.
    #[must_use]
    pub fn awaiting_first_sample(&self) -> bool {
        self.first_sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_a_baseline() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.sample(500.0, 400.0), None);
        assert_eq!(tracker.sample(510.0, 390.0), Some(Vec2::new(10.0, 10.0)));
        assert_eq!(tracker.last_position(), Vec2::new(510.0, 390.0));
    }

    #[test]
    fn reset_rearms_baseline() {
        let mut tracker = PointerTracker::new();
        let _ = tracker.sample(0.0, 0.0);
        tracker.reset();
        assert!(tracker.awaiting_first_sample());
        assert_eq!(tracker.sample(900.0, 900.0), None);
        assert_eq!(tracker.sample(900.0, 905.0), Some(Vec2::new(0.0, -5.0)));
    }
}
