//! Horizontal drag velocity readout. Observational only.

use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    last: Option<(f64, Instant)>,
    /// Raw velocity in px/ms from the most recent pair of samples
    velocity: f64,
    /// `floor(|velocity| * 100)`, the value shown to the user
    display: i64,
}

impl VelocityTracker {
    /// Record a sample at the current time
    pub fn record(&mut self, x: f64) -> f64 {
        self.record_at(x, Instant::now())
    }

    /// Record a sample taken at `now` and return the raw velocity.
    ///
    /// The first sample, and a sample with the same timestamp as the previous
    /// one, keep the previous velocity.
    pub fn record_at(&mut self, x: f64, now: Instant) -> f64 {
        if let Some((last_x, last_time)) = self.last {
            let dt_ms = now.saturating_duration_since(last_time).as_secs_f64() * 1000.0;
            if dt_ms > 0.0 {
                self.velocity = (x - last_x) / dt_ms;
            }
        }
        self.last = Some((x, now));
        self.display = (self.velocity.abs() * 100.0).floor() as i64;
        self.velocity
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn display(&self) -> i64 {
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_sample_is_zero() {
        let mut tracker = VelocityTracker::default();
        assert_eq!(tracker.record_at(120.0, Instant::now()), 0.0);
        assert_eq!(tracker.display(), 0);
    }

    #[test]
    fn test_velocity_is_rectified_and_scaled() {
        let mut tracker = VelocityTracker::default();
        let t0 = Instant::now();
        tracker.record_at(200.0, t0);
        let v = tracker.record_at(150.0, t0 + Duration::from_millis(20));
        assert!((v - -2.5).abs() < 1e-9);
        assert_eq!(tracker.display(), 250);
    }

    #[test]
    fn test_same_timestamp_keeps_previous() {
        let mut tracker = VelocityTracker::default();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(10);
        tracker.record_at(0.0, t0);
        tracker.record_at(5.0, t1);
        let v = tracker.record_at(50.0, t1);
        assert!((v - 0.5).abs() < 1e-9);
        assert_eq!(tracker.display(), 50);
    }
}
