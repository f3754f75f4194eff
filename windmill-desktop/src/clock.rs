/// Frame timing
use std::time::{Duration, Instant};

/// Counter frequency the legacy tick conversion divides by, in Hz
const LEGACY_COUNTER_HZ: f32 = 1.0e9;

/// How elapsed wall time becomes the scene's `delta`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockScale {
    /// Elapsed seconds
    #[default]
    Seconds,
    /// Whole elapsed milliseconds times 1000 over a nanosecond counter
    /// frequency. Roughly a millionth of a second per millisecond, which is
    /// the timing the demo originally shipped with: a near-frozen spin.
    LegacyTicks,
}

/// Measures the time between consecutive frames
pub struct FrameClock {
    last: Instant,
    scale: ClockScale,
    max_delta: Option<f32>,
}

impl FrameClock {
    pub fn new(scale: ClockScale, max_delta: Option<f32>) -> Self {
        Self {
            last: Instant::now(),
            scale,
            max_delta,
        }
    }

    /// Delta since the previous tick (or since construction)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        self.delta_from(elapsed)
    }

    /// Convert an elapsed duration into a scene delta, applying the cap
    pub fn delta_from(&self, elapsed: Duration) -> f32 {
        let delta = match self.scale {
            ClockScale::Seconds => elapsed.as_secs_f32(),
            ClockScale::LegacyTicks => elapsed.as_millis() as f32 * 1000.0 / LEGACY_COUNTER_HZ,
        };

        match self.max_delta {
            Some(max) if delta > max => {
                tracing::warn!(delta, max, "frame took too long, clamping delta");
                max
            }
            _ => delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seconds_scale() {
        let clock = FrameClock::new(ClockScale::Seconds, None);
        assert_relative_eq!(clock.delta_from(Duration::from_millis(250)), 0.25);
        assert_eq!(clock.delta_from(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_legacy_scale() {
        let clock = FrameClock::new(ClockScale::LegacyTicks, None);
        assert_relative_eq!(clock.delta_from(Duration::from_millis(250)), 0.000_25);
        // sub-millisecond frames read as zero ticks
        assert_eq!(clock.delta_from(Duration::from_micros(900)), 0.0);
    }

    #[test]
    fn test_delta_cap() {
        let clock = FrameClock::new(ClockScale::Seconds, Some(0.1));
        assert_relative_eq!(clock.delta_from(Duration::from_secs(2)), 0.1);
        assert_relative_eq!(clock.delta_from(Duration::from_millis(16)), 0.016);
    }

    #[test]
    fn test_tick_is_monotonic() {
        let mut clock = FrameClock::new(ClockScale::Seconds, None);
        for _ in 0..3 {
            assert!(clock.tick() >= 0.0);
        }
    }
}
