//! Variable frame delta with an upper clamp

/// Turns host timestamps into simulation deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Longest step simulated in one frame, in seconds. A stalled tab or a
    /// debugger pause never produces a giant step.
    pub const MAX_DT: f32 = 0.1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp (milliseconds) and return the clamped delta
    /// in seconds. The first frame returns zero.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        Self::clamp(dt)
    }

    /// Clamp a delta into `[0, MAX_DT]`; timestamps going backwards yield zero
    pub fn clamp(dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, Self::MAX_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12_345.0), 0.0);
    }

    #[test]
    fn test_regular_frames() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        let dt = clock.tick(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_long_pause_is_clamped() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        assert_eq!(clock.tick(5000.0), FrameClock::MAX_DT);
    }

    #[test]
    fn test_backwards_timestamp_is_zero() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        assert_eq!(clock.tick(900.0), 0.0);
        assert_eq!(FrameClock::clamp(f32::NAN), 0.0);
    }
}
