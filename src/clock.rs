//! Monotonic frame clock.
//!
//! `draw_web()` calls at ~60fps with `performance.now()` timestamps. The HUD
//! measures hold deadlines and fades against this clock instead of the raw
//! timestamp so a backgrounded tab cannot jump a hold straight to completion.

pub struct FrameClock {
    /// Largest delta accepted from a single frame.
    max_step_ms: f64,
    /// Clock time, the sum of clamped frame deltas.
    now_ms: f64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new(max_step_ms: f64) -> Self {
        Self {
            max_step_ms,
            now_ms: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp and return the new clock time.
    pub fn update(&mut self, timestamp_ms: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(prev) => (timestamp_ms - prev).clamp(0.0, self.max_step_ms),
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        self.now_ms += delta;
        self.now_ms
    }

    #[cfg(test)]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::new(500.0)
    }
}
