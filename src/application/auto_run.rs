use super::Session;
use crate::domain::GameError;

/// Seconds between generations at the slowest and fastest speed
pub const SLOWEST_INTERVAL: f32 = 0.5;
pub const FASTEST_INTERVAL: f32 = 0.05;

/// Timer driver that turns frame time into generations.
///
/// The session only says whether it wants to be advanced; this decides
/// when. At most one generation is produced per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoRun {
    interval: f32,
    elapsed: f32,
}

impl AutoRun {
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.clamp(FASTEST_INTERVAL, SLOWEST_INTERVAL),
            elapsed: 0.0,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Generations per second at the current interval
    pub fn steps_per_second(&self) -> f32 {
        1.0 / self.interval
    }

    /// Normalized speed in [0, 1]; 0 is slowest
    pub fn speed(&self) -> f32 {
        (SLOWEST_INTERVAL - self.interval) / (SLOWEST_INTERVAL - FASTEST_INTERVAL)
    }

    /// Set the interval from a normalized speed (clamped to [0, 1])
    pub fn set_speed(&mut self, speed: f32) {
        let t = speed.clamp(0.0, 1.0);
        self.interval = SLOWEST_INTERVAL * (1.0 - t) + FASTEST_INTERVAL * t;
    }

    pub fn adjust_speed(&mut self, delta: f32) {
        self.set_speed(self.speed() + delta);
    }

    /// Accumulate `delta_time` and advance the session once the interval
    /// has elapsed. Returns whether a generation was produced.
    pub fn tick(&mut self, session: &mut Session, delta_time: f32) -> Result<bool, GameError> {
        if !session.should_auto_advance() {
            return Ok(false);
        }

        self.elapsed += delta_time;
        if self.elapsed < self.interval {
            return Ok(false);
        }
        self.elapsed = 0.0;
        session.step_once()?;
        Ok(true)
    }
}

impl Default for AutoRun {
    fn default() -> Self {
        Self::new(0.15)
    }
}
