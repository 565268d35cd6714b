//! Update interval for whatever timer drives `Simulation::tick`.
//!
//! The engine never schedules anything itself. A presentation layer keeps
//! a `Cadence`, runs a periodic task at `interval()`, and on a successful
//! `faster()`/`slower()` cancels that task, restarts the simulation and
//! reschedules.

use std::time::Duration;

use crate::core::{LifeError, Result};

/// Default delay between generations.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Amount one speed step changes the interval by.
pub const INTERVAL_STEP: Duration = Duration::from_millis(100);

/// `faster()` only applies while the interval is above this.
pub const FASTER_LIMIT: Duration = Duration::from_millis(150);

/// `slower()` only applies while the interval is below this.
pub const SLOWER_LIMIT: Duration = Duration::from_secs(1);

/// Tick interval with stepwise speed control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cadence {
    interval: Duration,
}

impl Cadence {
    /// Cadence at the default 500ms interval.
    pub fn new() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Cadence at a custom, non-zero interval.
    pub fn with_interval(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(LifeError::invalid_config("tick interval must be non-zero"));
        }
        Ok(Self { interval })
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Shorten the interval by one step. Returns whether it changed.
    pub fn faster(&mut self) -> bool {
        if self.interval > FASTER_LIMIT {
            self.interval = self.interval.saturating_sub(INTERVAL_STEP);
            true
        } else {
            false
        }
    }

    /// Lengthen the interval by one step. Returns whether it changed.
    pub fn slower(&mut self) -> bool {
        if self.interval < SLOWER_LIMIT {
            self.interval += INTERVAL_STEP;
            true
        } else {
            false
        }
    }

    /// Position for a speed slider: `1 - interval` in seconds, so faster
    /// cadences sit further right.
    #[must_use]
    pub fn slider_value(&self) -> f64 {
        1.0 - self.interval.as_secs_f64()
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new()
    }
}
