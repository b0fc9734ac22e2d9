//! Animation state: the orbit clock and the parameters it is drawn with.

use kepler_math::{Eccentricity, Orbit, OrbitError, Sector};

/// Everything that persists between frames.
///
/// Owned by the driver loop; commands and ticks mutate it through `&mut`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    orbit: Orbit,
    interval_days: u32,
    time_step: f64,
    t: f64,
    running: bool,
}

impl AnimationState {
    /// Paused state at `t = 0`.
    pub fn new(orbit: Orbit, interval_days: u32, time_step: f64) -> Self {
        Self {
            orbit,
            interval_days,
            time_step,
            t: 0.0,
            running: false,
        }
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn interval_days(&self) -> u32 {
        self.interval_days
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Current clock value, always within `[0, period]`.
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop advancing; the clock keeps its value.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Clock back to zero, paused.
    pub fn reset(&mut self) {
        self.t = 0.0;
        self.running = false;
    }

    /// Set the clock, folding it into one period.
    pub fn set_time(&mut self, t: f64) -> Result<(), OrbitError> {
        if !t.is_finite() {
            return Err(OrbitError::NonFinite { name: "time", value: t });
        }
        self.t = if (0.0..=self.orbit.period).contains(&t) {
            t
        } else {
            t.rem_euclid(self.orbit.period)
        };
        Ok(())
    }

    pub fn set_eccentricity(&mut self, eccentricity: Eccentricity) {
        self.orbit = Orbit::new(eccentricity);
    }

    pub fn set_interval(&mut self, days: u32) {
        self.interval_days = days;
    }

    pub fn set_time_step(&mut self, step: f64) {
        self.time_step = step;
    }

    /// One animation tick. Returns `true` if the clock moved.
    ///
    /// Passing the end of the period wraps the clock to exactly zero.
    pub fn advance(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.t += self.time_step;
        if self.t > self.orbit.period {
            self.t = 0.0;
        }
        true
    }

    /// Completed sectors up to the current clock.
    pub fn sectors(&self) -> Result<Vec<Sector>, OrbitError> {
        self.orbit.sectors(self.t, self.interval_days as f64)
    }
}
