//! Fixed-timestep ticker driving the animation clock.
//!
//! Wall-clock time accumulates and is drained in whole ticks, so the orbit
//! advances at the configured rate regardless of how long rendering takes.

use std::time::{Duration, Instant};
use tracing::warn;

/// Shortest tick accepted; keeps a zero-length tick from spinning forever.
pub const MIN_TICK: f64 = 0.001;

/// Maximum frame time clamp. A stalled frame (e.g. a slow disk write)
/// accepts slowdown rather than replaying dozens of ticks.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep loop state.
pub struct GameLoop {
    tick: f64,
    previous_time: Instant,
    accumulator: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    /// A loop running one update per `tick` of wall-clock time.
    pub fn new(tick: Duration) -> Self {
        Self {
            tick: clamp_tick(tick),
            previous_time: Instant::now(),
            accumulator: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Measure elapsed wall-clock time and run the due updates.
    ///
    /// Returns the number of times `update_fn` was called.
    pub fn tick(&mut self, update_fn: impl FnMut(u64)) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.tick_with(frame_time, update_fn)
    }

    /// Run the updates due after `frame_time` seconds.
    ///
    /// `update_fn(update_index)` is called zero or more times, once per
    /// whole tick in the accumulator.
    pub fn tick_with(&mut self, mut frame_time: f64, mut update_fn: impl FnMut(u64)) -> u32 {
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }
        self.accumulator += frame_time.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.tick {
            update_fn(self.update_count);
            self.accumulator -= self.tick;
            self.update_count += 1;
            steps += 1;
        }
        self.frame_count += 1;
        steps
    }

    /// Change the tick length. Time already accumulated is kept.
    pub fn set_tick(&mut self, tick: Duration) {
        self.tick = clamp_tick(tick);
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

fn clamp_tick(tick: Duration) -> f64 {
    tick.as_secs_f64().max(MIN_TICK)
}
