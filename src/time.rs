//! Fixed-timestep clock and tick-based intervals.
//!
//! `draw_web()` fires at the display refresh rate with variable deltas.
//! `GameClock` turns those into whole ticks so passive income and particle
//! lifetimes advance deterministically, and `Interval` counts ticks toward
//! a repeating event (the one-second income tick).

/// Longest frame gap credited at once, so a backgrounded tab does not
/// replay minutes of ticks in one frame.
const MAX_FRAME_MS: f64 = 500.0;

pub struct GameClock {
    ms_per_tick: f64,
    /// Milliseconds not yet consumed as ticks.
    accumulator: f64,
    pub total_ticks: u64,
    last_timestamp: Option<f64>,
}

impl GameClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec.max(1) as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a `performance.now()` timestamp; returns the ticks to run this frame.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}

/// Repeating event every `period` ticks. Never cancelled.
#[derive(Debug, Clone)]
pub struct Interval {
    period: u32,
    elapsed: u32,
}

impl Interval {
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            elapsed: 0,
        }
    }

    /// Advance by `ticks`; returns how many times the interval fired.
    pub fn advance(&mut self, ticks: u32) -> u32 {
        let total = self.elapsed + ticks;
        self.elapsed = total % self.period;
        total / self.period
    }
}
