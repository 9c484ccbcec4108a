//! Frame pacing and wall-clock time

use std::thread;
use std::time::{Duration, Instant};

/// Source of frame ticks and elapsed time
pub trait FrameClock {
    /// Seconds since the clock was created
    fn now(&self) -> f64;

    /// Block until the next frame boundary
    fn wait_for_next_tick(&mut self);
}

/// Sleep-based clock at a fixed rate
///
/// If a frame overruns by more than a whole period the schedule restarts from
/// the current instant instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    start: Instant,
    period: Duration,
    next_tick: Instant,
}

impl FixedRateClock {
    pub fn new(frame_rate: u32) -> Self {
        let start = Instant::now();
        let period = Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64);
        Self {
            start,
            period,
            next_tick: start + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FrameClock for FixedRateClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        if now < self.next_tick {
            thread::sleep(self.next_tick - now);
            self.next_tick += self.period;
        } else if now - self.next_tick > self.period {
            log::trace!("Frame overran by {:?}, resyncing", now - self.next_tick);
            self.next_tick = now + self.period;
        } else {
            self.next_tick += self.period;
        }
    }
}
