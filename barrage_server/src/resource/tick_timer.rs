use std::time::{
    Duration,
    Instant,
};

/// Measures how long each tick takes against the tick interval.
pub struct TickTimer {
    interval: Duration,
    started: Instant,
    longest: Duration,
    overruns: u64,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            started: Instant::now(),
            longest: Duration::ZERO,
            overruns: 0,
        }
    }

    pub fn start(&mut self) {
        self.started = Instant::now();
    }

    /// Returns by how much the tick overran the interval, if it did.
    pub fn finish(&mut self) -> Option<Duration> {
        let elapsed = Instant::now().saturating_duration_since(self.started);

        self.longest = self.longest.max(elapsed);

        let overrun = elapsed.checked_sub(self.interval).filter(|o| !o.is_zero())?;

        self.overruns += 1;

        Some(overrun)
    }

    pub fn longest(&self) -> Duration {
        self.longest
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}
