use std::time::{Duration, Instant};

/// Paces the loop to a fixed tick rate
///
/// After each frame the remaining slice of the tick budget is slept off,
/// then control yields once to the OS scheduler. The yield is the loop's
/// single cooperative suspension point.
pub struct FramePacer {
    budget: Duration,
    tick_start: Instant,
}

impl FramePacer {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            budget: Duration::from_secs_f64(1.0 / ticks_per_second as f64),
            tick_start: Instant::now(),
        }
    }

    /// Sleep off the rest of the tick budget, yield, and start the next tick
    pub fn pace(&mut self) {
        let elapsed = self.tick_start.elapsed();
        if elapsed < self.budget {
            std::thread::sleep(self.budget - elapsed);
        }
        std::thread::yield_now();
        self.tick_start = Instant::now();
    }
}
