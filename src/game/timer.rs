//! Fixed-interval tick gate

/// Decides which frames advance the game.
///
/// Times are seconds on a monotonic clock, as returned by macroquad's `get_time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickTimer {
    interval: f64,
    last_tick: f64,
}

impl TickTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_tick: 0.0,
        }
    }

    /// True once `interval` has passed since the last tick; records `now` when it fires
    pub fn triggered(&mut self, now: f64) -> bool {
        if now - self.last_tick >= self.interval {
            self.last_tick = now;
            return true;
        }
        false
    }
}
