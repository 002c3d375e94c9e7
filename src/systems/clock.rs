//! Per-world simulation clock.
//!
//! Holds the timestamp of the previous update. It only ever moves forward:
//! a regressed or duplicate timestamp yields `dt = 0` and leaves it in place.

/// Result of advancing the clock to a host timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Elapsed host time, never negative
    pub dt: f64,
    /// `now` was earlier than the last update or not a finite number
    pub regressed: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct SimClock {
    last_update: f64,
}

impl SimClock {
    pub fn new(now: f64) -> Self {
        Self { last_update: now }
    }

    pub fn last_update(&self) -> f64 {
        self.last_update
    }

    /// `dt = max(0, now - last)`, then `last = max(last, now)`.
    pub fn advance(&mut self, now: f64) -> Tick {
        if !now.is_finite() {
            return Tick { dt: 0.0, regressed: true };
        }
        // Constructed from a non-finite host reading: adopt the first usable one.
        if !self.last_update.is_finite() {
            self.last_update = now;
            return Tick { dt: 0.0, regressed: false };
        }

        let elapsed = now - self.last_update;
        if elapsed < 0.0 {
            return Tick { dt: 0.0, regressed: true };
        }

        self.last_update = now;
        Tick { dt: elapsed, regressed: false }
    }
}
