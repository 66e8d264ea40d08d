//! Per-tween delta-time tracker.
//!
//! A small value type: `prepared` anchors a baseline, `advanced` returns the
//! tracker for the next timestamp together with the elapsed time since the
//! previous one.

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DeltaTracker {
    last: f64,
    delta: f64,
}

impl DeltaTracker {
    /// Anchor the baseline at `now` with no pending delta.
    #[inline]
    pub fn prepared(now: f64) -> Self {
        Self {
            last: now,
            delta: 0.0,
        }
    }

    /// Tracker after observing `now`. Time never runs backwards.
    #[inline]
    pub fn advanced(self, now: f64) -> Self {
        Self {
            last: now.max(self.last),
            delta: (now - self.last).max(0.0),
        }
    }

    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[inline]
    pub fn last(&self) -> f64 {
        self.last
    }
}
