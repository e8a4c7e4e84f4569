//! Monotonic millisecond time sources.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of monotonic wall-clock time in milliseconds.
pub trait TimeSource {
    fn now_ms(&self) -> f64;
}

/// Real time, measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1_000.0
    }
}

/// Manually advanced time. Clones share the same reading, so a test can keep
/// one handle while the slider owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<f64>>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms.max(0.0));
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl TimeSource for ManualTime {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_time_clones_share_reading() {
        let time = ManualTime::new();
        let handle = time.clone();
        handle.advance(250.0);
        assert_eq!(time.now_ms(), 250.0);
        handle.advance(-10.0);
        assert_eq!(time.now_ms(), 250.0);
    }

    #[test]
    fn monotonic_time_never_goes_backwards() {
        let time = MonotonicTime::new();
        let a = time.now_ms();
        let b = time.now_ms();
        assert!(b >= a);
    }
}
