//! Tick scheduling primitives.
//!
//! A scheduler only decides *when* a tick is due. Progress is always computed
//! from the monotonic time source by the clock, so swapping a frame-aligned
//! scheduler for a fixed-interval one cannot change observable timing.

use crate::clock::Epoch;
use crate::error::SliderError;

pub trait TickScheduler {
    /// Checked once when the slider is built.
    fn ensure_available(&self) -> Result<(), SliderError> {
        Ok(())
    }

    /// Schedules ticks for `epoch`, replacing whatever was armed before.
    fn arm(&mut self, epoch: Epoch, now_ms: f64);

    /// Cancels the pending tick, if any.
    fn disarm(&mut self);

    /// Returns the armed epoch when a tick is due at `now_ms`.
    fn poll(&mut self, now_ms: f64) -> Option<Epoch>;

    fn is_armed(&self) -> bool;
}

impl<S: TickScheduler + ?Sized> TickScheduler for Box<S> {
    fn ensure_available(&self) -> Result<(), SliderError> {
        (**self).ensure_available()
    }

    fn arm(&mut self, epoch: Epoch, now_ms: f64) {
        (**self).arm(epoch, now_ms);
    }

    fn disarm(&mut self) {
        (**self).disarm();
    }

    fn poll(&mut self, now_ms: f64) -> Option<Epoch> {
        (**self).poll(now_ms)
    }

    fn is_armed(&self) -> bool {
        (**self).is_armed()
    }
}

/// Display-refresh aligned: one tick per host frame while armed.
#[derive(Debug, Default, Clone)]
pub struct FrameScheduler {
    armed: Option<Epoch>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickScheduler for FrameScheduler {
    fn arm(&mut self, epoch: Epoch, _now_ms: f64) {
        self.armed = Some(epoch);
    }

    fn disarm(&mut self) {
        self.armed = None;
    }

    fn poll(&mut self, _now_ms: f64) -> Option<Epoch> {
        self.armed
    }

    fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

/// Fixed period ticks, like a repeating interval timer.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    period_ms: u32,
    armed: Option<(Epoch, f64)>, // (epoch, next due time)
}

impl IntervalScheduler {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            armed: None,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl TickScheduler for IntervalScheduler {
    fn ensure_available(&self) -> Result<(), SliderError> {
        if self.period_ms == 0 {
            return Err(SliderError::SchedulerUnavailable(
                "interval period must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn arm(&mut self, epoch: Epoch, now_ms: f64) {
        self.armed = Some((epoch, now_ms + f64::from(self.period_ms)));
    }

    fn disarm(&mut self) {
        self.armed = None;
    }

    fn poll(&mut self, now_ms: f64) -> Option<Epoch> {
        let (epoch, due) = self.armed.as_mut()?;
        if now_ms < *due {
            return None;
        }
        // Missed periods collapse into a single tick
        let period = f64::from(self.period_ms.max(1));
        while *due <= now_ms {
            *due += period;
        }
        Some(*epoch)
    }

    fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
