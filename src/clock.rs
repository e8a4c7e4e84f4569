//! Autoplay clock: dwell-time accounting for the card currently on screen.
//!
//! Elapsed time is accumulated across pauses instead of being restarted, so a
//! card paused at 2 s of a 5 s dwell still has 3 s left after resuming. Every
//! state change bumps an [`Epoch`]; ticks carrying an older epoch are stale and
//! ignored.

use log::trace;

use crate::state::ClockPhase;

/// Generation token identifying one armed run of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Epoch(u64);

impl Epoch {
    fn bump(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Result of evaluating one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Dwell completion in `[0, 1]`
    pub fraction: f64,
    /// The dwell just completed; the owner should advance
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct AutoplayClock {
    dwell_ms: f64,
    elapsed_ms: f64,
    phase: ClockPhase,
    last_resume_ms: Option<f64>,
    epoch: Epoch,
}

impl AutoplayClock {
    pub fn new(dwell_ms: u32) -> Self {
        Self {
            dwell_ms: f64::from(dwell_ms.max(1)),
            elapsed_ms: 0.0,
            phase: ClockPhase::Stopped,
            last_resume_ms: None,
            epoch: Epoch(0),
        }
    }

    pub fn dwell_ms(&self) -> f64 {
        self.dwell_ms
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Dwell time accumulated for the current card as of `now_ms`.
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        let running = match self.last_resume_ms {
            Some(since) => (now_ms - since).max(0.0),
            None => 0.0,
        };
        (self.elapsed_ms + running).min(self.dwell_ms)
    }

    pub fn fraction(&self, now_ms: f64) -> f64 {
        (self.elapsed_ms(now_ms) / self.dwell_ms).clamp(0.0, 1.0)
    }

    /// Begins a fresh dwell from zero.
    pub fn start(&mut self, now_ms: f64) {
        self.elapsed_ms = 0.0;
        self.phase = ClockPhase::Running;
        self.last_resume_ms = Some(now_ms);
        self.epoch = self.epoch.bump();
    }

    /// Freezes the dwell, keeping the time accumulated so far.
    /// Returns `false` if the clock was not running.
    pub fn pause(&mut self, now_ms: f64) -> bool {
        if self.phase != ClockPhase::Running {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms(now_ms);
        self.phase = ClockPhase::Paused;
        self.last_resume_ms = None;
        self.epoch = self.epoch.bump();
        true
    }

    /// Continues a paused dwell from the preserved elapsed time.
    /// Returns `false` unless the clock was paused.
    pub fn resume(&mut self, now_ms: f64) -> bool {
        if self.phase != ClockPhase::Paused {
            return false;
        }
        self.phase = ClockPhase::Running;
        self.last_resume_ms = Some(now_ms);
        self.epoch = self.epoch.bump();
        true
    }

    /// Zeroes elapsed time and starts again, whatever the previous phase.
    pub fn restart(&mut self, now_ms: f64) {
        self.pause(now_ms);
        self.start(now_ms);
    }

    pub fn stop(&mut self) {
        if self.phase != ClockPhase::Stopped {
            self.epoch = self.epoch.bump();
        }
        self.elapsed_ms = 0.0;
        self.phase = ClockPhase::Stopped;
        self.last_resume_ms = None;
    }

    /// Evaluates a tick armed for `epoch`. Returns `None` for stale ticks and
    /// when the clock is not running.
    pub fn tick(&mut self, epoch: Epoch, now_ms: f64) -> Option<Tick> {
        if epoch != self.epoch || self.phase != ClockPhase::Running {
            trace!("ignoring stale tick {:?} (current {:?})", epoch, self.epoch);
            return None;
        }

        let fraction = self.fraction(now_ms);
        if fraction < 1.0 {
            return Some(Tick {
                fraction,
                finished: false,
            });
        }

        // Dwell complete: stop so no further ticks are accepted for this card
        self.elapsed_ms = self.dwell_ms;
        self.phase = ClockPhase::Stopped;
        self.last_resume_ms = None;
        self.epoch = self.epoch.bump();
        Some(Tick {
            fraction: 1.0,
            finished: true,
        })
    }
}
