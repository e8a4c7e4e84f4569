//! The slider widget: single owner of navigation and autoplay state.
//!
//! All mutation goes through the operations below. Each successful index
//! change produces one render call followed by one clock directive (restart
//! when autoplay is allowed, stop on the last card).

use log::{debug, info, trace};

use crate::clock::{AutoplayClock, Epoch};
use crate::constants::{CARD_DURATION_MS, SWIPE_THRESHOLD_PX, TOTAL_CARDS};
use crate::deck::Deck;
use crate::error::SliderError;
use crate::input::{InputEvent, Swipe, SwipeTracker};
use crate::navigator::Navigator;
use crate::pause::PauseReasons;
use crate::render::{IndexChange, Progress, RenderSink};
use crate::scheduler::{FrameScheduler, TickScheduler};
use crate::state::ClockPhase;
use crate::time::{MonotonicTime, TimeSource};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    pub card_count: usize,
    pub dwell_ms: u32,
    pub swipe_threshold_px: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            card_count: TOTAL_CARDS,
            dwell_ms: CARD_DURATION_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }
}

pub struct Slider<R, T = MonotonicTime, S = FrameScheduler>
where
    R: RenderSink,
    T: TimeSource,
    S: TickScheduler,
{
    deck: Deck,
    navigator: Navigator,
    clock: AutoplayClock,
    held: PauseReasons,
    swipe: SwipeTracker,
    scheduler: S,
    time: T,
    sink: R,
    disposed: bool,
}

impl<R, T, S> Slider<R, T, S>
where
    R: RenderSink,
    T: TimeSource,
    S: TickScheduler,
{
    /// Builds the slider, renders the first card and starts autoplay.
    pub fn new(config: SliderConfig, time: T, scheduler: S, sink: R) -> Result<Self, SliderError> {
        scheduler.ensure_available()?;
        if config.dwell_ms == 0 {
            return Err(SliderError::InvalidDwell);
        }
        let deck = Deck::with_len(config.card_count)?;

        let mut slider = Self {
            navigator: Navigator::new(&deck),
            clock: AutoplayClock::new(config.dwell_ms),
            held: PauseReasons::empty(),
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            scheduler,
            time,
            sink,
            disposed: false,
            deck,
        };
        info!(
            "slider initialised: {} cards, {} ms per card",
            slider.deck.len(),
            config.dwell_ms
        );

        slider.sink.index_changed(IndexChange {
            current: 0,
            prior: None,
        });
        slider.sync_autoplay();
        Ok(slider)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current()
    }

    pub fn clock_phase(&self) -> ClockPhase {
        self.clock.phase()
    }

    /// Dwell time accumulated on the current card.
    pub fn elapsed_ms(&self) -> f64 {
        self.clock.elapsed_ms(self.time.now_ms())
    }

    pub fn progress_fraction(&self) -> f64 {
        self.clock.fraction(self.time.now_ms())
    }

    pub fn held_pauses(&self) -> PauseReasons {
        self.held
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn render_sink(&self) -> &R {
        &self.sink
    }

    pub fn render_sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn next(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(change) = self.navigator.next() {
            self.apply(change);
        }
    }

    pub fn previous(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(change) = self.navigator.previous() {
            self.apply(change);
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if self.disposed {
            return;
        }
        if let Some(change) = self.navigator.go_to(index) {
            self.apply(change);
        }
    }

    /// Holds autoplay paused on behalf of `source`.
    pub fn pause_for_interaction(&mut self, source: PauseReasons) {
        if self.disposed || source.is_empty() {
            return;
        }
        self.held.insert(source);
        let now = self.time.now_ms();
        if self.clock.pause(now) {
            debug!("autoplay paused ({:?}) at {:.0} ms", self.held, self.clock.elapsed_ms(now));
            self.rearm(now);
        }
    }

    /// Releases `source`; autoplay resumes once no source is held.
    pub fn resume_from_interaction(&mut self, source: PauseReasons) {
        if self.disposed || !self.held.intersects(source) {
            return;
        }
        self.held.remove(source);
        if !self.held.is_empty() || !self.navigator.is_autoplay_eligible() {
            return;
        }
        let now = self.time.now_ms();
        if self.clock.resume(now) {
            debug!("autoplay resumed at {:.0} ms", self.clock.elapsed_ms(now));
            self.rearm(now);
        }
    }

    pub fn on_visibility_change(&mut self, hidden: bool) {
        if hidden {
            self.pause_for_interaction(PauseReasons::TAB_HIDDEN);
        } else {
            self.resume_from_interaction(PauseReasons::TAB_HIDDEN);
        }
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::NextButton | InputEvent::ArrowRight => self.next(),
            InputEvent::PreviousButton | InputEvent::ArrowLeft => self.previous(),
            InputEvent::SegmentClicked(index) => self.go_to(index),
            InputEvent::PointerEnterCard => self.pause_for_interaction(PauseReasons::HOVER),
            InputEvent::PointerLeaveCard => self.resume_from_interaction(PauseReasons::HOVER),
            InputEvent::PointerDown => self.pause_for_interaction(PauseReasons::POINTER_HOLD),
            InputEvent::PointerUp => self.resume_from_interaction(PauseReasons::POINTER_HOLD),
            InputEvent::TouchStart { x } => {
                self.swipe.begin(x);
                self.pause_for_interaction(PauseReasons::TOUCH_HOLD);
            }
            InputEvent::TouchEnd { x } => {
                self.resume_from_interaction(PauseReasons::TOUCH_HOLD);
                match self.swipe.finish(x) {
                    Some(Swipe::Left) => self.next(),
                    Some(Swipe::Right) => self.previous(),
                    None => {}
                }
            }
            InputEvent::VisibilityChanged { hidden } => self.on_visibility_change(hidden),
        }
    }

    /// Polls the scheduler once and evaluates a due tick. Call once per host
    /// frame or loop iteration.
    pub fn pump(&mut self) {
        if self.disposed {
            return;
        }
        let now = self.time.now_ms();
        if let Some(epoch) = self.scheduler.poll(now) {
            self.on_tick(epoch);
        }
    }

    /// Delivers a tick armed for `epoch`. Ticks from an earlier epoch (armed
    /// before a pause, restart or navigation) do nothing.
    pub fn on_tick(&mut self, epoch: Epoch) {
        if self.disposed {
            return;
        }
        let now = self.time.now_ms();
        let Some(tick) = self.clock.tick(epoch, now) else {
            return;
        };

        self.sink.progress(Progress {
            active: self.navigator.current(),
            fraction: tick.fraction,
        });
        if tick.finished {
            trace!("dwell complete on card {}", self.navigator.current());
            self.scheduler.disarm();
            self.next();
        }
    }

    /// Cancels pending ticks and stops autoplay. Every later call is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.scheduler.disarm();
        self.clock.stop();
        self.held = PauseReasons::empty();
        self.disposed = true;
        debug!("slider disposed");
    }

    fn apply(&mut self, change: IndexChange) {
        debug!("card {:?} -> {}", change.prior, change.current);
        self.sink.index_changed(change);
        self.sync_autoplay();
    }

    // Restart on every card but the last; the restarted dwell stays parked
    // while any pause source is still held.
    fn sync_autoplay(&mut self) {
        let now = self.time.now_ms();
        if self.navigator.is_autoplay_eligible() {
            self.clock.restart(now);
            if !self.held.is_empty() {
                self.clock.pause(now);
            }
            debug!("autoplay restarted ({:?})", self.clock.phase());
        } else {
            self.clock.stop();
            debug!("autoplay stopped on last card");
        }
        self.rearm(now);
    }

    fn rearm(&mut self, now: f64) {
        if self.clock.phase() == ClockPhase::Running {
            self.scheduler.arm(self.clock.epoch(), now);
        } else {
            self.scheduler.disarm();
        }
    }
}
