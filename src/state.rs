/// Phase of the autoplay clock for the current slide.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ClockPhase {
    Stopped, // No dwell in progress (initial, last card, or dwell completed)
    Running, // Dwell time is accumulating
    Paused,  // Dwell time is frozen, waiting for resume()
}
