//! Input vocabulary understood by the slider.

/// Logical actions produced by the front end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    NextButton,
    PreviousButton,
    ArrowRight,
    ArrowLeft,
    /// Click on a progress bar segment
    SegmentClicked(usize),
    PointerEnterCard,
    PointerLeaveCard,
    /// Mouse button pressed on the centre card
    PointerDown,
    PointerUp,
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    VisibilityChanged { hidden: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right to left: show the next card
    Left,
    /// Finger moved left to right: show the previous card
    Right,
}

/// Turns a touch start/end pair into a horizontal swipe.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn finish(&mut self, x: f32) -> Option<Swipe> {
        let dx = x - self.start_x.take()?;
        if dx <= -self.threshold {
            Some(Swipe::Left)
        } else if dx >= self.threshold {
            Some(Swipe::Right)
        } else {
            None
        }
    }
}
