//! Interaction sources that can hold autoplay paused.
//!
//! Sources overlap (hovering a card while pressing on it), so they are kept
//! as a set. Autoplay resumes only once every source has been released.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PauseReasons: u8 {
        /// Pointer is over the centre card
        const HOVER = 0x01;
        /// Mouse button held on the centre card
        const POINTER_HOLD = 0x02;
        /// Finger down on the slider
        const TOUCH_HOLD = 0x04;
        /// Window or tab is not visible
        const TAB_HIDDEN = 0x08;
    }
}
