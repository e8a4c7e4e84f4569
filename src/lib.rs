//! Autoplaying card deck slider.
//!
//! The crate owns two things: which card of a fixed deck is showing, and the
//! dwell timer that advances it. Rendering and raw input live outside; the
//! renderer implements [`RenderSink`] and the front end feeds
//! [`InputEvent`]s into a [`Slider`].
//!
//! ```
//! use cardslide::{
//!     FrameScheduler, ManualTime, RecordingSink, Slider, SliderConfig,
//! };
//!
//! let time = ManualTime::new();
//! let config = SliderConfig { card_count: 3, dwell_ms: 100, ..SliderConfig::default() };
//! let mut slider = Slider::new(config, time.clone(), FrameScheduler::new(), RecordingSink::new())?;
//!
//! time.advance(100.0);
//! slider.pump();
//! assert_eq!(slider.current_index(), 1);
//! # Ok::<(), cardslide::SliderError>(())
//! ```

pub mod clock;
pub mod constants;
pub mod deck;
pub mod error;
pub mod input;
pub mod navigator;
pub mod pause;
pub mod render;
pub mod scheduler;
pub mod slider;
pub mod state;
pub mod time;
pub mod view;

pub use clock::{AutoplayClock, Epoch, Tick};
pub use deck::{CardId, Deck};
pub use error::SliderError;
pub use input::{InputEvent, Swipe, SwipeTracker};
pub use navigator::Navigator;
pub use pause::PauseReasons;
pub use render::{IndexChange, Progress, RecordingSink, RenderEvent, RenderSink};
pub use scheduler::{FrameScheduler, IntervalScheduler, TickScheduler};
pub use slider::{Slider, SliderConfig};
pub use state::ClockPhase;
pub use time::{ManualTime, MonotonicTime, TimeSource};
