//! Auto-advancing, interaction-pausable card carousel.
//!
//! - [`CarouselController`]: pure paging state machine (index, autoplay
//!   eligibility, hover, touch gestures, cooldown generations)
//! - [`CarouselDriver`]: owns the autoplay and cooldown timers for one
//!   instance and publishes [`CarouselView`] snapshots
//! - [`TouchGesture`]: swipe detection

mod controller;
mod driver;
mod gesture;

pub use controller::{
    CarouselController, CarouselPhase, CarouselView, Direction, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_VISIBLE_COUNT,
};
pub use driver::{
    CarouselDriver, CarouselTimings, TimerHandle, DEFAULT_COOLDOWN, DEFAULT_TICK_INTERVAL,
};
pub use gesture::TouchGesture;
