//! Reusable UI components.
//!
//! Components render markup and forward events; state lives with the
//! caller (usually a `CarouselDriver` or a signal).

mod backdrop;
mod button;
mod carousel_controls;
mod carousel_frame;
mod section_status;
mod star_rating;
mod tech_pills;

pub use backdrop::*;
pub use button::*;
pub use carousel_controls::*;
pub use carousel_frame::*;
pub use section_status::*;
pub use star_rating::*;
pub use tech_pills::*;
