//! Page sections and the hooks behind them.

mod about;
mod contact;
mod effect_layer;
mod hero;
mod nav_header;
mod project_showcase;
mod proof_carousel;
mod proof_modal;
mod stats_bar;
mod testimonial_carousel;
mod use_carousel;

pub use about::About;
pub use contact::{Contact, Footer};
pub use effect_layer::EffectLayer;
pub use hero::Hero;
pub use nav_header::NavHeader;
pub use project_showcase::ProjectShowcase;
pub use proof_carousel::ProofCarousel;
pub use stats_bar::StatsBar;
pub use testimonial_carousel::TestimonialCarousel;
