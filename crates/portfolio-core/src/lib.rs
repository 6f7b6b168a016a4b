//! Portfolio Core Library
//!
//! Presentation-independent logic behind the portfolio page.
//!
//! ## Overview
//!
//! The page shows two auto-advancing carousels (client proofs and
//! testimonials) fed from a remote document store, plus a decorative
//! animated backdrop that is only enabled on capable devices. This crate
//! holds everything that does not need a renderer:
//!
//! - **Carousel**: paging state machine, swipe detection and the timers that
//!   drive autoplay and the post-interaction cooldown
//! - **Capability**: device signal snapshot and the enable/disable decision
//!   for the heavy effect
//! - **Store**: record listing from Firestore or a local fixture file
//! - **Config**: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{open_store, or_empty, CarouselDriver, PortfolioConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PortfolioConfig::load(None)?;
//!     let store = open_store(&config.store)?;
//!
//!     let proofs = or_empty("client proofs", store.list_client_proofs().await);
//!     let driver = CarouselDriver::new(
//!         "proofs",
//!         config.carousel.controller(),
//!         config.carousel.proofs_timings(),
//!     );
//!     driver.replace_items(proofs.len());
//!
//!     let mut views = driver.subscribe();
//!     while views.changed().await.is_ok() {
//!         println!("showing from {}", views.borrow().current_index);
//!     }
//!     Ok(())
//! }
//! ```

pub mod capability;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod greeting;
pub mod perf;
pub mod records;
pub mod store;

// Re-exports
pub use capability::{
    decide, CapabilityProbe, CapabilitySnapshot, EffectDecision, EffectPolicy, LowCapability,
    SystemProbe,
};
pub use carousel::{
    CarouselController, CarouselDriver, CarouselPhase, CarouselTimings, CarouselView, Direction,
};
pub use config::{CarouselConfig, PortfolioConfig, StoreBackend, StoreConfig};
pub use error::{PortfolioError, PortfolioResult};
pub use gallery::GalleryCursor;
pub use greeting::{GreetingFrame, GreetingSequence};
pub use records::{ClientDraft, ClientProofRecord, ProofImage, TestimonialRecord, TestimonialStats};
pub use store::{open_store, or_empty, FirestoreStore, FixtureStore, RecordStore, SharedStore};
