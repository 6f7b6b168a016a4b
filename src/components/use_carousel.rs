//! Hook binding a [`CarouselDriver`] to a component.

use dioxus::prelude::*;
use portfolio_core::carousel::{CarouselDriver, CarouselTimings, CarouselView};
use portfolio_core::config::CarouselConfig;

use crate::context::use_config;

/// A mounted carousel: the driver plus a signal mirroring its view.
#[derive(Clone)]
pub struct CarouselHandle {
    pub driver: CarouselDriver,
    pub view: Signal<CarouselView>,
}

/// Create a driver for this component, mirror its views into a signal, and
/// release its timers on unmount.
///
/// `timings` picks the tick period for this carousel out of the config.
pub fn use_carousel(
    label: &'static str,
    timings: fn(&CarouselConfig) -> CarouselTimings,
) -> CarouselHandle {
    let config = use_config();
    let driver = use_hook(|| {
        CarouselDriver::new(label, config.carousel.controller(), timings(&config.carousel))
    });
    let mut view = use_signal(|| driver.view());

    let watched = driver.clone();
    use_future(move || {
        let driver = watched.clone();
        async move {
            let mut views = driver.subscribe();
            while views.changed().await.is_ok() {
                let next = views.borrow_and_update().clone();
                view.set(next);
            }
        }
    });

    let dropped = driver.clone();
    use_drop(move || dropped.shutdown());

    CarouselHandle { driver, view }
}
