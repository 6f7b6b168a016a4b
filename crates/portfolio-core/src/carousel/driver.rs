//! Timer ownership for a carousel instance.
//!
//! [`CarouselDriver`] wraps a [`CarouselController`] and owns the two timers
//! a carousel needs: the autoplay interval and the post-interaction
//! cooldown. Both are held as [`TimerHandle`]s, which abort their task when
//! dropped, so replacing or clearing a handle is how a timer is cancelled.
//!
//! Every state change is published on a `tokio::sync::watch` channel as a
//! [`CarouselView`] for the UI to render.
//!
//! ```ignore
//! let driver = CarouselDriver::new("testimonials", CarouselController::new(3), timings);
//! let mut views = driver.subscribe();
//! driver.replace_items(records.len());
//! while views.changed().await.is_ok() {
//!     render(&views.borrow());
//! }
//! ```

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::controller::{CarouselController, CarouselView, Direction};

/// Default pause after manual navigation before autoplay resumes.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(5000);

/// Default autoplay period.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(4000);

/// Timer periods for one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTimings {
    pub tick_interval: Duration,
    pub cooldown: Duration,
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

/// A spawned timer task that is aborted when the handle is dropped.
#[derive(Debug)]
pub struct TimerHandle(JoinHandle<()>);

impl TimerHandle {
    fn spawn<F>(future: F) -> Self
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        Self(tokio::spawn(future))
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

struct DriverState {
    controller: CarouselController,
    autoplay: Option<TimerHandle>,
    cooldown: Option<TimerHandle>,
    armed_generation: u64,
    shut_down: bool,
}

struct Shared {
    label: String,
    timings: CarouselTimings,
    state: Mutex<DriverState>,
    views: watch::Sender<CarouselView>,
}

/// Carousel controller plus the timers that drive it.
///
/// Cheap to clone; clones share one controller. Must be created and used
/// from within a Tokio runtime.
#[derive(Clone)]
pub struct CarouselDriver {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for CarouselDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselDriver")
            .field("label", &self.shared.label)
            .field("timings", &self.shared.timings)
            .field("view", &self.view())
            .finish()
    }
}

impl CarouselDriver {
    pub fn new(
        label: impl Into<String>,
        controller: CarouselController,
        timings: CarouselTimings,
    ) -> Self {
        let (views, _) = watch::channel(controller.view());
        let armed_generation = controller.cooldown_generation();
        let shared = Arc::new(Shared {
            label: label.into(),
            timings,
            state: Mutex::new(DriverState {
                controller,
                autoplay: None,
                cooldown: None,
                armed_generation,
                shut_down: false,
            }),
            views,
        });
        {
            let mut state = shared.state.lock();
            Shared::reconcile(&shared, &mut state);
        }
        Self { shared }
    }

    pub fn label(&self) -> &str {
        &self.shared.label
    }

    /// Current snapshot.
    pub fn view(&self) -> CarouselView {
        self.shared.views.borrow().clone()
    }

    /// Receive a fresh [`CarouselView`] after every state change.
    pub fn subscribe(&self) -> watch::Receiver<CarouselView> {
        self.shared.views.subscribe()
    }

    pub fn advance(&self, direction: Direction) {
        self.update(|c| {
            c.advance(direction);
        });
    }

    pub fn jump_to(&self, index: usize) {
        self.update(|c| {
            c.jump_to(index);
        });
    }

    /// Run one autoplay step immediately (normally done by the interval).
    pub fn tick(&self) {
        self.update(|c| {
            c.tick();
        });
    }

    pub fn touch_start(&self, x: f64) {
        self.update(|c| c.touch_start(x));
    }

    pub fn touch_move(&self, x: f64) {
        self.update(|c| {
            if let Some(direction) = c.touch_move(x) {
                tracing::debug!(?direction, "Swipe navigation");
            }
        });
    }

    pub fn touch_end(&self) {
        self.update(|c| c.touch_end());
    }

    pub fn pointer_enter(&self) {
        self.update(|c| c.pointer_enter());
    }

    pub fn pointer_leave(&self) {
        self.update(|c| c.pointer_leave());
    }

    /// Keyboard navigation; returns whether the key was handled.
    pub fn key(&self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.advance(direction);
                true
            }
            None => false,
        }
    }

    pub fn set_item_count(&self, item_count: usize) {
        self.update(|c| c.set_item_count(item_count));
    }

    /// Swap in a freshly loaded data set of `item_count` records.
    ///
    /// Starts again from the first page and drops any pending cooldown.
    pub fn replace_items(&self, item_count: usize) {
        self.update(|c| {
            c.reset();
            c.set_item_count(item_count);
        });
    }

    /// Release both timers; later calls become no-ops.
    ///
    /// Called when the owning component unmounts.
    pub fn shutdown(&self) {
        let mut state = self.shared.state.lock();
        state.shut_down = true;
        state.autoplay = None;
        state.cooldown = None;
        tracing::debug!(carousel = %self.shared.label, "Carousel timers released");
    }

    /// Whether the autoplay timer task is currently held.
    pub fn has_autoplay_timer(&self) -> bool {
        self.shared.state.lock().autoplay.is_some()
    }

    /// Whether a cooldown timer task is currently held.
    pub fn has_cooldown_timer(&self) -> bool {
        self.shared.state.lock().cooldown.is_some()
    }

    fn update(&self, op: impl FnOnce(&mut CarouselController)) {
        let mut state = self.shared.state.lock();
        if state.shut_down {
            return;
        }
        op(&mut state.controller);
        Shared::reconcile(&self.shared, &mut state);
    }
}

impl Shared {
    /// Bring the timer handles in line with the controller and publish.
    fn reconcile(shared: &Arc<Shared>, state: &mut DriverState) {
        let generation = state.controller.cooldown_generation();
        if generation != state.armed_generation {
            state.armed_generation = generation;
            state.cooldown = if state.controller.is_cooling_down() {
                Some(Self::spawn_cooldown(shared, generation))
            } else {
                None
            };
        }

        let playing = state.controller.is_auto_playing();
        match (playing, state.autoplay.is_some()) {
            (true, false) => {
                tracing::debug!(carousel = %shared.label, "Autoplay started");
                state.autoplay = Some(Self::spawn_autoplay(shared));
            }
            (false, true) => {
                tracing::debug!(carousel = %shared.label, "Autoplay paused");
                state.autoplay = None;
            }
            _ => {}
        }

        let view = state.controller.view();
        shared.views.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }

    fn spawn_cooldown(shared: &Arc<Shared>, generation: u64) -> TimerHandle {
        let weak: Weak<Shared> = Arc::downgrade(shared);
        let cooldown = shared.timings.cooldown;
        TimerHandle::spawn(async move {
            tokio::time::sleep(cooldown).await;
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut state = shared.state.lock();
            if state.shut_down {
                return;
            }
            if state.controller.cooldown_elapsed(generation) {
                tracing::debug!(carousel = %shared.label, "Cooldown elapsed");
            }
            if state.armed_generation == generation {
                state.cooldown = None;
            }
            Shared::reconcile(&shared, &mut state);
        })
    }

    fn spawn_autoplay(shared: &Arc<Shared>) -> TimerHandle {
        let weak: Weak<Shared> = Arc::downgrade(shared);
        let period = shared.timings.tick_interval;
        TimerHandle::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let mut state = shared.state.lock();
                if state.shut_down {
                    return;
                }
                if state.controller.tick() {
                    tracing::trace!(
                        carousel = %shared.label,
                        index = state.controller.current_index(),
                        "Autoplay advanced"
                    );
                }
                Shared::reconcile(&shared, &mut state);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselPhase;

    fn timings() -> CarouselTimings {
        CarouselTimings {
            tick_interval: Duration::from_millis(4000),
            cooldown: Duration::from_millis(5000),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_carousel_holds_no_timers() {
        let driver = CarouselDriver::new("test", CarouselController::new(3), timings());
        driver.set_item_count(3);
        assert!(!driver.has_autoplay_timer());
        assert_eq!(driver.view().phase, CarouselPhase::Disabled);
    }

    #[tokio::test(start_paused = true)]
    async fn item_count_arrival_starts_autoplay() {
        let driver = CarouselDriver::new("test", CarouselController::new(3), timings());
        driver.set_item_count(6);
        assert!(driver.has_autoplay_timer());
        assert!(driver.view().is_auto_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn replacing_items_restarts_from_first_page() {
        let driver = CarouselDriver::new(
            "test",
            CarouselController::new(3).with_item_count(10),
            timings(),
        );
        driver.jump_to(4);
        assert!(driver.has_cooldown_timer());
        assert!(!driver.has_autoplay_timer());

        driver.replace_items(8);
        let view = driver.view();
        assert_eq!(view.current_index, 0);
        assert!(view.is_auto_playing);
        assert!(!driver.has_cooldown_timer());
        assert!(driver.has_autoplay_timer());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_releases_timers() {
        let driver = CarouselDriver::new(
            "test",
            CarouselController::new(3).with_item_count(10),
            timings(),
        );
        driver.advance(Direction::Right);
        assert!(driver.has_cooldown_timer());

        driver.shutdown();
        assert!(!driver.has_autoplay_timer());
        assert!(!driver.has_cooldown_timer());

        driver.advance(Direction::Right);
        assert_eq!(driver.view().current_index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn keys_map_to_navigation() {
        let driver = CarouselDriver::new(
            "test",
            CarouselController::new(3).with_item_count(10),
            timings(),
        );
        assert!(driver.key("ArrowRight"));
        assert!(!driver.key("Tab"));
        assert_eq!(driver.view().current_index, 1);
        assert_eq!(driver.view().phase, CarouselPhase::Paused);
    }
}
