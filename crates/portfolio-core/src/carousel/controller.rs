//! Carousel paging state machine.
//!
//! [`CarouselController`] owns the paging index of a horizontally scrolling
//! card list and decides when autoplay may run. It holds no timers itself:
//! the [`CarouselDriver`](super::CarouselDriver) watches
//! [`CarouselController::cooldown_generation`] and
//! [`CarouselController::is_auto_playing`] and arms or cancels its timer
//! handles accordingly.
//!
//! ## Index contract
//!
//! `0 <= current_index <= max(0, item_count - visible_count)` holds after
//! every call. Manual navigation ([`advance`](CarouselController::advance),
//! [`jump_to`](CarouselController::jump_to), swipes) clamps at the bounds,
//! while [`tick`](CarouselController::tick) wraps back to the first page.

use std::ops::Range;

use super::gesture::TouchGesture;

/// Number of cards shown side by side.
pub const DEFAULT_VISIBLE_COUNT: usize = 3;

/// Horizontal drag distance (logical px) that turns a touch into a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Paging direction for manual navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the first card
    Left,
    /// Towards the last card
    Right,
}

impl Direction {
    /// Map a keyboard key name to a paging direction.
    ///
    /// Only the horizontal arrow keys navigate; everything else is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Observable phase of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselPhase {
    /// Not enough items to page; controls hidden, autoplay never runs
    Disabled,
    /// Idle and advancing on the autoplay interval
    Autoplay,
    /// Idle but autoplay held off by hover or a pending cooldown
    Paused,
    /// A touch gesture is in progress
    Dragging,
}

/// Snapshot of a carousel for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub current_index: usize,
    pub item_count: usize,
    pub visible_count: usize,
    pub phase: CarouselPhase,
    pub is_auto_playing: bool,
    pub can_go_left: bool,
    pub can_go_right: bool,
    /// Whether arrows and indicator dots should be rendered at all
    pub show_controls: bool,
    /// Number of indicator dots (one per valid `current_index`)
    pub page_count: usize,
}

impl CarouselView {
    /// Indices of the cards currently in view.
    pub fn window(&self) -> Range<usize> {
        let end = (self.current_index + self.visible_count).min(self.item_count);
        self.current_index.min(end)..end
    }

    /// The visible slice of `items`.
    ///
    /// Tolerates `items` being shorter than the count the view was computed
    /// from, which happens for one render while a new data set lands.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let window = self.window();
        let end = window.end.min(items.len());
        let start = window.start.min(end);
        &items[start..end]
    }

    /// Whether indicator dot `page` marks the current page.
    pub fn is_current_page(&self, page: usize) -> bool {
        page == self.current_index
    }
}

/// Index-based paging state machine shared by every carousel on the page.
#[derive(Debug, Clone)]
pub struct CarouselController {
    current_index: usize,
    item_count: usize,
    visible_count: usize,
    swipe_threshold: f64,
    gesture: Option<TouchGesture>,
    hovered: bool,
    cooling_down: bool,
    cooldown_generation: u64,
}

impl CarouselController {
    /// Create a controller showing `visible_count` cards at a time.
    ///
    /// A `visible_count` of zero is treated as one.
    pub fn new(visible_count: usize) -> Self {
        Self {
            current_index: 0,
            item_count: 0,
            visible_count: visible_count.max(1),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            gesture: None,
            hovered: false,
            cooling_down: false,
            cooldown_generation: 0,
        }
    }

    /// Override the swipe threshold (logical px).
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold.abs();
        self
    }

    /// Start with `item_count` items already known.
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.set_item_count(item_count);
        self
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Largest valid `current_index`.
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    /// True when there are more items than fit in the window.
    pub fn is_pageable(&self) -> bool {
        self.item_count > self.visible_count
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// True between a manual interaction and the end of its cooldown.
    pub fn is_cooling_down(&self) -> bool {
        self.cooling_down
    }

    /// Bumped on every manual interaction.
    ///
    /// A cooldown armed for an older generation must not resume autoplay.
    pub fn cooldown_generation(&self) -> u64 {
        self.cooldown_generation
    }

    /// Whether the autoplay interval should currently be running.
    pub fn is_auto_playing(&self) -> bool {
        self.is_pageable() && !self.cooling_down && !self.hovered && self.gesture.is_none()
    }

    pub fn phase(&self) -> CarouselPhase {
        if !self.is_pageable() {
            CarouselPhase::Disabled
        } else if self.gesture.is_some() {
            CarouselPhase::Dragging
        } else if self.cooling_down || self.hovered {
            CarouselPhase::Paused
        } else {
            CarouselPhase::Autoplay
        }
    }

    pub fn can_go_left(&self) -> bool {
        self.is_pageable() && self.current_index > 0
    }

    pub fn can_go_right(&self) -> bool {
        self.is_pageable() && self.current_index < self.max_index()
    }

    /// Number of indicator dots: one per valid index.
    pub fn page_count(&self) -> usize {
        self.max_index() + 1
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            current_index: self.current_index,
            item_count: self.item_count,
            visible_count: self.visible_count,
            phase: self.phase(),
            is_auto_playing: self.is_auto_playing(),
            can_go_left: self.can_go_left(),
            can_go_right: self.can_go_right(),
            show_controls: self.is_pageable(),
            page_count: self.page_count(),
        }
    }

    /// Manual step one card in `direction`, clamped at the bounds.
    ///
    /// Always pauses autoplay and restarts the cooldown, even when the index
    /// is already at the bound. Returns whether the index moved.
    pub fn advance(&mut self, direction: Direction) -> bool {
        self.begin_cooldown();
        let target = match direction {
            Direction::Left => self.current_index.saturating_sub(1),
            Direction::Right => self.current_index.saturating_add(1),
        };
        self.move_to(target)
    }

    /// Jump straight to `index` (indicator dots), clamped into range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.begin_cooldown();
        self.move_to(index)
    }

    /// Autoplay step: forward by one, wrapping to 0 past the last page.
    ///
    /// Ignored unless autoplay is currently allowed, so a tick that races a
    /// pause never moves the index.
    pub fn tick(&mut self) -> bool {
        if !self.is_auto_playing() {
            return false;
        }
        let next = if self.current_index >= self.max_index() {
            0
        } else {
            self.current_index + 1
        };
        self.move_to(next)
    }

    /// Begin tracking a touch at horizontal position `x`.
    pub fn touch_start(&mut self, x: f64) {
        self.begin_cooldown();
        self.gesture = Some(TouchGesture::new(x));
    }

    /// Feed a touch move. Fires at most one swipe per gesture.
    ///
    /// Returns the direction navigated, if the drag crossed the threshold.
    pub fn touch_move(&mut self, x: f64) -> Option<Direction> {
        let direction = self.gesture.as_ref()?.swipe(x, self.swipe_threshold)?;
        self.gesture = None;
        self.advance(direction);
        Some(direction)
    }

    /// Finish the touch; the carousel stays paused until the cooldown ends.
    pub fn touch_end(&mut self) {
        self.gesture = None;
        self.begin_cooldown();
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Update the backing list length and re-clamp the index in place.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.current_index = self.current_index.min(self.max_index());
        if !self.is_pageable() {
            self.gesture = None;
        }
    }

    /// Cooldown timer for `generation` fired.
    ///
    /// Returns true if this resumed autoplay eligibility; stale generations
    /// are ignored.
    pub fn cooldown_elapsed(&mut self, generation: u64) -> bool {
        if generation != self.cooldown_generation || !self.cooling_down {
            return false;
        }
        self.cooling_down = false;
        true
    }

    /// Back to the first page with no gesture or cooldown pending.
    ///
    /// Hover is kept; it tracks the pointer, not the data.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.gesture = None;
        self.cooling_down = false;
        self.cooldown_generation = self.cooldown_generation.wrapping_add(1);
    }

    fn begin_cooldown(&mut self) {
        self.cooling_down = true;
        self.cooldown_generation = self.cooldown_generation.wrapping_add(1);
    }

    fn move_to(&mut self, index: usize) -> bool {
        let clamped = index.min(self.max_index());
        let moved = clamped != self.current_index;
        self.current_index = clamped;
        moved
    }
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_COUNT)
    }
}
