//! Property-based tests for the carousel controller and record helpers.
//!
//! Uses proptest to check that no sequence of interactions can push the
//! carousel outside its valid index range.

use portfolio_core::carousel::{CarouselController, CarouselPhase, Direction};
use portfolio_core::gallery::GalleryCursor;
use portfolio_core::records::{leading_integer, TestimonialRecord, TestimonialStats};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// One user or timer event against a carousel.
#[derive(Debug, Clone)]
enum Event {
    Advance(Direction),
    JumpTo(usize),
    Tick,
    TouchStart(f64),
    TouchMove(f64),
    TouchEnd,
    PointerEnter,
    PointerLeave,
    SetItemCount(usize),
    CooldownElapsed,
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Left), Just(Direction::Right)]
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        direction_strategy().prop_map(Event::Advance),
        (0usize..40).prop_map(Event::JumpTo),
        Just(Event::Tick),
        (0.0f64..1000.0).prop_map(Event::TouchStart),
        (0.0f64..1000.0).prop_map(Event::TouchMove),
        Just(Event::TouchEnd),
        Just(Event::PointerEnter),
        Just(Event::PointerLeave),
        (0usize..30).prop_map(Event::SetItemCount),
        Just(Event::CooldownElapsed),
    ]
}

fn apply(controller: &mut CarouselController, event: &Event) {
    match event {
        Event::Advance(direction) => {
            controller.advance(*direction);
        }
        Event::JumpTo(index) => {
            controller.jump_to(*index);
        }
        Event::Tick => {
            controller.tick();
        }
        Event::TouchStart(x) => controller.touch_start(*x),
        Event::TouchMove(x) => {
            controller.touch_move(*x);
        }
        Event::TouchEnd => controller.touch_end(),
        Event::PointerEnter => controller.pointer_enter(),
        Event::PointerLeave => controller.pointer_leave(),
        Event::SetItemCount(n) => controller.set_item_count(*n),
        Event::CooldownElapsed => {
            let generation = controller.cooldown_generation();
            controller.cooldown_elapsed(generation);
        }
    }
}

// ============================================================================
// Carousel Properties
// ============================================================================

proptest! {
    /// The index never leaves `0..=max(0, items - visible)`.
    #[test]
    fn index_stays_in_bounds(
        visible in 1usize..6,
        items in 0usize..30,
        events in prop::collection::vec(event_strategy(), 0..80),
    ) {
        let mut controller = CarouselController::new(visible).with_item_count(items);
        for event in &events {
            apply(&mut controller, event);
            prop_assert!(controller.current_index() <= controller.max_index());
            prop_assert_eq!(
                controller.max_index(),
                controller.item_count().saturating_sub(controller.visible_count())
            );
        }
    }

    /// Autoplay eligibility matches its definition after every event.
    #[test]
    fn autoplay_flag_is_consistent(
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut controller = CarouselController::new(3).with_item_count(9);
        for event in &events {
            apply(&mut controller, event);
            let expected = controller.is_pageable()
                && !controller.is_cooling_down()
                && !controller.is_hovered()
                && !controller.is_dragging();
            prop_assert_eq!(controller.is_auto_playing(), expected);
            prop_assert_eq!(
                controller.phase() == CarouselPhase::Autoplay,
                expected
            );
        }
    }

    /// Disabled carousels never move, whatever happens to them.
    #[test]
    fn unpageable_carousel_never_moves(
        visible in 1usize..6,
        events in prop::collection::vec(
            event_strategy().prop_filter("no resize", |e| !matches!(e, Event::SetItemCount(_))),
            0..60,
        ),
    ) {
        let mut controller = CarouselController::new(visible).with_item_count(visible);
        for event in &events {
            apply(&mut controller, event);
            prop_assert_eq!(controller.current_index(), 0);
            prop_assert_eq!(controller.phase(), CarouselPhase::Disabled);
            prop_assert!(!controller.view().show_controls);
        }
    }

    /// Every interaction bumps the generation, so older cooldowns go stale.
    #[test]
    fn interactions_bump_generation(direction in direction_strategy(), items in 4usize..20) {
        let mut controller = CarouselController::new(3).with_item_count(items);
        let before = controller.cooldown_generation();
        controller.advance(direction);
        prop_assert!(controller.cooldown_generation() != before);
        prop_assert!(!controller.cooldown_elapsed(before));
        prop_assert!(controller.is_cooling_down());
    }

    /// Autoplay alone visits every page and comes back to the first.
    #[test]
    fn ticks_cycle_through_all_pages(visible in 1usize..5, extra in 1usize..10) {
        let mut controller = CarouselController::new(visible).with_item_count(visible + extra);
        let pages = controller.page_count();
        for expected in 1..pages {
            controller.tick();
            prop_assert_eq!(controller.current_index(), expected);
        }
        controller.tick();
        prop_assert_eq!(controller.current_index(), 0);
    }
}

// ============================================================================
// Gallery and Stats Properties
// ============================================================================

proptest! {
    #[test]
    fn gallery_round_trips(len in 1usize..20, steps in 0usize..50) {
        let mut cursor = GalleryCursor::new(len);
        for _ in 0..steps {
            cursor.step_forward();
        }
        prop_assert_eq!(cursor.index(), steps % len);
        for _ in 0..steps {
            cursor.step_back();
        }
        prop_assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn leading_integer_reads_digit_prefix(n in 0i64..1_000_000, suffix in "[a-zA-Z ]{0,8}") {
        let text = format!("  {}{}", n, suffix);
        prop_assert_eq!(leading_integer(&text), Some(n));
    }

    #[test]
    fn average_rating_stays_within_range(
        ratings in prop::collection::vec(0.0f64..=5.0, 1..20),
    ) {
        let records: Vec<TestimonialRecord> = ratings
            .iter()
            .map(|r| TestimonialRecord {
                rating: Some(*r),
                ..Default::default()
            })
            .collect();
        let stats = TestimonialStats::from_records(&records);
        let average = stats.average_rating.unwrap();
        prop_assert!((0.0..=5.0).contains(&average));
        prop_assert_eq!(stats.review_count, ratings.len());
    }
}
