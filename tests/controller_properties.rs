//! Property-based tests for the scroll decision.
//!
//! BLACK-BOX TESTING: drives the public controller API and observes only
//! the published `DerivedState` and `SinkConfig`.
//!
//! Properties Under Test:
//! - Repeating a measurement changes nothing
//! - Content that fits never scrolls, with or without centering
//! - Content that overflows by more than the tolerance always scrolls
//! - Sub-tolerance jitter around an exact fit never scrolls
//! - Centering stretches short content to the container, and only then
//! - The sink always mirrors the derived state

use proptest::prelude::*;
use scroll_when_needed::{
    decide, ContainerHeight, ContentHeight, RecordingSink, SinkConfig, SizeAwareScrollController,
    Tolerance,
};

// ===== Arbitrary Strategies =====

/// Container heights that have been laid out (well above the tolerance).
fn arb_container() -> impl Strategy<Value = f64> {
    1.0f64..10_000.0
}

/// Any non-negative height, including zero.
fn arb_height() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..10_000.0]
}

fn controller(center: bool) -> SizeAwareScrollController<RecordingSink> {
    SizeAwareScrollController::new(RecordingSink::new()).with_centering(center)
}

// ===== Properties =====

proptest! {
    #[test]
    fn repeated_observation_is_idempotent(
        content in arb_height(),
        container in arb_height(),
        center in any::<bool>(),
    ) {
        let mut controller = controller(center);

        let first = controller.observe(content, container);
        let second = controller.observe(content, container);

        prop_assert_eq!(first, second);
        // Both observations are published, and they are identical
        let history = controller.sink().history();
        prop_assert_eq!(history.len(), 2);
        prop_assert_eq!(history[0], history[1]);
    }

    #[test]
    fn content_that_fits_never_scrolls(
        container in arb_height(),
        fraction in 0.0f64..=1.0,
        center in any::<bool>(),
    ) {
        let content = container * fraction;
        let mut controller = controller(center);

        let state = controller.observe(content, container);

        prop_assert!(
            !state.should_scroll,
            "content {} in container {} scrolled (center={})",
            content, container, center
        );
    }

    #[test]
    fn content_that_overflows_always_scrolls(
        container in arb_container(),
        overflow in 0.011f64..5_000.0,
        center in any::<bool>(),
    ) {
        let content = container + overflow;
        let mut controller = controller(center);

        let state = controller.observe(content, container);

        prop_assert!(state.should_scroll);
        prop_assert_eq!(state.effective_content_height, content);
    }

    #[test]
    fn jitter_around_exact_fit_never_scrolls(
        container in arb_container(),
        center in any::<bool>(),
    ) {
        let mut controller = controller(center);

        for content in [container, container + 0.005, container - 0.005] {
            let state = controller.observe(content, container);
            prop_assert!(
                !state.should_scroll,
                "jitter {} around {} scrolled",
                content - container, container
            );
        }
    }

    #[test]
    fn centering_stretches_short_content(
        container in arb_container(),
        fraction in 0.0f64..0.999,
    ) {
        let content = container * fraction;
        let mut controller = controller(true);

        let state = controller.observe(content, container);

        prop_assert_eq!(state.effective_content_height, container);
        prop_assert!(!state.should_scroll);
    }

    #[test]
    fn without_centering_short_content_keeps_natural_height(
        container in arb_container(),
        fraction in 0.0f64..0.999,
    ) {
        let content = container * fraction;
        let mut controller = controller(false);

        let state = controller.observe(content, container);

        prop_assert_eq!(state.effective_content_height, content);
        prop_assert!(!state.should_scroll);
    }

    #[test]
    fn sink_mirrors_every_derived_state(
        measurements in prop::collection::vec((arb_height(), arb_height()), 1..20),
        center in any::<bool>(),
    ) {
        let mut controller = controller(center);

        let states: Vec<_> = measurements
            .iter()
            .map(|&(content, container)| controller.observe(content, container))
            .collect();

        let expected: Vec<SinkConfig> = states.into_iter().map(SinkConfig::from).collect();
        prop_assert_eq!(controller.sink().history(), expected.as_slice());
    }

    #[test]
    fn controller_agrees_with_pure_decision(
        content in arb_height(),
        container in arb_height(),
        center in any::<bool>(),
    ) {
        let mut controller = controller(center);

        let observed = controller.observe(content, container);
        let decided = decide(
            ContentHeight::new(content),
            ContainerHeight::new(container),
            Tolerance::DEFAULT,
            center,
        );

        prop_assert_eq!(observed, decided);
    }

    #[test]
    fn negative_inputs_behave_like_zero(
        content in -10_000.0f64..0.0,
        container in arb_container(),
        center in any::<bool>(),
    ) {
        let mut negative = controller(center);
        let mut zero = controller(center);

        prop_assert_eq!(
            negative.observe(content, container),
            zero.observe(0.0, container)
        );
    }
}
