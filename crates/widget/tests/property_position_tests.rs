//! Property-based tests for popover positioning and viewport clamping.
//!
//! These tests verify the clamp invariants over randomized geometry rather
//! than the handful of worked examples in the unit tests.
//!
//! Test coverage:
//! - A popover that fits always ends within the horizontal margins.
//! - The left-edge check takes priority over the right-edge check.
//! - The top edge never ends above the margin.
//! - Centering math before clamping.

use proptest::prelude::*;

use popover_dom::{Document, NodeId, Rect, Viewport};
use popover_widget::PopoverWidget;

const VIEWPORT_WIDTH: f64 = 800.0;
const MARGIN: f64 = 10.0;

/// Build a shown popover with the given measured width and assigned
/// position, ready for a clamp pass.
fn clamp_fixture(width: f64, left: f64, top: f64) -> (Document, PopoverWidget, NodeId) {
    let mut doc = Document::with_viewport(Viewport::new(VIEWPORT_WIDTH, 600.0));
    let body = doc.body();
    let target = doc.create_element_in(body, "button");
    let mut widget = PopoverWidget::new();
    widget.show(&mut doc, target, "", "content");
    let popover = widget.popover().expect("popover should exist");
    doc.set_layout_rect(popover, Rect::new(0.0, 0.0, width, 100.0));
    doc.style_mut(popover).set_px("left", left);
    doc.style_mut(popover).set_px("top", top);
    (doc, widget, popover)
}

/// Widths that leave room for both margins.
fn fitting_width_strategy() -> impl Strategy<Value = i32> {
    1..=(VIEWPORT_WIDTH as i32 - 2 * MARGIN as i32)
}

proptest! {
    #[test]
    fn prop_fitting_popover_ends_within_margins(
        width in fitting_width_strategy(),
        left in -2000i32..2000,
        top in -500i32..500,
    ) {
        let (mut doc, mut widget, popover) =
            clamp_fixture(f64::from(width), f64::from(left), f64::from(top));
        widget.adjust_position_for_viewport(&mut doc);

        let final_left = doc.style(popover).px("left").unwrap() as f64;
        prop_assert!(final_left >= MARGIN);
        prop_assert!(final_left + f64::from(width) <= VIEWPORT_WIDTH - MARGIN);
    }

    #[test]
    fn prop_top_never_ends_above_margin(
        width in fitting_width_strategy(),
        top in -500i32..500,
    ) {
        let (mut doc, mut widget, popover) =
            clamp_fixture(f64::from(width), 100.0, f64::from(top));
        widget.adjust_position_for_viewport(&mut doc);

        let final_top = doc.style(popover).px("top").unwrap();
        prop_assert!(final_top >= MARGIN as i64);
        // A position already below the margin is left alone
        if top >= MARGIN as i32 {
            prop_assert_eq!(final_top, i64::from(top));
        }
    }

    #[test]
    fn prop_left_check_takes_priority_for_oversized_popovers(
        width in (VIEWPORT_WIDTH as i32)..2000,
        left in -2000i32..(MARGIN as i32),
    ) {
        // Too far left AND wider than the usable viewport: only the left
        // branch applies and the right overflow is accepted as-is.
        let (mut doc, mut widget, popover) =
            clamp_fixture(f64::from(width), f64::from(left), 50.0);
        widget.adjust_position_for_viewport(&mut doc);

        prop_assert_eq!(doc.style(popover).px("left").unwrap(), MARGIN as i64);
    }

    #[test]
    fn prop_position_centers_before_clamping(
        target_left in 500i32..1000,
        target_width in 1i32..300,
        popover_width in 1i32..400,
    ) {
        let mut doc = Document::with_viewport(Viewport::new(10_000.0, 10_000.0));
        let body = doc.body();
        let target = doc.create_element_in(body, "button");
        doc.set_layout_rect(
            target,
            Rect::new(f64::from(target_left), 5000.0, f64::from(target_width), 40.0),
        );

        let mut widget = PopoverWidget::new();
        widget.show(&mut doc, target, "", "content");
        let popover = widget.popover().expect("popover should exist");
        doc.set_layout_rect(popover, Rect::new(0.0, 0.0, f64::from(popover_width), 100.0));
        widget.position_popover(&mut doc, target);

        // Far from every edge, so the clamp must not have moved anything:
        // the popover is exactly centered on the target.
        let left = doc.style(popover).px("left").unwrap() as f64;
        let expected =
            f64::from(target_left) + f64::from(target_width) / 2.0 - f64::from(popover_width) / 2.0;
        prop_assert_eq!(left, expected.trunc());
    }
}
