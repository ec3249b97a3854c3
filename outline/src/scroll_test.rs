#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn target_adds_scroll_offset_and_subtracts_clearance() {
    assert_eq!(scroll_target(400.0, 1000.0), 1300.0);
}

#[test]
fn target_at_page_top_with_no_scroll() {
    assert_eq!(scroll_target(250.0, 0.0), 150.0);
}

#[test]
fn target_above_clearance_line_goes_negative() {
    // A heading already visible in the top 100px yields a negative target;
    // the browser clamps it to zero.
    assert_eq!(scroll_target(40.0, 0.0), -60.0);
}

#[test]
fn heading_above_viewport_scrolls_up() {
    // Scrolled past the heading: rect top is negative, target lands above
    // the current position.
    let target = scroll_target(-600.0, 2000.0);
    assert_eq!(target, 1300.0);
    assert!(target < 2000.0);
}
