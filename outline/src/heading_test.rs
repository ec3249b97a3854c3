use super::*;

// --- Heading::new ---

#[test]
fn new_accepts_levels_two_through_six() {
    for level in 2..=6 {
        let h = Heading::new(level, "Section");
        assert!(h.is_some(), "level {level} should be accepted");
    }
}

#[test]
fn new_rejects_level_one() {
    assert_eq!(Heading::new(1, "Title"), None);
}

#[test]
fn new_rejects_level_seven() {
    assert_eq!(Heading::new(7, "Too deep"), None);
}

#[test]
fn new_rejects_level_zero() {
    assert_eq!(Heading::new(0, "Nothing"), None);
}

#[test]
fn new_keeps_text() {
    let h = Heading::new(3, "Install").unwrap();
    assert_eq!(h.level, 3);
    assert_eq!(h.text, "Install");
}

// --- Heading::from_tag ---

#[test]
fn from_tag_parses_lowercase() {
    let h = Heading::from_tag("h2", "Intro").unwrap();
    assert_eq!(h.level, 2);
}

#[test]
fn from_tag_parses_uppercase() {
    // DOM tagName reports upper case for HTML elements.
    let h = Heading::from_tag("H5", "Detail").unwrap();
    assert_eq!(h.level, 5);
}

#[test]
fn from_tag_rejects_h1() {
    assert_eq!(Heading::from_tag("h1", "Page title"), None);
}

#[test]
fn from_tag_rejects_h7() {
    assert_eq!(Heading::from_tag("h7", "Not a rank"), None);
}

#[test]
fn from_tag_rejects_non_headings() {
    assert_eq!(Heading::from_tag("div", "x"), None);
    assert_eq!(Heading::from_tag("header", "x"), None);
    assert_eq!(Heading::from_tag("h", "x"), None);
    assert_eq!(Heading::from_tag("h22", "x"), None);
    assert_eq!(Heading::from_tag("", "x"), None);
}

// --- anchor_id ---

#[test]
fn anchor_id_is_one_based() {
    assert_eq!(anchor_id(0), "heading-1");
    assert_eq!(anchor_id(1), "heading-2");
    assert_eq!(anchor_id(41), "heading-42");
}

// --- serde ---

#[test]
fn heading_round_trips_through_json() {
    let h = Heading::new(4, "Configuration").unwrap();
    let json = serde_json::to_string(&h).unwrap();
    let back: Heading = serde_json::from_str(&json).unwrap();
    assert_eq!(h, back);
}
