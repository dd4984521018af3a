use super::*;
use crate::render::render;
use serde_json::json;

#[test]
fn sections_are_numbered_with_bullets_and_divider() {
    let rendered = render(&json!({ "key_one": [{ "title": "A", "points": ["p1", "p2"] }, { "name": "B" }] }));

    let expected = format!("KEY ONE\n  1. A\n       • p1\n       • p2\n  2. B\n{DIVIDER}\n");
    assert_eq!(to_text(&rendered), expected);
}

#[test]
fn every_section_gets_a_divider() {
    let text = to_text(&render(&json!({ "a": "x", "b": "y" })));
    assert_eq!(text.matches(DIVIDER).count(), 2);
    assert!(text.find("A\n").unwrap() < text.find("B\n").unwrap());
}

#[test]
fn numbers_are_right_aligned_past_nine_items() {
    let items: Vec<_> = (1..=10).map(|n| json!({ "title": format!("t{n}") })).collect();
    let text = to_text(&render(&json!({ "many": items })));
    assert!(text.contains("\n   1. t1\n"));
    assert!(text.contains("\n  10. t10\n"));
}

#[test]
fn parse_failure_prints_fixed_message() {
    assert_eq!(to_text(&Rendered::ParseFailure), "Failed to parse JSON data.\n");
}

#[test]
fn empty_prints_nothing() {
    assert!(to_text(&Rendered::Empty).is_empty());
}
