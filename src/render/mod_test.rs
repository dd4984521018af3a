use super::*;
use serde_json::json;

fn sections(rendered: Rendered) -> Vec<Section> {
    match rendered {
        Rendered::Sections(sections) => sections,
        other => panic!("expected sections, got {other:?}"),
    }
}

fn item(title: &str, points: Option<&[&str]>) -> Item {
    Item { title: title.to_string(), points: points.map(|p| p.iter().map(|s| (*s).to_string()).collect()) }
}

// =============================================================================
// Top-level shapes
// =============================================================================

#[test]
fn section_list_with_points() {
    let value = json!({ "key_one": [{ "title": "A", "points": ["p1", "p2"] }] });

    let out = sections(render(&value));
    assert_eq!(out, vec![Section { title: "KEY ONE".into(), items: vec![item("A", Some(&["p1", "p2"]))] }]);
}

#[test]
fn scalar_section_becomes_single_item() {
    let out = sections(render(&json!({ "k": "just a string" })));
    assert_eq!(out, vec![Section { title: "K".into(), items: vec![item("just a string", None)] }]);
}

#[test]
fn null_renders_nothing() {
    assert_eq!(render(&Value::Null), Rendered::Empty);
    assert_eq!(render_payload(None), Rendered::Empty);
}

#[test]
fn invalid_json_text_falls_back() {
    assert_eq!(render_str("not valid json{"), Rendered::ParseFailure);
    assert_eq!(render(&json!("not valid json{")), Rendered::ParseFailure);
}

#[test]
fn json_text_is_parsed_before_rendering() {
    let text = r#"{"summary":[{"name":"Widget"}]}"#;
    let out = sections(render(&Value::String(text.into())));
    assert_eq!(out[0].title, "SUMMARY");
    assert_eq!(out[0].items, vec![item("Widget", None)]);
}

#[test]
fn json_text_null_renders_nothing() {
    assert_eq!(render_str("null"), Rendered::Empty);
}

#[test]
fn sections_follow_insertion_order() {
    let value: Value = serde_json::from_str(r#"{"zeta":"z","alpha":"a","mid_point":"m"}"#).unwrap();
    let titles: Vec<String> = sections(render(&value)).into_iter().map(|s| s.title).collect();
    assert_eq!(titles, ["ZETA", "ALPHA", "MID POINT"]);
}

#[test]
fn top_level_array_is_keyed_by_index() {
    let out = sections(render(&json!([["x"], "y"])));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].title, "0");
    assert_eq!(out[0].items, vec![item("\"x\"", None)]);
    assert_eq!(out[1].title, "1");
    assert_eq!(out[1].items, vec![item("y", None)]);
}

#[test]
fn top_level_number_has_no_sections() {
    assert_eq!(render(&json!(42)), Rendered::Sections(Vec::new()));
}

// =============================================================================
// Item title fallbacks
// =============================================================================

#[test]
fn title_prefers_title_then_name() {
    let out = sections(render(&json!({ "s": [
        { "title": "T", "name": "N" },
        { "name": "N" },
        { "title": "", "name": "from name" },
    ] })));
    let titles: Vec<&str> = out[0].items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["T", "N", "from name"]);
}

#[test]
fn title_falls_back_to_json_text_of_element() {
    let out = sections(render(&json!({ "s": [{ "id": 7 }, "bare", 3] })));
    let titles: Vec<&str> = out[0].items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, [r#"{"id":7}"#, "\"bare\"", "3"]);
}

#[test]
fn falsy_title_values_are_skipped() {
    let out = sections(render(&json!({ "s": [{ "title": null, "name": 0, "x": 1 }] })));
    assert_eq!(out[0].items[0].title, r#"{"title":null,"name":0,"x":1}"#);
}

#[test]
fn numeric_title_uses_text_form() {
    let out = sections(render(&json!({ "s": [{ "title": 12 }] })));
    assert_eq!(out[0].items[0].title, "12");
}

// =============================================================================
// Bullet points
// =============================================================================

#[test]
fn description_used_when_points_absent() {
    let out = sections(render(&json!({ "s": [{ "title": "A", "description": "one line" }] })));
    assert_eq!(out[0].items, vec![item("A", Some(&["one line"]))]);
}

#[test]
fn points_win_over_description() {
    let out = sections(render(&json!({ "s": [{ "title": "A", "points": "p", "description": "d" }] })));
    assert_eq!(out[0].items[0].points, Some(vec!["p".to_string()]));
}

#[test]
fn empty_points_fall_through_to_description() {
    let out = sections(render(&json!({ "s": [{ "title": "A", "points": "", "description": ["d1", "d2"] }] })));
    assert_eq!(out[0].items, vec![item("A", Some(&["d1", "d2"]))]);
}

#[test]
fn non_string_points_are_stringified() {
    let out = sections(render(&json!({ "s": [{ "title": "A", "points": [1, true, { "k": "v" }] }] })));
    assert_eq!(out[0].items[0].points, Some(vec!["1".into(), "true".into(), r#"{"k":"v"}"#.into()]));
}

#[test]
fn no_points_fields_means_no_bullets() {
    let out = sections(render(&json!({ "s": [{ "title": "A" }] })));
    assert_eq!(out[0].items[0].points, None);
}

// =============================================================================
// Non-sequence section content
// =============================================================================

#[test]
fn non_sequence_content_is_coerced() {
    let out = sections(render(&json!({ "n": 5, "b": false, "z": null, "o": { "a": 1 } })));
    let titles: Vec<&str> = out.iter().map(|s| s.items[0].title.as_str()).collect();
    assert_eq!(titles, ["5", "false", "null", r#"{"a":1}"#]);
    assert!(out.iter().all(|s| s.items.len() == 1 && s.items[0].points.is_none()));
}

#[test]
fn empty_sequence_yields_section_without_items() {
    let out = sections(render(&json!({ "empty_list": [] })));
    assert_eq!(out, vec![Section { title: "EMPTY LIST".into(), items: Vec::new() }]);
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn rendering_twice_is_identical() {
    let value = json!({ "ideas": [{ "title": "A", "points": ["p"] }, { "name": "B" }], "note": "n" });
    let before = value.clone();
    assert_eq!(render(&value), render(&value));
    assert_eq!(value, before);
}

#[test]
fn rendered_serializes_with_kind_tag() {
    let out = render(&json!({ "k": "v" }));
    let encoded = serde_json::to_value(&out).unwrap();
    assert_eq!(encoded["kind"], "sections");
    assert_eq!(encoded["sections"][0]["title"], "K");
    assert!(encoded["sections"][0]["items"][0].get("points").is_none());
    assert_eq!(serde_json::to_value(Rendered::ParseFailure).unwrap(), json!({ "kind": "parse_failure" }));
}
