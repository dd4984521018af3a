use super::*;
use crate::chat::Conversation;
use crate::flow::FlowError;
use crate::render::text::DIVIDER;
use serde_json::json;

fn plain() {
    console::set_colors_enabled(false);
}

#[test]
fn user_message_is_echoed_verbatim() {
    plain();
    let mut convo = Conversation::new();
    convo.begin_submission("  tell me things ");

    assert_eq!(format_message(&convo.messages()[0]), "\n  You > tell me things");
}

#[test]
fn assistant_payload_is_rendered_as_sections() {
    plain();
    let mut convo = Conversation::new();
    convo.begin_submission("q");
    let reply = convo
        .resolve(Ok(json!({ "key_one": [{ "title": "A", "points": ["p1"] }] })))
        .unwrap();

    let text = format_message(reply);
    assert!(text.starts_with("\n  Assistant\n  KEY ONE\n"));
    assert!(text.contains("\n    1. A\n"));
    assert!(text.contains("• p1"));
    assert!(text.contains(DIVIDER));
}

#[test]
fn plain_string_reply_shows_parse_failure() {
    plain();
    let mut convo = Conversation::new();
    convo.begin_submission("q");
    let reply = convo.resolve(Ok(json!("hello there"))).unwrap();

    assert!(format_message(reply).contains("Failed to parse JSON data."));
}

#[test]
fn error_reply_shows_error_text() {
    plain();
    let mut convo = Conversation::new();
    convo.begin_submission("q");
    let reply = convo
        .resolve(Err(FlowError::ApiResponse { status: 401, body: String::new() }))
        .unwrap();

    assert_eq!(format_message(reply), "\n  Error: API request failed: status 401");
}

#[test]
fn view_prints_each_message_once() {
    plain();
    let mut view = TerminalView::one_shot();
    let mut convo = Conversation::new();
    convo.begin_submission("q");
    view.history_changed(convo.messages());
    assert_eq!(view.printed, 1);

    convo.resolve(Ok(json!({ "k": "v" })));
    view.history_changed(convo.messages());
    view.history_changed(convo.messages());
    assert_eq!(view.printed, 2);
}

#[test]
fn pending_state_starts_and_idle_stops_spinner() {
    let mut view = TerminalView::one_shot();
    view.submission_state_changed(SubmissionState::Pending);
    assert!(view.spinner.is_some());
    view.submission_state_changed(SubmissionState::Idle);
    assert!(view.spinner.is_none());
}
