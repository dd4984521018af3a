use super::*;

#[test]
fn run_request_serializes_chat_fields() {
    let body = serde_json::to_value(RunRequest::chat("hello")).unwrap();
    assert_eq!(body, serde_json::json!({ "input_value": "hello", "output_type": "chat", "input_type": "chat" }));
}

#[test]
fn run_request_keeps_field_order() {
    let text = serde_json::to_string(&RunRequest::chat("x")).unwrap();
    assert_eq!(text, r#"{"input_value":"x","output_type":"chat","input_type":"chat"}"#);
}

#[test]
fn status_error_mentions_status() {
    let err = FlowError::ApiResponse { status: 502, body: "bad gateway".into() };
    assert_eq!(err.to_string(), "API request failed: status 502");
}

#[test]
fn request_error_carries_reason() {
    let err = FlowError::ApiRequest("connection refused".into());
    assert!(err.to_string().contains("connection refused"));
}
