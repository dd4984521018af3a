//! Adaptive response renderer — arbitrary JSON to sections, items, points.
//!
//! DESIGN
//! ======
//! Rendering is split into a pure decode step ([`render`]) producing a
//! [`Rendered`] tree, and output formatters (`text`, `html`) that walk the
//! tree. The decoder never fails: shapes it does not recognize degrade to
//! stringified titles, and unparseable text degrades to [`Rendered::ParseFailure`].
//!
//! DECODING
//! ========
//! Top level: a mapping yields one section per key in insertion order; an
//! array yields one section per element keyed by index; `null` yields
//! nothing; any other scalar yields zero sections.
//!
//! Section content: a sequence yields one item per element, decoded through
//! [`ItemFields`] with ordered fallbacks (`title` → `name` → JSON text for the
//! title, `points` → `description` for bullets). Anything else yields a single
//! item titled with its string coercion.

pub mod html;
pub mod text;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Shown in place of a response whose text is not JSON.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse JSON data.";

// =============================================================================
// OUTPUT TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "sections", rename_all = "snake_case")]
pub enum Rendered {
    /// Nothing to show (`null` payload).
    Empty,
    /// The payload was text that did not parse as JSON.
    ParseFailure,
    Sections(Vec<Section>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<String>>,
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Render an already-decoded JSON value.
///
/// A JSON string is treated as JSON text and parsed again before rendering.
#[must_use]
pub fn render(value: &Value) -> Rendered {
    match value {
        Value::Null => Rendered::Empty,
        Value::String(text) => render_str(text),
        other => Rendered::Sections(decode_document(other)),
    }
}

/// Render JSON text. Text that does not parse yields [`Rendered::ParseFailure`].
#[must_use]
pub fn render_str(text: &str) -> Rendered {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) => Rendered::Empty,
        Ok(value) => Rendered::Sections(decode_document(&value)),
        Err(e) => {
            warn!(error = %e, text_len = text.len(), "render: response is not JSON");
            Rendered::ParseFailure
        }
    }
}

/// Render an optional payload; absent payloads render nothing.
#[must_use]
pub fn render_payload(payload: Option<&Value>) -> Rendered {
    payload.map_or(Rendered::Empty, render)
}

// =============================================================================
// DECODER
// =============================================================================

/// Fields of a structured item. Every field is optional; missing fields fall
/// through to the next candidate.
#[derive(Debug, Default, Deserialize)]
struct ItemFields {
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    points: Option<Value>,
    #[serde(default)]
    description: Option<Value>,
}

impl ItemFields {
    fn decode(element: &Value) -> Self {
        // Only mappings carry fields; arrays would otherwise bind positionally.
        if element.is_object() {
            Self::deserialize(element).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

fn decode_document(value: &Value) -> Vec<Section> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, content)| decode_section(key, content))
            .collect(),
        Value::Array(entries) => entries
            .iter()
            .enumerate()
            .map(|(index, content)| decode_section(&index.to_string(), content))
            .collect(),
        _ => Vec::new(),
    }
}

fn decode_section(key: &str, content: &Value) -> Section {
    let items = match content {
        Value::Array(elements) => elements.iter().map(decode_item).collect(),
        other => vec![Item { title: coerce_string(other), points: None }],
    };
    Section { title: section_title(key), items }
}

fn decode_item(element: &Value) -> Item {
    let fields = ItemFields::decode(element);

    let title = fields
        .title
        .as_ref()
        .and_then(label)
        .or_else(|| fields.name.as_ref().and_then(label))
        .unwrap_or_else(|| element.to_string());

    let points = fields
        .points
        .filter(is_present)
        .or_else(|| fields.description.filter(is_present))
        .map(flatten_points);

    Item { title, points }
}

/// `snake_case_key` → `SNAKE CASE KEY`.
fn section_title(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

/// A field value counts only when it carries content: not null, not an empty
/// string, not `false`, not numeric zero.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn label(value: &Value) -> Option<String> {
    is_present(value).then(|| coerce_string(value))
}

/// Strings verbatim, everything else as compact JSON text.
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn flatten_points(value: Value) -> Vec<String> {
    match value {
        Value::Array(points) => points.iter().map(coerce_string).collect(),
        scalar => vec![coerce_string(&scalar)],
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
