//! Plain-text layout of a [`Rendered`] tree for terminals and logs.

use std::fmt::Write;

use super::{PARSE_FAILURE_MESSAGE, Rendered, Section};

pub const DIVIDER: &str = "────────────────────────────────────────";

/// Lay out sections as a heading, a numbered item list with indented
/// bullets, and a divider after each section.
#[must_use]
pub fn to_text(rendered: &Rendered) -> String {
    let mut out = String::new();
    match rendered {
        Rendered::Empty => {}
        Rendered::ParseFailure => {
            let _ = writeln!(out, "{PARSE_FAILURE_MESSAGE}");
        }
        Rendered::Sections(sections) => {
            for section in sections {
                write_section(&mut out, section);
            }
        }
    }
    out
}

fn write_section(out: &mut String, section: &Section) {
    let _ = writeln!(out, "{}", section.title);
    let width = section.items.len().to_string().len();
    for (index, item) in section.items.iter().enumerate() {
        let _ = writeln!(out, "  {:>width$}. {}", index + 1, item.title);
        for point in item.points.iter().flatten() {
            let _ = writeln!(out, "  {:width$}    • {point}", "");
        }
    }
    let _ = writeln!(out, "{DIVIDER}");
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
