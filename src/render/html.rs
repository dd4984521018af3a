//! HTML fragment layout of a [`Rendered`] tree.
//!
//! Produces the same structure a browser widget shows: a container with one
//! block per section (heading, ordered item list, optional bullet list, rule).
//! All text is escaped; the payload is untrusted model output.

use std::fmt::Write;

use super::{PARSE_FAILURE_MESSAGE, Rendered, Section};

#[must_use]
pub fn to_html(rendered: &Rendered) -> String {
    let mut out = String::new();
    match rendered {
        Rendered::Empty => {}
        Rendered::ParseFailure => {
            let _ = write!(out, r#"<p class="render-error">{}</p>"#, escape_html(PARSE_FAILURE_MESSAGE));
        }
        Rendered::Sections(sections) => {
            out.push_str(r#"<div class="render">"#);
            for section in sections {
                write_section(&mut out, section);
            }
            out.push_str("</div>");
        }
    }
    out
}

fn write_section(out: &mut String, section: &Section) {
    let _ = write!(out, r#"<div class="render-section"><h3>{}</h3><ol>"#, escape_html(&section.title));
    for item in &section.items {
        let _ = write!(out, "<li><p>{}</p>", escape_html(&item.title));
        if let Some(points) = &item.points {
            out.push_str("<ul>");
            for point in points {
                let _ = write!(out, "<li>{}</li>", escape_html(point));
            }
            out.push_str("</ul>");
        }
        out.push_str("</li>");
    }
    out.push_str("</ol><hr></div>");
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
