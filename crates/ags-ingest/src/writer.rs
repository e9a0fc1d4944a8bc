//! AGS4 serializer.
//!
//! Renders a document back to text: for each group the GROUP, HEADING,
//! UNIT and TYPE lines, one DATA line per row, and a blank line between
//! groups. Every line is CR+LF terminated.

use ags_model::{Document, Group};

use crate::tokenizer::quote;

const CRLF: &str = "\r\n";

/// Serialize a document to AGS4 text.
pub fn serialize(document: &Document) -> String {
    let mut out = String::new();
    for (idx, group) in document.groups().iter().enumerate() {
        if idx > 0 {
            out.push_str(CRLF);
        }
        write_group(&mut out, group);
    }
    out
}

/// Append one group's lines to `out`.
pub fn write_group(out: &mut String, group: &Group) {
    write_line(out, "GROUP", [group.name.as_str()]);
    write_line(out, "HEADING", group.headings.iter().map(|h| h.name.as_str()));
    write_line(out, "UNIT", group.headings.iter().map(|h| h.unit.as_str()));
    write_line(out, "TYPE", group.headings.iter().map(|h| h.data_type.as_str()));
    for row in &group.rows {
        write_line(out, "DATA", group.headings.iter().map(|h| row.get(&h.name)));
    }
}

fn write_line<'a>(out: &mut String, descriptor: &str, values: impl IntoIterator<Item = &'a str>) {
    out.push_str(&quote(descriptor));
    for value in values {
        out.push(',');
        out.push_str(&quote(value));
    }
    out.push_str(CRLF);
}
