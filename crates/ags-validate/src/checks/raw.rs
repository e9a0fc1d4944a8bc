//! Lexical and structural checks on unparsed text (rules 1 to 5).
//!
//! Each rule is an independent scan; none of them stops parsing.

use std::ops::Deref;

use ags_ingest::tokenizer::{Line, lines, quoted_fields};
use ags_model::{Issue, RuleId};

use crate::config::RuleConfig;

const DESCRIPTORS: &[&str] = &["GROUP", "HEADING", "UNIT", "TYPE", "DATA"];
const HEADER_ORDER: [&str; 3] = ["HEADING", "UNIT", "TYPE"];

/// A physical line with its quoted fields.
struct RawLine<'a> {
    line: Line<'a>,
    fields: Vec<String>,
}

impl<'a> Deref for RawLine<'a> {
    type Target = Line<'a>;

    fn deref(&self) -> &Line<'a> {
        &self.line
    }
}

impl RawLine<'_> {
    fn descriptor(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    fn value_count(&self) -> usize {
        self.fields.len().saturating_sub(1)
    }
}

/// Run the enabled raw-text rules in rule order.
pub fn run(text: &str, config: &RuleConfig) -> Vec<Issue> {
    let scanned: Vec<RawLine<'_>> = lines(text)
        .map(|line| RawLine {
            fields: quoted_fields(line.text),
            line,
        })
        .collect();

    let checks: [(RuleId, fn(&[RawLine<'_>]) -> Vec<Issue>); 7] = [
        (RuleId::Rule1, non_ascii),
        (RuleId::Rule2a, line_endings),
        (RuleId::Rule2b, header_order),
        (RuleId::Rule3, descriptors),
        (RuleId::Rule4a, group_rows),
        (RuleId::Rule4b, field_counts),
        (RuleId::Rule5, quoting),
    ];

    checks
        .iter()
        .filter(|(rule, _)| config.is_enabled(*rule))
        .flat_map(|(_, check)| check(&scanned))
        .collect()
}

/// Rule 1: one error per line containing a character outside ASCII.
fn non_ascii(lines: &[RawLine<'_>]) -> Vec<Issue> {
    lines
        .iter()
        .filter_map(|line| {
            let c = line.text.chars().find(|c| !c.is_ascii())?;
            Some(
                Issue::error(
                    RuleId::Rule1,
                    format!("Has non-ASCII character(s), first is U+{:04X}", c as u32),
                )
                .at_line(line.number),
            )
        })
        .collect()
}

/// Rule 2a: every line must end with CR+LF.
fn line_endings(lines: &[RawLine<'_>]) -> Vec<Issue> {
    lines
        .iter()
        .filter(|line| !line.crlf)
        .map(|line| {
            Issue::warning(
                RuleId::Rule2a,
                "Is not terminated by <CR> and <LF> characters",
            )
            .at_line(line.number)
        })
        .collect()
}

/// Rule 2b: the three lines after GROUP are HEADING, UNIT and TYPE.
fn header_order(lines: &[RawLine<'_>]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if line.descriptor() != Some("GROUP") {
            continue;
        }
        let group = group_name(line);
        for (offset, expected) in HEADER_ORDER.iter().enumerate() {
            match lines.get(idx + 1 + offset) {
                Some(next) if next.descriptor() == Some(*expected) => {}
                Some(next) => issues.push(
                    Issue::error(
                        RuleId::Rule2b,
                        format!(
                            "{expected} row missing or misplaced (found {})",
                            next.descriptor().unwrap_or("no descriptor")
                        ),
                    )
                    .at_line(next.number)
                    .in_group(group.clone()),
                ),
                None => issues.push(
                    Issue::error(
                        RuleId::Rule2b,
                        format!("{expected} row missing at end of file"),
                    )
                    .at_line(line.number)
                    .in_group(group.clone()),
                ),
            }
        }
    }

    issues
}

/// Rule 3: each non-blank line starts with a known data descriptor.
fn descriptors(lines: &[RawLine<'_>]) -> Vec<Issue> {
    lines
        .iter()
        .filter(|line| !line.is_blank())
        .filter_map(|line| {
            let message = match line.descriptor() {
                Some(descriptor) if DESCRIPTORS.contains(&descriptor) => return None,
                Some(descriptor) => {
                    format!("Does not start with a valid data descriptor ({descriptor})")
                }
                None => "Does not start with a valid data descriptor".to_string(),
            };
            Some(Issue::error(RuleId::Rule3, message).at_line(line.number))
        })
        .collect()
}

/// Rule 4a: a GROUP row names exactly one group.
fn group_rows(lines: &[RawLine<'_>]) -> Vec<Issue> {
    lines
        .iter()
        .filter(|line| line.descriptor() == Some("GROUP"))
        .filter_map(|line| {
            let message = match line.fields.len() {
                2 => return None,
                0 | 1 => "GROUP row is malformed; group name missing",
                _ => "GROUP row has more than one field after the descriptor",
            };
            Some(
                Issue::error(RuleId::Rule4a, message)
                    .at_line(line.number)
                    .in_group(group_name(line)),
            )
        })
        .collect()
}

/// Rule 4b: UNIT, TYPE and DATA rows match the HEADING field count.
///
/// Rows before any HEADING in their group raise one group-level issue
/// without a line number.
fn field_counts(lines: &[RawLine<'_>]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut group = String::new();
    let mut headings: Option<usize> = None;
    let mut reported_missing = false;

    for line in lines {
        match line.descriptor() {
            Some("GROUP") => {
                group = group_name(line);
                headings = None;
                reported_missing = false;
            }
            Some("HEADING") => headings = Some(line.value_count()),
            Some(descriptor @ ("UNIT" | "TYPE" | "DATA")) => match headings {
                Some(expected) if expected != line.value_count() => issues.push(
                    Issue::error(
                        RuleId::Rule4b,
                        format!(
                            "{descriptor} row has {} field(s) but HEADING row has {expected}",
                            line.value_count()
                        ),
                    )
                    .at_line(line.number)
                    .in_group(group.clone()),
                ),
                Some(_) => {}
                None if !reported_missing => {
                    reported_missing = true;
                    issues.push(
                        Issue::error(RuleId::Rule4b, "Headings row missing")
                            .in_group(group.clone()),
                    );
                }
                None => {}
            },
            _ => {}
        }
    }

    issues
}

/// Rule 5: fields are wrapped in quotes and embedded quotes are doubled.
fn quoting(lines: &[RawLine<'_>]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for line in lines.iter().filter(|line| !line.is_blank()) {
        if !line.text.starts_with('"') || !line.text.ends_with('"') || line.text.len() < 2 {
            issues.push(
                Issue::error(
                    RuleId::Rule5,
                    "Contains fields that are not enclosed in double quotes",
                )
                .at_line(line.number),
            );
        }
        if has_unescaped_quote(line.text) {
            issues.push(
                Issue::error(
                    RuleId::Rule5,
                    "Contains quotes within a data field; such quotes must be doubled",
                )
                .at_line(line.number),
            );
        }
    }

    issues
}

/// True when a quote inside a field is neither doubled nor closing the field.
///
/// A closing quote is one followed by a comma or the end of the line.
fn has_unescaped_quote(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    let mut in_field = false;

    while let Some(c) = chars.next() {
        if c != '"' {
            continue;
        }
        if !in_field {
            in_field = true;
            continue;
        }
        match chars.peek() {
            Some('"') => {
                chars.next();
            }
            None | Some(',') => in_field = false,
            Some(_) => return true,
        }
    }

    false
}

fn group_name(line: &RawLine<'_>) -> String {
    line.fields.get(1).cloned().unwrap_or_default()
}
