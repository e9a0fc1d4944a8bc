//! Closure of UNIT, TYPE and ABBR codes (rules 15, 16, 17).
//!
//! Codes are checked against the document's own UNIT, TYPE and ABBR groups,
//! not against the standard dictionary.

use std::collections::HashSet;

use ags_model::{Document, Heading, Issue, RuleId};

use super::Context;

/// A code list declared by one column of a document group.
struct CodeList {
    group: &'static str,
    heading: &'static str,
    rule: RuleId,
    label: &'static str,
    /// Offset of the header row naming the code, relative to the GROUP row.
    header_offset: usize,
    /// Heading TYPE whose values are codes from this list.
    value_type: &'static str,
    header_code: fn(&Heading) -> &str,
}

const UNITS: CodeList = CodeList {
    group: "UNIT",
    heading: "UNIT_UNIT",
    rule: RuleId::Rule15,
    label: "Unit",
    header_offset: 2,
    value_type: "PU",
    header_code: unit_code,
};

const TYPES: CodeList = CodeList {
    group: "TYPE",
    heading: "TYPE_TYPE",
    rule: RuleId::Rule17,
    label: "Data type",
    header_offset: 3,
    value_type: "PT",
    header_code: type_code,
};

fn unit_code(heading: &Heading) -> &str {
    &heading.unit
}

fn type_code(heading: &Heading) -> &str {
    &heading.data_type
}

/// Rule 15: every unit used is listed in UNIT.
pub fn units(context: &Context<'_>) -> Vec<Issue> {
    check_codes(context.document, &UNITS)
}

/// Rule 17: every data type used is listed in TYPE.
pub fn types(context: &Context<'_>) -> Vec<Issue> {
    check_codes(context.document, &TYPES)
}

fn check_codes(document: &Document, list: &CodeList) -> Vec<Issue> {
    let mut issues = Vec::new();

    let Some(declared) = document.get(list.group).map(|group| {
        group
            .column(list.heading)
            .filter(|code| !code.is_empty())
            .collect::<HashSet<&str>>()
    }) else {
        if uses_codes(document, list) {
            issues.push(
                Issue::error(list.rule, format!("{} group not found", list.group))
                    .in_group(list.group),
            );
        }
        return issues;
    };

    for group in document.groups() {
        for heading in &group.headings {
            let code = (list.header_code)(heading);
            if code.is_empty() || declared.contains(code) {
                continue;
            }
            issues.push(
                Issue::error(
                    list.rule,
                    format!(
                        "{} '{code}' is not listed in the {} group",
                        list.label, list.group
                    ),
                )
                .at_line(group.line_number + list.header_offset)
                .in_group(group.name.clone())
                .for_field(heading.name.clone()),
            );
        }

        for heading in group.headings_of_type(list.value_type) {
            for row in &group.rows {
                let code = row.get(&heading.name);
                if code.is_empty() || declared.contains(code) {
                    continue;
                }
                issues.push(
                    Issue::error(
                        list.rule,
                        format!(
                            "{} '{code}' is not listed in the {} group",
                            list.label, list.group
                        ),
                    )
                    .at_line(row.line_number)
                    .in_group(group.name.clone())
                    .for_field(heading.name.clone()),
                );
            }
        }
    }

    issues
}

fn uses_codes(document: &Document, list: &CodeList) -> bool {
    document.groups().iter().any(|group| {
        group
            .headings
            .iter()
            .any(|heading| !(list.header_code)(heading).is_empty())
            || group
                .headings_of_type(list.value_type)
                .any(|heading| group.column(&heading.name).any(|v| !v.is_empty()))
    })
}

/// Rule 16: every PA value is listed in ABBR for its heading.
///
/// Values are split on the TRAN concatenation character and each part is
/// checked as an (ABBR_HDNG, ABBR_CODE) pair. A missing ABBR group is a
/// single warning.
pub fn abbreviations(context: &Context<'_>) -> Vec<Issue> {
    let document = context.document;
    let mut issues = Vec::new();

    let uses_abbreviations = document.groups().iter().any(|group| {
        group
            .headings_of_type("PA")
            .any(|heading| group.column(&heading.name).any(|v| !v.is_empty()))
    });
    if !uses_abbreviations {
        return issues;
    }

    let Some(abbr) = document.get("ABBR") else {
        issues.push(
            Issue::warning(
                RuleId::Rule16,
                "ABBR group not found but PA type values are used",
            )
            .in_group("ABBR"),
        );
        return issues;
    };
    let declared: HashSet<(&str, &str)> = abbr
        .rows
        .iter()
        .map(|row| (row.get("ABBR_HDNG"), row.get("ABBR_CODE")))
        .collect();

    for group in document.groups() {
        for heading in group.headings_of_type("PA") {
            let name = heading.name.as_str();
            for row in &group.rows {
                for code in context.tran.split_concatenated(row.get(name)) {
                    if declared.contains(&(name, code)) {
                        continue;
                    }
                    issues.push(
                        Issue::error(
                            RuleId::Rule16,
                            format!("'{code}' under {name} is not listed in the ABBR group"),
                        )
                        .at_line(row.line_number)
                        .in_group(group.name.clone())
                        .for_field(name),
                    );
                }
            }
        }
    }

    issues
}
