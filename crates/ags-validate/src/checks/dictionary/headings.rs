//! Group and heading definitions (rules 7, 9, 18).

use ags_model::{Issue, RuleId};
use ags_standards::Origin;

use super::Context;

/// Rule 18: every group is standard or declared in the document's DICT.
///
/// A group known only from DICT is a warning.
pub fn groups(context: &Context<'_>) -> Vec<Issue> {
    context
        .document
        .groups()
        .iter()
        .filter_map(|group| {
            let issue = match context.dictionary.group(&group.name).map(|d| d.origin) {
                Some(Origin::Standard) => return None,
                Some(Origin::Extension) => Issue::warning(
                    RuleId::Rule18,
                    format!(
                        "Group {} is not in the standard dictionary; defined in DICT",
                        group.name
                    ),
                ),
                None => Issue::error(
                    RuleId::Rule18,
                    format!(
                        "Group {} is not in the standard dictionary or the DICT group",
                        group.name
                    ),
                ),
            };
            Some(issue.at_line(group.line_number).in_group(group.name.clone()))
        })
        .collect()
}

/// Rule 9: every heading is standard for its group or declared in DICT.
///
/// A heading known only from DICT is a warning.
pub fn headings(context: &Context<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in context.document.groups() {
        for heading in group.heading_names() {
            let origin = context
                .dictionary
                .heading(&group.name, heading)
                .map(|d| d.origin);
            let issue = match origin {
                Some(Origin::Standard) => continue,
                Some(Origin::Extension) => Issue::warning(
                    RuleId::Rule9,
                    format!("Heading {heading} is not in the standard dictionary; defined in DICT"),
                ),
                None => Issue::error(
                    RuleId::Rule9,
                    format!(
                        "Heading {heading} is not in the standard dictionary or the DICT group"
                    ),
                ),
            };
            issues.push(
                issue
                    .at_line(group.line_number + 1)
                    .in_group(group.name.clone())
                    .for_field(heading),
            );
        }
    }

    issues
}

/// Rule 7: standard headings appear in dictionary order.
///
/// One issue per group, naming the first heading found out of order.
/// Headings outside the standard dictionary may appear anywhere.
pub fn order(context: &Context<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in context.document.groups() {
        let Some(definition) = context.dictionary.group(&group.name) else {
            continue;
        };
        let standard: Vec<&str> = definition
            .standard_headings()
            .map(|h| h.name.as_str())
            .collect();

        let mut previous: Option<(&str, usize)> = None;
        for heading in group.heading_names() {
            let Some(position) = standard.iter().position(|name| *name == heading) else {
                continue;
            };
            if let Some((before, before_position)) = previous
                && position < before_position
            {
                issues.push(
                    Issue::error(
                        RuleId::Rule7,
                        format!("Heading {heading} should come before {before}"),
                    )
                    .at_line(group.line_number + 1)
                    .in_group(group.name.clone())
                    .for_field(heading),
                );
                break;
            }
            previous = Some((heading, position));
        }
    }

    issues
}
