//! Key fields (rule 10a) and parent/child integrity (rule 10c).

use ags_model::{Issue, RuleId};

use super::Context;
use crate::util::{KeyIndex, describe_key, key_tuple};

/// Groups whose parent needs no row-level matching.
const ROOT_GROUP: &str = "PROJ";

/// Rule 10a: KEY headings are present and their combined values are unique.
///
/// Every row sharing a duplicated key combination is reported.
pub fn key_fields(context: &Context<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in context.document.groups() {
        let keys = context.dictionary.key_headings(&group.name);
        if keys.is_empty() {
            continue;
        }

        for missing in keys.iter().filter(|key| !group.has_heading(key)) {
            issues.push(
                Issue::error(RuleId::Rule10a, format!("Key heading {missing} is missing"))
                    .at_line(group.line_number + 1)
                    .in_group(group.name.clone())
                    .for_field(*missing),
            );
        }

        let present: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|key| group.has_heading(key))
            .collect();
        if present.is_empty() {
            continue;
        }

        let index = KeyIndex::build(group, &present);
        for row in &group.rows {
            let tuple = key_tuple(row, &present);
            if index.count(&tuple) > 1 {
                issues.push(
                    Issue::error(
                        RuleId::Rule10a,
                        format!(
                            "Duplicate key field combination: {}",
                            describe_key(&present, &tuple)
                        ),
                    )
                    .at_line(row.line_number)
                    .in_group(group.name.clone()),
                );
            }
        }
    }

    issues
}

/// Rule 10c: a child group's parent exists and holds a row for every child row.
///
/// The parent's key tuples are indexed once; child rows are matched on the
/// parent KEY headings both groups carry.
pub fn parent_rows(context: &Context<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in context.document.groups() {
        let Some(parent) = context.dictionary.parent_group(&group.name) else {
            continue;
        };
        if parent == ROOT_GROUP || parent == group.name {
            continue;
        }

        let Some(parent_group) = context.document.get(parent) else {
            issues.push(
                Issue::error(
                    RuleId::Rule10c,
                    format!("Parent group {parent} not found"),
                )
                .at_line(group.line_number)
                .in_group(group.name.clone()),
            );
            continue;
        };

        let keys: Vec<&str> = context
            .dictionary
            .key_headings(parent)
            .into_iter()
            .filter(|key| group.has_heading(key) && parent_group.has_heading(key))
            .collect();
        if keys.is_empty() {
            continue;
        }

        let index = KeyIndex::build(parent_group, &keys);
        for row in &group.rows {
            let tuple = key_tuple(row, &keys);
            if index.contains(&tuple) {
                continue;
            }
            issues.push(
                Issue::error(
                    RuleId::Rule10c,
                    format!(
                        "Parent entry for {} not found in {parent}",
                        describe_key(&keys, &tuple)
                    ),
                )
                .at_line(row.line_number)
                .in_group(group.name.clone()),
            );
        }
    }

    issues
}
