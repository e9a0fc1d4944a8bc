//! Group and heading naming (rules 19, 19a, 19b, 19c).

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use ags_model::{Document, Group, Issue, RuleId};
use ags_standards::Dictionary;
use regex::Regex;

const MAX_GROUP_NAME: usize = 4;
const MAX_HEADING_NAME: usize = 9;
const SHARED_PREFIXES: &[&str] = &["SPEC_", "TEST_"];

static GROUP_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+$").expect("Invalid group name regex"));

static HEADING_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").expect("Invalid heading name regex"));

/// Rule 19: group names are at most 4 uppercase letters or digits.
pub fn group_names(document: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in document.groups() {
        let issue = |message: String| {
            Issue::error(RuleId::Rule19, message)
                .at_line(group.line_number)
                .in_group(group.name.clone())
        };
        if group.name.chars().count() > MAX_GROUP_NAME {
            issues.push(issue(format!(
                "GROUP name {} is longer than {MAX_GROUP_NAME} characters",
                group.name
            )));
        }
        if !GROUP_NAME.is_match(&group.name) {
            issues.push(issue(format!(
                "GROUP name '{}' must contain only uppercase letters and numbers",
                group.name
            )));
        }
    }

    issues
}

/// Rule 19a: heading names are at most 9 uppercase letters, digits or
/// underscores. Reported as warnings.
pub fn heading_names(document: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in document.groups() {
        for heading in group.heading_names() {
            let issue = |message: String| {
                Issue::warning(RuleId::Rule19a, message)
                    .at_line(heading_line(group))
                    .in_group(group.name.clone())
                    .for_field(heading)
            };
            if heading.chars().count() > MAX_HEADING_NAME {
                issues.push(issue(format!(
                    "HEADING name {heading} is longer than {MAX_HEADING_NAME} characters"
                )));
            }
            if !HEADING_NAME.is_match(heading) {
                issues.push(issue(format!(
                    "HEADING name '{heading}' must contain only uppercase letters, numbers and underscores"
                )));
            }
        }
    }

    issues
}

/// Rule 19b: a heading is prefixed by its own group name, by an allowed
/// shared prefix, or reuses a heading of another group.
///
/// A heading counts as reused when another group in the document carries
/// it, or when the dictionary defines it for the group named by its prefix
/// (`LOCA_ID` in SAMP).
pub fn heading_prefixes(document: &Document, dictionary: &Dictionary) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in document.groups() {
        let own_prefix = format!("{}_", group.name);
        let elsewhere: HashSet<&str> = document
            .groups()
            .iter()
            .filter(|other| other.name != group.name)
            .flat_map(Group::heading_names)
            .collect();

        for heading in group.heading_names() {
            if heading.starts_with(&own_prefix)
                || SHARED_PREFIXES.iter().any(|p| heading.starts_with(p))
                || elsewhere.contains(heading)
            {
                continue;
            }
            let prefix = heading.split('_').next().unwrap_or(heading);
            if dictionary.contains_heading(prefix, heading) {
                continue;
            }
            issues.push(
                Issue::error(
                    RuleId::Rule19b,
                    format!(
                        "HEADING {heading} should start with {own_prefix} or be a heading defined in another group"
                    ),
                )
                .at_line(heading_line(group))
                .in_group(group.name.clone())
                .for_field(heading),
            );
        }
    }

    issues
}

/// Rule 19c: heading names are unique within a group.
pub fn duplicate_headings(document: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in document.groups() {
        let mut seen = BTreeSet::new();
        for heading in group.heading_names() {
            if !seen.insert(heading) {
                issues.push(
                    Issue::error(
                        RuleId::Rule19c,
                        format!("HEADING {heading} appears more than once"),
                    )
                    .at_line(heading_line(group))
                    .in_group(group.name.clone())
                    .for_field(heading),
                );
            }
        }
    }

    issues
}

/// HEADING rows sit directly below their GROUP row.
fn heading_line(group: &Group) -> usize {
    group.line_number + 1
}
