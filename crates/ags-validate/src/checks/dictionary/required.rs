//! Required groups (rules 13, 14) and required fields (rule 10b).

use ags_model::{Issue, RuleId};

use super::Context;

/// Rule 13: exactly one PROJ row.
pub fn project(context: &Context<'_>) -> Vec<Issue> {
    single_row_group(context, "PROJ", RuleId::Rule13)
}

/// Rule 14: exactly one TRAN row.
pub fn transmission(context: &Context<'_>) -> Vec<Issue> {
    single_row_group(context, "TRAN", RuleId::Rule14)
}

/// At most one issue: the group is missing, or its row count is not one.
fn single_row_group(context: &Context<'_>, name: &str, rule: RuleId) -> Vec<Issue> {
    let issue = match context.document.get(name) {
        None => Issue::error(rule, format!("{name} group not found")).in_group(name),
        Some(group) if group.rows.len() != 1 => Issue::error(
            rule,
            format!(
                "{name} group should have exactly one DATA row (found {})",
                group.rows.len()
            ),
        )
        .at_line(group.line_number)
        .in_group(name),
        Some(_) => return Vec::new(),
    };
    vec![issue]
}

/// Rule 10b: REQUIRED headings are present and populated.
pub fn required_fields(context: &Context<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in context.document.groups() {
        let Some(definition) = context.dictionary.group(&group.name) else {
            continue;
        };
        for required in definition.required_headings() {
            let heading = required.name.as_str();
            if !group.has_heading(heading) {
                issues.push(
                    Issue::error(
                        RuleId::Rule10b,
                        format!("Required heading {heading} is missing"),
                    )
                    .at_line(group.line_number + 1)
                    .in_group(group.name.clone())
                    .for_field(heading),
                );
                continue;
            }
            for row in &group.rows {
                if row.get(heading).trim().is_empty() {
                    issues.push(
                        Issue::error(
                            RuleId::Rule10b,
                            format!("Empty REQUIRED field {heading}"),
                        )
                        .at_line(row.line_number)
                        .in_group(group.name.clone())
                        .for_field(heading),
                    );
                }
            }
        }
    }

    issues
}
