//! Field-schema conformance (rule 8).

use ags_model::{Document, Issue, RuleId};

use crate::schema::GroupSchema;

/// One error per (row, heading) whose value does not fit its schema.
///
/// Each group's schema is built once and reused for all of its rows.
pub fn check(document: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in document.groups() {
        let schema = GroupSchema::for_group(group);
        for row in &group.rows {
            for (heading, field) in schema.constrained() {
                let value = row.get(heading);
                if field.accepts(value) {
                    continue;
                }
                issues.push(
                    Issue::error(
                        RuleId::Rule8,
                        format!(
                            "Value '{value}' in {heading} does not match unit '{}' and type '{}'",
                            field.unit(),
                            field.data_type()
                        ),
                    )
                    .at_line(row.line_number)
                    .in_group(group.name.clone())
                    .for_field(heading),
                );
            }
        }
    }

    issues
}
