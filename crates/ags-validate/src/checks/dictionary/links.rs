//! Record links (rule 11).
//!
//! An RL value holds one or more links joined by the TRAN concatenation
//! character. Each link is `GROUP<delim>KEY1<delim>KEY2...`, with the key
//! values given in the linked group's dictionary KEY order.

use std::collections::HashMap;

use ags_model::{Issue, RuleId};

use super::Context;
use crate::util::KeyIndex;

/// Rule 11: each link resolves to exactly one row of the linked group.
pub fn record_links(context: &Context<'_>) -> Vec<Issue> {
    let document = context.document;
    let mut issues = Vec::new();
    let mut indexes: HashMap<&str, (usize, KeyIndex<'_>)> = HashMap::new();

    for group in document.groups() {
        for heading in group.headings_of_type("RL") {
            let field = heading.name.as_str();
            for row in &group.rows {
                for link in context.tran.split_concatenated(row.get(field)) {
                    let mut parts = link.split(context.tran.delimiter.as_str());
                    let target = parts.next().unwrap_or_default();
                    let values: Vec<&str> = parts.collect();

                    let issue = |message: String| {
                        Issue::error(RuleId::Rule11, message)
                            .at_line(row.line_number)
                            .in_group(group.name.clone())
                            .for_field(field)
                    };

                    let Some(target_group) = document.get(target) else {
                        issues.push(issue(format!(
                            "Record link '{link}' refers to group {target}, which is not in the file"
                        )));
                        continue;
                    };

                    let (key_count, index) = indexes.entry(target).or_insert_with(|| {
                        let keys = context.dictionary.key_headings(target);
                        (keys.len(), KeyIndex::build(target_group, &keys))
                    });
                    // A link naming the wrong number of keys matches nothing.
                    let matches = if values.len() == *key_count {
                        index.count(&values)
                    } else {
                        0
                    };

                    match matches {
                        1 => {}
                        0 => issues.push(issue(format!(
                            "Record link '{link}' has no matching row in {target}"
                        ))),
                        n => issues.push(issue(format!(
                            "Record link '{link}' has multiple matching rows in {target} ({n} found)"
                        ))),
                    }
                }
            }
        }
    }

    issues
}
