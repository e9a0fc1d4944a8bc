//! Validation check modules.
//!
//! Each module holds the rules of one concern. The rule sets run in order:
//! raw text, parsed data, dictionary.

pub mod dictionary;
mod naming;
pub mod raw;
mod values;

use ags_ingest::DuplicateGroup;
use ags_model::{Document, Issue, RuleId};
use ags_standards::Dictionary;

use crate::config::RuleConfig;

/// Run the enabled parsed-data rules.
///
/// The dictionary is only consulted by rule 19b, to accept headings that the
/// dictionary defines for another group.
pub fn run_parsed(
    document: &Document,
    duplicates: &[DuplicateGroup],
    dictionary: &Dictionary,
    config: &RuleConfig,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    // 1. Groups dropped by the parser
    if config.is_enabled(RuleId::DuplicateGroup) {
        issues.extend(duplicate_groups(duplicates));
    }

    // 2. Naming
    if config.is_enabled(RuleId::Rule19) {
        issues.extend(naming::group_names(document));
    }
    if config.is_enabled(RuleId::Rule19a) {
        issues.extend(naming::heading_names(document));
    }
    if config.is_enabled(RuleId::Rule19b) {
        issues.extend(naming::heading_prefixes(document, dictionary));
    }
    if config.is_enabled(RuleId::Rule19c) {
        issues.extend(naming::duplicate_headings(document));
    }

    // 3. Field schemas
    if config.is_enabled(RuleId::Rule8) {
        issues.extend(values::check(document));
    }

    issues
}

fn duplicate_groups(duplicates: &[DuplicateGroup]) -> impl Iterator<Item = Issue> + '_ {
    duplicates.iter().map(|duplicate| {
        Issue::warning(
            RuleId::DuplicateGroup,
            format!(
                "Group {} appears more than once; the group at line {} was discarded",
                duplicate.name, duplicate.discarded_line
            ),
        )
        .at_line(duplicate.line_number)
        .in_group(duplicate.name.clone())
    })
}
