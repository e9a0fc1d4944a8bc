//! Checks that need the combined dictionary.
//!
//! The dictionary passed in is the selected standard dictionary extended with
//! the document's own DICT rows. Definitions keep their origin, so rules can
//! tell standard definitions from user extensions.

mod codes;
mod headings;
mod keys;
mod links;
mod required;

use ags_model::{Document, Issue, RuleId};
use ags_standards::Dictionary;

use crate::config::RuleConfig;
use crate::util::TranSettings;

/// Inputs shared by the dictionary rules.
pub struct Context<'a> {
    pub document: &'a Document,
    pub dictionary: &'a Dictionary,
    pub tran: TranSettings,
}

impl<'a> Context<'a> {
    pub fn new(document: &'a Document, dictionary: &'a Dictionary) -> Self {
        Self {
            document,
            dictionary,
            tran: TranSettings::from_document(document),
        }
    }
}

type Check = fn(&Context<'_>) -> Vec<Issue>;

const CHECKS: &[(RuleId, Check)] = &[
    (RuleId::Rule13, required::project),
    (RuleId::Rule14, required::transmission),
    (RuleId::Rule15, codes::units),
    (RuleId::Rule17, codes::types),
    (RuleId::Rule16, codes::abbreviations),
    (RuleId::Rule10b, required::required_fields),
    (RuleId::Rule10a, keys::key_fields),
    (RuleId::Rule10c, keys::parent_rows),
    (RuleId::Rule18, headings::groups),
    (RuleId::Rule9, headings::headings),
    (RuleId::Rule7, headings::order),
    (RuleId::Rule11, links::record_links),
];

/// Run the enabled dictionary rules.
pub fn run(context: &Context<'_>, config: &RuleConfig) -> Vec<Issue> {
    CHECKS
        .iter()
        .filter(|(rule, _)| config.is_enabled(*rule))
        .flat_map(|(_, check)| check(context))
        .collect()
}
