use std::borrow::Cow;

use ags_ingest::parse_with_diagnostics;
use ags_standards::{DICT_GROUP, Dictionary, DictionaryVersion};
use tracing::{debug, info_span};

use crate::checks::{self, dictionary::Context};
use crate::config::RuleConfig;
use crate::error::Result;
use crate::report::ValidationReport;

/// Validate AGS4 text against a pinned standard dictionary.
///
/// Fails only when the dictionary asset itself cannot be loaded.
pub fn validate(
    text: &str,
    version: DictionaryVersion,
    config: &RuleConfig,
) -> Result<ValidationReport> {
    let dictionary = ags_standards::dictionary(version)?;
    Ok(validate_with_dictionary(text, dictionary, config))
}

/// Validate with the dictionary named by `version` ("v4_1_1" or "4.1.1").
pub fn validate_with_version(
    text: &str,
    version: &str,
    config: &RuleConfig,
) -> Result<ValidationReport> {
    let version: DictionaryVersion = version.parse()?;
    validate(text, version, config)
}

/// Validate AGS4 text against an already loaded standard dictionary.
///
/// Runs the raw-text rules, parses, runs the parsed-data rules, then the
/// dictionary rules against the standard dictionary extended with the
/// document's own DICT group. Issues come back in that order. Never fails.
pub fn validate_with_dictionary(
    text: &str,
    dictionary: &Dictionary,
    config: &RuleConfig,
) -> ValidationReport {
    let span = info_span!("validate", dictionary = %dictionary.version(), bytes = text.len());
    let _guard = span.enter();

    let mut issues = checks::raw::run(text, config);
    debug!(rule_set = "raw", issues = issues.len(), "rule set complete");

    let parsed = parse_with_diagnostics(text);
    let document = parsed.document;
    let combined = match document.get(DICT_GROUP) {
        Some(dict) => Cow::Owned(dictionary.extended_with(dict)),
        None => Cow::Borrowed(dictionary),
    };

    let before = issues.len();
    issues.extend(checks::run_parsed(
        &document,
        &parsed.duplicate_groups,
        &combined,
        config,
    ));
    debug!(
        rule_set = "parsed",
        groups = document.len(),
        issues = issues.len() - before,
        "rule set complete"
    );

    let before = issues.len();
    let context = Context::new(&document, &combined);
    issues.extend(checks::dictionary::run(&context, config));
    debug!(
        rule_set = "dictionary",
        issues = issues.len() - before,
        "rule set complete"
    );

    ValidationReport {
        dictionary: dictionary.version(),
        issues,
        document,
    }
}
