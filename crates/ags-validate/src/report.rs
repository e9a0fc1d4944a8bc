use ags_model::{Document, Issue, RuleId, Severity};
use ags_standards::DictionaryVersion;
use serde::Serialize;

/// Outcome of one validation call: every issue plus the parsed document.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub dictionary: DictionaryVersion,
    /// Issues in rule-set order (raw, parsed, dictionary).
    pub issues: Vec<Issue>,
    pub document: Document,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues_for_rule(&self, rule: RuleId) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.rule == rule)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}
