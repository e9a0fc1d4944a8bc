//! Validation issue types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rule::RuleId;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must fix
    Error,
    /// Should review
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// A single finding reported by a rule.
///
/// Issues are pure output: they describe the input and are never fed back
/// into validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub rule: RuleId,
    pub severity: Severity,
    /// 1-based source line, when the issue can be pinned to one.
    pub line_number: Option<usize>,
    pub group: Option<String>,
    pub field: Option<String>,
    pub message: String,
}

impl Issue {
    pub fn new(rule: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity,
            line_number: None,
            group: None,
            field: None,
            message: message.into(),
        }
    }

    pub fn error(rule: RuleId, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Error, message)
    }

    pub fn warning(rule: RuleId, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Warning, message)
    }

    #[must_use]
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn for_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Rule {}] {}", self.rule, self.severity.label())?;
        if let Some(line) = self.line_number {
            write!(f, " line {line}")?;
        }
        if let Some(group) = &self.group {
            write!(f, " {group}")?;
            if let Some(field) = &self.field {
                write!(f, ".{field}")?;
            }
        }
        write!(f, ": {}", self.message)
    }
}
