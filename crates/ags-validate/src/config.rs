//! Rule selection and validation settings.

use std::collections::BTreeMap;

use ags_model::RuleId;
use ags_standards::DictionaryVersion;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidateError};

/// Explicit rule switchboard.
///
/// Each rule is looked up before it runs; a rule with no entry is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleConfig {
    rules: BTreeMap<RuleId, bool>,
}

impl RuleConfig {
    /// Every rule enabled.
    pub fn all_enabled() -> Self {
        Self::default()
    }

    /// Only the given rules enabled.
    pub fn only(rules: impl IntoIterator<Item = RuleId>) -> Self {
        let mut config = Self {
            rules: RuleId::all().iter().map(|&rule| (rule, false)).collect(),
        };
        for rule in rules {
            config.set(rule, true);
        }
        config
    }

    pub fn is_enabled(&self, rule: RuleId) -> bool {
        self.rules.get(&rule).copied().unwrap_or(true)
    }

    pub fn set(&mut self, rule: RuleId, enabled: bool) {
        self.rules.insert(rule, enabled);
    }

    #[must_use]
    pub fn disable(mut self, rule: RuleId) -> Self {
        self.set(rule, false);
        self
    }

    #[must_use]
    pub fn enable(mut self, rule: RuleId) -> Self {
        self.set(rule, true);
        self
    }

    pub fn enabled_rules(&self) -> impl Iterator<Item = RuleId> + '_ {
        RuleId::all()
            .iter()
            .copied()
            .filter(|&rule| self.is_enabled(rule))
    }

    pub fn disabled_rules(&self) -> impl Iterator<Item = RuleId> + '_ {
        RuleId::all()
            .iter()
            .copied()
            .filter(|&rule| !self.is_enabled(rule))
    }
}

/// Settings file contents.
///
/// ```toml
/// dictionary = "v4_1_1"
///
/// [rules]
/// "2a" = false
/// "19a" = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub dictionary: DictionaryVersion,
    pub rules: RuleConfig,
}

impl ValidationConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source| ValidateError::Config { source })
    }
}
