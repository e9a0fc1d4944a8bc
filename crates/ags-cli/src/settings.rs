//! Resolve validation settings from a config file and command-line flags.

use std::path::Path;

use ags_model::RuleId;
use ags_standards::DictionaryVersion;
use ags_validate::ValidationConfig;
use anyhow::{Context, Result};
use tracing::debug;

/// Command-line overrides, applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dictionary: Option<DictionaryVersion>,
    pub disable: Vec<RuleId>,
    pub enable: Vec<RuleId>,
}

/// Load `path` (when given) and apply the overrides.
///
/// `--enable` is applied after `--disable`, so a rule named by both runs.
pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<ValidationConfig> {
    let mut config = match path {
        Some(path) => load(path)?,
        None => ValidationConfig::default(),
    };

    if let Some(version) = overrides.dictionary {
        config.dictionary = version;
    }
    for &rule in &overrides.disable {
        config.rules.set(rule, false);
    }
    for &rule in &overrides.enable {
        config.rules.set(rule, true);
    }

    debug!(
        dictionary = %config.dictionary,
        disabled = config.rules.disabled_rules().count(),
        "settings resolved"
    );
    Ok(config)
}

fn load(path: &Path) -> Result<ValidationConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    ValidationConfig::from_toml_str(&contents)
        .with_context(|| format!("parse config {}", path.display()))
}
