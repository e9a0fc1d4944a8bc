//! Shared helpers for the dictionary rules.

use std::collections::HashMap;

use ags_model::{Document, Group, Row};

const DEFAULT_DELIMITER: &str = "|";
const DEFAULT_CONCATENATOR: &str = "+";

/// Separators declared in the TRAN group.
///
/// `TRAN_DLIM` separates the parts of a record link, `TRAN_RCON` joins
/// several values in one field. Missing or blank entries fall back to the
/// format defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranSettings {
    pub delimiter: String,
    pub concatenator: String,
}

impl Default for TranSettings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            concatenator: DEFAULT_CONCATENATOR.to_string(),
        }
    }
}

impl TranSettings {
    pub fn from_document(document: &Document) -> Self {
        let Some(row) = document.get("TRAN").and_then(|g| g.rows.first()) else {
            return Self::default();
        };
        let pick = |heading: &str, default: &str| match row.get(heading) {
            "" => default.to_string(),
            value => value.to_string(),
        };
        Self {
            delimiter: pick("TRAN_DLIM", DEFAULT_DELIMITER),
            concatenator: pick("TRAN_RCON", DEFAULT_CONCATENATOR),
        }
    }

    /// Split a field into its concatenated parts, skipping empty ones.
    pub fn split_concatenated<'a>(&'a self, value: &'a str) -> impl Iterator<Item = &'a str> {
        value
            .split(self.concatenator.as_str())
            .filter(|part| !part.is_empty())
    }
}

/// Values of the given headings in one row.
pub fn key_tuple<'a>(row: &'a Row, keys: &[&str]) -> Vec<&'a str> {
    keys.iter().map(|key| row.get(key)).collect()
}

/// Render a key tuple for messages: `LOCA_ID=BH1, SAMP_TOP=1.00`.
pub fn describe_key(keys: &[&str], values: &[&str]) -> String {
    keys.iter()
        .zip(values)
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Row counts per key tuple of a group.
///
/// Built once per group so parent and record-link lookups stay linear.
#[derive(Debug, Default)]
pub struct KeyIndex<'a> {
    counts: HashMap<Vec<&'a str>, usize>,
}

impl<'a> KeyIndex<'a> {
    pub fn build(group: &'a Group, keys: &[&str]) -> Self {
        let mut counts: HashMap<Vec<&'a str>, usize> = HashMap::new();
        for row in &group.rows {
            *counts.entry(key_tuple(row, keys)).or_default() += 1;
        }
        Self { counts }
    }

    pub fn count(&self, tuple: &[&str]) -> usize {
        self.counts.get(tuple).copied().unwrap_or(0)
    }

    pub fn contains(&self, tuple: &[&str]) -> bool {
        self.count(tuple) > 0
    }
}
