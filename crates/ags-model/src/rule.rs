//! AGS4 format rule identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// Which stage of validation a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Lexical and structural checks on unparsed text.
    Raw,
    /// Semantic checks on the parsed document.
    Parsed,
    /// Checks that need the reference dictionary.
    Dictionary,
}

impl RuleSet {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Raw => "Raw text",
            Self::Parsed => "Parsed data",
            Self::Dictionary => "Dictionary",
        }
    }
}

/// Stable identifier for each rule the validator knows.
///
/// The string form (`"1"`, `"2a"`, `"19b"`, ...) follows the AGS4 rule
/// numbering and is what configuration files and reports use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    Rule1,
    Rule2a,
    Rule2b,
    Rule3,
    Rule4a,
    Rule4b,
    Rule5,
    DuplicateGroup,
    Rule7,
    Rule8,
    Rule9,
    Rule10a,
    Rule10b,
    Rule10c,
    Rule11,
    Rule13,
    Rule14,
    Rule15,
    Rule16,
    Rule17,
    Rule18,
    Rule19,
    Rule19a,
    Rule19b,
    Rule19c,
}

impl RuleId {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Rule1,
            Self::Rule2a,
            Self::Rule2b,
            Self::Rule3,
            Self::Rule4a,
            Self::Rule4b,
            Self::Rule5,
            Self::DuplicateGroup,
            Self::Rule7,
            Self::Rule8,
            Self::Rule9,
            Self::Rule10a,
            Self::Rule10b,
            Self::Rule10c,
            Self::Rule11,
            Self::Rule13,
            Self::Rule14,
            Self::Rule15,
            Self::Rule16,
            Self::Rule17,
            Self::Rule18,
            Self::Rule19,
            Self::Rule19a,
            Self::Rule19b,
            Self::Rule19c,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rule1 => "1",
            Self::Rule2a => "2a",
            Self::Rule2b => "2b",
            Self::Rule3 => "3",
            Self::Rule4a => "4a",
            Self::Rule4b => "4b",
            Self::Rule5 => "5",
            Self::DuplicateGroup => "parse",
            Self::Rule7 => "7",
            Self::Rule8 => "8",
            Self::Rule9 => "9",
            Self::Rule10a => "10a",
            Self::Rule10b => "10b",
            Self::Rule10c => "10c",
            Self::Rule11 => "11",
            Self::Rule13 => "13",
            Self::Rule14 => "14",
            Self::Rule15 => "15",
            Self::Rule16 => "16",
            Self::Rule17 => "17",
            Self::Rule18 => "18",
            Self::Rule19 => "19",
            Self::Rule19a => "19a",
            Self::Rule19b => "19b",
            Self::Rule19c => "19c",
        }
    }

    pub fn rule_set(&self) -> RuleSet {
        match self {
            Self::Rule1
            | Self::Rule2a
            | Self::Rule2b
            | Self::Rule3
            | Self::Rule4a
            | Self::Rule4b
            | Self::Rule5 => RuleSet::Raw,
            Self::DuplicateGroup
            | Self::Rule8
            | Self::Rule19
            | Self::Rule19a
            | Self::Rule19b
            | Self::Rule19c => RuleSet::Parsed,
            Self::Rule7
            | Self::Rule9
            | Self::Rule10a
            | Self::Rule10b
            | Self::Rule10c
            | Self::Rule11
            | Self::Rule13
            | Self::Rule14
            | Self::Rule15
            | Self::Rule16
            | Self::Rule17
            | Self::Rule18 => RuleSet::Dictionary,
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Rule1 => "Characters must be ASCII",
            Self::Rule2a => "Lines must end with CR+LF",
            Self::Rule2b => "GROUP must be followed by HEADING, UNIT and TYPE rows",
            Self::Rule3 => "Rows must start with a valid data descriptor",
            Self::Rule4a => "GROUP row must contain exactly one group name",
            Self::Rule4b => "Rows must have as many fields as the HEADING row",
            Self::Rule5 => "Fields must be quoted with embedded quotes doubled",
            Self::DuplicateGroup => "Group names must be unique within a file",
            Self::Rule7 => "Headings must follow dictionary order",
            Self::Rule8 => "Values must conform to their TYPE and UNIT",
            Self::Rule9 => "Headings must be defined in the dictionary",
            Self::Rule10a => "KEY fields must be present and unique",
            Self::Rule10b => "REQUIRED fields must be present and populated",
            Self::Rule10c => "Child rows must have a parent row",
            Self::Rule11 => "Record links must resolve to exactly one row",
            Self::Rule13 => "PROJ group must contain exactly one row",
            Self::Rule14 => "TRAN group must contain exactly one row",
            Self::Rule15 => "Units must be listed in the UNIT group",
            Self::Rule16 => "Abbreviations must be listed in the ABBR group",
            Self::Rule17 => "Data types must be listed in the TYPE group",
            Self::Rule18 => "Non-standard groups must be defined in DICT",
            Self::Rule19 => "GROUP names must be 4 uppercase letters or digits",
            Self::Rule19a => "HEADING names must be 9 uppercase letters, digits or underscores",
            Self::Rule19b => "HEADING names must be prefixed by their group",
            Self::Rule19c => "HEADING names must be unique within a group",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = ModelError;

    /// Accepts the short form ("19a") as well as "Rule 19a" / "AGS Format Rule 19a".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let short = lower
            .strip_prefix("ags format rule")
            .or_else(|| lower.strip_prefix("rule"))
            .unwrap_or(&lower)
            .trim();
        Self::all()
            .iter()
            .copied()
            .find(|rule| rule.as_str() == short)
            .ok_or_else(|| ModelError::UnknownRule {
                rule: trimmed.to_string(),
            })
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RuleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
