#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StandardsError;

/// Published revisions of the AGS4 standard dictionary.
///
/// The set is closed: a version name outside it is a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DictionaryVersion {
    V4_0_3,
    V4_0_4,
    V4_1,
    #[default]
    V4_1_1,
}

impl DictionaryVersion {
    pub const fn all() -> &'static [Self] {
        &[Self::V4_0_3, Self::V4_0_4, Self::V4_1, Self::V4_1_1]
    }

    /// Version name as used in configuration ("v4_1_1").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V4_0_3 => "v4_0_3",
            Self::V4_0_4 => "v4_0_4",
            Self::V4_1 => "v4_1",
            Self::V4_1_1 => "v4_1_1",
        }
    }

    /// Edition as written in TRAN_AGS ("4.1.1").
    pub fn edition(&self) -> &'static str {
        match self {
            Self::V4_0_3 => "4.0.3",
            Self::V4_0_4 => "4.0.4",
            Self::V4_1 => "4.1",
            Self::V4_1_1 => "4.1.1",
        }
    }
}

impl fmt::Display for DictionaryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DictionaryVersion {
    type Err = StandardsError;

    /// Accepts "v4_1_1" as well as the edition form "4.1.1".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(trimmed) || v.edition() == trimmed)
            .ok_or_else(|| StandardsError::UnknownVersion {
                version: trimmed.to_string(),
                expected: Self::all()
                    .iter()
                    .map(DictionaryVersion::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl Serialize for DictionaryVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DictionaryVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
