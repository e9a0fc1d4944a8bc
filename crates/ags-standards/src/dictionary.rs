#![deny(unsafe_code)]

//! Dictionary model built from DICT group rows.
//!
//! A [`Dictionary`] is an index of group and heading definitions. The pinned
//! standard dictionaries are immutable; a document's own DICT rows are merged
//! in with [`Dictionary::extended_with`], which returns a new table.

use std::collections::BTreeMap;

use ags_model::{Document, Group};
use serde::Serialize;

use crate::error::{Result, StandardsError};
use crate::version::DictionaryVersion;

/// DICT group name and the headings read from it.
pub const DICT_GROUP: &str = "DICT";
const DICT_TYPE: &str = "DICT_TYPE";
const DICT_GRP: &str = "DICT_GRP";
const DICT_HDNG: &str = "DICT_HDNG";
const DICT_STAT: &str = "DICT_STAT";
const DICT_DTYP: &str = "DICT_DTYP";
const DICT_DESC: &str = "DICT_DESC";
const DICT_UNIT: &str = "DICT_UNIT";
const DICT_PGRP: &str = "DICT_PGRP";

/// Where a definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Pinned standard dictionary.
    Standard,
    /// The validated document's own DICT group.
    Extension,
}

/// Parsed DICT_STAT value ("KEY+REQUIRED", "REQUIRED", "OTHER", ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingStatus {
    pub key: bool,
    pub required: bool,
}

impl HeadingStatus {
    pub fn parse(stat: &str) -> Self {
        let mut status = Self::default();
        for token in stat.split('+').map(str::trim) {
            if token.eq_ignore_ascii_case("KEY") {
                status.key = true;
            } else if token.eq_ignore_ascii_case("REQUIRED") {
                status.required = true;
            }
        }
        status
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingDefinition {
    pub group: String,
    pub name: String,
    pub status: HeadingStatus,
    pub data_type: String,
    pub unit: String,
    pub description: String,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDefinition {
    pub name: String,
    /// Parent group; `None` for top-level groups ("-" in DICT_PGRP).
    pub parent: Option<String>,
    pub description: String,
    /// Headings in dictionary order.
    pub headings: Vec<HeadingDefinition>,
    pub origin: Origin,
}

impl GroupDefinition {
    fn new(name: &str, origin: Origin) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            description: String::new(),
            headings: Vec::new(),
            origin,
        }
    }

    pub fn heading(&self, name: &str) -> Option<&HeadingDefinition> {
        self.headings.iter().find(|h| h.name == name)
    }

    pub fn contains_heading(&self, name: &str) -> bool {
        self.heading(name).is_some()
    }

    pub fn key_headings(&self) -> impl Iterator<Item = &HeadingDefinition> {
        self.headings.iter().filter(|h| h.status.key)
    }

    pub fn required_headings(&self) -> impl Iterator<Item = &HeadingDefinition> {
        self.headings.iter().filter(|h| h.status.required)
    }

    /// Headings that come from the standard dictionary, in order.
    pub fn standard_headings(&self) -> impl Iterator<Item = &HeadingDefinition> {
        self.headings
            .iter()
            .filter(|h| h.origin == Origin::Standard)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dictionary {
    version: DictionaryVersion,
    groups: BTreeMap<String, GroupDefinition>,
}

impl Dictionary {
    /// Build a standard dictionary from a parsed dictionary document.
    pub fn from_document(version: DictionaryVersion, document: &Document) -> Result<Self> {
        let dict = document
            .get(DICT_GROUP)
            .ok_or_else(|| StandardsError::MissingDictGroup {
                version: version.to_string(),
            })?;
        Ok(Self {
            version,
            groups: definitions(dict, Origin::Standard),
        })
    }

    pub fn version(&self) -> DictionaryVersion {
        self.version
    }

    pub fn group(&self, name: &str) -> Option<&GroupDefinition> {
        self.groups.get(name)
    }

    pub fn contains_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    pub fn groups(&self) -> impl Iterator<Item = &GroupDefinition> {
        self.groups.values()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn heading_count(&self) -> usize {
        self.groups.values().map(|g| g.headings.len()).sum()
    }

    pub fn heading(&self, group: &str, heading: &str) -> Option<&HeadingDefinition> {
        self.group(group).and_then(|g| g.heading(heading))
    }

    pub fn contains_heading(&self, group: &str, heading: &str) -> bool {
        self.heading(group, heading).is_some()
    }

    /// KEY heading names for a group, in dictionary order.
    pub fn key_headings(&self, group: &str) -> Vec<&str> {
        self.group(group)
            .map(|g| g.key_headings().map(|h| h.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// REQUIRED heading names for a group, in dictionary order.
    pub fn required_headings(&self, group: &str) -> Vec<&str> {
        self.group(group)
            .map(|g| g.required_headings().map(|h| h.name.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn parent_group(&self, group: &str) -> Option<&str> {
        self.group(group).and_then(|g| g.parent.as_deref())
    }

    /// Combine with a document's own DICT group.
    ///
    /// Rows that define something the standard already defines are ignored:
    /// extensions add groups and headings, they never alter standard ones.
    #[must_use]
    pub fn extended_with(&self, dict: &Group) -> Dictionary {
        let mut combined = self.clone();
        for (name, extension) in definitions(dict, Origin::Extension) {
            match combined.groups.get_mut(&name) {
                Some(existing) => {
                    for heading in extension.headings {
                        if !existing.contains_heading(&heading.name) {
                            existing.headings.push(heading);
                        }
                    }
                }
                None => {
                    combined.groups.insert(name, extension);
                }
            }
        }
        combined
    }
}

/// Group definitions declared by the rows of a DICT group.
///
/// GROUP rows are read before HEADING rows so headings may precede their
/// group's declaration. A heading for an undeclared group creates a bare
/// group definition with no parent.
fn definitions(dict: &Group, origin: Origin) -> BTreeMap<String, GroupDefinition> {
    let mut groups: BTreeMap<String, GroupDefinition> = BTreeMap::new();

    for row in dict.rows.iter().filter(|r| is_type(r.get(DICT_TYPE), "GROUP")) {
        let name = row.get(DICT_GRP).trim();
        if name.is_empty() || groups.contains_key(name) {
            continue;
        }
        let mut definition = GroupDefinition::new(name, origin);
        definition.parent = parent(row.get(DICT_PGRP));
        definition.description = row.get(DICT_DESC).to_string();
        groups.insert(name.to_string(), definition);
    }

    for row in dict.rows.iter().filter(|r| is_type(r.get(DICT_TYPE), "HEADING")) {
        let group = row.get(DICT_GRP).trim();
        let name = row.get(DICT_HDNG).trim();
        if group.is_empty() || name.is_empty() {
            continue;
        }
        let definition = groups
            .entry(group.to_string())
            .or_insert_with(|| GroupDefinition::new(group, origin));
        if definition.contains_heading(name) {
            continue;
        }
        definition.headings.push(HeadingDefinition {
            group: group.to_string(),
            name: name.to_string(),
            status: HeadingStatus::parse(row.get(DICT_STAT)),
            data_type: row.get(DICT_DTYP).trim().to_string(),
            unit: row.get(DICT_UNIT).trim().to_string(),
            description: row.get(DICT_DESC).to_string(),
            origin,
        });
    }

    groups
}

fn is_type(value: &str, expected: &str) -> bool {
    value.trim().eq_ignore_ascii_case(expected)
}

fn parent(value: &str) -> Option<String> {
    match value.trim() {
        "" | "-" => None,
        other => Some(other.to_string()),
    }
}
