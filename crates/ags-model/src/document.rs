use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column definition for one field of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub name: String,
    /// Data type code from the TYPE row (e.g. "2DP", "ID", "PA").
    pub data_type: String,
    /// Unit code from the UNIT row (e.g. "m", "yyyy-mm-dd").
    pub unit: String,
}

impl Heading {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            unit: unit.into(),
        }
    }
}

/// One DATA line of a group.
///
/// Values are kept as raw text. An empty string means "no data".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub data: BTreeMap<String, String>,
    /// 1-based line number of the DATA line in the source text.
    pub line_number: usize,
}

impl Row {
    pub fn new(line_number: usize) -> Self {
        Self {
            data: BTreeMap::new(),
            line_number,
        }
    }

    /// Value for a heading; absent values read as the empty string.
    pub fn get(&self, heading: &str) -> &str {
        self.data.get(heading).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, heading: impl Into<String>, value: impl Into<String>) {
        self.data.insert(heading.into(), value.into());
    }

    /// Builder-style setter, handy when assembling rows by hand.
    #[must_use]
    pub fn with(mut self, heading: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(heading, value);
        self
    }
}

/// A named table within a document (e.g. LOCA, SAMP).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub headings: Vec<Heading>,
    pub rows: Vec<Row>,
    /// 1-based line number of the GROUP line.
    pub line_number: usize,
}

impl Group {
    pub fn new(name: impl Into<String>, line_number: usize) -> Self {
        Self {
            name: name.into(),
            headings: Vec::new(),
            rows: Vec::new(),
            line_number,
        }
    }

    /// First heading with the given name.
    pub fn heading(&self, name: &str) -> Option<&Heading> {
        self.headings.iter().find(|h| h.name == name)
    }

    pub fn has_heading(&self, name: &str) -> bool {
        self.heading(name).is_some()
    }

    pub fn heading_names(&self) -> impl Iterator<Item = &str> {
        self.headings.iter().map(|h| h.name.as_str())
    }

    /// Headings declared with the given TYPE code.
    pub fn headings_of_type<'a>(&'a self, data_type: &'a str) -> impl Iterator<Item = &'a Heading> {
        self.headings.iter().filter(move |h| h.data_type == data_type)
    }

    /// Values of one heading across all rows, in row order.
    pub fn column<'a>(&'a self, heading: &'a str) -> impl Iterator<Item = &'a str> {
        self.rows.iter().map(move |row| row.get(heading))
    }
}

/// A parsed AGS4 file: groups in file order, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    groups: Vec<Group>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group, replacing any group with the same name in place.
    ///
    /// Returns the replaced group, if any.
    pub fn insert(&mut self, group: Group) -> Option<Group> {
        match self.groups.iter().position(|g| g.name == group.name) {
            Some(idx) => Some(std::mem::replace(&mut self.groups[idx], group)),
            None => {
                self.groups.push(group);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<Group> for Document {
    fn from_iter<I: IntoIterator<Item = Group>>(iter: I) -> Self {
        let mut document = Document::new();
        for group in iter {
            document.insert(group);
        }
        document
    }
}
