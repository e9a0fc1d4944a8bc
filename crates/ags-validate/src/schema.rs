//! Field schemas derived from TYPE and UNIT codes.
//!
//! | Type      | Accepted shape                                        |
//! |-----------|-------------------------------------------------------|
//! | `nDP`     | integer when n = 0, else `[sign]digits.` + n digits   |
//! | `DT`      | the UNIT pattern with y/m/d/h/s as digits, `+` a sign  |
//! | `T`       | as `DT`, substituting only h/m/s                      |
//! | `nSF`     | exactly n significant digits                          |
//! | `nSCI`    | `[sign]digits.` + n digits + `[eE][sign]digits`       |
//! | `YN`      | one of `Y`, `N`, `y`, `n`                             |
//! | otherwise | free text                                             |
//!
//! Digits are ASCII `0-9`. The empty string is accepted by every schema.

use ags_model::{Group, Heading};

/// Value predicate for one heading.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    data_type: String,
    unit: String,
    shape: Shape,
}

#[derive(Debug, Clone)]
enum Shape {
    FreeText,
    /// `nDP` (no exponent) or `nSCI` (exponent required).
    Decimal { places: usize, exponent: bool },
    SignificantFigures(usize),
    /// One slot per character of a DT/T unit string.
    Template(Vec<Slot>),
    YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Digit,
    Sign,
    Literal(char),
}

impl FieldSchema {
    pub fn for_heading(heading: &Heading) -> Self {
        Self::new(&heading.data_type, &heading.unit)
    }

    pub fn new(data_type: &str, unit: &str) -> Self {
        Self {
            data_type: data_type.to_string(),
            unit: unit.to_string(),
            shape: shape(data_type.trim(), unit),
        }
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn is_free_text(&self) -> bool {
        matches!(self.shape, Shape::FreeText)
    }

    /// Digits are ASCII `0-9` only.
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        match &self.shape {
            Shape::FreeText => true,
            Shape::Decimal { places, exponent } => decimal(value, *places, *exponent),
            Shape::SignificantFigures(n) => significant_figures(value) == Some(*n),
            Shape::Template(slots) => template(value, slots),
            Shape::YesNo => matches!(value, "Y" | "N" | "y" | "n"),
        }
    }
}

fn shape(data_type: &str, unit: &str) -> Shape {
    if let Some(places) = counted(data_type, "DP") {
        return Shape::Decimal {
            places,
            exponent: false,
        };
    }
    if let Some(places) = counted(data_type, "SCI") {
        return Shape::Decimal {
            places,
            exponent: true,
        };
    }
    if let Some(n) = counted(data_type, "SF") {
        return if n == 0 {
            Shape::FreeText
        } else {
            Shape::SignificantFigures(n)
        };
    }
    match data_type {
        "DT" if !unit.is_empty() => Shape::Template(slots(unit, &['y', 'm', 'd', 'h', 's'])),
        "T" if !unit.is_empty() => Shape::Template(slots(unit, &['h', 'm', 's'])),
        "YN" => Shape::YesNo,
        _ => Shape::FreeText,
    }
}

/// `n` from codes such as `2DP` or `3SF`.
fn counted(data_type: &str, suffix: &str) -> Option<usize> {
    let digits = data_type.strip_suffix(suffix)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Slots for a date/time UNIT string such as `yyyy-mm-ddThh:mm`.
fn slots(unit: &str, placeholders: &[char]) -> Vec<Slot> {
    unit.chars()
        .map(|c| {
            if placeholders.contains(&c) {
                Slot::Digit
            } else if c == '+' {
                Slot::Sign
            } else {
                Slot::Literal(c)
            }
        })
        .collect()
}

fn template(value: &str, slots: &[Slot]) -> bool {
    value.chars().count() == slots.len()
        && value.chars().zip(slots).all(|(c, slot)| match slot {
            Slot::Digit => c.is_ascii_digit(),
            Slot::Sign => c == '+' || c == '-',
            Slot::Literal(literal) => c == *literal,
        })
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// `[sign]digits`, then `.` and exactly `places` digits when `places > 0`,
/// then `[eE][sign]digits` when `exponent` is set.
fn decimal(value: &str, places: usize, exponent: bool) -> bool {
    let mantissa = if exponent {
        let Some((mantissa, power)) = value.split_once(['e', 'E']) else {
            return false;
        };
        if !all_digits(power.strip_prefix(['+', '-']).unwrap_or(power)) {
            return false;
        }
        mantissa
    } else {
        value
    };

    let unsigned = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    if places == 0 {
        return all_digits(unsigned);
    }
    match unsigned.split_once('.') {
        Some((whole, fraction)) => {
            all_digits(whole) && all_digits(fraction) && fraction.len() == places
        }
        None => false,
    }
}

/// Significant digits of a plain decimal number, or `None` if not numeric.
fn significant_figures(value: &str) -> Option<usize> {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let digits: String = whole.chars().chain(fraction.chars()).collect();
    let significant = digits.trim_start_matches('0');
    // Zero itself counts as one significant digit.
    Some(significant.len().max(1))
}

/// Schemas for every heading of a group, built once and reused per row.
#[derive(Debug, Clone)]
pub struct GroupSchema {
    fields: Vec<(String, FieldSchema)>,
}

impl GroupSchema {
    /// One schema per distinct heading name. A repeated heading takes the
    /// definition of its last column, which is the column a row keeps.
    pub fn for_group(group: &Group) -> Self {
        let mut fields: Vec<(String, FieldSchema)> = Vec::with_capacity(group.headings.len());
        for heading in &group.headings {
            let schema = FieldSchema::for_heading(heading);
            match fields.iter_mut().find(|(name, _)| *name == heading.name) {
                Some((_, existing)) => *existing = schema,
                None => fields.push((heading.name.clone(), schema)),
            }
        }
        Self { fields }
    }

    /// Schemas in heading order, skipping free-text fields.
    pub fn constrained(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields
            .iter()
            .filter(|(_, schema)| !schema.is_free_text())
            .map(|(name, schema)| (name.as_str(), schema))
    }
}
