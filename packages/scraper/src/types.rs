//! Core data types: racing series, entity kinds and extracted records.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Racing series with a published results source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Series {
    /// FIA Formula One World Championship.
    Formula1,

    /// F1 Academy.
    F1Academy,

    /// FIA Formula 2 Championship.
    Formula2,

    /// FIA Formula 3 Championship.
    Formula3,

    /// ABB FIA Formula E World Championship.
    FormulaE,
}

impl Series {
    /// All supported series.
    pub const ALL: [Series; 5] = [
        Self::Formula1,
        Self::F1Academy,
        Self::Formula2,
        Self::Formula3,
        Self::FormulaE,
    ];

    /// Short identifier used on the command line.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Formula1 => "f1",
            Self::F1Academy => "f1-academy",
            Self::Formula2 => "f2",
            Self::Formula3 => "f3",
            Self::FormulaE => "formula-e",
        }
    }

    /// Human readable series name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Formula1 => "Formula 1",
            Self::F1Academy => "F1 Academy",
            Self::Formula2 => "Formula 2",
            Self::Formula3 => "Formula 3",
            Self::FormulaE => "Formula E",
        }
    }

    /// Default prefix for exported CSV file names.
    #[must_use]
    pub fn csv_prefix(&self) -> &'static str {
        match self {
            Self::Formula1 => "f1_results_",
            Self::F1Academy => "f1academy_results_",
            Self::Formula2 => "f2_results_",
            Self::Formula3 => "f3_results_",
            Self::FormulaE => "fe_results_",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Series {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f1" | "formula1" | "formula-1" => Ok(Self::Formula1),
            "f1a" | "f1-academy" | "f1academy" => Ok(Self::F1Academy),
            "f2" | "formula2" | "formula-2" => Ok(Self::Formula2),
            "f3" | "formula3" | "formula-3" => Ok(Self::Formula3),
            "fe" | "formula-e" | "formulae" => Ok(Self::FormulaE),
            other => Err(format!(
                "unknown series '{other}' (expected one of: f1, f1-academy, f2, f3, formula-e)"
            )),
        }
    }
}

/// Category of extracted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// Driver championship standing.
    Driver,

    /// Race result or calendar entry.
    Race,

    /// Team (constructor) championship standing.
    Team,

    /// Fastest lap per grand prix.
    FastestLap,
}

impl EntityKind {
    /// All entity kinds, in export order.
    pub const ALL: [EntityKind; 4] = [Self::Driver, Self::Race, Self::Team, Self::FastestLap];

    /// Identifier used on the command line.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Driver => "drivers",
            Self::Race => "races",
            Self::Team => "teams",
            Self::FastestLap => "fastest-laps",
        }
    }

    /// Suffix used in exported file names.
    #[must_use]
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Self::Driver => "drivers",
            Self::Race => "races",
            Self::Team => "teams",
            Self::FastestLap => "fastest_laps",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Driver => "driver standings",
            Self::Race => "race results",
            Self::Team => "team standings",
            Self::FastestLap => "fastest laps",
        })
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "driver" | "drivers" => Ok(Self::Driver),
            "race" | "races" => Ok(Self::Race),
            "team" | "teams" => Ok(Self::Team),
            "fastest-lap" | "fastest-laps" | "fastest_laps" => Ok(Self::FastestLap),
            other => Err(format!(
                "unknown entity kind '{other}' (expected one of: drivers, races, teams, fastest-laps)"
            )),
        }
    }
}

/// One extracted entity: field name to value, in pattern order.
///
/// `None` marks a field whose pattern found no match in the source row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Set a field, keeping its original position if it already exists.
    pub fn insert(&mut self, field: impl Into<String>, value: Option<String>) {
        let field = field.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Value of a field, `None` when absent or unknown.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Whether the record carries this field (matched or absent).
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field)
    }

    /// Whether the field exists but its pattern did not match.
    #[must_use]
    pub fn is_absent(&self, field: &str) -> bool {
        self.fields
            .iter()
            .any(|(name, value)| name == field && value.is_none())
    }

    /// Mutable access to a present value.
    pub fn get_mut(&mut self, field: &str) -> Option<&mut String> {
        self.fields
            .iter_mut()
            .find(|(name, _)| name == field)
            .and_then(|(_, value)| value.as_mut())
    }

    /// Field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Values in field order.
    pub fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.fields.iter().map(|(_, value)| value.as_deref())
    }

    /// `(field, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
