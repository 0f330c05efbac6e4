//! Pattern table mapping (series, entity kind) to pattern sets.

use std::collections::HashMap;

use super::set::PatternSet;
use crate::error::{Result, ScraperError};
use crate::types::{EntityKind, Series};

/// Immutable lookup of pattern sets, built once and shared by adapters.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    sets: HashMap<(Series, EntityKind), PatternSet>,
}

impl PatternTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the patterns for every published HTML source.
    pub fn standard() -> Result<Self> {
        super::config::create_standard_patterns()
    }

    /// Register the pattern set for a series/kind pair.
    pub fn insert(&mut self, series: Series, kind: EntityKind, set: PatternSet) {
        self.sets.insert((series, kind), set);
    }

    /// Register a pattern set, builder style.
    #[must_use]
    pub fn with(mut self, series: Series, kind: EntityKind, set: PatternSet) -> Self {
        self.insert(series, kind, set);
        self
    }

    #[must_use]
    pub fn get(&self, series: Series, kind: EntityKind) -> Option<&PatternSet> {
        self.sets.get(&(series, kind))
    }

    /// Pattern set for a pair, or a configuration error.
    pub fn require(&self, series: Series, kind: EntityKind) -> Result<&PatternSet> {
        self.get(series, kind)
            .ok_or(ScraperError::MissingPatterns { series, kind })
    }

    #[must_use]
    pub fn contains(&self, series: Series, kind: EntityKind) -> bool {
        self.sets.contains_key(&(series, kind))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_insert_and_get() {
        let set = PatternSet::from_pairs([("driver", r"<td>(.*?)</td>")]).unwrap();
        let table = PatternTable::new().with(Series::Formula3, EntityKind::Driver, set);

        assert!(table.contains(Series::Formula3, EntityKind::Driver));
        assert!(!table.contains(Series::Formula3, EntityKind::Team));
        assert_eq!(table.len(), 1);
        assert_eq!(
            table
                .get(Series::Formula3, EntityKind::Driver)
                .map(PatternSet::len),
            Some(1)
        );
    }

    #[test]
    fn test_require_missing_set() {
        let table = PatternTable::new();
        let err = table.require(Series::Formula2, EntityKind::Race).unwrap_err();
        assert!(matches!(
            err,
            ScraperError::MissingPatterns {
                series: Series::Formula2,
                kind: EntityKind::Race
            }
        ));
    }
}
