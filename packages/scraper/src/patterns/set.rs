//! Pattern set: ordered field name to regex mapping.

use regex::Regex;

use crate::error::{Result, ScraperError};

/// How a captured value is cleaned up before it lands in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    /// Capture text with surrounding whitespace trimmed.
    #[default]
    Raw,

    /// Capture text with markup removed, entities decoded and whitespace
    /// collapsed. Used where a value spans several inline elements.
    Text,
}

/// A single named field and the regex that extracts it.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    name: String,
    regex: Regex,
    format: ValueFormat,
}

impl FieldPattern {
    /// Compile a field pattern.
    ///
    /// The pattern must contain exactly one capturing group; group 1 is the
    /// field's value.
    pub fn new(name: impl Into<String>, pattern: &str, format: ValueFormat) -> Result<Self> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|source| ScraperError::InvalidPattern {
            field: name.clone(),
            source,
        })?;

        // captures_len counts the implicit whole-match group.
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(ScraperError::CaptureGroups { field: name, found });
        }

        Ok(Self {
            name,
            regex,
            format,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    #[must_use]
    pub fn format(&self) -> ValueFormat {
        self.format
    }
}

/// Ordered set of field patterns for one (series, entity kind) pair.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    fields: Vec<FieldPattern>,
}

impl PatternSet {
    /// Create an empty pattern set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set of raw fields from `(name, pattern)` pairs.
    ///
    /// # Examples
    /// ```
    /// use formula_scraper::patterns::PatternSet;
    ///
    /// let set = PatternSet::from_pairs([("driver", r"<td>(.*?)</td>")]).unwrap();
    /// assert_eq!(set.field_names().collect::<Vec<_>>(), vec!["driver"]);
    /// ```
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut set = Self::new();
        for (name, pattern) in pairs {
            set.add(name, pattern, ValueFormat::Raw)?;
        }
        Ok(set)
    }

    /// Add a field. A field with the same name is replaced in place.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        pattern: &str,
        format: ValueFormat,
    ) -> Result<()> {
        let field = FieldPattern::new(name, pattern, format)?;
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        Ok(())
    }

    /// Add a raw field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, pattern: &str) -> Result<Self> {
        self.add(name, pattern, ValueFormat::Raw)?;
        Ok(self)
    }

    /// Add a markup-text field, builder style.
    pub fn with_text_field(mut self, name: impl Into<String>, pattern: &str) -> Result<Self> {
        self.add(name, pattern, ValueFormat::Text)?;
        Ok(self)
    }

    /// Field patterns in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldPattern> {
        self.fields.iter()
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldPattern::name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldPattern> {
        self.fields.iter().find(|f| f.name == name)
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
