//! Pattern-driven extraction engine.
//!
//! Converts one text fragment (the serialized HTML of a table row) plus one
//! [`PatternSet`] into one [`Record`]. For every field the first match of its
//! pattern is taken; capture group 1, cleaned per the field's
//! [`ValueFormat`], becomes the value. A field whose pattern does not match
//! is recorded as absent and the remaining fields are still extracted, so
//! the returned record always has exactly the pattern set's fields.

use regex::Regex;
use std::sync::LazyLock;

use crate::patterns::{FieldPattern, PatternSet, ValueFormat};
use crate::types::Record;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Extract one record from a fragment.
///
/// # Examples
/// ```
/// use formula_scraper::extract::extract_record;
/// use formula_scraper::patterns::PatternSet;
///
/// let set = PatternSet::from_pairs([
///     ("driver", r"<td>(.*?)</td>"),
///     ("points", r#"<td class="points">(.*?)</td>"#),
/// ])
/// .unwrap();
///
/// let record = extract_record("<tr><td> Driver 1 </td></tr>", &set);
/// assert_eq!(record.get("driver"), Some("Driver 1"));
/// assert!(record.is_absent("points"));
/// ```
#[must_use]
pub fn extract_record(fragment: &str, patterns: &PatternSet) -> Record {
    let mut record = Record::with_capacity(patterns.len());
    for field in patterns.fields() {
        record.insert(field.name(), extract_field(fragment, field));
    }
    record
}

/// Extract one record per fragment, preserving order.
pub fn extract_records<I, S>(fragments: I, patterns: &PatternSet) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .map(|fragment| extract_record(fragment.as_ref(), patterns))
        .collect()
}

/// Value of one field, or `None` when its pattern does not match.
#[must_use]
pub fn extract_field(fragment: &str, field: &FieldPattern) -> Option<String> {
    let captures = field.regex().captures(fragment)?;
    let raw = captures.get(1)?.as_str();

    let value = match field.format() {
        ValueFormat::Raw => raw.trim().to_string(),
        ValueFormat::Text => markup_to_text(raw),
    };

    if value.is_empty() && field.format() == ValueFormat::Text && !raw.trim().is_empty() {
        tracing::debug!(field = field.name(), "Captured markup contained no text");
    }

    Some(value)
}

/// Reduce an HTML snippet to its visible text.
///
/// Tags become word breaks, common entities are decoded and runs of
/// whitespace collapse to a single space.
///
/// # Examples
/// ```
/// use formula_scraper::extract::markup_to_text;
///
/// assert_eq!(
///     markup_to_text("Max</span>\n   <span class=\"hide-for-mobile\">Verstappen"),
///     "Max Verstappen"
/// );
/// assert_eq!(markup_to_text("Alfa Romeo &amp; Sauber"), "Alfa Romeo & Sauber");
/// ```
#[must_use]
pub fn markup_to_text(markup: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(markup, " ");
    let decoded = decode_entities(&without_tags);
    WHITESPACE_PATTERN
        .replace_all(&decoded, " ")
        .trim()
        .to_string()
}

/// Decode the handful of entities an HTML serializer emits in text nodes.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
