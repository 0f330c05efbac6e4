//! Error types for the scraper.
//!
//! A single `ScraperError` covers configuration, network and output failures.
//! Field-level extraction misses are not errors; see [`crate::extract`].

use thiserror::Error;

use crate::types::{EntityKind, Series};

/// Main error type for the scraper library.
#[derive(Debug, Error)]
pub enum ScraperError {
    /// Requested year is outside the range a series publishes.
    #[error("Invalid year {year} for {series} {kind}: expected {expected}")]
    InvalidYear {
        series: Series,
        kind: EntityKind,
        year: i32,
        expected: String,
    },

    /// Series does not publish this entity kind.
    #[error("{series} does not publish {kind}")]
    UnsupportedKind { series: Series, kind: EntityKind },

    /// No pattern set registered for a series/kind pair.
    #[error("No patterns registered for {series} {kind}")]
    MissingPatterns { series: Series, kind: EntityKind },

    /// Field pattern failed to compile.
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// Field pattern compiled but does not have exactly one capture group.
    #[error("Pattern for field '{field}' must have exactly one capture group, found {found}")]
    CaptureGroups { field: String, found: usize },

    /// Table selector could not be parsed.
    #[error("Invalid table selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request to a results page failed or returned a non-success status.
    #[error("Failed to download {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// JSON document is valid but not shaped as expected.
    #[error("Unexpected payload from {url}: {message}")]
    UnexpectedPayload { url: String, message: String },

    /// JSON parsing failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing failed.
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid value typed at a prompt or passed on the command line.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ScraperError {
    /// Whether the error was raised before any network access.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear { .. }
                | Self::UnsupportedKind { .. }
                | Self::MissingPatterns { .. }
                | Self::InvalidInput(_)
        )
    }
}

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, ScraperError>;
