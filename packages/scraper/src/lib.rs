//! Formula Scraper - Extract motorsport standings and results.
//!
//! This crate downloads season pages for Formula 1, F1 Academy, Formula 2,
//! Formula 3 and Formula E, turns each table row or JSON object into a
//! [`Record`], and writes the records to header-less CSV files.
//!
//! # Example
//!
//! ```
//! use formula_scraper::extract_record;
//! use formula_scraper::patterns::PatternSet;
//!
//! let patterns = PatternSet::from_pairs([
//!     ("position", r#"<td class="dark">(.*?)</td>"#),
//!     ("points", r#"<td class="dark bold">(.*?)</td>"#),
//! ])
//! .unwrap();
//!
//! let record = extract_record(r#"<tr><td class="dark">1</td></tr>"#, &patterns);
//! assert_eq!(record.get("position"), Some("1"));
//! assert_eq!(record.get("points"), None);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Base URLs, season tables and input validation
//! - [`types`]: Series, entity kinds and records
//! - [`error`]: Error types and Result alias
//! - [`patterns`]: Field patterns and the per-series pattern table
//! - [`extract`]: Pattern-driven field extraction
//! - [`html`]: Splitting pages into table rows
//! - [`json`]: Mapping JSON objects onto records
//! - [`catalog`]: Per-series endpoints and year rules
//! - [`http`]: HTTP client and the fetcher seam
//! - [`adapter`]: Series scrapers
//! - [`export`]: CSV output
//! - [`display`]: Terminal tables
//! - [`cli`]: Command-line interface

pub mod adapter;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod extract;
pub mod html;
pub mod http;
pub mod json;
pub mod patterns;
pub mod types;

// Re-export commonly used items
pub use adapter::SeriesScraper;
pub use error::{Result, ScraperError};
pub use export::export_season;
pub use extract::{extract_record, extract_records};
pub use patterns::{PatternSet, PatternTable};
pub use types::{EntityKind, Record, Series};
