//! CSV export of extracted records.
//!
//! One file per entity kind, one line per record in source order, no header
//! row. Absent values are written as empty cells.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::adapter::SeriesScraper;
use crate::error::{Result, ScraperError};
use crate::http::Fetcher;
use crate::types::{EntityKind, Record};

/// A CSV file written by [`export_season`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub kind: EntityKind,
    pub path: PathBuf,
    pub rows: usize,
}

/// Write records as header-less CSV.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for record in records {
        csv.write_record(record.values().map(|value| value.unwrap_or_default()))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write records to a CSV file, replacing any existing file.
pub fn save_csv(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path)?;
    write_records(file, records)
}

/// File name for one entity kind, e.g. `f1_results_2023_drivers.csv`.
///
/// # Examples
/// ```
/// use formula_scraper::export::csv_file_name;
/// use formula_scraper::types::EntityKind;
///
/// assert_eq!(
///     csv_file_name("f1_results_", 2023, EntityKind::FastestLap),
///     "f1_results_2023_fastest_laps.csv"
/// );
/// ```
#[must_use]
pub fn csv_file_name(prefix: &str, year: i32, kind: EntityKind) -> String {
    format!("{prefix}{year}_{}.csv", kind.file_suffix())
}

/// Fetch every entity kind a series publishes for `year` and write one CSV
/// file per kind into `output_dir`.
///
/// Kinds whose own year range excludes `year` are skipped with a warning
/// (e.g. Formula 1 team standings before 1958). When no kind accepts the
/// year, the first validation error is returned before any request is made.
/// Every kind is fetched before the first file is written, so a failed fetch
/// leaves `output_dir` untouched.
pub fn export_season<F: Fetcher>(
    scraper: &SeriesScraper<F>,
    year: i32,
    output_dir: &Path,
    prefix: &str,
) -> Result<Vec<ExportedFile>> {
    if !output_dir.is_dir() {
        return Err(ScraperError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", output_dir.display()),
        )));
    }

    let mut kinds = Vec::new();
    let mut first_error = None;
    for kind in scraper.spec().kinds() {
        match scraper.validate(kind, year) {
            Ok(()) => kinds.push(kind),
            Err(e @ ScraperError::InvalidYear { .. }) => {
                tracing::warn!(series = %scraper.series(), %kind, year, error = %e, "Skipping");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
            Err(e) => return Err(e),
        }
    }

    if kinds.is_empty() {
        if let Some(e) = first_error {
            return Err(e);
        }
    }

    let mut fetched = Vec::with_capacity(kinds.len());
    for kind in kinds {
        fetched.push((kind, scraper.fetch(kind, year)?));
    }

    let mut exported = Vec::with_capacity(fetched.len());
    for (kind, records) in fetched {
        let path = output_dir.join(csv_file_name(prefix, year, kind));
        save_csv(&path, &records)?;
        tracing::info!(path = %path.display(), rows = records.len(), "Wrote CSV");
        exported.push(ExportedFile {
            kind,
            path,
            rows: records.len(),
        });
    }

    Ok(exported)
}
