//! Series adapters: validate, fetch, segment and extract.
//!
//! A [`SeriesScraper`] couples one series' [`SeriesSpec`] with the shared
//! [`PatternTable`] and a [`Fetcher`]. Each call validates the year before
//! any request, fetches exactly one document, and returns one record per
//! source row or object in document order.

use std::sync::Arc;

use crate::catalog::{DocumentShape, Endpoint, SeriesSpec};
use crate::error::Result;
use crate::extract::extract_records;
use crate::html::segment_rows;
use crate::http::{Fetcher, HttpFetcher};
use crate::json::map_objects;
use crate::patterns::PatternTable;
use crate::types::{EntityKind, Record, Series};

/// Scraper for one racing series.
#[derive(Debug, Clone)]
pub struct SeriesScraper<F = HttpFetcher> {
    spec: &'static SeriesSpec,
    patterns: Arc<PatternTable>,
    fetcher: F,
    base_url: String,
}

impl SeriesScraper<HttpFetcher> {
    /// Scraper using a live HTTP client.
    pub fn new(series: Series, patterns: Arc<PatternTable>) -> Result<Self> {
        Ok(Self::with_fetcher(series, patterns, HttpFetcher::new()?))
    }
}

impl<F: Fetcher> SeriesScraper<F> {
    /// Scraper using a custom document source.
    pub fn with_fetcher(series: Series, patterns: Arc<PatternTable>, fetcher: F) -> Self {
        let spec = SeriesSpec::for_series(series);
        Self {
            spec,
            patterns,
            fetcher,
            base_url: spec.base_url.to_string(),
        }
    }

    /// Replace the series' base URL, e.g. to point at a mirror.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn series(&self) -> Series {
        self.spec.series
    }

    #[must_use]
    pub fn spec(&self) -> &'static SeriesSpec {
        self.spec
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn supports(&self, kind: EntityKind) -> bool {
        self.spec.supports(kind)
    }

    /// Check that `kind` can be fetched for `year` without touching the
    /// network.
    pub fn validate(&self, kind: EntityKind, year: i32) -> Result<()> {
        let endpoint = self.spec.endpoint(kind)?;
        self.spec.validate_year(endpoint, year)?;
        if let DocumentShape::Table(_) = endpoint.shape {
            self.patterns.require(self.spec.series, kind)?;
        }
        Ok(())
    }

    /// Request URL for `kind` in `year`.
    pub fn url(&self, kind: EntityKind, year: i32) -> Result<String> {
        self.spec.url(&self.base_url, kind, year)
    }

    /// Fetch all records of one entity kind for one season.
    pub fn fetch(&self, kind: EntityKind, year: i32) -> Result<Vec<Record>> {
        self.validate(kind, year)?;
        let endpoint = self.spec.endpoint(kind)?;
        let url = self.url(kind, year)?;

        tracing::info!(series = %self.spec.series, %kind, year, url = %url, "Scraping");
        let body = self.fetcher.fetch_text(&url)?;

        let records = self.parse(endpoint, &body, &url, year)?;
        tracing::info!(series = %self.spec.series, %kind, year, rows = records.len(), "Scraped");
        Ok(records)
    }

    /// Driver standings.
    pub fn drivers(&self, year: i32) -> Result<Vec<Record>> {
        self.fetch(EntityKind::Driver, year)
    }

    /// Race results or calendar.
    pub fn races(&self, year: i32) -> Result<Vec<Record>> {
        self.fetch(EntityKind::Race, year)
    }

    /// Team standings.
    pub fn teams(&self, year: i32) -> Result<Vec<Record>> {
        self.fetch(EntityKind::Team, year)
    }

    /// Fastest lap per grand prix.
    pub fn fastest_laps(&self, year: i32) -> Result<Vec<Record>> {
        self.fetch(EntityKind::FastestLap, year)
    }

    fn parse(&self, endpoint: &Endpoint, body: &str, url: &str, year: i32) -> Result<Vec<Record>> {
        let mut records = match &endpoint.shape {
            DocumentShape::Table(shape) => {
                let patterns = self.patterns.require(self.spec.series, endpoint.kind)?;
                let rows = segment_rows(body, shape)?;
                extract_records(rows, patterns)
            }
            DocumentShape::Json(shape) => {
                let payload: serde_json::Value = serde_json::from_str(body)?;
                map_objects(&payload, shape, url)?
            }
        };

        if let Some(field) = endpoint.year_suffix {
            for record in &mut records {
                if let Some(value) = record.get_mut(field) {
                    value.push(' ');
                    value.push_str(&year.to_string());
                }
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScraperError;
    use crate::patterns::PatternSet;
    use std::cell::RefCell;

    /// Fetcher returning a canned body and recording requested URLs.
    struct CannedFetcher {
        body: String,
        requests: RefCell<Vec<String>>,
    }

    impl CannedFetcher {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Fetcher for CannedFetcher {
        fn fetch_text(&self, url: &str) -> Result<String> {
            self.requests.borrow_mut().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    fn single_field_table(series: Series, kind: EntityKind, field: &str) -> Arc<PatternTable> {
        let set = PatternSet::from_pairs([(field, r"<td>(.*?)</td>")]).unwrap();
        Arc::new(PatternTable::new().with(series, kind, set))
    }

    #[test]
    fn test_invalid_year_makes_no_request() {
        let fetcher = CannedFetcher::new("");
        let scraper = SeriesScraper::with_fetcher(
            Series::Formula3,
            Arc::new(PatternTable::standard().unwrap()),
            &fetcher,
        );

        for kind in [EntityKind::Driver, EntityKind::Race, EntityKind::Team] {
            let err = scraper.fetch(kind, 2018).unwrap_err();
            assert!(matches!(err, ScraperError::InvalidYear { year: 2018, .. }));
        }
        assert_eq!(fetcher.calls(), 0);
    }

    #[test]
    fn test_invalid_year_for_every_series() {
        let fetcher = CannedFetcher::new("");
        let patterns = Arc::new(PatternTable::standard().unwrap());
        for series in Series::ALL {
            let scraper = SeriesScraper::with_fetcher(series, patterns.clone(), &fetcher);
            assert!(scraper.drivers(1900).is_err());
        }
        assert_eq!(fetcher.calls(), 0);
    }

    #[test]
    fn test_unsupported_kind_makes_no_request() {
        let fetcher = CannedFetcher::new("");
        let scraper = SeriesScraper::with_fetcher(
            Series::FormulaE,
            Arc::new(PatternTable::new()),
            &fetcher,
        );
        let err = scraper.fastest_laps(2023).unwrap_err();
        assert!(matches!(err, ScraperError::UnsupportedKind { .. }));
        assert_eq!(fetcher.calls(), 0);
    }

    #[test]
    fn test_missing_patterns_makes_no_request() {
        let fetcher = CannedFetcher::new("");
        let scraper =
            SeriesScraper::with_fetcher(Series::Formula2, Arc::new(PatternTable::new()), &fetcher);
        let err = scraper.teams(2020).unwrap_err();
        assert!(matches!(err, ScraperError::MissingPatterns { .. }));
        assert_eq!(fetcher.calls(), 0);
    }

    #[test]
    fn test_single_data_row_fixture() {
        let fetcher = CannedFetcher::new(
            r#"<html><table class="table table-bordered"><tr></tr><tr><td>Driver 1</td></tr></table></html>"#,
        );
        let scraper = SeriesScraper::with_fetcher(
            Series::Formula3,
            single_field_table(Series::Formula3, EntityKind::Driver, "driver"),
            &fetcher,
        );

        let records = scraper.drivers(2021).unwrap();
        let expected: Record = [("driver", Some("Driver 1".to_string()))].into_iter().collect();
        assert_eq!(records, vec![expected]);
        assert_eq!(
            fetcher.requests.borrow().as_slice(),
            ["https://www.fiaformula3.com/Standings/Driver?seasonId=178".to_string()]
        );
    }

    #[test]
    fn test_two_tables_keep_document_order() {
        let fetcher = CannedFetcher::new(
            r#"<html>
            <table class="table table-bordered"><tr></tr><tr><td>Team 1</td></tr></table>
            <table class="table table-bordered"><tr></tr><tr><td>Team 2</td></tr></table>
            </html>"#,
        );
        let scraper = SeriesScraper::with_fetcher(
            Series::Formula2,
            single_field_table(Series::Formula2, EntityKind::Team, "team"),
            &fetcher,
        );

        let records = scraper.teams(2021).unwrap();
        let teams: Vec<_> = records.iter().map(|r| r.get("team")).collect();
        assert_eq!(teams, vec![Some("Team 1"), Some("Team 2")]);
    }

    #[test]
    fn test_calendar_dates_get_year() {
        let fetcher = CannedFetcher::new(
            r#"<table class="table table-bordered"><thead><tr>
                <th>Pos</th><th>Driver</th>
                <th><div class="country-name"><span>Bahrain</span></div><div class="dates">03-05 Mar</div></th>
                <th><div class="country-name"><span>Saudi Arabia</span></div></th>
            </tr></thead><tbody><tr><td>1</td></tr></tbody></table>"#,
        );
        let scraper = SeriesScraper::with_fetcher(
            Series::Formula2,
            Arc::new(PatternTable::standard().unwrap()),
            &fetcher,
        );

        let races = scraper.races(2023).unwrap();
        assert_eq!(races.len(), 2);
        assert_eq!(races[0].get("grandprix"), Some("Bahrain"));
        assert_eq!(races[0].get("date"), Some("03-05 Mar 2023"));
        assert_eq!(races[1].get("grandprix"), Some("Saudi Arabia"));
        assert!(races[1].is_absent("date"));
    }

    #[test]
    fn test_formula_e_driver_json() {
        let fetcher = CannedFetcher::new(
            r#"[{
                "driverTeamName": "Team 1",
                "driverPosition": "1",
                "driverFirstName": "Driver",
                "driverLastName": "One",
                "driverCountry": "Country 1",
                "driverPoints": "100",
                "driverNumber": "7"
            }]"#,
        );
        let scraper =
            SeriesScraper::with_fetcher(Series::FormulaE, Arc::new(PatternTable::new()), &fetcher);

        let records = scraper.drivers(2021).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].iter().collect::<Vec<_>>(),
            vec![
                ("driverTeamName", Some("Team 1")),
                ("driverPosition", Some("1")),
                ("driverFirstName", Some("Driver")),
                ("driverLastName", Some("One")),
                ("driverCountry", Some("Country 1")),
                ("driverPoints", Some("100")),
            ]
        );
    }

    #[test]
    fn test_formula_e_invalid_json() {
        let fetcher = CannedFetcher::new("<html>not json</html>");
        let scraper =
            SeriesScraper::with_fetcher(Series::FormulaE, Arc::new(PatternTable::new()), &fetcher);
        assert!(matches!(
            scraper.teams(2022).unwrap_err(),
            ScraperError::Json(_)
        ));
    }

    #[test]
    fn test_fetch_error_propagates() {
        struct Failing;
        impl Fetcher for Failing {
            fn fetch_text(&self, url: &str) -> Result<String> {
                Err(ScraperError::UnexpectedPayload {
                    url: url.to_string(),
                    message: "offline".to_string(),
                })
            }
        }

        let scraper = SeriesScraper::with_fetcher(
            Series::Formula1,
            Arc::new(PatternTable::standard().unwrap()),
            Failing,
        );
        let err = scraper.drivers(2023).unwrap_err();
        assert!(err.to_string().contains("offline"));
    }

    #[test]
    fn test_base_url_override() {
        let fetcher = CannedFetcher::new("<html></html>");
        let scraper = SeriesScraper::with_fetcher(
            Series::Formula1,
            Arc::new(PatternTable::standard().unwrap()),
            &fetcher,
        )
        .with_base_url("http://127.0.0.1:9000/results");

        assert!(scraper.fastest_laps(2023).unwrap().is_empty());
        assert_eq!(
            fetcher.requests.borrow().as_slice(),
            ["http://127.0.0.1:9000/results/2023/fastest-laps.html".to_string()]
        );
    }
}
