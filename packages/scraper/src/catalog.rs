//! Per-series source descriptions.
//!
//! A [`SeriesSpec`] is immutable configuration: the base URL, how a year maps
//! to the identifier used in URLs, and one [`Endpoint`] per published entity
//! kind with its path template, valid years and document shape.

use crate::config::{
    build_url, lookup_season, F1_ACADEMY_BASE_URL, F1_ACADEMY_SEASONS, FIA_SEASON_OFFSET,
    FORMULA1_BASE_URL, FORMULA2_BASE_URL, FORMULA3_BASE_URL, FORMULA_E_BASE_URL,
    FORMULA_E_SEASONS,
};
use crate::error::{Result, ScraperError};
use crate::html::TableShape;
use crate::json::JsonShape;
use crate::types::{EntityKind, Series};

/// Which years an endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearRule {
    /// The given year or later.
    Since(i32),

    /// Exactly the years present in the series' season table.
    SeasonTable,
}

/// How a year turns into the identifier substituted for `{season}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonKey {
    /// The year itself.
    Literal,

    /// `year - offset`.
    Offset(i32),

    /// Lookup in a fixed year table.
    Table(&'static [(i32, &'static str)]),
}

/// Format of the document an endpoint serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    /// HTML tables, one record per row via the extraction engine.
    Table(TableShape),

    /// JSON objects, one record per object via key renaming.
    Json(JsonShape),
}

/// One published entity kind of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub kind: EntityKind,

    /// Path template relative to the base URL; may contain `{year}` and
    /// `{season}`.
    pub path: &'static str,

    pub years: YearRule,

    pub shape: DocumentShape,

    /// Field that gets `" <year>"` appended, for sources that publish dates
    /// without the year.
    pub year_suffix: Option<&'static str>,
}

/// Source description for one racing series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    pub series: Series,
    pub base_url: &'static str,
    pub season: SeasonKey,
    pub endpoints: &'static [Endpoint],
}

const RESULTS_ARCHIVE: TableShape = TableShape::rows("resultsarchive-table");
const STANDINGS_TABLE: TableShape = TableShape::rows("table table-bordered");
// Race calendar: standings header cells after the position and driver columns.
const STANDINGS_CALENDAR: TableShape = TableShape::header_cells("table table-bordered", 2);

/// Formula 1 results archive.
pub static FORMULA1: SeriesSpec = SeriesSpec {
    series: Series::Formula1,
    base_url: FORMULA1_BASE_URL,
    season: SeasonKey::Literal,
    endpoints: &[
        Endpoint {
            kind: EntityKind::Driver,
            path: "{year}/drivers.html",
            years: YearRule::Since(1950),
            shape: DocumentShape::Table(RESULTS_ARCHIVE),
            year_suffix: None,
        },
        Endpoint {
            kind: EntityKind::Race,
            path: "{year}/races.html",
            years: YearRule::Since(1950),
            shape: DocumentShape::Table(RESULTS_ARCHIVE),
            year_suffix: None,
        },
        Endpoint {
            kind: EntityKind::Team,
            path: "{year}/team.html",
            // Constructors' championship started in 1958.
            years: YearRule::Since(1958),
            shape: DocumentShape::Table(RESULTS_ARCHIVE),
            year_suffix: None,
        },
        Endpoint {
            kind: EntityKind::FastestLap,
            path: "{year}/fastest-laps.html",
            years: YearRule::Since(1950),
            shape: DocumentShape::Table(RESULTS_ARCHIVE),
            year_suffix: None,
        },
    ],
};

/// F1 Academy standings.
pub static F1_ACADEMY: SeriesSpec = SeriesSpec {
    series: Series::F1Academy,
    base_url: F1_ACADEMY_BASE_URL,
    season: SeasonKey::Table(F1_ACADEMY_SEASONS),
    endpoints: &fia_standings_endpoints(YearRule::SeasonTable),
};

/// Formula 2 standings.
pub static FORMULA2: SeriesSpec = SeriesSpec {
    series: Series::Formula2,
    base_url: FORMULA2_BASE_URL,
    season: SeasonKey::Offset(FIA_SEASON_OFFSET),
    endpoints: &fia_standings_endpoints(YearRule::Since(2017)),
};

/// Formula 3 standings.
pub static FORMULA3: SeriesSpec = SeriesSpec {
    series: Series::Formula3,
    base_url: FORMULA3_BASE_URL,
    season: SeasonKey::Offset(FIA_SEASON_OFFSET),
    endpoints: &fia_standings_endpoints(YearRule::Since(2019)),
};

/// Formula E JSON API.
pub static FORMULA_E: SeriesSpec = SeriesSpec {
    series: Series::FormulaE,
    base_url: FORMULA_E_BASE_URL,
    season: SeasonKey::Table(FORMULA_E_SEASONS),
    endpoints: &[
        Endpoint {
            kind: EntityKind::Driver,
            path: "standings/drivers?championshipId={season}",
            years: YearRule::SeasonTable,
            shape: DocumentShape::Json(JsonShape {
                list_key: None,
                fields: &[
                    ("driverTeamName", "driverTeamName"),
                    ("driverPosition", "driverPosition"),
                    ("driverFirstName", "driverFirstName"),
                    ("driverLastName", "driverLastName"),
                    ("driverCountry", "driverCountry"),
                    ("driverPoints", "driverPoints"),
                ],
            }),
            year_suffix: None,
        },
        Endpoint {
            kind: EntityKind::Race,
            path: "races?championshipId={season}",
            years: YearRule::SeasonTable,
            shape: DocumentShape::Json(JsonShape {
                list_key: Some("races"),
                fields: &[("raceName", "name"), ("raceDate", "date")],
            }),
            year_suffix: None,
        },
        Endpoint {
            kind: EntityKind::Team,
            path: "standings/teams?championshipId={season}",
            years: YearRule::SeasonTable,
            shape: DocumentShape::Json(JsonShape {
                list_key: None,
                fields: &[
                    ("teamName", "teamName"),
                    ("teamPosition", "teamPosition"),
                    ("teamPoints", "teamPoints"),
                ],
            }),
            year_suffix: None,
        },
    ],
};

/// Endpoints shared by the F1 Academy, Formula 2 and Formula 3 sites.
const fn fia_standings_endpoints(years: YearRule) -> [Endpoint; 3] {
    [
        Endpoint {
            kind: EntityKind::Driver,
            path: "Driver?seasonId={season}",
            years,
            shape: DocumentShape::Table(STANDINGS_TABLE),
            year_suffix: None,
        },
        Endpoint {
            kind: EntityKind::Race,
            path: "Driver?seasonId={season}",
            years,
            shape: DocumentShape::Table(STANDINGS_CALENDAR),
            year_suffix: Some("date"),
        },
        Endpoint {
            kind: EntityKind::Team,
            path: "Team?seasonId={season}",
            years,
            shape: DocumentShape::Table(STANDINGS_TABLE),
            year_suffix: None,
        },
    ]
}

impl SeriesSpec {
    /// Source description for a series.
    #[must_use]
    pub fn for_series(series: Series) -> &'static SeriesSpec {
        match series {
            Series::Formula1 => &FORMULA1,
            Series::F1Academy => &F1_ACADEMY,
            Series::Formula2 => &FORMULA2,
            Series::Formula3 => &FORMULA3,
            Series::FormulaE => &FORMULA_E,
        }
    }

    /// Endpoint for an entity kind, or an error when the series does not
    /// publish it.
    pub fn endpoint(&self, kind: EntityKind) -> Result<&'static Endpoint> {
        self.endpoints
            .iter()
            .find(|e| e.kind == kind)
            .ok_or(ScraperError::UnsupportedKind {
                series: self.series,
                kind,
            })
    }

    /// Entity kinds this series publishes, in export order.
    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        EntityKind::ALL
            .into_iter()
            .filter(|kind| self.endpoints.iter().any(|e| e.kind == *kind))
    }

    #[must_use]
    pub fn supports(&self, kind: EntityKind) -> bool {
        self.endpoints.iter().any(|e| e.kind == kind)
    }

    /// Check a year against an endpoint's rule.
    pub fn validate_year(&self, endpoint: &Endpoint, year: i32) -> Result<()> {
        let valid = match endpoint.years {
            YearRule::Since(first) => year >= first,
            YearRule::SeasonTable => self.season_id(year).is_some(),
        };

        if valid {
            Ok(())
        } else {
            Err(ScraperError::InvalidYear {
                series: self.series,
                kind: endpoint.kind,
                year,
                expected: self.describe_years(endpoint),
            })
        }
    }

    /// Identifier substituted for `{season}`, `None` when the year has none.
    #[must_use]
    pub fn season_id(&self, year: i32) -> Option<String> {
        match self.season {
            SeasonKey::Literal => Some(year.to_string()),
            SeasonKey::Offset(offset) => year.checked_sub(offset).map(|id| id.to_string()),
            SeasonKey::Table(table) => lookup_season(table, year).map(String::from),
        }
    }

    /// Validate the year and build the request URL for an entity kind.
    pub fn url(&self, base_url: &str, kind: EntityKind, year: i32) -> Result<String> {
        let endpoint = self.endpoint(kind)?;
        self.validate_year(endpoint, year)?;
        let season = self.season_id(year).unwrap_or_else(|| year.to_string());
        Ok(build_url(base_url, endpoint.path, year, &season))
    }

    fn describe_years(&self, endpoint: &Endpoint) -> String {
        match (endpoint.years, self.season) {
            (YearRule::Since(first), _) => format!("{first} or later"),
            (YearRule::SeasonTable, SeasonKey::Table(table)) => {
                let years: Vec<String> = table.iter().map(|(y, _)| y.to_string()).collect();
                format!("one of {}", years.join(", "))
            }
            (YearRule::SeasonTable, _) => "a season with a known identifier".to_string(),
        }
    }
}
