//! Configuration constants, season identifiers and URL construction.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, ScraperError};

/// Formula 1 results archive.
pub const FORMULA1_BASE_URL: &str = "https://www.formula1.com/en/results.html/";

/// F1 Academy standings pages.
pub const F1_ACADEMY_BASE_URL: &str = "https://www.f1academy.com/Standings/";

/// Formula 2 standings pages.
pub const FORMULA2_BASE_URL: &str = "https://www.fiaformula2.com/Standings/";

/// Formula 3 standings pages.
pub const FORMULA3_BASE_URL: &str = "https://www.fiaformula3.com/Standings/";

/// Formula E public JSON API.
pub const FORMULA_E_BASE_URL: &str = "https://api.formula-e.pulselive.com/formula-e/v1/";

/// HTTP timeout in seconds. Each fetch is a single attempt bounded by this deadline.
pub const HTTP_TIMEOUT_SECS: u64 = 5;

/// User agent string identifying this scraper.
pub const USER_AGENT: &str = concat!("formula-scraper/", env!("CARGO_PKG_VERSION"));

/// Formula 2 and Formula 3 number their seasons as `year - 1843`.
pub const FIA_SEASON_OFFSET: i32 = 1843;

/// F1 Academy season identifiers.
pub const F1_ACADEMY_SEASONS: &[(i32, &str)] = &[(2023, "1")];

/// Formula E championship identifiers used by the JSON API.
pub const FORMULA_E_SEASONS: &[(i32, &str)] = &[
    (2015, "88a88a4b-a48d-4d06-9e52-d609bb7824a3"),
    (2016, "a5f3e09b-74b8-46eb-8211-7028942b6707"),
    (2017, "f59db73b-450e-4840-a5f8-2a216072b837"),
    (2018, "ea980dfa-e65a-4d0a-8523-c1faa7eb6bc0"),
    (2019, "7a56ae01-e0c0-43f3-a354-47300118f7b9"),
    (2020, "0cdedbd9-d9f9-4283-ac31-828792b6b224"),
    (2021, "bd46d6ec-6d0e-427a-9f8c-f5a5bcc12d1c"),
    (2022, "1335d68f-d1ae-4200-8ca5-c53cd1a7690b"),
    (2023, "bc4a0209-f233-46c8-afce-842d1c48358f"),
    (2024, "84467676-4d5d-4c97-ae07-0b7520bb95ea"),
];

/// Placeholders allowed in endpoint path templates.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z]+)\}").expect("valid regex"));

/// Look up a season identifier in a year table.
///
/// # Examples
/// ```
/// use formula_scraper::config::{lookup_season, FORMULA_E_SEASONS};
///
/// assert_eq!(
///     lookup_season(FORMULA_E_SEASONS, 2023),
///     Some("bc4a0209-f233-46c8-afce-842d1c48358f")
/// );
/// assert_eq!(lookup_season(FORMULA_E_SEASONS, 2014), None);
/// ```
#[must_use]
pub fn lookup_season(table: &[(i32, &'static str)], year: i32) -> Option<&'static str> {
    table
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, id)| *id)
}

/// Parse a year typed by a user.
///
/// # Examples
/// ```
/// use formula_scraper::config::parse_year;
///
/// assert_eq!(parse_year(" 2023\n").unwrap(), 2023);
/// assert!(parse_year("twenty").is_err());
/// ```
pub fn parse_year(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .ok()
        .filter(|year| (1000..=9999).contains(year))
        .ok_or_else(|| ScraperError::InvalidInput(format!("'{trimmed}' is not a four-digit year")))
}

/// Fill an endpoint path template and join it to a base URL.
///
/// `{year}` is replaced with the literal year and `{season}` with the
/// resolved season identifier. Unknown placeholders are left untouched.
///
/// # Examples
/// ```
/// use formula_scraper::config::build_url;
///
/// assert_eq!(
///     build_url("https://www.fiaformula2.com/Standings/", "Driver?seasonId={season}", 2023, "180"),
///     "https://www.fiaformula2.com/Standings/Driver?seasonId=180"
/// );
/// ```
#[must_use]
pub fn build_url(base_url: &str, path: &str, year: i32, season: &str) -> String {
    let filled = PLACEHOLDER_PATTERN.replace_all(path, |caps: &regex::Captures<'_>| {
        match &caps[1] {
            "year" => year.to_string(),
            "season" => season.to_string(),
            _ => caps[0].to_string(),
        }
    });

    if base_url.ends_with('/') || base_url.is_empty() {
        format!("{base_url}{filled}")
    } else {
        format!("{base_url}/{filled}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_season_academy() {
        assert_eq!(lookup_season(F1_ACADEMY_SEASONS, 2023), Some("1"));
        assert_eq!(lookup_season(F1_ACADEMY_SEASONS, 2024), None);
    }

    #[test]
    fn test_formula_e_seasons_are_sorted_and_unique() {
        let years: Vec<i32> = FORMULA_E_SEASONS.iter().map(|(y, _)| *y).collect();
        let mut sorted = years.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(years, sorted);
        assert_eq!(years.first(), Some(&2015));
        assert_eq!(years.last(), Some(&2024));
    }

    #[test]
    fn test_parse_year_valid() {
        assert_eq!(parse_year("2023").unwrap(), 2023);
        assert_eq!(parse_year("  1950 \r\n").unwrap(), 1950);
    }

    #[test]
    fn test_parse_year_invalid() {
        assert!(parse_year("").is_err());
        assert!(parse_year("23").is_err());
        assert!(parse_year("2023a").is_err());
        assert!(parse_year("-2023").is_err());
    }

    #[test]
    fn test_build_url_literal_year() {
        assert_eq!(
            build_url(FORMULA1_BASE_URL, "{year}/drivers.html", 2023, "2023"),
            "https://www.formula1.com/en/results.html/2023/drivers.html"
        );
    }

    #[test]
    fn test_build_url_season_id() {
        assert_eq!(
            build_url(
                FORMULA_E_BASE_URL,
                "standings/teams?championshipId={season}",
                2021,
                "bd46d6ec-6d0e-427a-9f8c-f5a5bcc12d1c"
            ),
            "https://api.formula-e.pulselive.com/formula-e/v1/standings/teams?championshipId=bd46d6ec-6d0e-427a-9f8c-f5a5bcc12d1c"
        );
    }

    #[test]
    fn test_build_url_adds_separator() {
        assert_eq!(
            build_url("http://127.0.0.1:8080", "{year}/team.html", 1958, "1958"),
            "http://127.0.0.1:8080/1958/team.html"
        );
    }

    #[test]
    fn test_build_url_keeps_unknown_placeholder() {
        assert_eq!(
            build_url("http://host/", "{round}/{year}", 2020, "x"),
            "http://host/{round}/2020"
        );
    }
}
