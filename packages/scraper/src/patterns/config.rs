//! Standard pattern table for the published results pages.

use super::set::PatternSet;
use super::table::PatternTable;
use crate::error::Result;
use crate::types::{EntityKind, Series};

/// First and last name spans of a driver link, captured together.
const FULL_NAME: &str =
    r#"(?s)<span class="hide-for-tablet">(.*?</span>\s*<span class="hide-for-mobile">.*?)</span>"#;

/// Create the pattern table for every HTML source.
///
/// Formula 1 rows come from `table.resultsarchive-table`:
///
/// ```text
/// <tr>
///   <td class="dark">1</td>
///   <td><a href=".../drivers/..."><span class="hide-for-tablet">Max</span>
///       <span class="hide-for-mobile">Verstappen</span></a></td>
///   <td class="dark semi-bold uppercase">NED</td>
///   <td><a href=".../team/...">Red Bull Racing Honda RBPT</a></td>
///   <td class="dark bold">575</td>
/// </tr>
/// ```
///
/// F1 Academy, Formula 2 and Formula 3 share one site layout
/// (`table.table.table-bordered`) and therefore one set of patterns. Their
/// race calendar is read from the standings header cells.
///
/// Formula E is served as JSON and needs no patterns.
pub fn create_standard_patterns() -> Result<PatternTable> {
    let mut table = PatternTable::new();

    // Formula 1
    table.insert(
        Series::Formula1,
        EntityKind::Driver,
        PatternSet::new()
            .with_field("position", r#"<td class="dark">(.*?)</td>"#)?
            .with_text_field("name", FULL_NAME)?
            .with_field("nationality", r#"<td class="dark semi-bold uppercase">(.*?)</td>"#)?
            .with_text_field("car", r#"(?s)<a href="[^"]*/team/[^"]*"[^>]*>(.*?)</a>"#)?
            .with_field("points", r#"<td class="dark bold">(.*?)</td>"#)?,
    );
    table.insert(
        Series::Formula1,
        EntityKind::Race,
        PatternSet::new()
            .with_text_field("grandprix", r#"(?s)<a href="[^"]*/races/[^"]*"[^>]*>(.*?)</a>"#)?
            .with_field("date", r#"<td class="dark hide-for-mobile">(.*?)</td>"#)?
            .with_text_field("winner", FULL_NAME)?
            .with_text_field("car", r#"(?s)<td class="semi-bold uppercase">(.*?)</td>"#)?
            .with_field("laps", r#"<td class="bold hide-for-mobile">(.*?)</td>"#)?,
    );
    table.insert(
        Series::Formula1,
        EntityKind::Team,
        PatternSet::new()
            .with_field("position", r#"<td class="dark">(.*?)</td>"#)?
            .with_text_field("team", r#"(?s)<a href="[^"]*/team/[^"]*"[^>]*>(.*?)</a>"#)?
            .with_field("points", r#"<td class="dark bold">(.*?)</td>"#)?,
    );
    table.insert(
        Series::Formula1,
        EntityKind::FastestLap,
        PatternSet::new()
            .with_text_field("grandprix", r#"(?s)<td class="width30 dark">(.*?)</td>"#)?
            .with_text_field("driver", FULL_NAME)?
            .with_text_field("team", r#"(?s)<td class="width25 semi-bold uppercase">(.*?)</td>"#)?
            .with_field("lap_time", r#"<td class="dark bold">(.*?)</td>"#)?,
    );

    // F1 Academy, Formula 2, Formula 3
    for series in [Series::F1Academy, Series::Formula2, Series::Formula3] {
        table.insert(
            series,
            EntityKind::Driver,
            PatternSet::new()
                .with_field("position", r#"<div class="pos">(.*?)</div>"#)?
                .with_text_field("name", r#"<span class="visible-desktop-up">(.*?)</span>"#)?
                .with_field("points", r#"<div class="total-points">(.*?)</div>"#)?,
        );
        table.insert(
            series,
            EntityKind::Race,
            PatternSet::new()
                .with_text_field(
                    "grandprix",
                    r#"(?s)<div class="country-name"><span>(.*?)</span></div>"#,
                )?
                .with_field("date", r#"<div class="dates">(.*?)</div>"#)?,
        );
        table.insert(
            series,
            EntityKind::Team,
            PatternSet::new()
                .with_field("position", r#"<div class="pos">(.*?)</div>"#)?
                .with_text_field("team", r#"<span class="visible-desktop-up">(.*?)</span>"#)?
                .with_field("points", r#"<div class="total-points">(.*?)</div>"#)?,
        );
    }

    Ok(table)
}
