//! Plain-text table rendering for terminal output.

use console::{measure_text_width, pad_str, Alignment};

use crate::types::Record;

/// Column heading for a record field.
///
/// # Examples
/// ```
/// use formula_scraper::display::field_label;
///
/// assert_eq!(field_label("grandprix"), "Grand Prix");
/// assert_eq!(field_label("lap_time"), "Lap Time");
/// assert_eq!(field_label("driverTeamName"), "Driver Team Name");
/// ```
#[must_use]
pub fn field_label(field: &str) -> String {
    if field == "grandprix" {
        return "Grand Prix".to_string();
    }

    let mut words: Vec<String> = Vec::new();
    for part in field.split(['_', '-', ' ']).filter(|p| !p.is_empty()) {
        let mut word = String::new();
        for c in part.chars() {
            if c.is_uppercase() && !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            word.push(c);
        }
        words.push(word);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render records as an aligned table with a title line.
///
/// Column headers are labels for the field names of the first record.
/// Absent values render as `-`.
#[must_use]
pub fn render_table(title: &str, records: &[Record]) -> String {
    let labels: Vec<String> = records
        .first()
        .map(|r| r.field_names().map(field_label).collect())
        .unwrap_or_default();

    if labels.is_empty() {
        return format!("{title}\n(no rows)\n");
    }

    let headers: Vec<&str> = labels.iter().map(String::as_str).collect();

    let rows: Vec<Vec<&str>> = records
        .iter()
        .map(|r| r.values().map(|v| v.unwrap_or("-")).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| measure_text_width(cell))
                .chain(std::iter::once(measure_text_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let line = |cells: &[&str]| -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).copied().unwrap_or("");
                format!(" {} ", pad_str(cell, *w, Alignment::Left, None))
            })
            .collect();
        format!("|{}|", padded.join("|"))
    };

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&line(&headers));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table() {
        let records: Vec<Record> = vec![
            [("position", Some("1".to_string())), ("team", Some("Red Bull".to_string()))]
                .into_iter()
                .collect(),
            [("position", Some("10".to_string())), ("team", None)]
                .into_iter()
                .collect(),
        ];

        let out = render_table("Formula 1 2023 Season", &records);
        let expected = "\
Formula 1 2023 Season
+----------+----------+
| Position | Team     |
+----------+----------+
| 1        | Red Bull |
| 10       | -        |
+----------+----------+
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_field_labels() {
        let labels: Vec<String> = ["position", "grandprix", "lap_time", "teamPoints", "date"]
            .into_iter()
            .map(field_label)
            .collect();
        assert_eq!(labels, ["Position", "Grand Prix", "Lap Time", "Team Points", "Date"]);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table("Empty", &[]), "Empty\n(no rows)\n");
    }
}
