//! HTML segmentation: split a results page into row fragments.
//!
//! Each matching table is walked in document order; the leading header
//! entries of every table are skipped and the remaining rows are returned as
//! serialized HTML, ready for [`crate::extract::extract_record`].

use scraper::{Html, Selector};

use crate::error::{Result, ScraperError};

/// Which element of a table counts as one source row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTag {
    /// `<tr>` elements.
    Row,

    /// `<th>` cells. Used where the race calendar is laid out as the
    /// column headers of a standings table.
    HeaderCell,
}

impl RowTag {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Row => "tr",
            Self::HeaderCell => "th",
        }
    }
}

/// Where the rows of an HTML results page live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    /// Class attribute of the results tables, e.g. `"table table-bordered"`.
    pub table_class: &'static str,

    /// Element yielding one fragment per entity.
    pub row_tag: RowTag,

    /// Leading elements skipped in every table (header row, label columns).
    pub skip: usize,
}

impl TableShape {
    /// One record per `<tr>`, first row of each table is the header.
    #[must_use]
    pub const fn rows(table_class: &'static str) -> Self {
        Self {
            table_class,
            row_tag: RowTag::Row,
            skip: 1,
        }
    }

    /// One record per `<th>`, skipping `skip` leading header cells.
    #[must_use]
    pub const fn header_cells(table_class: &'static str, skip: usize) -> Self {
        Self {
            table_class,
            row_tag: RowTag::HeaderCell,
            skip,
        }
    }

    /// CSS selector matching the results tables.
    ///
    /// # Examples
    /// ```
    /// use formula_scraper::html::TableShape;
    ///
    /// let shape = TableShape::rows("table table-bordered");
    /// assert_eq!(shape.table_selector(), "table.table.table-bordered");
    /// ```
    #[must_use]
    pub fn table_selector(&self) -> String {
        let classes: String = self
            .table_class
            .split_whitespace()
            .map(|class| format!(".{class}"))
            .collect();
        format!("table{classes}")
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScraperError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Split an HTML document into row fragments.
///
/// Returns an empty list when no table matches; missing tables are not an
/// error.
pub fn segment_rows(document: &str, shape: &TableShape) -> Result<Vec<String>> {
    let table_selector = parse_selector(&shape.table_selector())?;
    let row_selector = parse_selector(shape.row_tag.as_str())?;

    let html = Html::parse_document(document);
    let mut fragments = Vec::new();
    let mut tables = 0usize;

    for table in html.select(&table_selector) {
        tables += 1;
        fragments.extend(
            table
                .select(&row_selector)
                .skip(shape.skip)
                .map(|row| row.html()),
        );
    }

    tracing::debug!(
        tables,
        rows = fragments.len(),
        selector = %shape.table_selector(),
        "Segmented document"
    );

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BORDERED: &str = "table table-bordered";

    #[test]
    fn test_skips_header_row() {
        let doc = r#"<html><table class="table table-bordered"><tr></tr><tr><td>Driver 1</td></tr></table></html>"#;
        let rows = segment_rows(doc, &TableShape::rows(BORDERED)).unwrap();
        assert_eq!(rows, vec!["<tr><td>Driver 1</td></tr>".to_string()]);
    }

    #[test]
    fn test_tables_in_document_order() {
        let doc = r#"<html><body>
            <table class="table table-bordered"><tr><th>Pos</th></tr><tr><td>A</td></tr></table>
            <p>between</p>
            <table class="table table-bordered"><tr><th>Pos</th></tr><tr><td>B</td></tr><tr><td>C</td></tr></table>
        </body></html>"#;
        let rows = segment_rows(doc, &TableShape::rows(BORDERED)).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains(">A<"));
        assert!(rows[1].contains(">B<"));
        assert!(rows[2].contains(">C<"));
    }

    #[test]
    fn test_ignores_tables_with_other_class() {
        let doc = r#"<table class="other"><tr></tr><tr><td>X</td></tr></table>
            <table class="resultsarchive-table"><tr></tr><tr><td>Y</td></tr></table>"#;
        let rows = segment_rows(doc, &TableShape::rows("resultsarchive-table")).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains(">Y<"));
    }

    #[test]
    fn test_class_order_does_not_matter() {
        let doc = r#"<table class="table-bordered table"><tr></tr><tr><td>Z</td></tr></table>"#;
        let rows = segment_rows(doc, &TableShape::rows(BORDERED)).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_header_cells_skip_label_columns() {
        let doc = r#"<table class="table table-bordered"><thead><tr>
            <th>Pos</th><th>Driver</th>
            <th><div class="country-name"><span>Bahrain</span></div></th>
            <th><div class="country-name"><span>Jeddah</span></div></th>
        </tr></thead></table>"#;
        let cells = segment_rows(doc, &TableShape::header_cells(BORDERED, 2)).unwrap();
        assert_eq!(cells.len(), 2);
        assert!(cells[0].contains("Bahrain"));
        assert!(cells[1].contains("Jeddah"));
    }

    #[test]
    fn test_no_table_yields_no_rows() {
        let rows = segment_rows("<html><body>maintenance</body></html>", &TableShape::rows(BORDERED))
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_header_only_table_yields_no_rows() {
        let doc = r#"<table class="table table-bordered"><tr><th>Pos</th></tr></table>"#;
        let rows = segment_rows(doc, &TableShape::rows(BORDERED)).unwrap();
        assert!(rows.is_empty());
    }
}
