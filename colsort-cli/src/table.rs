//! Delimited text tables.
//!
//! The first non-blank line is the header, every following non-blank line is a
//! body row. A cell may carry attributes in a trailing brace group:
//! `ten {data-val=10; data-total=3}`.

use anyhow::{Context, Result};
use colsort_lib::model::TextCell;

/// A parsed table: header labels and body rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<TextCell>>,
}

impl Table {
    /// Parse `text`, splitting cells on `delimiter`.
    ///
    /// Rows shorter than the header are padded with empty cells. Cells in
    /// `rtl_columns` are marked right-to-left.
    pub fn parse(text: &str, delimiter: char, rtl_columns: &[usize]) -> Result<Self> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let header: Vec<String> = lines
            .next()
            .context("table has no header row")?
            .split(delimiter)
            .map(|label| label.trim().to_string())
            .collect();

        let rows = lines
            .enumerate()
            .map(|(index, line)| {
                let mut cells: Vec<TextCell> = line
                    .split(delimiter)
                    .enumerate()
                    .map(|(column, raw)| parse_cell(raw, rtl_columns.contains(&column)))
                    .collect();
                if cells.len() < header.len() {
                    log::debug!(
                        "row {} has {} of {} cells, padding",
                        index,
                        cells.len(),
                        header.len()
                    );
                    cells.resize_with(header.len(), TextCell::default);
                }
                cells
            })
            .collect();

        Ok(Self { header, rows })
    }

    /// Number of header columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

fn parse_cell(raw: &str, rtl: bool) -> TextCell {
    let raw = raw.trim();
    let (text, attributes) = match raw
        .strip_suffix('}')
        .and_then(|rest| rest.rsplit_once('{'))
    {
        Some((text, attributes)) => (text.trim_end(), Some(attributes)),
        None => (raw, None),
    };

    let mut cell = TextCell::new(text).with_rtl(rtl);
    for pair in attributes.into_iter().flat_map(|group| group.split(';')) {
        if let Some((name, value)) = pair.split_once('=') {
            cell = cell.with_attribute(name.trim(), value.trim());
        }
    }
    cell
}
