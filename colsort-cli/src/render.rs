//! Text and JSON output of a sorted session.

use std::collections::BTreeMap;

use colsort_lib::model::{Direction, TextCell};
use colsort_lib::session::{HeaderView, SortSession, TABLE_ARIA};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub type TableSession = SortSession<Vec<TextCell>>;

#[derive(Debug, Serialize)]
pub struct JsonSorted<'a> {
    column: usize,
    label: &'a str,
    direction: Direction,
}

#[derive(Debug, Serialize)]
pub struct JsonHeader<'a> {
    column: usize,
    label: &'a str,
    sortable: bool,
    direction: Option<Direction>,
    marker: Option<&'a str>,
    aria_sort: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    sorted: Option<JsonSorted<'a>>,
    table_aria: BTreeMap<&'static str, &'static str>,
    headers: Vec<JsonHeader<'a>>,
    rows: Vec<Vec<&'a str>>,
    diagnostics: Vec<String>,
}

impl<'a> JsonReport<'a> {
    pub fn new(header: &'a [String], session: &'a TableSession, diagnostics: Vec<String>) -> Self {
        let sorted = session
            .state()
            .active()
            .map(|(column, direction)| JsonSorted {
                column,
                label: label(header, column),
                direction,
            });
        let headers = session
            .headers()
            .into_iter()
            .map(|view| JsonHeader {
                column: view.column,
                label: label(header, view.column),
                sortable: view.sortable,
                direction: view.direction,
                marker: view.marker,
                aria_sort: view.aria_sort(),
            })
            .collect();

        Self {
            sorted,
            table_aria: TABLE_ARIA.into_iter().collect(),
            headers,
            rows: body(session),
            diagnostics,
        }
    }
}

/// Render the session as a text table followed by a status line.
///
/// Columns are aligned by display width, so wide characters line up.
pub fn render_text(header: &[String], session: &TableSession) -> String {
    let labels: Vec<String> = session
        .headers()
        .iter()
        .map(|view| header_label(header, view))
        .collect();
    let rows = body(session);

    let widths: Vec<usize> = labels
        .iter()
        .enumerate()
        .map(|(column, label)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|text| text.width())
                .fold(label.width(), usize::max)
        })
        .collect();

    let mut out = Vec::with_capacity(rows.len() + 3);
    out.push(aligned(labels.iter().map(String::as_str), &widths));
    out.push(
        widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        out.push(aligned(row.iter().copied(), &widths));
    }
    out.push(match session.state().active() {
        Some((column, direction)) => format!(
            "sorted: {} {}",
            label(header, column),
            direction.aria_sort()
        ),
        None => "sorted: none".to_string(),
    });

    out.join("\n")
}

fn aligned<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(text, &width)| {
            let pad = width.saturating_sub(text.width());
            format!("{text}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn header_label(header: &[String], view: &HeaderView<'_>) -> String {
    let name = label(header, view.column);
    match view.marker {
        Some(marker) => format!("{name} {marker}"),
        None => name.to_string(),
    }
}

fn label(header: &[String], column: usize) -> &str {
    header.get(column).map(String::as_str).unwrap_or_default()
}

fn body(session: &TableSession) -> Vec<Vec<&str>> {
    let columns = session.column_count();
    session
        .rows()
        .iter()
        .map(|row| row.iter().take(columns).map(TextCell::as_str).collect())
        .collect()
}
